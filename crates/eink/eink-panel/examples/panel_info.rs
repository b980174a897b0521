//! Panel Information Example
//!
//! Prints the E2271CS021 geometry, the CY8CKIT-028-EPD wiring and a few
//! pixel addresses.
//!
//! Run with: cargo run -p eink-panel --example panel_info

use eink_panel::{panels, pixel_bit_location, PanelConfig};

fn print_config(config: &PanelConfig) {
    let g = config.geometry();

    println!("\n{}", "=".repeat(60));
    println!("Panel: E2271CS021");
    println!("{}", "=".repeat(60));

    println!("\nGeometry:");
    println!("  Resolution: {}×{} pixels", g.width(), g.height());
    println!("  Color depth: {} bit(s), {} levels", g.color_bits(), g.gray_levels());
    println!("  Frame buffer: {} bytes", g.buffer_size_bytes());
    match g.bytes_per_row() {
        Some(bytes) => println!("  Row stride: {bytes} bytes"),
        None => println!("  Row stride: unaligned"),
    }

    println!("\nPins:");
    for (role, pin) in config.pins().iter() {
        println!("  {:<10} {}", role.name(), pin);
    }

    println!("\nAddressing (row-major, MSB-first):");
    for (x, y) in [(0, 0), (7, 0), (8, 0), (0, 1), (263, 175)] {
        match pixel_bit_location(g, x, y) {
            Ok(loc) => println!(
                "  ({x:>3}, {y:>3}) -> byte {:>4}, bit {} (mask {:#04x})",
                loc.byte_offset(),
                loc.bit_offset(),
                loc.mask()
            ),
            Err(err) => println!("  ({x:>3}, {y:>3}) -> {err}"),
        }
    }
}

fn main() {
    match panels::cy8ckit_028_epd() {
        Ok(config) => print_config(&config),
        Err(err) => eprintln!("invalid panel configuration: {err}"),
    }
}
