//! Expiry date parsing and validation.
//!
//! Run with: `cargo run --example expiry`

use cardentry::{is_date_valid, parse_expiry, EXPIRY_MAX_FUTURE_YEARS};

fn main() {
    println!("=== Expiry Validation ===\n");
    println!("  Accepted window: current month through {EXPIRY_MAX_FUTURE_YEARS} years out\n");

    let entries = [
        "06/27", "0627", "062027", "06-2027", "12/20", "13/27", "12/99", "627", "garbage",
    ];

    for entry in entries {
        match parse_expiry(entry) {
            Some(date) => {
                println!(
                    "  {:10} -> {:02}/{}  valid: {}",
                    entry,
                    date.month(),
                    date.year(),
                    if is_date_valid(entry) { "yes" } else { "no" }
                );
            }
            None => println!("  {entry:10} -> not parseable"),
        }
    }
}
