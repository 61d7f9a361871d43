//! Basic card-number validation and formatting.
//!
//! Run with: `cargo run --example basic`

use cardentry::{
    digits_only, format_card_number, is_valid_elo_length, is_valid_hiper_length, matches_elo,
    matches_hiper, passes_luhn, DefaultClassifier, SchemeClassifier,
};

fn main() {
    println!("=== Card Number Validation ===\n");

    let entries = [
        ("4111 1111 1111 1111", "Visa, separated input"),
        ("378282246310005", "American Express"),
        ("6362970000457013", "Elo"),
        ("6062826786276634", "Hipercard"),
        ("4111111111111112", "bad checksum"),
        ("41111111", "partial entry"),
    ];

    for (entry, description) in entries {
        let digits = digits_only(entry);
        let luhn = passes_luhn(digits.as_str());
        let scheme = DefaultClassifier.classify(digits.as_str());

        println!("  {description}");
        println!("    Input:     {entry}");
        println!("    Luhn:      {}", if luhn { "PASS" } else { "FAIL" });
        println!(
            "    Scheme:    {}",
            scheme.map(|s| s.name()).unwrap_or("unknown")
        );
        println!("    Formatted: {}", format_card_number(entry));
        println!();
    }

    println!("=== Brand Pattern Rules ===\n");

    for number in ["6362970000457013", "6062826786276634", "60628212345"] {
        println!("  {number}");
        println!(
            "    Elo:       pattern={} length={}",
            matches_elo(number),
            is_valid_elo_length(number.len())
        );
        println!(
            "    Hipercard: pattern={} length={}",
            matches_hiper(number),
            is_valid_hiper_length(number.len())
        );
        println!();
    }
}
