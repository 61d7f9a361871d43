//! Fuzz target for the display formatter.
//!
//! Formatting is total: it either groups a complete number or echoes the
//! input, and it never invents or drops digits.

#![no_main]

use cardentry::{digits_only, format_card_number};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let formatted = format_card_number(data);

    if formatted == data {
        return;
    }

    // If the formatter rewrote the input, the digits must round-trip and
    // the only additions are spaces.
    assert_eq!(
        digits_only(&formatted).as_str(),
        digits_only(data).as_str()
    );
    assert!(formatted
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' '));
});
