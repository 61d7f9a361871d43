//! Fuzz target for the Luhn checksum.
//!
//! The checksum must never panic and its two entry points must agree.

#![no_main]

use cardentry::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let sum = luhn::checksum(data);
    let verdict = luhn::passes_luhn(data);

    match sum {
        Some(sum) => {
            // checksum succeeding means every char was a digit, and the
            // boolean verdict is exactly the mod-10 test.
            assert!(data.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(verdict, sum % 10 == 0);
        }
        None => {
            assert!(!verdict);
            assert!(data.chars().any(|c| !c.is_ascii_digit()));
        }
    }

    // Normalizing first always yields a computable checksum.
    let digits = cardentry::digits_only(data);
    assert!(luhn::checksum(digits.as_str()).is_some());
});
