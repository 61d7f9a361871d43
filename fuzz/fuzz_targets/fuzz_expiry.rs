//! Fuzz target for expiry parsing and validation.

#![no_main]

use cardentry::{expiry, is_date_valid, parse_expiry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let parsed = parse_expiry(data);
    let valid = is_date_valid(data);

    match parsed {
        Some(date) => {
            // Parsed months are always in calendar range.
            assert!((1..=12).contains(&date.month()));
            assert_eq!(valid, date.is_valid());
            let _ = date.is_valid_at(2024, 6);
            let _ = date.to_string();
        }
        None => assert!(!valid),
    }

    let _ = expiry::is_month_year_valid(1, 2030);
});
