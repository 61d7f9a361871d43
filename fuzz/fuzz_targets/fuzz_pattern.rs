//! Fuzz target for the brand pattern tables.

#![no_main]

use cardentry::pattern;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let elo = pattern::matches_elo(data);
    let hiper = pattern::matches_hiper(data);

    // A match implies the input starts with a digit.
    if elo || hiper {
        assert!(data.starts_with(|c: char| c.is_ascii_digit()));
    }

    // Appending digits never un-matches a prefix rule.
    if elo {
        assert!(pattern::matches_elo(&format!("{data}0")));
    }
    if hiper {
        assert!(pattern::matches_hiper(&format!("{data}9")));
    }

    let _ = pattern::is_valid_elo_length(data.len());
    let _ = pattern::is_valid_hiper_length(data.len());
});
