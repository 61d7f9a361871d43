//! Integration tests for cardentry.
//!
//! Scenario coverage over the public surface: checksum verdicts, brand
//! pattern rules, formatting behavior, and the expiry window.

use cardentry::{
    digits_only, format_card_number, format_with_classifier, is_date_valid, is_valid_elo_length,
    is_valid_hiper_length, matches_elo, matches_hiper, parse_expiry, passes_luhn,
    DefaultClassifier, ExpiryDate, SchemeClassifier, SchemeInfo, EXPIRY_MAX_FUTURE_YEARS,
};

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// Official test numbers from payment processors; they pass Luhn but are not
// real cards.

mod test_cards {
    pub const VISA_16: &str = "4111111111111111";
    pub const VISA_16_ALT: &str = "4242424242424242";
    pub const MASTERCARD: &str = "5500000000000004";
    pub const AMEX: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";
    pub const DISCOVER: &str = "6011111111111117";

    // Elo test numbers across several prefix rules
    pub const ELO_636297: &str = "6362970000457013";
    pub const ELO_506699: &str = "5066991111111118";
    pub const ELO_401178: &str = "4011780000000006";
    pub const ELO_509: &str = "5090000000000000";

    // Hipercard
    pub const HIPER: &str = "6062826786276634";
}

// =============================================================================
// CHECKSUM
// =============================================================================

#[test]
fn test_known_numbers_pass_luhn() {
    for card in [
        test_cards::VISA_16,
        test_cards::VISA_16_ALT,
        test_cards::MASTERCARD,
        test_cards::AMEX,
        test_cards::AMEX_2,
        test_cards::DISCOVER,
        test_cards::ELO_636297,
        test_cards::ELO_506699,
        test_cards::ELO_401178,
        test_cards::ELO_509,
        test_cards::HIPER,
    ] {
        assert!(passes_luhn(card), "{card} should pass Luhn");
    }
}

#[test]
fn test_off_by_one_digit_fails_luhn() {
    assert!(!passes_luhn("4111111111111112"));
    assert!(!passes_luhn("378282246310006"));
}

#[test]
fn test_luhn_is_punctuation_invariant_after_normalization() {
    let variants = [
        "4111111111111111",
        "4111 1111 1111 1111",
        "4111-1111-1111-1111",
        "4111.1111.1111.1111",
        " 4111 1111 1111 1111 ",
    ];
    for variant in variants {
        let digits = digits_only(variant);
        assert!(passes_luhn(digits.as_str()), "normalized {variant:?}");
    }
}

#[test]
fn test_raw_luhn_rejects_unnormalized_input() {
    assert!(!passes_luhn("4111 1111 1111 1111"));
}

#[test]
fn test_empty_string_boundary() {
    // Sum of zero digits is 0, which is divisible by 10; minimum-length
    // policy belongs to the caller.
    assert!(passes_luhn(""));
    assert!(passes_luhn(digits_only("---").as_str()));
}

// =============================================================================
// BRAND PATTERNS
// =============================================================================

#[test]
fn test_elo_test_numbers_match_pattern_and_length() {
    for card in [
        test_cards::ELO_636297,
        test_cards::ELO_506699,
        test_cards::ELO_401178,
        test_cards::ELO_509,
    ] {
        assert!(matches_elo(card), "{card} should match the Elo rules");
        assert!(is_valid_elo_length(card.len()));
        assert!(passes_luhn(card));
    }
}

#[test]
fn test_hiper_pattern_ignores_length() {
    // Pattern match is prefix-only; an 11-digit fragment still matches.
    assert!(matches_hiper("60628212345"));
    assert!(!is_valid_hiper_length("60628212345".len()));
}

#[test]
fn test_hiper_lengths() {
    assert!(is_valid_hiper_length(16));
    assert!(is_valid_hiper_length(19));
    assert!(!is_valid_hiper_length(10));
    assert!(!is_valid_hiper_length(15));
}

#[test]
fn test_elo_401178_with_arbitrary_tail() {
    // Any 16-digit number on the 401178 prefix matches the pattern,
    // whatever the trailing digits.
    for tail in ["0000000000", "1234567890", "9999999999"] {
        let number = format!("401178{tail}");
        assert_eq!(number.len(), 16);
        assert!(matches_elo(&number));
    }
}

#[test]
fn test_brands_do_not_cross_match() {
    assert!(!matches_elo(test_cards::HIPER));
    assert!(!matches_hiper(test_cards::ELO_636297));
    assert!(!matches_elo(test_cards::VISA_16));
    assert!(!matches_hiper(test_cards::VISA_16));
}

// =============================================================================
// FORMATTING
// =============================================================================

#[test]
fn test_sixteen_digit_formatting() {
    assert_eq!(
        format_card_number(test_cards::VISA_16),
        "4111 1111 1111 1111"
    );
    assert_eq!(
        format_card_number(test_cards::ELO_636297),
        "6362 9700 0045 7013"
    );
    assert_eq!(format_card_number(test_cards::HIPER), "6062 8267 8627 6634");
}

#[test]
fn test_fifteen_digit_formatting() {
    assert_eq!(format_card_number(test_cards::AMEX), "3782 822463 10005");
    assert_eq!(format_card_number(test_cards::AMEX_2), "3714 496353 98431");
}

#[test]
fn test_format_round_trip() {
    for card in [
        test_cards::VISA_16,
        test_cards::MASTERCARD,
        test_cards::AMEX,
        test_cards::ELO_506699,
    ] {
        let formatted = format_card_number(card);
        assert_eq!(digits_only(&formatted), card);
    }
}

#[test]
fn test_format_is_identity_on_partial_input() {
    for partial in ["4", "41", "4111", "4111111111", "41111111111111111111"] {
        assert_eq!(format_card_number(partial), partial);
    }
}

#[test]
fn test_format_is_identity_on_unknown_scheme() {
    assert_eq!(format_card_number("1234567812345678"), "1234567812345678");
}

#[test]
fn test_format_echo_returns_original_text() {
    // The echo path hands back the caller's text, not the normalized digits.
    let raw = "4111-1111";
    assert_eq!(format_card_number(raw), raw);
}

#[test]
fn test_format_with_injected_catalog() {
    struct HouseCatalog;
    impl SchemeClassifier for HouseCatalog {
        fn classify(&self, digits: &str) -> Option<SchemeInfo> {
            digits
                .starts_with("77")
                .then(|| SchemeInfo::new("HouseCard", 16))
        }
    }

    assert_eq!(
        format_with_classifier("7700000000000000", true, None, &HouseCatalog),
        "7700 0000 0000 0000"
    );
    // Same input through the default classifier: unknown, echoed.
    assert_eq!(format_card_number("7700000000000000"), "7700000000000000");
}

#[test]
fn test_format_with_supplied_descriptor() {
    let amex_like = SchemeInfo::new("Corporate", 15);
    assert_eq!(
        format_with_classifier("999999999999999", true, Some(amex_like), &DefaultClassifier),
        "9999 999999 99999"
    );
}

// =============================================================================
// SCHEME CLASSIFICATION
// =============================================================================

#[test]
fn test_default_classifier_lengths_drive_formatting() {
    let classifier = DefaultClassifier;
    assert_eq!(
        classifier.classify(test_cards::VISA_16).unwrap().number_length(),
        16
    );
    assert_eq!(
        classifier.classify(test_cards::AMEX).unwrap().number_length(),
        15
    );
    assert!(classifier.classify("0000").is_none());
}

#[test]
fn test_elo_classification_beats_visa() {
    let classifier = DefaultClassifier;
    let scheme = classifier.classify(test_cards::ELO_401178).unwrap();
    assert_eq!(scheme.name(), "Elo");
}

// =============================================================================
// EXPIRY
// =============================================================================

#[test]
fn test_parse_expiry_known_values() {
    let date = parse_expiry("0627").unwrap();
    assert_eq!((date.month(), date.year()), (6, 2027));

    let date = parse_expiry("122031").unwrap();
    assert_eq!((date.month(), date.year()), (12, 2031));

    assert!(parse_expiry("13/27").is_none());
    assert!(parse_expiry("00/27").is_none());
    assert!(parse_expiry("627").is_none());
    assert!(parse_expiry("06/272").is_none());
}

#[test]
fn test_expiry_window_pinned_at_june_2024() {
    let valid = |month, year| ExpiryDate::new(month, year).unwrap().is_valid_at(2024, 6);

    // Lower bound: the current month is inclusive.
    assert!(valid(6, 2024));
    assert!(!valid(5, 2024));
    assert!(!valid(12, 2023));

    // Upper bound: December of current year + EXPIRY_MAX_FUTURE_YEARS.
    assert!(valid(12, 2024 + EXPIRY_MAX_FUTURE_YEARS));
    assert!(!valid(1, 2024 + EXPIRY_MAX_FUTURE_YEARS + 1));
}

#[test]
fn test_expiry_string_and_pair_paths_agree() {
    // Both isDateValid shapes run the same rules.
    assert_eq!(
        is_date_valid("0120"),
        cardentry::is_month_year_valid(1, 2020)
    );
}

#[test]
fn test_expired_dates_rejected() {
    assert!(!is_date_valid("0120"));
    assert!(!is_date_valid("12/99")); // 2099 is past the future bound
    assert!(!is_date_valid("garbage"));
}

#[test]
fn test_expiry_separators_are_cosmetic() {
    assert_eq!(parse_expiry("06/27"), parse_expiry("06-27"));
    assert_eq!(parse_expiry("06 / 2027"), parse_expiry("062027"));
}
