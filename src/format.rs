//! Display formatting for card numbers.
//!
//! Formatting only ever fires on a complete number: the digit count must
//! exactly match the resolved scheme's expected length. Partial input,
//! unknown prefixes, and lengths without a grouping rule all echo the
//! caller's input back unchanged, so a capture UI can pipe every keystroke
//! through here without special cases.
//!
//! Grouping rules:
//!
//! - 16 digits: `XXXX XXXX XXXX XXXX`
//! - 15 digits: `XXXX XXXXXX XXXXX`

use crate::digits::digits_only;
use crate::scheme::{DefaultClassifier, SchemeClassifier, SchemeInfo};

/// Formats a card number for display, resolving the scheme with
/// [`DefaultClassifier`].
///
/// ```
/// use cardentry::format_card_number;
///
/// assert_eq!(
///     format_card_number("4111111111111111"),
///     "4111 1111 1111 1111"
/// );
/// assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
///
/// // Partial input comes back untouched.
/// assert_eq!(format_card_number("41111111"), "41111111");
/// ```
pub fn format_card_number(raw: &str) -> String {
    format_with_classifier(raw, true, None, &DefaultClassifier)
}

/// Formats a card number for display.
///
/// When `filter_digits` is set, `raw` is normalized first; otherwise it is
/// treated as an already-clean digit string. If no `scheme` descriptor is
/// supplied, one is resolved through `classifier`.
///
/// The input is returned unchanged whenever the digit count differs from
/// the scheme's [`SchemeInfo::number_length`], the classifier does not
/// recognize the prefix, or the scheme length has no grouping rule. At
/// worst the caller gets back exactly what it passed in.
pub fn format_with_classifier<C: SchemeClassifier>(
    raw: &str,
    filter_digits: bool,
    scheme: Option<SchemeInfo>,
    classifier: &C,
) -> String {
    let filtered;
    let digits: &str = if filter_digits {
        filtered = digits_only(raw);
        filtered.as_str()
    } else {
        raw
    };

    let Some(scheme) = scheme.or_else(|| classifier.classify(digits)) else {
        return raw.to_string();
    };

    if digits.chars().count() != scheme.number_length() {
        return raw.to_string();
    }

    match scheme.number_length() {
        16 => format_sixteen(digits),
        15 => format_fifteen(digits),
        _ => raw.to_string(),
    }
}

/// 4-4-4-4 grouping: a space before every 4th digit except the first.
fn format_sixteen(digits: &str) -> String {
    let mut out = String::with_capacity(19);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// 4-6-5 grouping: spaces before the 5th and 11th digits.
fn format_fifteen(digits: &str) -> String {
    let mut out = String::with_capacity(17);
    for (i, c) in digits.chars().enumerate() {
        if i == 4 || i == 10 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
