//! The card-type boundary consumed by the formatter.
//!
//! Card-capture hosts usually carry their own brand catalog (often far
//! larger than what number formatting needs), so this crate does not
//! enumerate brands. Instead the formatter consumes two small contracts:
//! a [`SchemeInfo`] descriptor exposing the expected digit count, and a
//! [`SchemeClassifier`] capability that resolves a digit string to a
//! descriptor. [`DefaultClassifier`] covers the common networks for callers
//! without a catalog of their own.

use crate::pattern::{matches_elo, matches_hiper};

/// Descriptor for a card scheme, reduced to what number formatting needs.
///
/// External brand catalogs construct their own descriptors:
///
/// ```
/// use cardentry::SchemeInfo;
///
/// let store_card = SchemeInfo::new("StoreCard", 16);
/// assert_eq!(store_card.number_length(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SchemeInfo {
    name: &'static str,
    number_length: usize,
}

impl SchemeInfo {
    /// Creates a descriptor with the given display name and expected digit
    /// count for a complete number.
    #[inline]
    pub const fn new(name: &'static str, number_length: usize) -> Self {
        Self {
            name,
            number_length,
        }
    }

    /// Human-readable scheme name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Digit count of a complete number of this scheme.
    #[inline]
    pub const fn number_length(&self) -> usize {
        self.number_length
    }
}

/// Visa: 16 digits.
pub const VISA: SchemeInfo = SchemeInfo::new("Visa", 16);
/// Mastercard: 16 digits.
pub const MASTERCARD: SchemeInfo = SchemeInfo::new("Mastercard", 16);
/// American Express: 15 digits.
pub const AMEX: SchemeInfo = SchemeInfo::new("American Express", 15);
/// Discover: 16 digits.
pub const DISCOVER: SchemeInfo = SchemeInfo::new("Discover", 16);
/// JCB: 16 digits.
pub const JCB: SchemeInfo = SchemeInfo::new("JCB", 16);
/// ELO: 16 digits.
pub const ELO: SchemeInfo = SchemeInfo::new("Elo", 16);
/// Hipercard. 19-digit numbers exist but only the 16-digit form has a
/// grouping rule, so the descriptor carries 16.
pub const HIPERCARD: SchemeInfo = SchemeInfo::new("Hipercard", 16);

/// Resolves a digit string to a scheme descriptor.
///
/// Implemented by the host's brand catalog and injected into
/// [`crate::format_with_classifier`]; `None` means the prefix is not
/// recognized, in which case the formatter leaves the input untouched.
pub trait SchemeClassifier {
    /// Classifies a digit string. `digits` is expected to already be
    /// normalized; unrecognized or non-digit input yields `None`.
    fn classify(&self, digits: &str) -> Option<SchemeInfo>;
}

/// Built-in classifier for the common schemes.
///
/// ```
/// use cardentry::{scheme, DefaultClassifier, SchemeClassifier};
///
/// let classifier = DefaultClassifier;
/// assert_eq!(classifier.classify("4111111111111111"), Some(scheme::VISA));
/// assert_eq!(classifier.classify("378282246310005"), Some(scheme::AMEX));
/// assert_eq!(classifier.classify("0000000000000000"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassifier;

impl SchemeClassifier for DefaultClassifier {
    fn classify(&self, digits: &str) -> Option<SchemeInfo> {
        // The pattern-based networks first: several ELO prefixes start
        // with 4 and would otherwise land on Visa.
        if matches_hiper(digits) {
            return Some(HIPERCARD);
        }
        if matches_elo(digits) {
            return Some(ELO);
        }

        let mut buf = [0u8; 4];
        let mut n = 0;
        for c in digits.chars().take(4) {
            buf[n] = c.to_digit(10)? as u8;
            n += 1;
        }

        match &buf[..n] {
            // Amex before the JCB 35xx window.
            [3, 4, ..] | [3, 7, ..] => Some(AMEX),

            // JCB: 3528-3589
            [3, 5, 2, 8..=9] | [3, 5, 3..=8, _] => Some(JCB),

            [4, ..] => Some(VISA),

            // Mastercard: 51-55 and the 2221-2720 range
            [5, 1..=5, ..] => Some(MASTERCARD),
            [2, 2, 2, 1..=9] | [2, 2, 3..=9, _] | [2, 3..=6, _, _] | [2, 7, 0..=1, _]
            | [2, 7, 2, 0] => Some(MASTERCARD),

            // Discover: 6011, 644-649, 65
            [6, 0, 1, 1] => Some(DISCOVER),
            [6, 4, 4..=9, ..] | [6, 5, ..] => Some(DISCOVER),

            _ => None,
        }
    }
}
