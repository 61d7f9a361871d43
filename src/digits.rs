//! Digit extraction from free-form input.
//!
//! Everything the library validates or formats starts life as whatever the
//! user typed or the scanner produced. [`digits_only`] reduces that to the
//! digit sequence the other modules operate on.

use std::fmt;
use std::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A normalized sequence of ASCII decimal digits.
///
/// Produced by [`digits_only`]; every byte is guaranteed to be `'0'..='9'`.
/// Since the contents may be a full card number, the buffer is zeroed when
/// dropped and `Debug` never prints the digits.
///
/// Dereferences to `str` for read access:
///
/// ```
/// use cardentry::digits_only;
///
/// let digits = digits_only("4111-1111 1111.1111");
/// assert_eq!(digits.as_str(), "4111111111111111");
/// assert_eq!(digits.len(), 16);
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DigitString(String);

impl DigitString {
    /// Read access to the underlying digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no digits survived normalization.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for DigitString {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DigitString {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for DigitString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose the digits; a PAN may be in here.
        write!(f, "DigitString(<{} digits>)", self.0.len())
    }
}

/// Extracts the ASCII decimal digits from `raw`, preserving order.
///
/// Total function: input with no digits (including the empty string) yields
/// an empty [`DigitString`].
///
/// ```
/// use cardentry::digits_only;
///
/// assert_eq!(digits_only("12/27").as_str(), "1227");
/// assert_eq!(digits_only("no digits here").as_str(), "");
/// ```
pub fn digits_only(raw: &str) -> DigitString {
    DigitString(raw.chars().filter(|c| c.is_ascii_digit()).collect())
}
