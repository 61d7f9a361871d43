//! # cardentry
//!
//! Validation and display formatting for payment-card numbers and expiry
//! dates, built for card-capture flows: the UI hands over raw keystrokes or
//! scan output, and gets back verdicts and formatted strings.
//!
//! Everything here is a pure function over the input (plus the wall clock,
//! for expiry validation only). Fallible operations signal failure with
//! `false` or `None` — nothing panics on user input, and the formatter
//! degrades by echoing its input rather than erroring.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardentry::{digits_only, format_card_number, passes_luhn};
//!
//! // Checksum verdicts on normalized digits
//! let digits = digits_only("4111 1111 1111 1111");
//! assert!(passes_luhn(digits.as_str()));
//! assert!(!passes_luhn("4111111111111112"));
//!
//! // Display formatting: complete numbers are grouped...
//! assert_eq!(
//!     format_card_number("4111111111111111"),
//!     "4111 1111 1111 1111"
//! );
//! // ...anything else comes back untouched.
//! assert_eq!(format_card_number("41111111"), "41111111");
//! ```
//!
//! ## Brand patterns
//!
//! The ELO and Hipercard networks are recognized by explicit prefix rule
//! tables, with length checks kept separate:
//!
//! ```rust
//! use cardentry::pattern::{is_valid_hiper_length, matches_elo, matches_hiper};
//!
//! assert!(matches_hiper("60628212345"));
//! assert!(matches_elo("4011780000000006"));
//! assert!(is_valid_hiper_length(19));
//! assert!(!is_valid_hiper_length(10));
//! ```
//!
//! ## Expiry dates
//!
//! ```rust
//! use cardentry::parse_expiry;
//!
//! let date = parse_expiry("0627").unwrap();
//! assert_eq!((date.month(), date.year()), (6, 2027));
//! assert!(parse_expiry("13/27").is_none());
//! ```
//!
//! ## Bring your own brand catalog
//!
//! The formatter never enumerates card brands itself; it consumes a
//! [`SchemeClassifier`], so a host with its own catalog plugs it in:
//!
//! ```rust
//! use cardentry::{format_with_classifier, SchemeClassifier, SchemeInfo};
//!
//! struct Catalog;
//! impl SchemeClassifier for Catalog {
//!     fn classify(&self, digits: &str) -> Option<SchemeInfo> {
//!         digits.starts_with('9').then(|| SchemeInfo::new("HouseCard", 16))
//!     }
//! }
//!
//! let formatted = format_with_classifier("9999000011112222", true, None, &Catalog);
//! assert_eq!(formatted, "9999 0000 1111 2222");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serde support for the value types |
//! | `cli`   | `cardentry` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod digits;
pub mod expiry;
pub mod format;
pub mod luhn;
pub mod pattern;
pub mod scheme;

// Re-export the primary entry points at the crate root
pub use digits::{digits_only, DigitString};
pub use expiry::{is_date_valid, is_month_year_valid, parse_expiry, ExpiryDate, EXPIRY_MAX_FUTURE_YEARS};
pub use format::{format_card_number, format_with_classifier};
pub use luhn::passes_luhn;
pub use pattern::{is_valid_elo_length, is_valid_hiper_length, matches_elo, matches_hiper};
pub use scheme::{DefaultClassifier, SchemeClassifier, SchemeInfo};
