//! Prefix pattern matching for the ELO and Hipercard networks.
//!
//! Both networks are identified by fixed numeric prefixes rather than the
//! single-range BINs of the global schemes. Each brand's prefixes are kept
//! as an explicit rule table so every rule can be tested on its own; a
//! number matches the brand if *any* rule matches (the ranges overlap and
//! that is fine). Pattern and length are deliberately separate checks: the
//! prefix match accepts any total length, and the `is_valid_*_length`
//! functions gate the lengths the networks actually issue.

/// One prefix rule: a literal stem, optionally followed by a single digit
/// drawn from an inclusive range.
///
/// `followed_by("5067", 0, 6)` matches `50670…`–`50676…`; the range digit
/// must be present, so the bare stem `"5067"` does not match that rule.
#[derive(Debug, Clone, Copy)]
pub struct PrefixRule {
    stem: &'static str,
    next_digit: Option<(u8, u8)>,
}

impl PrefixRule {
    const fn exact(stem: &'static str) -> Self {
        Self {
            stem,
            next_digit: None,
        }
    }

    const fn followed_by(stem: &'static str, lo: u8, hi: u8) -> Self {
        Self {
            stem,
            next_digit: Some((lo, hi)),
        }
    }

    /// True if `digits` starts with this rule's prefix.
    pub fn matches(&self, digits: &str) -> bool {
        let Some(rest) = digits.strip_prefix(self.stem) else {
            return false;
        };
        match self.next_digit {
            None => true,
            Some((lo, hi)) => rest
                .bytes()
                .next()
                .is_some_and(|b| (b'0' + lo..=b'0' + hi).contains(&b)),
        }
    }
}

/// ELO issuing prefixes.
const ELO_PREFIXES: &[PrefixRule] = &[
    PrefixRule::followed_by("40117", 8, 9),
    PrefixRule::exact("431274"),
    PrefixRule::exact("438935"),
    PrefixRule::exact("451416"),
    PrefixRule::exact("457393"),
    PrefixRule::followed_by("45763", 1, 2),
    PrefixRule::exact("504175"),
    PrefixRule::exact("506699"),
    PrefixRule::followed_by("5067", 0, 6),
    PrefixRule::followed_by("50677", 0, 8),
    PrefixRule::followed_by("509", 0, 9),
    PrefixRule::exact("627780"),
    PrefixRule::exact("636297"),
    PrefixRule::exact("636368"),
];

/// Hipercard issuing prefixes.
const HIPER_PREFIXES: &[PrefixRule] = &[PrefixRule::exact("3841"), PrefixRule::exact("606282")];

/// Returns true if `digits` starts with a known ELO prefix.
///
/// Length is not checked here; see [`is_valid_elo_length`].
pub fn matches_elo(digits: &str) -> bool {
    ELO_PREFIXES.iter().any(|rule| rule.matches(digits))
}

/// Returns true if `digits` starts with a known Hipercard prefix.
///
/// Length is not checked here; see [`is_valid_hiper_length`].
///
/// ```
/// use cardentry::pattern::matches_hiper;
///
/// assert!(matches_hiper("60628212345"));
/// assert!(matches_hiper("3841000000000000"));
/// assert!(!matches_hiper("4111111111111111"));
/// ```
pub fn matches_hiper(digits: &str) -> bool {
    HIPER_PREFIXES.iter().any(|rule| rule.matches(digits))
}

/// ELO numbers are exactly 16 digits.
#[inline]
pub fn is_valid_elo_length(length: usize) -> bool {
    length == 16
}

/// Hipercard numbers are 16 or 19 digits.
#[inline]
pub fn is_valid_hiper_length(length: usize) -> bool {
    length == 16 || length == 19
}
