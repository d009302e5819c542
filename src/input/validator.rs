//! Whole-string pattern checks for terminal input.

use regex::Regex;
use std::sync::OnceLock;
use tracing::error;

/// ASCII "one or more digits", used for menu numbers and quantities.
pub const DIGITS: &str = "[0-9]+";

/// A compiled pattern that must match the entire input.
#[derive(Debug, Clone)]
pub struct Validator {
    pattern: Regex,
}

impl Validator {
    /// Compiles `pattern`, anchoring it at both ends.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self { pattern })
    }

    /// Cached [`DIGITS`] validator used for selections and quantities.
    ///
    /// Same answer as `validate(text, DIGITS)` without recompiling per call.
    pub fn digits() -> &'static Validator {
        static CACHED: OnceLock<Validator> = OnceLock::new();
        CACHED.get_or_init(|| Validator::new(DIGITS).expect("digit pattern is valid"))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Returns true iff the whole of `text` matches `pattern`.
///
/// General form of [`Validator::digits`]; the prompt loop uses the cached
/// validator for the one pattern it needs.
///
/// A malformed pattern is a programming error: it is logged and treated as no match.
pub fn validate(text: &str, pattern: &str) -> bool {
    match Validator::new(pattern) {
        Ok(validator) => validator.is_match(text),
        Err(e) => {
            error!(pattern, error = %e, "Invalid validation pattern");
            false
        }
    }
}
