//! Regular expression format

use regex::Regex;

/// Validates that `value` is a syntactically valid regular expression.
///
/// Compilation uses the `regex` crate, whose automata run in linear time, so
/// crafted patterns cannot trigger catastrophic backtracking here or in the
/// `pattern` keyword that later uses them. Features that engine does not
/// support (look-around, backreferences) make a pattern invalid.
pub fn is_regex(value: &str) -> bool {
    Regex::new(value).is_ok()
}
