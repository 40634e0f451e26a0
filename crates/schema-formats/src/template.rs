//! URI Template format (RFC 6570)

use crate::uri::is_uri_reference;

/// Longest prefix modifier allowed by RFC 6570 (`:9999`)
const MAX_PREFIX_DIGITS: usize = 4;

/// Validates a URI Template, e.g. `http://example.com/dictionary/{term:1}/{term}`.
///
/// Every `{...}` expression must be well formed and balanced. With the
/// expressions removed, the remaining literal text must be a URI-reference,
/// so relative templates are accepted.
pub fn is_uri_template(value: &str) -> bool {
    let mut literal = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(open) = rest.find(|c: char| c == '{' || c == '}') {
        if rest.as_bytes()[open] == b'}' {
            return false;
        }
        literal.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return false;
        };
        // a nested '{' fails the varname check
        if !is_expression(&after[..close]) {
            return false;
        }
        rest = &after[close + 1..];
    }
    literal.push_str(rest);
    is_uri_reference(&literal)
}

/// `expression = "{" [ operator ] variable-list "}"`, without the braces.
///
/// The operators reserved for future extensions (`= , ! @ |`) are rejected.
fn is_expression(expression: &str) -> bool {
    let variables = match expression.as_bytes().first() {
        Some(b'+' | b'#' | b'.' | b'/' | b';' | b'?' | b'&') => &expression[1..],
        _ => expression,
    };
    variables.split(',').all(is_varspec)
}

/// `varspec = varname [ modifier-level4 ]`
fn is_varspec(spec: &str) -> bool {
    match spec.find(|c: char| c == ':' || c == '*') {
        None => is_varname(spec),
        Some(at) => {
            let (name, modifier) = spec.split_at(at);
            is_varname(name) && is_modifier(modifier)
        }
    }
}

fn is_modifier(modifier: &str) -> bool {
    if modifier == "*" {
        return true;
    }
    match modifier.strip_prefix(':') {
        // max-length = %x31-39 0*3DIGIT
        Some(length) => {
            (1..=MAX_PREFIX_DIGITS).contains(&length.len())
                && !length.starts_with('0')
                && length.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// `varname = varchar *( ["."] varchar )`, where `varchar` is ALPHA, DIGIT,
/// `_` or a pct-encoded octet.
fn is_varname(name: &str) -> bool {
    if name.is_empty() || name.starts_with('.') || name.ends_with('.') || name.contains("..") {
        return false;
    }
    let mut bytes = name.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'%' => {
                let hex = (bytes.next(), bytes.next());
                if !matches!(hex, (Some(a), Some(b)) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()) {
                    return false;
                }
            }
            b'.' | b'_' => {}
            _ if b.is_ascii_alphanumeric() => {}
            _ => return false,
        }
    }
    true
}
