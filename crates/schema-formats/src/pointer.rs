//! JSON Pointer formats (RFC 6901 and Relative JSON Pointer)

/// Validates a JSON Pointer in its string representation.
///
/// The empty string addresses the whole document. Any other pointer starts
/// with `/`, and every `~` must be followed by `0` (for `~`) or `1` (for `/`).
/// URI fragment pointers (`#/foo`) are not accepted.
pub fn is_json_pointer(value: &str) -> bool {
    if !value.is_empty() && !value.starts_with('/') {
        return false;
    }
    let mut bytes = value.bytes();
    while let Some(b) = bytes.next() {
        if b == b'~' && !matches!(bytes.next(), Some(b'0' | b'1')) {
            return false;
        }
    }
    true
}

/// Validates a Relative JSON Pointer, e.g. `0/foo` or `1#`.
///
/// A non-negative up-count without leading zeros must come first, followed
/// by either `#` or a (possibly empty) JSON Pointer.
pub fn is_relative_json_pointer(value: &str) -> bool {
    let digits = value.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || (digits > 1 && value.starts_with('0')) {
        return false;
    }
    let rest = &value[digits..];
    rest == "#" || is_json_pointer(rest)
}
