//! Hostname and email formats

use crate::ip::{is_ipv4, is_ipv6};

/// Longest hostname, not counting an optional trailing dot
pub const MAX_HOSTNAME_LEN: usize = 253;
/// Longest single label
pub const MAX_LABEL_LEN: usize = 63;
/// Longest email address (RFC 5321 path limit minus the angle brackets)
pub const MAX_EMAIL_LEN: usize = 254;
/// Longest email local part
pub const MAX_LOCAL_PART_LEN: usize = 64;

/// Validates an RFC 1123 hostname.
///
/// Checks for:
/// - At most 253 characters, ignoring one trailing dot
/// - Labels of 1 to 63 ASCII letters, digits or hyphens
/// - No label starting or ending with a hyphen
pub fn is_hostname(value: &str) -> bool {
    let name = value.strip_suffix('.').unwrap_or(value);
    if name.is_empty() || name.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    name.split('.').all(is_label)
}

fn is_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (None, _) | (Some(b'-'), _) | (_, Some(b'-')) => false,
        _ => {
            bytes.len() <= MAX_LABEL_LEN
                && bytes.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'-')
        }
    }
}

/// Validates an email address.
///
/// This is a pragmatic subset of RFC 5322:
/// - Exactly one '@' symbol
/// - At most 254 characters in total
/// - Local part of 1 to 64 characters, either a dot-atom or a quoted string
/// - Domain that is a valid hostname, or an address literal such as
///   `[192.168.0.1]` or `[IPv6:::1]`
pub fn is_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LEN {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    is_local_part(local) && is_mail_domain(domain)
}

/// RFC 5322 `atext`
fn is_atext(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-/=?^_`{|}~".contains(&b)
}

fn is_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LEN {
        return false;
    }
    match local.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(quoted) => is_quoted_content(quoted),
        None => local
            .split('.')
            .all(|atom| !atom.is_empty() && atom.bytes().all(is_atext)),
    }
}

/// Printable ASCII with backslash escapes; bare quotes and backslashes are
/// not allowed.
fn is_quoted_content(content: &str) -> bool {
    let mut bytes = content.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'\\' => {
                if !matches!(bytes.next(), Some(0x20..=0x7e)) {
                    return false;
                }
            }
            b'"' => return false,
            0x20..=0x7e => {}
            _ => return false,
        }
    }
    true
}

fn is_mail_domain(domain: &str) -> bool {
    match domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        Some(literal) => match literal.strip_prefix("IPv6:") {
            Some(v6) => is_ipv6(v6),
            None => is_ipv4(literal),
        },
        None => is_hostname(domain),
    }
}
