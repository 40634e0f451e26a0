//! IP address literal formats

const IPV6_GROUPS: usize = 8;

/// Validates a dotted-quad IPv4 address, e.g. `192.168.0.1`.
///
/// Every component must be plain decimal without leading zeros, so the
/// octal, hex and single-integer spellings some resolvers accept are invalid.
pub fn is_ipv4(value: &str) -> bool {
    let mut count = 0;
    for octet in value.split('.') {
        count += 1;
        if count > 4 || !is_octet(octet) {
            return false;
        }
    }
    count == 4
}

fn is_octet(octet: &str) -> bool {
    let bytes = octet.as_bytes();
    if bytes.is_empty() || bytes.len() > 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    octet.parse::<u16>().map_or(false, |n| n <= 255)
}

/// Counts the 16-bit groups in a run of `:`-separated hex groups.
///
/// When `ipv4_tail` is set, the final piece may be a dotted-quad worth two
/// groups. An empty run counts as zero groups.
fn count_groups(run: &str, ipv4_tail: bool) -> Option<usize> {
    if run.is_empty() {
        return Some(0);
    }
    let mut pieces = run.split(':').peekable();
    let mut groups = 0;
    while let Some(piece) = pieces.next() {
        let last = pieces.peek().is_none();
        if last && ipv4_tail && piece.contains('.') {
            if !is_ipv4(piece) {
                return None;
            }
            groups += 2;
        } else if (1..=4).contains(&piece.len()) && piece.bytes().all(|b| b.is_ascii_hexdigit()) {
            groups += 1;
        } else {
            return None;
        }
        if groups > IPV6_GROUPS {
            return None;
        }
    }
    Some(groups)
}

/// Validates an RFC 4291 IPv6 address in text form, e.g. `::1`.
///
/// Supports `::` zero compression (once) and a trailing embedded IPv4
/// address (`::ffff:192.168.0.1`). Zone identifiers are not accepted.
pub fn is_ipv6(value: &str) -> bool {
    match value.find("::") {
        None => count_groups(value, true) == Some(IPV6_GROUPS),
        Some(at) => {
            let (head, tail) = (&value[..at], &value[at + 2..]);
            if tail.contains("::") {
                return false;
            }
            match (count_groups(head, false), count_groups(tail, true)) {
                // "::" stands for at least one zero group
                (Some(h), Some(t)) => h + t < IPV6_GROUPS,
                _ => false,
            }
        }
    }
}
