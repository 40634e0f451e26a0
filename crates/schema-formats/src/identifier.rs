//! UUID format

use uuid::Uuid;

/// Length of the hyphenated `8-4-4-4-12` form
const HYPHENATED_LEN: usize = 36;

/// Validates an RFC 4122 UUID in hyphenated form, e.g.
/// `2eb8aa08-aa98-11ea-b4aa-73b441d16380`.
///
/// Simple, braced and URN spellings are rejected.
pub fn is_uuid(value: &str) -> bool {
    value.len() == HYPHENATED_LEN && Uuid::parse_str(value).is_ok()
}
