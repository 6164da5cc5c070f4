//! Shared-secret verification for inbound requests.

use subtle::ConstantTimeEq;

/// Checks a presented `X-Api-Key` value against the configured secret.
///
/// The byte-length comparison runs first and may branch (length is not
/// secret); the content comparison is constant-time. Empty values on
/// either side never match.
pub fn verify_api_key(provided: &str, expected: &str) -> bool {
    if provided.is_empty() || expected.is_empty() {
        return false;
    }
    if provided.len() != expected.len() {
        return false;
    }
    bool::from(provided.as_bytes().ct_eq(expected.as_bytes()))
}
