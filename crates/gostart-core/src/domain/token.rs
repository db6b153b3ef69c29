//! Alphanumeric token alphabet.
//!
//! Randomness itself is supplied through the
//! [`TokenGenerator`](crate::application::ports::TokenGenerator) port; this
//! module only maps random bytes onto the alphabet.

/// `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Map each byte to `ALPHABET[byte % 62]`.
///
/// 256 is not a multiple of 62, so the first eight symbols are slightly
/// more likely. The tokens seed default credentials that are expected to
/// be rotated; the bias is accepted.
pub fn token_from_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| ALPHABET[usize::from(*b) % ALPHABET.len()] as char)
        .collect()
}

/// `true` if every character of `token` is in [`ALPHABET`].
pub fn is_alphanumeric_token(token: &str) -> bool {
    token.bytes().all(|b| ALPHABET.contains(&b))
}
