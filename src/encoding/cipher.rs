//! Classical letter-substitution ciphers over the 26-letter Latin alphabet.
//!
//! Only ASCII letters are substituted; case is preserved and every other
//! character passes through untouched.

/// Rotate each ASCII letter forward by `shift` positions (mod 26).
pub fn caesar(message: &str, shift: u8) -> String {
    let s = shift % 26;
    message
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                ((((c as u8 - b'A') + s) % 26) + b'A') as char
            } else if c.is_ascii_lowercase() {
                ((((c as u8 - b'a') + s) % 26) + b'a') as char
            } else {
                c
            }
        })
        .collect()
}

/// Caesar with a fixed shift of 13; its own inverse.
pub fn rot13(message: &str) -> String {
    caesar(message, 13)
}

/// Mirror each ASCII letter within its case (A↔Z, a↔z).
pub fn atbash(message: &str) -> String {
    message
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                (b'Z' - (c as u8 - b'A')) as char
            } else if c.is_ascii_lowercase() {
                (b'z' - (c as u8 - b'a')) as char
            } else {
                c
            }
        })
        .collect()
}
