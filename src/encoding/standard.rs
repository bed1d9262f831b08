//! Byte-oriented standard encodings.

use ::base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 4648 Base32 alphabet.
pub const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Bytes escaped in a query component: everything but `A-Za-z0-9-_.~`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Standard (RFC 4648) Base64 with `=` padding.
pub fn base64(message: &str) -> String {
    STANDARD.encode(message.as_bytes())
}

/// Lowercase hex, two digits per byte.
pub fn hex(message: &str) -> String {
    ::hex::encode(message.as_bytes())
}

/// Query-component escaping: spaces become `+`, every other byte outside
/// `A-Za-z0-9-_.~` becomes `%XX` (uppercase hex).
pub fn url_query_escape(message: &str) -> String {
    message
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Standard (RFC 4648) Base32 with `=` padding.
pub fn base32(message: &str) -> String {
    let data = message.as_bytes();
    let mut out = String::with_capacity(data.len().div_ceil(5) * 8);

    for chunk in data.chunks(5) {
        let mut buf = [0u8; 5];
        buf[..chunk.len()].copy_from_slice(chunk);
        let group = buf.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

        // Symbols carrying at least one input bit.
        let symbols = (chunk.len() * 8).div_ceil(5);
        for i in 0..8 {
            if i < symbols {
                let index = (group >> (35 - i * 5)) & 0x1F;
                out.push(BASE32_ALPHABET[index as usize] as char);
            } else {
                out.push('=');
            }
        }
    }

    out
}
