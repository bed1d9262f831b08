//! Positional big-integer re-encoding (Base58, Base85).
//!
//! The input bytes are read as one big-endian unsigned integer and written out
//! in the target radix, most significant digit first. This is a plain
//! numeral-system conversion: unlike Bitcoin Base58 or Ascii85 there is no
//! block structure and leading zero bytes are dropped, so an all-zero or empty
//! input encodes to the empty string.

use super::EncodingError;

/// Base58 alphabet (no `0`, `O`, `I` or `l`).
pub const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base85 alphabet. Not the RFC 1924 or Z85 ordering.
pub const BASE85_ALPHABET: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Positional Base58 of the message's UTF-8 bytes.
pub fn base58(message: &str) -> String {
    encode_positional(message.as_bytes(), BASE58_ALPHABET)
}

/// Positional Base85 of the message's UTF-8 bytes.
pub fn base85(message: &str) -> String {
    encode_positional(message.as_bytes(), BASE85_ALPHABET)
}

/// Encode `bytes` in radix `alphabet.len()` by repeated divmod.
///
/// `alphabet` must hold between 2 and 256 distinct ASCII symbols.
pub fn encode_positional(bytes: &[u8], alphabet: &[u8]) -> String {
    debug_assert!((2..=256).contains(&alphabet.len()));
    let base = alphabet.len() as u32;

    // Big-endian base-256 digits with leading zeros removed.
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let mut number: Vec<u8> = bytes[start..].to_vec();
    let mut symbols = Vec::new();

    while !number.is_empty() {
        let mut remainder = 0u32;
        for digit in number.iter_mut() {
            let acc = (remainder << 8) | u32::from(*digit);
            *digit = (acc / base) as u8;
            remainder = acc % base;
        }
        symbols.push(alphabet[remainder as usize]);

        let leading = number.iter().take_while(|&&d| d == 0).count();
        number.drain(..leading);
    }

    symbols.iter().rev().map(|&b| b as char).collect()
}

/// Inverse of [`encode_positional`]: rebuild the minimal big-endian bytes.
///
/// Leading zero bytes of the original input cannot be recovered.
pub fn decode_positional(encoded: &str, alphabet: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let base = alphabet.len() as u32;
    let mut number: Vec<u8> = Vec::new();

    for (position, symbol) in encoded.chars().enumerate() {
        let value = alphabet
            .iter()
            .position(|&a| symbol.is_ascii() && a == symbol as u8)
            .ok_or(EncodingError::InvalidSymbol { symbol, position })? as u32;

        // number = number * base + value, least significant byte last.
        let mut carry = value;
        for digit in number.iter_mut().rev() {
            let acc = u32::from(*digit) * base + carry;
            *digit = (acc & 0xFF) as u8;
            carry = acc >> 8;
        }
        while carry > 0 {
            number.insert(0, (carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let leading = number.iter().take_while(|&&d| d == 0).count();
    number.drain(..leading);
    Ok(number)
}
