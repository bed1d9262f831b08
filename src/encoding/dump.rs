//! Per-character numeric dumps.
//!
//! Each Unicode scalar value becomes one token; tokens are joined by a single
//! space. Formatting widths are minimums, so scalars above 255 widen the
//! binary token instead of being truncated to 8 bits.

use std::fmt::Write;

fn dump_with<F>(message: &str, mut render: F) -> String
where
    F: FnMut(&mut String, u32) -> std::fmt::Result,
{
    let mut out = String::with_capacity(message.len() * 4);
    for (i, c) in message.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = render(&mut out, c as u32);
    }
    out
}

/// Decimal codepoint of every character.
pub fn ascii_codepoints(message: &str) -> String {
    dump_with(message, |out, cp| write!(out, "{}", cp))
}

/// Zero-padded 8-bit binary form of every character.
pub fn binary(message: &str) -> String {
    dump_with(message, |out, cp| write!(out, "{:08b}", cp))
}

/// Octal form of every character.
pub fn octal(message: &str) -> String {
    dump_with(message, |out, cp| write!(out, "{:o}", cp))
}
