//! Text encoding subsystem.
//!
//! # Data Flow
//! ```text
//! MESSAGE (process constant)
//!     → Encoding::ALL (fixed display order)
//!     → Encoding::apply (one pure transform per variant)
//!         → standard.rs   (Base64, Hex, URL, Base32)
//!         → cipher.rs     (ROT13, Caesar, Atbash)
//!         → dump.rs       (ASCII, Binary, Octal)
//!         → positional.rs (Base58, Base85)
//!     → report rendering (http layer)
//! ```
//!
//! # Design Decisions
//! - Every transform is a pure `&str -> String` function with no shared state
//! - Alphabets are `'static` byte strings, safe for concurrent reads
//! - Base58/Base85 are positional big-integer conversions, not the block
//!   oriented schemes: leading zero bytes are not preserved

pub mod cipher;
pub mod dump;
pub mod positional;
pub mod standard;

pub use cipher::{atbash, caesar, rot13};
pub use dump::{ascii_codepoints, binary, octal};
pub use positional::{base58, base85, decode_positional, encode_positional, BASE58_ALPHABET, BASE85_ALPHABET};
pub use standard::{base32, base64, hex, url_query_escape, BASE32_ALPHABET};

/// The message every request encodes.
pub const MESSAGE: &str = "Hello, World!";

/// Shift applied by the Caesar transform.
pub const CAESAR_SHIFT: u8 = 3;

/// Errors raised when reversing an encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// A character outside the alphabet was found.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// One of the twelve transforms shown on the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Base64,
    Ascii,
    Hex,
    Url,
    Rot13,
    Binary,
    Octal,
    Caesar,
    Atbash,
    Base32,
    Base58,
    Base85,
}

impl Encoding {
    /// All transforms, in the order they are rendered.
    pub const ALL: [Encoding; 12] = [
        Encoding::Base64,
        Encoding::Ascii,
        Encoding::Hex,
        Encoding::Url,
        Encoding::Rot13,
        Encoding::Binary,
        Encoding::Octal,
        Encoding::Caesar,
        Encoding::Atbash,
        Encoding::Base32,
        Encoding::Base58,
        Encoding::Base85,
    ];

    /// Name shown inside `Encoded (<label>)`.
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Base64 => "Base64",
            Encoding::Ascii => "ASCII",
            Encoding::Hex => "Hex",
            Encoding::Url => "URL",
            Encoding::Rot13 => "ROT13",
            Encoding::Binary => "Binary",
            Encoding::Octal => "Octal",
            Encoding::Caesar => "Caesar",
            Encoding::Atbash => "Atbash",
            Encoding::Base32 => "Base32",
            Encoding::Base58 => "Base58",
            Encoding::Base85 => "Base85",
        }
    }

    /// Run this transform over `message`.
    pub fn apply(self, message: &str) -> String {
        match self {
            Encoding::Base64 => base64(message),
            Encoding::Ascii => ascii_codepoints(message),
            Encoding::Hex => hex(message),
            Encoding::Url => url_query_escape(message),
            Encoding::Rot13 => rot13(message),
            Encoding::Binary => binary(message),
            Encoding::Octal => octal(message),
            Encoding::Caesar => caesar(message, CAESAR_SHIFT),
            Encoding::Atbash => atbash(message),
            Encoding::Base32 => base32(message),
            Encoding::Base58 => base58(message),
            Encoding::Base85 => base85(message),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
