//! Encoding showcase library.
//!
//! A minimal HTTP endpoint that renders a constant message through twelve
//! text encodings: Base64, ASCII codepoints, hex, URL escaping, ROT13,
//! binary, octal, Caesar, Atbash, Base32, and positional Base58/Base85.

// Core
pub mod encoding;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use encoding::{Encoding, MESSAGE};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
