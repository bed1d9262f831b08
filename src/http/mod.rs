//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (assign X-Request-ID)
//!     → index handler (any method, any path)
//!     → response.rs (render the encoding report)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeUuidRequestId, RequestIdExt, X_REQUEST_ID};
pub use response::{render_report, report};
pub use server::{HttpServer, ServerError};
