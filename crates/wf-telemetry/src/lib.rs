//! Logging setup shared by the native studio binaries.
//!
//! - **Logging**: human-readable or JSON output via `tracing-subscriber`,
//!   filtered by `RUST_LOG` with a configurable default.
//! - **Middleware**: an axum access-log layer emitting one event per request.

pub mod logging;
pub mod middleware;
