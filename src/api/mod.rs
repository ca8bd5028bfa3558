//! HTTP API Module
//!
//! Exposes the indexed store over HTTP.
//!
//! ## Endpoints
//! - **`GET /endpoint/:value`**: Looks up `value` and returns its index, or an error
//!   message with a matching status code.
//!
//! ## Submodules
//! - **`handlers`**: Axum request handlers; translate `IndexError` into responses.
//! - **`logging`**: Per-request log line middleware.
//! - **`router`**: Builds the `Router` with state and middleware layers.
//! - **`types`**: Response bodies and search settings.

pub mod handlers;
pub mod logging;
pub mod router;
pub mod types;
