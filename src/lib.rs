//! Sorted Index Lookup Library
//!
//! Answers "where is this value?" over a sorted list of integers loaded once at
//! startup. The binary (`main.rs`) wraps it in an HTTP service.
//!
//! ## Modules
//! - **`indices`**: The indexed store. Parses the input, runs the approximate binary
//!   search with its tolerance fallback, and defines the `Indices` trait and
//!   cooperative `CancelToken`.
//! - **`api`**: The HTTP boundary. Maps `GET /endpoint/:value` onto `Indices::search`
//!   and store errors onto status codes, with request logging middleware.
//! - **`app`**: Configuration, logging setup and the server lifecycle.

pub mod api;
pub mod app;
pub mod indices;
