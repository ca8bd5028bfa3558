//! Application Shell
//!
//! Wires configuration, logging and the HTTP server around the indexed store.
//!
//! ## Startup Sequence
//! 1. **Config**: Parsed from flags with environment fallbacks (`config`).
//! 2. **Logging**: `tracing-subscriber` initialised at the configured level.
//! 3. **Load**: The input file is parsed into a `ReaderIndices`. Any error is fatal.
//! 4. **Serve**: The router is bound to `host:port` until Ctrl+C / SIGTERM (`server`).

pub mod config;
pub mod server;

pub use config::{init_logging, Config};
pub use server::App;

#[cfg(test)]
mod tests;
