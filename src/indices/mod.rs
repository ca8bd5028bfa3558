//! Indexed Store Module
//!
//! Holds the sorted list of integers loaded at startup and answers position
//! lookups over it.
//!
//! ## Lookup Policy
//! - **Exact match**: plain binary search; a hit returns its position.
//! - **Tolerance match**: on a miss, the two neighbours the search converged on are
//!   checked against `value / MAX_DEVIATION_DIVISOR`, right neighbour first.
//! - **Cancellation**: the caller passes a `CancelToken` that is polled on every
//!   iteration, so long searches can be abandoned mid-flight.
//!
//! ## Submodules
//! - **`repository`**: The `Indices` trait the HTTP layer depends on.
//! - **`reader`**: `ReaderIndices`, the in-memory implementation parsed from text.
//! - **`cancel`**: Caller-supplied cancellation tokens with optional deadlines.
//! - **`error`**: Error taxonomy shared by construction and lookup.

pub mod cancel;
pub mod error;
pub mod reader;
pub mod repository;

pub use cancel::{CancelCause, CancelSignal, CancelToken};
pub use error::{IndexError, Result};
pub use reader::{ReaderIndices, MAX_DEVIATION_DIVISOR};
pub use repository::Indices;
