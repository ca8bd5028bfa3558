use super::cancel::CancelToken;
use super::error::Result;

/// Lookup capability the HTTP layer is written against.
///
/// Implementations must be read-only after construction: `search` takes `&self`
/// and may be called from many threads at once.
pub trait Indices: Send + Sync {
    /// Returns the position of `value`, or of a neighbour within tolerance.
    ///
    /// Must poll `cancel` while working and return `IndexError::Canceled`
    /// as soon as it reports a cause.
    fn search(&self, value: i64, cancel: &CancelToken) -> Result<usize>;
}
