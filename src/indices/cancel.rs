//! Cooperative Cancellation
//!
//! A `CancelToken` is created by whoever issues a search and handed to it by
//! reference. The search polls `cause()` between comparisons; nothing blocks.
//!
//! Clones share state: cancelling any clone cancels them all.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Why a token stopped being live.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    #[error("operation canceled")]
    Canceled,
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// Anything a search can poll for a reason to stop.
pub trait CancelSignal {
    fn cause(&self) -> Option<CancelCause>;
}

#[derive(Debug, Default)]
struct Inner {
    canceled: AtomicBool,
    deadline: Option<Instant>,
}

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

impl CancelToken {
    /// A token that only stops on an explicit `cancel()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also stops once `deadline` has passed.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            inner: Arc::new(Inner {
                canceled: AtomicBool::new(false),
                deadline: Some(deadline),
            }),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn cancel(&self) {
        self.inner.canceled.store(true, Ordering::Release);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.inner.deadline
    }

    /// Polls the token. An explicit cancel wins over an expired deadline.
    pub fn cause(&self) -> Option<CancelCause> {
        if self.inner.canceled.load(Ordering::Acquire) {
            return Some(CancelCause::Canceled);
        }
        match self.inner.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(CancelCause::DeadlineExceeded),
            _ => None,
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.cause().is_some()
    }

    /// Wraps the token in a guard that cancels it on drop.
    pub fn drop_guard(self) -> DropGuard {
        DropGuard { token: Some(self) }
    }
}

impl CancelSignal for CancelToken {
    fn cause(&self) -> Option<CancelCause> {
        CancelToken::cause(self)
    }
}

/// Cancels its token when dropped, unless `disarm` was called first.
///
/// Held across an `.await` so that a dropped request future stops the work
/// it started on another thread.
#[derive(Debug)]
pub struct DropGuard {
    token: Option<CancelToken>,
}

impl DropGuard {
    pub fn disarm(mut self) -> CancelToken {
        // Only `None` after a previous disarm, which consumes the guard.
        self.token.take().unwrap_or_default()
    }
}

impl Drop for DropGuard {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }
}
