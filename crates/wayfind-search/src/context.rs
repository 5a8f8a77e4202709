use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the same flag, so a host thread can cancel a search running
/// elsewhere. A running [`Search`](crate::Search) checks it once per step.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_done());
        ctx.cancel();
        assert!(other.is_done());
    }
}
