//! Scoped release - One-shot, idempotent teardown handles.
//!
//! A [`ReleaseHandle`] converts an arbitrary teardown closure into a handle
//! that invokes it exactly once, no matter how many times (or from where)
//! `release()` is called. Every component that hands a caller a cleanup
//! obligation builds on this.
//!
//! There is deliberately no `Drop` fallback: the caller that receives a
//! handle is solely responsible for releasing it. Teardown timing stays
//! deterministic instead of riding on scope ends the caller did not choose.

use std::cell::RefCell;

use tracing::debug;

/// A single-use, idempotent releasable handle around one teardown action.
///
/// Construction has no side effects. The first `release()` runs the action;
/// every later call, including reentrant calls made from inside the action
/// itself, is a guaranteed no-op.
pub struct ReleaseHandle {
    action: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl ReleaseHandle {
    /// Wrap a teardown action. Nothing runs until `release()`.
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Self {
            action: RefCell::new(Some(Box::new(action))),
        }
    }

    /// Run the teardown action if it has not run yet.
    ///
    /// The action is taken out of the handle *before* it is invoked, so a
    /// reentrant `release()` from inside the action sees an already-released
    /// handle, and a panicking action still leaves the handle released (it
    /// is never retried).
    pub fn release(&self) {
        let action = self.action.borrow_mut().take();
        if let Some(action) = action {
            debug!("releasing bound handle");
            action();
        }
    }

    /// Whether the teardown action has already been taken.
    pub fn is_released(&self) -> bool {
        self.action.borrow().is_none()
    }
}

impl std::fmt::Debug for ReleaseHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseHandle")
            .field("released", &self.is_released())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
