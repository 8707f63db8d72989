//! Per-invocation mutual-exclusion guard.
//!
//! External transfers mid-operation hand control to collaborator
//! contracts which could call back into the engine while custody or
//! funds are in flight. The lock is global, not per-key: *any* nested
//! call into a state-mutating entry point is rejected, not just one
//! touching the same listing or auction.

use tokenmart_types::{MartError, Result};

/// Boolean reentrancy lock. Set on entry to every state-mutating entry
/// point, cleared on every exit path, error paths included.
#[derive(Debug, Default)]
pub struct InvocationLock {
    held: bool,
}

impl InvocationLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock.
    ///
    /// # Errors
    /// `ReentrantCall` if an invocation is already executing.
    pub fn enter(&mut self) -> Result<()> {
        if self.held {
            return Err(MartError::ReentrantCall);
        }
        self.held = true;
        Ok(())
    }

    /// Release the lock. Idempotent.
    pub fn exit(&mut self) {
        self.held = false;
    }

    /// Returns `true` while an invocation is executing.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }
}
