// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-slot deferred action with cancellation tokens.
//!
//! Hosts drive time explicitly: [`DeferredAction::schedule`] records an action
//! and its due time, and [`DeferredAction::poll`] hands it back once the
//! caller's clock reaches that time. Scheduling again replaces the pending
//! action, and a [`CancelToken`] only cancels the schedule it came from.
//!
//! ```
//! use overstory_preview::deferred::DeferredAction;
//!
//! let mut timer = DeferredAction::new();
//! let first = timer.schedule("open", 100);
//! let _second = timer.schedule("open-again", 150);
//!
//! // The first token is stale once replaced.
//! assert!(!timer.cancel(first));
//! assert_eq!(timer.poll(120), None);
//! assert_eq!(timer.poll(150), Some("open-again"));
//! assert_eq!(timer.poll(200), None);
//! ```

/// Identifies one call to [`DeferredAction::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CancelToken(u64);

#[derive(Clone, Debug)]
struct Pending<A> {
    token: CancelToken,
    action: A,
    due_at: u64,
}

/// At most one pending action, released when its due time is reached.
#[derive(Clone, Debug)]
pub struct DeferredAction<A> {
    next_token: u64,
    pending: Option<Pending<A>>,
}

impl<A> Default for DeferredAction<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> DeferredAction<A> {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_token: 0,
            pending: None,
        }
    }

    /// Schedules `action` for `due_at`, replacing anything pending.
    pub fn schedule(&mut self, action: A, due_at: u64) -> CancelToken {
        let token = CancelToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(Pending {
            token,
            action,
            due_at,
        });
        token
    }

    /// Cancels the pending action if it was scheduled with `token`.
    pub fn cancel(&mut self, token: CancelToken) -> bool {
        if self.pending.as_ref().is_some_and(|p| p.token == token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancels whatever is pending, returning it.
    pub fn cancel_all(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.action)
    }

    /// Returns the pending action if it is due at `now`.
    pub fn poll(&mut self, now: u64) -> Option<A> {
        if self.pending.as_ref()?.due_at > now {
            return None;
        }
        self.pending.take().map(|p| p.action)
    }

    /// Returns `true` while an action is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Due time of the pending action, if any.
    #[must_use]
    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at)
    }
}
