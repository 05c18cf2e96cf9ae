// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! [`TubeHandle`]: the producer-facing handle passed into a tube
//! consumer closure.

use std::sync::Arc;

use tube_core::TubeError;

use super::state::TubeState;

/// The per-subscription handle a tube consumer writes to.
///
/// Callable from any thread: `send`/`fail`/`complete` are the primary
/// concurrency point of a `Tube`, serialized internally so the downstream
/// subscriber always observes a single totally-ordered signal stream.
/// After any terminal signal (`fail`, `complete` once fully drained, or a
/// downstream `cancel`), every operation becomes a silent no-op.
pub struct TubeHandle<T> {
    state: Arc<TubeState<T>>,
}

impl<T> Clone for TubeHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> TubeHandle<T> {
    pub(crate) fn new(state: Arc<TubeState<T>>) -> Self {
        Self { state }
    }

    /// Offer `item` to the downstream subscriber, subject to the tube's
    /// configured backpressure strategy.
    pub fn send(&self, item: T) {
        self.state.send(item);
    }

    /// Signal `onError(error)` immediately, discarding any buffered
    /// items, and terminate.
    pub fn fail(&self, error: TubeError) {
        self.state.fail(error);
    }

    /// Request completion: any already-admitted buffered items are
    /// delivered first, as demand allows, then `onComplete` fires once
    /// the buffer has fully drained.
    pub fn complete(&self) {
        self.state.complete();
    }

    /// The current outstanding demand. May be stale the instant it
    /// returns.
    pub fn requested(&self) -> u64 {
        self.state.requested()
    }

    /// Register a callback invoked exactly once if the downstream
    /// subscriber cancels. A no-op if the subscription has already
    /// reached a terminal state.
    pub fn cancel_on_cancellation(&self, callback: impl FnOnce() + Send + 'static) {
        self.state.set_on_cancel(Box::new(callback));
    }

    /// Register a callback invoked exactly once on any terminal outcome,
    /// including cancellation — the hook for releasing external
    /// resources. A no-op if the subscription has already reached a
    /// terminal state.
    pub fn termination_callback(&self, callback: impl FnOnce() + Send + 'static) {
        self.state.set_on_termination(Box::new(callback));
    }
}
