// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared plumbing for one-to-one operators (`Transform`, `Select`).
//!
//! [`OperatorBase`] factors out the state every one-to-one operator needs:
//! a handle to the downstream subscriber, the upstream subscription (set
//! once `on_subscribe` arrives), and a cancelled flag. Subclasses — in
//! Rust, callers composing on top of `OperatorBase` — only need to
//! implement their own `on_next` translation; subscribe/cancel/error
//! forwarding is handled here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::protocol::Subscription;

/// Shared state for a one-to-one operator sitting between an upstream
/// publisher and a downstream subscriber.
///
/// `D` is the downstream subscriber's item type; operators hold this
/// behind an `Arc` so it can be shared between the upstream-facing
/// `Subscriber` impl and the downstream-facing `Subscription` impl.
pub struct OperatorBase<Sub> {
    downstream: Sub,
    upstream: Mutex<Option<Arc<dyn Subscription>>>,
    cancelled: AtomicBool,
}

impl<Sub> OperatorBase<Sub> {
    /// Create operator state with no upstream subscription yet attached.
    pub fn new(downstream: Sub) -> Self {
        Self {
            downstream,
            upstream: Mutex::new(None),
            cancelled: AtomicBool::new(false),
        }
    }

    /// The downstream subscriber, for delivering translated signals.
    pub fn downstream(&self) -> &Sub {
        &self.downstream
    }

    /// `true` once `cancel()` has been called (locally or via a prior
    /// terminal signal having already fired).
    pub fn cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Record the upstream subscription, captured from `on_subscribe`.
    ///
    /// If `cancel()` already ran before the upstream subscription arrived
    /// (a narrow but legal race — downstream can cancel before upstream
    /// has signalled `onSubscribe`), the freshly-arrived subscription is
    /// cancelled immediately instead of being stored.
    pub fn set_upstream(&self, subscription: Arc<dyn Subscription>) {
        if self.cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("operator already cancelled, cancelling late upstream subscription");
            subscription.cancel();
            return;
        }
        *self.upstream.lock() = Some(subscription);
    }

    /// Forward `request(n)` to the upstream subscription, if one has
    /// arrived yet. A request that races ahead of `on_subscribe` is
    /// dropped silently — the operator never buffers demand itself, it is
    /// purely a pass-through, and an upstream publisher always delivers
    /// `on_subscribe` synchronously before returning from `subscribe`.
    pub fn request_upstream(&self, n: i64) {
        if let Some(upstream) = self.upstream.lock().as_ref() {
            upstream.request(n);
        }
    }

    /// Mark this operator cancelled and forward `cancel()` upstream
    /// exactly once. Safe to call multiple times.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("operator cancelled, forwarding upstream");
        if let Some(upstream) = self.upstream.lock().as_ref() {
            upstream.cancel();
        }
    }
}

/// The subscription an operator exposes to its downstream subscriber: a
/// thin wrapper that forwards `request` upstream and routes `cancel`
/// through [`OperatorBase::cancel`].
pub struct OperatorSubscription<Sub> {
    base: Arc<OperatorBase<Sub>>,
}

impl<Sub> OperatorSubscription<Sub> {
    /// Build the downstream-facing subscription for a given operator.
    pub fn new(base: Arc<OperatorBase<Sub>>) -> Self {
        Self { base }
    }
}

impl<Sub: Send + Sync> Subscription for OperatorSubscription<Sub> {
    fn request(&self, n: i64) {
        self.base.request_upstream(n);
    }

    fn cancel(&self) {
        self.base.cancel();
    }
}
