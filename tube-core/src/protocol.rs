// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The Reactive Streams protocol: [`Subscriber`], [`Subscription`], [`Publisher`].
//!
//! Every publisher and operator in this crate obeys the same contract:
//!
//! - `on_subscribe` is called exactly once, before any other signal.
//! - `on_next` may be called any number of times afterwards.
//! - at most one of `on_complete` or `on_error` follows, and nothing
//!   follows that.
//! - `request`/`cancel` are safe to call at any time, including
//!   concurrently with signal delivery and with each other; `cancel` is
//!   idempotent.

use std::sync::Arc;

/// A consumer of items, errors, and a terminal completion signal.
///
/// Implementations must not block in these callbacks for longer than
/// strictly necessary: the caller may be holding the per-subscription
/// emission lock while invoking them.
pub trait Subscriber<T>: Send + Sync {
    /// Called exactly once, before any other signal, with the handle used
    /// to request items and cancel.
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>);

    /// Called for each delivered item. Never called before `on_subscribe`,
    /// never called after a terminal signal.
    fn on_next(&self, item: T);

    /// Called at most once, after which no further signals arrive.
    fn on_complete(&self);

    /// Called at most once, after which no further signals arrive.
    fn on_error(&self, error: crate::TubeError);
}

/// The per-subscriber handle used to pull demand and cancel.
pub trait Subscription: Send + Sync {
    /// Request `n` additional items. `n <= 0` is a protocol violation:
    /// implementations must respond with `onError(IllegalArgument)` and
    /// cancel rather than panic.
    fn request(&self, n: i64);

    /// Cancel the subscription. Idempotent: a second or later call is a
    /// no-op. At most one `onNext` already in flight may still arrive.
    fn cancel(&self);
}

impl<T> Subscriber<T> for Arc<dyn Subscriber<T>> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        (**self).on_subscribe(subscription);
    }

    fn on_next(&self, item: T) {
        (**self).on_next(item);
    }

    fn on_complete(&self) {
        (**self).on_complete();
    }

    fn on_error(&self, error: crate::TubeError) {
        (**self).on_error(error);
    }
}

/// A producer of items to a single subscriber per subscription.
///
/// Each call to `subscribe` creates an independent subscription. Cold
/// publishers (the in-memory sources, `Transform`, `Select`) replay from
/// the beginning on every subscription; one-shot sources document their
/// re-subscription semantics individually.
pub trait Publisher<T>: Send + Sync {
    /// Subscribe to this publisher. Must call `subscriber.on_subscribe`
    /// before any other signal reaches `subscriber`.
    fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>);
}

/// A subscription that ignores `request` and `cancel`.
///
/// Used only when a publisher must call `on_subscribe` immediately before
/// an `on_error` it already knows it will deliver (e.g. a null stream
/// supplier) — rule 1.9 of the protocol requires `on_subscribe` before any
/// other signal, even a terminal one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSubscription;

impl Subscription for NoopSubscription {
    fn request(&self, _n: i64) {}
    fn cancel(&self) {}
}

/// Validate a subscriber is present and signal an immediate `onError` via
/// a [`NoopSubscription`] if a precondition has already failed.
///
/// This is the canonical "fail fast after a no-op onSubscribe" path used
/// by sources whose supplier fails before any cursor exists.
pub fn fail_immediately<T>(subscriber: Box<dyn Subscriber<T>>, error: crate::TubeError) {
    subscriber.on_subscribe(Arc::new(NoopSubscription));
    subscriber.on_error(error);
}

/// Signal immediate completion via a [`NoopSubscription`], used by
/// `empty()`.
pub fn complete_immediately<T>(subscriber: Box<dyn Subscriber<T>>) {
    subscriber.on_subscribe(Arc::new(NoopSubscription));
    subscriber.on_complete();
}
