// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! [`ManualDemandSubscriber`]: records the exact signal trace and gives
//! the test full control over when to call `request`/`cancel`.

use std::sync::Arc;

use parking_lot::Mutex;

use tube_core::{Subscriber, Subscription, TubeError};

use crate::signal::Signal;

/// A subscriber that does not auto-request: the test drives demand
/// explicitly via [`ManualDemandSubscriber::request`]/
/// [`ManualDemandSubscriber::cancel`], and reads back the exact ordered
/// signal trace via [`ManualDemandSubscriber::signals`] — the tool for
/// asserting property (P1), "the signal trace matches `onSubscribe
/// (onNext)* (onComplete | onError)?`".
pub struct ManualDemandSubscriber<T> {
    subscription: Mutex<Option<Arc<dyn Subscription>>>,
    signals: Arc<Mutex<Vec<Signal<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> ManualDemandSubscriber<T> {
    /// Build a fresh subscriber with no subscription yet and an empty
    /// trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscription: Mutex::new(None),
            signals: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// `true` once `on_subscribe` has been called.
    #[must_use]
    pub fn has_subscription(&self) -> bool {
        self.subscription.lock().is_some()
    }

    /// Request `n` items from the stored subscription. Panics if
    /// `on_subscribe` hasn't been called yet — call sites should
    /// subscribe first.
    pub fn request(&self, n: i64) {
        let subscription = self.subscription.lock();
        subscription
            .as_ref()
            .expect("request() called before on_subscribe")
            .request(n);
    }

    /// Cancel the stored subscription.
    pub fn cancel(&self) {
        let subscription = self.subscription.lock();
        subscription
            .as_ref()
            .expect("cancel() called before on_subscribe")
            .cancel();
    }

    /// Snapshot the signal trace observed so far, in order.
    #[must_use]
    pub fn signals(&self) -> Vec<Signal<T>> {
        self.signals.lock().clone()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ManualDemandSubscriber<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Subscriber<T> for ManualDemandSubscriber<T> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        *self.subscription.lock() = Some(subscription);
    }

    fn on_next(&self, item: T) {
        self.signals.lock().push(Signal::Next(item));
    }

    fn on_complete(&self) {
        self.signals.lock().push(Signal::Complete);
    }

    fn on_error(&self, error: TubeError) {
        self.signals.lock().push(Signal::error(&error));
    }
}
