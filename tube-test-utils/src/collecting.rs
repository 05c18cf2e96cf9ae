// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! [`CollectingSubscriber`]: auto-requests unlimited demand and collects
//! every item it receives, for tests that only care about the final item
//! sequence.

use std::sync::Arc;

use parking_lot::Mutex;

use tube_core::{Subscriber, Subscription, TubeError};

/// A subscriber that requests effectively unbounded demand on
/// `on_subscribe` and appends every item to a shared, lockable `Vec`.
///
/// `new()` returns the subscriber together with the `Arc<Mutex<Vec<T>>>`
/// it writes into, so a test can subscribe the returned subscriber and
/// still hold onto a handle for assertions afterwards.
pub struct CollectingSubscriber<T> {
    items: Arc<Mutex<Vec<T>>>,
    error: Arc<Mutex<Option<TubeError>>>,
    completed: Arc<Mutex<bool>>,
}

impl<T: Send + Sync + 'static> CollectingSubscriber<T> {
    /// Build a collecting subscriber and the shared buffer it appends to.
    #[must_use]
    pub fn new() -> (Self, Arc<Mutex<Vec<T>>>) {
        let items = Arc::new(Mutex::new(Vec::new()));
        let subscriber = Self {
            items: items.clone(),
            error: Arc::new(Mutex::new(None)),
            completed: Arc::new(Mutex::new(false)),
        };
        (subscriber, items)
    }

    /// `true` once `on_complete` has fired.
    #[must_use]
    pub fn completed(&self) -> bool {
        *self.completed.lock()
    }

    /// The error `on_error` delivered, if any, rendered to a string
    /// (`TubeError` itself isn't `Clone`-free of its boxed sources, so the
    /// message is what tests compare against).
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.lock().as_ref().map(ToString::to_string)
    }
}

impl<T: Send + Sync + 'static> Subscriber<T> for CollectingSubscriber<T> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        subscription.request(i64::MAX);
    }

    fn on_next(&self, item: T) {
        self.items.lock().push(item);
    }

    fn on_complete(&self) {
        *self.completed.lock() = true;
    }

    fn on_error(&self, error: TubeError) {
        *self.error.lock() = Some(error);
    }
}
