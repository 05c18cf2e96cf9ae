// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `from_items` and `from_iterable`: cold publishers over an in-memory
//! collection.
//!
//! Both are the same publisher underneath: each call to `subscribe`
//! clones the backing collection and iterates a fresh copy, so repeated
//! subscriptions replay the full sequence, per the protocol's "cold
//! publisher" contract.

use tube_core::{Publisher, Subscriber};

use super::cursor_subscription::subscribe_with_cursor;

/// A cold publisher that replays a fixed, in-memory sequence of items on
/// every subscription.
pub struct FromIterable<T> {
    items: Vec<T>,
}

impl<T> FromIterable<T> {
    /// Wrap any `IntoIterator` whose items are `Clone` so every
    /// subscription can draw its own fresh iterator.
    pub fn new(iterable: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: iterable.into_iter().collect(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Publisher<T> for FromIterable<T> {
    fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
        let cursor = Box::new(self.items.clone().into_iter());
        subscribe_with_cursor(cursor, subscriber);
    }
}

/// Create a cold publisher that emits `items` in order, then completes.
pub fn from_items<T: Clone + Send + Sync + 'static>(
    items: impl IntoIterator<Item = T>,
) -> FromIterable<T> {
    FromIterable::new(items)
}

/// Create a cold publisher over any `Clone` in-memory collection.
///
/// Semantically identical to [`from_items`] — the Rust analogue of a
/// Java `Iterable<T>` is any container cheap enough to iterate again on
/// every subscription, which here we model as "collect once, clone per
/// subscription".
pub fn from_iterable<T: Clone + Send + Sync + 'static>(
    iterable: impl IntoIterator<Item = T>,
) -> FromIterable<T> {
    FromIterable::new(iterable)
}
