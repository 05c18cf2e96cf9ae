// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `empty()`: a publisher that completes immediately with no items.

use std::marker::PhantomData;

use tube_core::{complete_immediately, Publisher, Subscriber};

/// A publisher that signals `onComplete` right after `onSubscribe`,
/// delivering no items.
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: Send + Sync + 'static> Publisher<T> for Empty<T> {
    fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
        complete_immediately(subscriber);
    }
}

/// Create a publisher that completes immediately without emitting any
/// items.
pub fn empty<T: Send + Sync + 'static>() -> Empty<T> {
    Empty::default()
}
