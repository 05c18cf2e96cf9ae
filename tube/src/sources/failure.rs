// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `from_failure`: a publisher that signals `onError` immediately.

use std::marker::PhantomData;

use tube_core::{fail_immediately, Publisher, Subscriber, TubeError};

/// A publisher that signals `onError(e)` right after `onSubscribe`,
/// delivering no items. `e` is cloned for each new subscription so the
/// publisher remains subscribable any number of times.
pub struct FromFailure<T> {
    error: TubeError,
    _item: PhantomData<fn() -> T>,
}

impl<T> FromFailure<T> {
    /// Build a publisher that always fails with `error`.
    pub fn new(error: TubeError) -> Self {
        Self {
            error,
            _item: PhantomData,
        }
    }
}

impl<T: Send + Sync + 'static> Publisher<T> for FromFailure<T> {
    fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
        fail_immediately(subscriber, self.error.clone());
    }
}

/// Create a publisher that immediately fails every subscriber with
/// `error`.
pub fn from_failure<T: Send + Sync + 'static>(error: TubeError) -> FromFailure<T> {
    FromFailure::new(error)
}
