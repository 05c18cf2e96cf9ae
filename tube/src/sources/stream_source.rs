// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `from_stream`: a publisher backed by a supplier of a single-use
//! traversable.
//!
//! Unlike [`super::iterable::FromIterable`], the supplier is invoked once
//! *per subscription* rather than the iterable being reused — this is the
//! distinction the spec calls out explicitly: a supplier of a one-shot
//! traversable must be re-invoked on every subscribe, while a plain
//! iterable may be replayed from a cached copy.

use tube_core::{fail_immediately, Publisher, Subscriber, TubeError};

use super::cursor_subscription::subscribe_with_cursor;

/// A cold publisher whose sequence is produced by calling a supplier
/// function on every subscription.
///
/// `supplier` returns `Result<I, TubeError>` rather than a plain `I`: a
/// supplier that cannot produce a traversable (the "null or exception"
/// case in the source material) reports it as an `Err`, which is
/// delivered as `onError` rather than ever reaching `onSubscribe` with a
/// half-built cursor.
pub struct FromStream<F> {
    supplier: F,
}

impl<F> FromStream<F> {
    /// Wrap a supplier of a single-use traversable.
    pub fn new<T, I>(supplier: F) -> Self
    where
        F: Fn() -> Result<I, TubeError> + Send + Sync + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
        T: Send + 'static,
    {
        Self { supplier }
    }
}

impl<T, I, F> Publisher<T> for FromStream<F>
where
    F: Fn() -> Result<I, TubeError> + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: Send + 'static,
    T: Send + Sync + 'static,
{
    fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
        match (self.supplier)() {
            Ok(traversable) => {
                subscribe_with_cursor(Box::new(traversable.into_iter()), subscriber);
            }
            Err(err) => fail_immediately(subscriber, err),
        }
    }
}

/// Create a publisher backed by a supplier of a single-use traversable.
///
/// The supplier is called fresh for every subscription; a supplier that
/// returns `Err` (the "null or exception" failure mode) causes an
/// immediate `onError` without ever delivering an item.
pub fn from_stream<T, I, F>(supplier: F) -> FromStream<F>
where
    F: Fn() -> Result<I, TubeError> + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: Send + 'static,
    T: Send + Sync + 'static,
{
    FromStream::new(supplier)
}
