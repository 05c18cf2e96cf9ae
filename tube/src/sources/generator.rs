// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `from_generator`: a publisher driven by an initial state plus a pure
//! `state -> iterator` function.
//!
//! The initial state is `Option<S>` rather than `S`, preserving the
//! distinction between "no state" and "a state that happens to be the
//! null value" called out as an open question in the source material —
//! `state_supplier` returning `None` is a legitimate, common case (most
//! generators have no state at all), not a failure.

use tube_core::{Publisher, Subscriber};

use super::cursor_subscription::subscribe_with_cursor;

/// A cold publisher whose sequence is produced by calling `state_supplier`
/// once per subscription and feeding the result to `generator`.
pub struct FromGenerator<S, FState, FGen> {
    state_supplier: FState,
    generator: FGen,
    _state: std::marker::PhantomData<fn() -> S>,
}

impl<S, FState, FGen> FromGenerator<S, FState, FGen> {
    /// Build a generator-backed publisher.
    pub fn new<T, I>(state_supplier: FState, generator: FGen) -> Self
    where
        FState: Fn() -> Option<S> + Send + Sync + 'static,
        FGen: Fn(Option<S>) -> I + Send + Sync + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
        T: Send + 'static,
    {
        Self {
            state_supplier,
            generator,
            _state: std::marker::PhantomData,
        }
    }
}

impl<S, T, I, FState, FGen> Publisher<T> for FromGenerator<S, FState, FGen>
where
    FState: Fn() -> Option<S> + Send + Sync + 'static,
    FGen: Fn(Option<S>) -> I + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: Send + 'static,
    T: Send + Sync + 'static,
{
    fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
        let state = (self.state_supplier)();
        let traversable = (self.generator)(state);
        subscribe_with_cursor(Box::new(traversable.into_iter()), subscriber);
    }
}

/// Create a publisher whose items come from `generator(state_supplier())`,
/// called afresh on every subscription.
pub fn from_generator<S, T, I, FState, FGen>(
    state_supplier: FState,
    generator: FGen,
) -> FromGenerator<S, FState, FGen>
where
    FState: Fn() -> Option<S> + Send + Sync + 'static,
    FGen: Fn(Option<S>) -> I + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: Send + 'static,
    T: Send + Sync + 'static,
{
    FromGenerator::new(state_supplier, generator)
}
