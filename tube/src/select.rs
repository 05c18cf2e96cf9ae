// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `Select`: a one-to-one filtering operator built on
//! [`tube_core::OperatorBase`].

use std::sync::Arc;

use tube_core::{OperatorBase, OperatorSubscription, Publisher, Subscriber, Subscription, TubeError};

/// A one-to-one operator forwarding only the upstream items for which
/// `predicate` returns `Ok(true)`.
///
/// If `predicate` returns `Err(e)`, the upstream subscription is
/// cancelled and `e` is forwarded downstream. `Ok(false)` simply discards
/// the item — per the protocol, upstream demand is *not* automatically
/// re-requested to compensate for a discard; a caller needing a strict
/// delivered-item count must arrange additional upstream demand itself.
pub struct Select<P, F> {
    upstream: P,
    predicate: F,
}

impl<P, F> Select<P, F> {
    /// Build a `Select` over `upstream` keeping items for which
    /// `predicate` holds.
    pub fn new(upstream: P, predicate: F) -> Self {
        Self { upstream, predicate }
    }
}

struct SelectSubscriber<Sub, F> {
    base: Arc<OperatorBase<Sub>>,
    predicate: F,
}

impl<T, Sub, F> Subscriber<T> for SelectSubscriber<Sub, F>
where
    T: Send + Sync + 'static,
    Sub: Subscriber<T> + 'static,
    F: Fn(&T) -> Result<bool, TubeError> + Send + Sync + 'static,
{
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        self.base.set_upstream(subscription);
        self.base
            .downstream()
            .on_subscribe(Arc::new(OperatorSubscription::new(self.base.clone())));
    }

    fn on_next(&self, item: T) {
        if self.base.cancelled() {
            return;
        }
        match (self.predicate)(&item) {
            Ok(true) => self.base.downstream().on_next(item),
            Ok(false) => {}
            Err(err) => {
                self.base.cancel();
                self.base.downstream().on_error(err);
            }
        }
    }

    fn on_complete(&self) {
        if !self.base.cancelled() {
            self.base.downstream().on_complete();
        }
    }

    fn on_error(&self, error: TubeError) {
        if !self.base.cancelled() {
            self.base.downstream().on_error(error);
        }
    }
}

impl<T, P, F> Publisher<T> for Select<P, F>
where
    T: Send + Sync + 'static,
    P: Publisher<T>,
    F: Fn(&T) -> Result<bool, TubeError> + Clone + Send + Sync + 'static,
{
    fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
        let base = Arc::new(OperatorBase::new(Arc::from(subscriber) as Arc<dyn Subscriber<T>>));
        let relay = SelectSubscriber {
            base,
            predicate: self.predicate.clone(),
        };
        self.upstream.subscribe(Box::new(relay));
    }
}

/// Keep only the items from `upstream` for which `predicate` returns
/// `Ok(true)`. See [`Select`] for the exact error/discard semantics.
pub fn select<T, P, F>(upstream: P, predicate: F) -> Select<P, F>
where
    T: Send + Sync + 'static,
    P: Publisher<T>,
    F: Fn(&T) -> Result<bool, TubeError> + Clone + Send + Sync + 'static,
{
    Select::new(upstream, predicate)
}
