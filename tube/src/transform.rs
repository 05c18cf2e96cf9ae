// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `Transform`: a one-to-one mapping operator built on
//! [`tube_core::OperatorBase`].

use std::sync::Arc;

use tube_core::{OperatorBase, OperatorSubscription, Publisher, Subscriber, Subscription, TubeError};

/// A one-to-one operator applying `f` to every upstream item.
///
/// `f` returns `Result<Option<O>, TubeError>`: `Ok(Some(out))` forwards
/// `out` downstream, `Err(e)` cancels the upstream subscription and
/// forwards `e`, and `Ok(None)` cancels the upstream subscription and
/// forwards a [`TubeError::ProtocolViolation`] naming the offending item
/// — Rust has no `null`, so a mapping function that would have returned
/// `null` in the source protocol instead returns `Ok(None)`, which this
/// operator treats exactly as the protocol's "transform produced null"
/// violation.
pub struct Transform<P, F> {
    upstream: P,
    f: F,
}

impl<P, F> Transform<P, F> {
    /// Build a `Transform` over `upstream` applying `f` to each item.
    pub fn new(upstream: P, f: F) -> Self {
        Self { upstream, f }
    }
}

struct TransformSubscriber<O, Sub, F> {
    base: Arc<OperatorBase<Sub>>,
    f: F,
    _output: std::marker::PhantomData<fn() -> O>,
}

impl<I, O, Sub, F> Subscriber<I> for TransformSubscriber<O, Sub, F>
where
    I: std::fmt::Debug,
    O: Send + Sync + 'static,
    Sub: Subscriber<O> + 'static,
    F: Fn(I) -> Result<Option<O>, TubeError> + Send + Sync + 'static,
{
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        self.base.set_upstream(subscription);
        self.base
            .downstream()
            .on_subscribe(Arc::new(OperatorSubscription::new(self.base.clone())));
    }

    fn on_next(&self, item: I) {
        if self.base.cancelled() {
            return;
        }
        let description = format!("{item:?}");
        match (self.f)(item) {
            Ok(Some(out)) => self.base.downstream().on_next(out),
            Ok(None) => {
                self.base.cancel();
                #[cfg(feature = "tracing")]
                tracing::warn!(item = %description, "transform produced no result");
                self.base.downstream().on_error(TubeError::protocol_violation(format!(
                    "transform produced no result for item {description}"
                )));
            }
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

impl<I, O, P, F> Publisher<O> for Transform<P, F>
where
    I: std::fmt::Debug + Send + Sync + 'static,
    O: Send + Sync + 'static,
    P: Publisher<I>,
    F: Fn(I) -> Result<Option<O>, TubeError> + Clone + Send + Sync + 'static,
{
    fn subscribe(&self, subscriber: Box<dyn Subscriber<O>>) {
        let base = Arc::new(OperatorBase::new(Arc::from(subscriber) as Arc<dyn Subscriber<O>>));
        let relay = TransformSubscriber {
            base,
            f: self.f.clone(),
            _output: std::marker::PhantomData,
        };
        self.upstream.subscribe(Box::new(relay));
    }
}

/// Apply `f` to every item from `upstream`, forwarding the result
/// downstream. See [`Transform`] for the exact null/error semantics.
pub fn transform<I, O, P, F>(upstream: P, f: F) -> Transform<P, F>
where
    I: std::fmt::Debug + Send + Sync + 'static,
    O: Send + Sync + 'static,
    P: Publisher<I>,
    F: Fn(I) -> Result<Option<O>, TubeError> + Clone + Send + Sync + 'static,
{
    Transform::new(upstream, f)
}
