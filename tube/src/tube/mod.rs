// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The programmable `Tube` publisher: a source that user code writes to
//! directly, bridging to a demand-driven subscriber under one of six
//! backpressure strategies.
//!
//! On `subscribe`, `Tube` (a) validates its configuration, (b) constructs
//! per-subscription state, (c) signals `onSubscribe`, then (d) invokes the
//! tube consumer with a [`TubeHandle`]. The consumer may call
//! `TubeHandle::send`/`fail`/`complete` immediately and from any thread;
//! any send before demand arrives is subject to the configured strategy.

mod config;
mod handle;
mod state;
mod strategy;
mod subscription;

pub use config::TubeConfig;
pub use handle::TubeHandle;
pub use strategy::BackpressureStrategy;

use std::marker::PhantomData;
use std::sync::Arc;

use tube_core::{Publisher, Result, Subscriber};

use state::TubeState;
use subscription::TubeSubscription;

/// A publisher whose items are produced by an arbitrary user closure
/// writing through a [`TubeHandle`], rather than by traversing an
/// existing collection or future.
pub struct Tube<T, F> {
    config: TubeConfig,
    consumer: F,
    _item: PhantomData<fn() -> T>,
}

impl<T, F> Tube<T, F>
where
    T: Send + Sync + 'static,
    F: Fn(TubeHandle<T>) + Send + Sync + 'static,
{
    /// Build a tube under `config`, rejecting a non-positive buffer size
    /// for the `Buffer`/`Latest` strategies before any subscriber is ever
    /// invoked.
    pub fn create(config: TubeConfig, consumer: F) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            consumer,
            _item: PhantomData,
        })
    }
}

impl<T, F> Publisher<T> for Tube<T, F>
where
    T: Send + Sync + 'static,
    F: Fn(TubeHandle<T>) + Send + Sync + 'static,
{
    fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
        let subscriber: Arc<dyn Subscriber<T>> = Arc::from(subscriber);
        let state = TubeState::new(subscriber.clone(), self.config);
        subscriber.on_subscribe(Arc::new(TubeSubscription(state.clone())));
        (self.consumer)(TubeHandle::new(state));
    }
}
