// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `from_future` / `to_future`: bridging a single-value future into a
//! one-shot publisher and back.
//!
//! These correspond to the protocol's `fromCompletionStage` /
//! `toCompletionStage`. A "completion stage" maps onto a Rust
//! `Future<Output = Result<Option<T>, TubeError>>`: `Ok(Some(v))` is the
//! "resolves with a value" case, `Ok(None)` is "resolves with no value",
//! and `Err(e)` is "fails" — three outcomes that Java represents with a
//! nullable resolved value plus a separate exceptional-completion path.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::channel::oneshot;
use futures::future::BoxFuture as FuturesBoxFuture;
use parking_lot::Mutex;

use tube_core::{Publisher, Subscriber, Subscription, TubeError};

use crate::poll_thread::spawn_driven;

/// The future type a [`from_future`] supplier must produce.
pub type CompletionFuture<T> = Pin<Box<dyn Future<Output = Result<Option<T>, TubeError>> + Send>>;

/// A publisher adapting a single-value future supplier into a one-shot
/// source.
pub struct FromFuture<F> {
    supplier: F,
}

impl<F> FromFuture<F> {
    /// Wrap a supplier of a fresh future, invoked once per subscription.
    pub fn new<T>(supplier: F) -> Self
    where
        F: Fn() -> CompletionFuture<T> + Send + Sync + 'static,
        T: Send + 'static,
    {
        Self { supplier }
    }
}

struct CompletionSubscription<T> {
    fut: Mutex<Option<CompletionFuture<T>>>,
    subscriber: Arc<dyn Subscriber<T>>,
    attached: AtomicBool,
    cancelled: Arc<AtomicBool>,
}

impl<T: Send + Sync + 'static> Subscription for CompletionSubscription<T> {
    fn request(&self, n: i64) {
        if n <= 0 {
            if !self.cancelled.swap(true, Ordering::AcqRel) {
                self.subscriber.on_error(TubeError::illegal_argument(format!(
                    "request(n) called with non-positive n = {n}"
                )));
            }
            return;
        }
        if self.cancelled.load(Ordering::Acquire) {
            return;
        }
        // Attach the completion callback only on the first positive
        // request, per the protocol: a subscriber that never requests
        // never causes the future to be polled.
        if self.attached.swap(true, Ordering::AcqRel) {
            return;
        }

        let Some(fut) = self.fut.lock().take() else {
            return;
        };

        let subscriber = self.subscriber.clone();
        let cancelled = self.cancelled.clone();
        spawn_driven(fut, move |result| {
            if cancelled.swap(true, Ordering::AcqRel) {
                // Already cancelled before resolution: per the protocol,
                // cancellation prevents any further signal, but it does
                // not cancel the underlying future itself (it may be
                // shared) — we simply drop the result here.
                return;
            }
            match result {
                Ok(Some(value)) => {
                    subscriber.on_next(value);
                    subscriber.on_complete();
                }
                Ok(None) => subscriber.on_complete(),
                Err(err) => subscriber.on_error(err),
            }
        });
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

impl<T, F> Publisher<T> for FromFuture<F>
where
    F: Fn() -> CompletionFuture<T> + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    fn subscribe(&self, subscriber: Box<dyn Subscriber<T>>) {
        let subscriber: Arc<dyn Subscriber<T>> = Arc::from(subscriber);
        let state = Arc::new(CompletionSubscription {
            fut: Mutex::new(Some((self.supplier)())),
            subscriber: subscriber.clone(),
            attached: AtomicBool::new(false),
            cancelled: Arc::new(AtomicBool::new(false)),
        });
        subscriber.on_subscribe(state as Arc<dyn Subscription>);
    }
}

/// Create a publisher that adapts a future supplier into a one-shot
/// source: at most one item (if the future resolves with `Some`),
/// followed by completion, or an error if the future fails.
pub fn from_future<T, F>(supplier: F) -> FromFuture<F>
where
    F: Fn() -> CompletionFuture<T> + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    FromFuture::new(supplier)
}

/// Internal subscriber used by [`to_future`]: requests exactly one item
/// on `on_subscribe`, cancels the subscription the instant any signal
/// arrives, and resolves a oneshot sender with whichever of
/// `on_next`/`on_complete`/`on_error` fires first.
struct FirstItemSubscriber<T> {
    subscription: Mutex<Option<Arc<dyn Subscription>>>,
    sender: Mutex<Option<oneshot::Sender<Result<Option<T>, TubeError>>>>,
}

impl<T: Send + 'static> FirstItemSubscriber<T> {
    fn resolve(&self, result: Result<Option<T>, TubeError>) {
        if let Some(subscription) = self.subscription.lock().take() {
            subscription.cancel();
        }
        if let Some(sender) = self.sender.lock().take() {
            let _ = sender.send(result);
        }
    }
}

impl<T: Send + 'static> Subscriber<T> for FirstItemSubscriber<T> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        subscription.request(1);
        *self.subscription.lock() = Some(subscription);
    }

    fn on_next(&self, item: T) {
        self.resolve(Ok(Some(item)));
    }

    fn on_complete(&self) {
        self.resolve(Ok(None));
    }

    fn on_error(&self, error: TubeError) {
        self.resolve(Err(error));
    }
}

/// Subscribe to `publisher`, request exactly one item, and resolve to
/// that item — or `None` if the publisher completes without emitting one,
/// or an error if it fails. Only the first of these three outcomes takes
/// effect.
pub fn to_future<T>(
    publisher: &dyn Publisher<T>,
) -> FuturesBoxFuture<'static, Result<Option<T>, TubeError>>
where
    T: Send + 'static,
{
    let (sender, receiver) = oneshot::channel();
    let subscriber = Box::new(FirstItemSubscriber {
        subscription: Mutex::new(None),
        sender: Mutex::new(Some(sender)),
    });
    publisher.subscribe(subscriber);

    Box::pin(async move {
        match receiver.await {
            Ok(result) => result,
            Err(_) => Ok(None),
        }
    })
}
