// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared per-subscription state for a `Tube`: demand accounting, the
//! strategy buffer, and the non-blocking drain loop.
//!
//! Delivery always happens inside [`TubeState::drain`], serialized by a
//! single atomic "emitting" flag with retry-on-miss — the design notes'
//! preferred discipline for the hot path shared between a producer
//! calling `send` from one thread and a consumer calling `request`/
//! `cancel` from another.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use tube_core::{validate_request, AtomicDemand, Subscriber, TubeError};

use super::config::TubeConfig;
use super::strategy::BackpressureStrategy;

type Callback = Box<dyn FnOnce() + Send>;

pub(crate) struct TubeState<T> {
    subscriber: Arc<dyn Subscriber<T>>,
    config: TubeConfig,
    demand: AtomicDemand,
    buffer: Mutex<VecDeque<T>>,
    complete_pending: AtomicBool,
    terminated: AtomicBool,
    cancelled: AtomicBool,
    emitting: AtomicBool,
    on_cancel: Mutex<Option<Callback>>,
    on_termination: Mutex<Option<Callback>>,
    termination_fired: AtomicBool,
    pending_error: Mutex<Option<TubeError>>,
}

impl<T: Send + Sync + 'static> TubeState<T> {
    pub(crate) fn new(subscriber: Arc<dyn Subscriber<T>>, config: TubeConfig) -> Arc<Self> {
        Arc::new(Self {
            subscriber,
            config,
            demand: AtomicDemand::new(),
            buffer: Mutex::new(VecDeque::new()),
            complete_pending: AtomicBool::new(false),
            terminated: AtomicBool::new(false),
            cancelled: AtomicBool::new(false),
            emitting: AtomicBool::new(false),
            on_cancel: Mutex::new(None),
            on_termination: Mutex::new(None),
            termination_fired: AtomicBool::new(false),
            pending_error: Mutex::new(None),
        })
    }

    fn is_done(&self) -> bool {
        self.terminated.load(Ordering::Acquire) || self.cancelled.load(Ordering::Acquire)
    }

    fn fire_termination(&self) {
        if self.termination_fired.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(callback) = self.on_termination.lock().take() {
            callback();
        }
    }

    pub(crate) fn requested(&self) -> u64 {
        self.demand.get()
    }

    pub(crate) fn set_on_cancel(&self, callback: Callback) {
        if self.is_done() {
            return;
        }
        *self.on_cancel.lock() = Some(callback);
    }

    pub(crate) fn set_on_termination(&self, callback: Callback) {
        if self.is_done() {
            return;
        }
        *self.on_termination.lock() = Some(callback);
    }

    pub(crate) fn request(&self, n: i64) {
        if self.is_done() {
            return;
        }
        match validate_request(n) {
            Ok(n) => self.demand.add(n),
            Err(err) => {
                self.queue_error(err);
            }
        }
        self.drain();
    }

    pub(crate) fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        self.buffer.lock().clear();
        if let Some(callback) = self.on_cancel.lock().take() {
            callback();
        }
        self.fire_termination();
    }

    /// Terminate and queue `err` for delivery, returning `true` if this
    /// call won the termination race. Delivery itself always happens
    /// from inside [`Self::drain`] so an `onError` triggered by
    /// `request`/`fail`/an overflowing `send` is never invoked on a
    /// thread different from whichever thread is mid-`onNext`/
    /// `onComplete` for this subscription.
    fn queue_error(&self, err: TubeError) -> bool {
        if self.terminated.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.buffer.lock().clear();
        *self.pending_error.lock() = Some(err);
        true
    }

    fn overflow(&self) {
        if !self.queue_error(TubeError::overflow(format!(
            "backpressure overflow under {:?} strategy (buffer_size = {})",
            self.config.strategy(),
            self.config.buffer_capacity()
        ))) {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(
            strategy = ?self.config.strategy(),
            buffer_size = self.config.buffer_capacity(),
            "tube overflowed"
        );
        #[cfg(not(feature = "tracing"))]
        eprintln!(
            "tube overflowed under {:?} strategy (buffer_size = {})",
            self.config.strategy(),
            self.config.buffer_capacity()
        );
        self.drain();
    }

    /// Deliver `item` to the subscriber, honoring the configured
    /// strategy when it cannot be drained immediately.
    pub(crate) fn send(&self, item: T) {
        if self.is_done() {
            return;
        }

        if self.config.strategy() == BackpressureStrategy::Ignore {
            self.subscriber.on_next(item);
            return;
        }

        let overflowed = {
            let mut buffer = self.buffer.lock();
            match self.config.strategy() {
                BackpressureStrategy::Buffer => {
                    if buffer.len() < self.config.buffer_capacity() {
                        buffer.push_back(item);
                        false
                    } else {
                        true
                    }
                }
                BackpressureStrategy::Drop => {
                    // Only admitted when it can be drained without delay;
                    // otherwise the item never touches the buffer at all.
                    if buffer.is_empty() && self.demand.is_positive() {
                        buffer.push_back(item);
                    }
                    false
                }
                BackpressureStrategy::Latest => {
                    if buffer.len() >= self.config.buffer_capacity() {
                        buffer.pop_front();
                    }
                    buffer.push_back(item);
                    false
                }
                BackpressureStrategy::Error => {
                    if buffer.is_empty() && self.demand.is_positive() {
                        buffer.push_back(item);
                        false
                    } else {
                        true
                    }
                }
                BackpressureStrategy::Unbounded => {
                    if self
                        .config
                        .soft_cap()
                        .is_some_and(|cap| buffer.len() >= cap)
                    {
                        true
                    } else {
                        buffer.push_back(item);
                        false
                    }
                }
                BackpressureStrategy::Ignore => unreachable!("handled above"),
            }
        };

        if overflowed {
            self.overflow();
            return;
        }
        self.drain();
    }

    pub(crate) fn fail(&self, error: TubeError) {
        if self.is_done() {
            return;
        }
        self.queue_error(error);
        self.drain();
    }

    /// Mark completion pending: buffered items already admitted are
    /// delivered as demand allows, and `onComplete` fires only once the
    /// buffer has fully drained.
    pub(crate) fn complete(&self) {
        if self.is_done() {
            return;
        }
        self.complete_pending.store(true, Ordering::Release);
        self.drain();
    }

    /// Deliver whichever pending error `request`/`fail`/an overflowing
    /// `send` queued, if any. Only ever called from inside [`Self::drain`]
    /// while holding the `emitting` flag, so it can never run concurrently
    /// with an in-flight `onNext`/`onComplete` for this subscription.
    fn flush_pending_error(&self) {
        if let Some(err) = self.pending_error.lock().take() {
            self.subscriber.on_error(err);
            self.fire_termination();
        }
    }

    /// After releasing `emitting`, decide whether a concurrent
    /// `send`/`request`/`fail`/`complete` raced in fresh work (an item,
    /// demand, a pending error, or a completion request) and, if so, try
    /// to reclaim the flag so this thread keeps draining instead of
    /// leaving that work stranded until some other caller happens by.
    fn reacquire_if_more_work(&self) -> bool {
        let more_work = self.is_done()
            || self.demand.is_positive()
            || !self.buffer.lock().is_empty()
            || self.complete_pending.load(Ordering::Acquire);
        if !more_work {
            return false;
        }
        !self.emitting.swap(true, Ordering::AcqRel)
    }

    fn drain(&self) {
        if self.emitting.swap(true, Ordering::AcqRel) {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(demand = self.demand.get(), "tube drain entered");
        loop {
            if self.is_done() {
                self.flush_pending_error();
                self.emitting.store(false, Ordering::Release);
                return;
            }

            if self.buffer.lock().is_empty() {
                if self.complete_pending.load(Ordering::Acquire)
                    && !self.terminated.swap(true, Ordering::AcqRel)
                {
                    self.subscriber.on_complete();
                    self.fire_termination();
                    self.emitting.store(false, Ordering::Release);
                    return;
                }
                self.emitting.store(false, Ordering::Release);
                // Retry-on-miss: a concurrent send()/request()/fail() may
                // have raced in fresh work after we observed none but
                // before releasing the flag.
                if !self.reacquire_if_more_work() {
                    return;
                }
                continue;
            }

            if !self.demand.take_one() {
                self.emitting.store(false, Ordering::Release);
                if !self.reacquire_if_more_work() {
                    return;
                }
                continue;
            }

            let item = self.buffer.lock().pop_front();
            match item {
                Some(item) => self.subscriber.on_next(item),
                None => self.demand.add(1),
            }
        }
    }
}
