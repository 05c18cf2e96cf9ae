// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The shared drain loop used by every cold in-memory source
//! (`from_items`, `from_iterable`, `from_stream`, `from_generator`).
//!
//! Each source only has to produce a fresh `Box<dyn Iterator<Item = T> +
//! Send>` per subscription; this module owns the demand accounting,
//! reentrancy guard, and terminal-signal-once bookkeeping described by the
//! protocol's drain loop contract.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use tube_core::{validate_request, AtomicDemand, Subscriber, Subscription, TubeError};

type BoxedIter<T> = Box<dyn Iterator<Item = T> + Send>;

struct CursorSubscription<T> {
    cursor: Mutex<Option<BoxedIter<T>>>,
    subscriber: Box<dyn Subscriber<T>>,
    demand: AtomicDemand,
    cancelled: AtomicBool,
    terminated: AtomicBool,
    emitting: AtomicBool,
    pending_error: Mutex<Option<TubeError>>,
}

/// Subscribe `subscriber` to a fresh one-shot drain over `cursor`.
///
/// This is the single entry point every in-memory source calls once it
/// has produced its per-subscription iterator (or has already failed and
/// used [`tube_core::fail_immediately`] instead).
pub fn subscribe_with_cursor<T>(cursor: BoxedIter<T>, subscriber: Box<dyn Subscriber<T>>)
where
    T: Send + 'static,
{
    let state = Arc::new(CursorSubscription {
        cursor: Mutex::new(Some(cursor)),
        subscriber,
        demand: AtomicDemand::new(),
        cancelled: AtomicBool::new(false),
        terminated: AtomicBool::new(false),
        emitting: AtomicBool::new(false),
        pending_error: Mutex::new(None),
    });

    state
        .subscriber
        .on_subscribe(state.clone() as Arc<dyn Subscription>);
}

impl<T: Send + 'static> CursorSubscription<T> {
    fn is_done(&self) -> bool {
        self.cancelled.load(Ordering::Acquire) || self.terminated.load(Ordering::Acquire)
    }

    fn finish(&self) {
        self.terminated.store(true, Ordering::Release);
        self.cursor.lock().take();
    }

    /// Terminate and queue `err` for delivery, returning `true` if this
    /// call won the termination race. Delivery happens only from inside
    /// [`Self::drain`], so an invalid `request(n)` can never call into the
    /// subscriber on a different thread than one already mid-`onNext` for
    /// this subscription.
    fn queue_error(&self, err: TubeError) -> bool {
        if self.terminated.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.cursor.lock().take();
        *self.pending_error.lock() = Some(err);
        true
    }

    fn flush_pending_error(&self) {
        if let Some(err) = self.pending_error.lock().take() {
            self.subscriber.on_error(err);
        }
    }

    fn reacquire_if_more_work(&self) -> bool {
        let more_work = self.is_done() || self.demand.is_positive();
        if !more_work {
            return false;
        }
        !self.emitting.swap(true, Ordering::AcqRel)
    }

    /// Drain while demand remains and the cursor has items, serialized by
    /// a single "emitting" flag with retry-on-miss, per the design notes'
    /// non-blocking drain preference.
    fn drain(&self) {
        if self.emitting.swap(true, Ordering::AcqRel) {
            return;
        }
        loop {
            if self.is_done() {
                self.flush_pending_error();
                self.emitting.store(false, Ordering::Release);
                return;
            }
            if !self.demand.take_one() {
                self.emitting.store(false, Ordering::Release);
                // A request() racing on another thread may have added
                // demand (or queued a terminal error) after we observed
                // none but before we released the flag; re-enter the
                // drain if so.
                if !self.reacquire_if_more_work() {
                    return;
                }
                continue;
            }

            let next = self.cursor.lock().as_mut().and_then(Iterator::next);
            match next {
                Some(item) => self.subscriber.on_next(item),
                None => {
                    self.finish();
                    self.subscriber.on_complete();
                    self.emitting.store(false, Ordering::Release);
                    return;
                }
            }
        }
    }
}

impl<T: Send + 'static> Subscription for CursorSubscription<T> {
    fn request(&self, n: i64) {
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

    fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        self.cursor.lock().take();
    }
}
