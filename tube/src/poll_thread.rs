// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drive a future to completion on a dedicated thread with a no-op waker.
//!
//! The completion bridge is the one place in this crate that has to
//! *consume* a `Future` rather than just implement the push-based
//! protocol, and the crate assumes no particular async runtime is
//! present (the protocol's concurrency model is "parallel threads, no
//! event loop assumed" — see the crate-level docs). Spawning a thread
//! that polls with a no-op waker is the standard way to bridge a future
//! into a runtime-agnostic, blocking-thread world.

use std::future::Future;
use std::pin::Pin;
use std::ptr;
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::thread::{self, JoinHandle};

unsafe fn noop_clone(data: *const ()) -> RawWaker {
    RawWaker::new(data, &VTABLE)
}
unsafe fn noop_wake(_data: *const ()) {}
unsafe fn noop_wake_by_ref(_data: *const ()) {}
unsafe fn noop_drop(_data: *const ()) {}

static VTABLE: RawWakerVTable = RawWakerVTable::new(noop_clone, noop_wake, noop_wake_by_ref, noop_drop);

fn noop_waker() -> Waker {
    let raw = RawWaker::new(ptr::null(), &VTABLE);
    // SAFETY: the vtable's functions are all no-ops that never dereference
    // the data pointer, so a null pointer is sound here.
    unsafe { Waker::from_raw(raw) }
}

/// Spawn a thread that polls `fut` to completion, busy-yielding between
/// polls, and calls `on_ready` with the output on the polling thread once
/// it resolves.
pub fn spawn_driven<Fut, R, F>(mut fut: Pin<Box<Fut>>, on_ready: F) -> JoinHandle<()>
where
    Fut: Future<Output = R> + Send + 'static,
    R: Send + 'static,
    F: FnOnce(R) + Send + 'static,
{
    thread::spawn(move || {
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        loop {
            match fut.as_mut().poll(&mut cx) {
                Poll::Ready(value) => {
                    on_ready(value);
                    return;
                }
                Poll::Pending => thread::yield_now(),
            }
        }
    })
}
