// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

use tube_core::operator::{OperatorBase, OperatorSubscription};
use tube_core::Subscription;

struct RecordingSubscription {
    requested: AtomicU32,
    cancels: AtomicUsize,
}

impl RecordingSubscription {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            requested: AtomicU32::new(0),
            cancels: AtomicUsize::new(0),
        })
    }
}

impl Subscription for RecordingSubscription {
    fn request(&self, n: i64) {
        self.requested.fetch_add(n as u32, Ordering::AcqRel);
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::AcqRel);
    }
}

#[test]
fn forwards_request_to_upstream() {
    let base = Arc::new(OperatorBase::new(()));
    let upstream = RecordingSubscription::new();
    base.set_upstream(upstream.clone());

    let downstream_subscription = OperatorSubscription::new(base.clone());
    downstream_subscription.request(3);
    downstream_subscription.request(2);

    assert_eq!(upstream.requested.load(Ordering::Acquire), 5);
}

#[test]
fn cancel_is_forwarded_exactly_once() {
    let base = Arc::new(OperatorBase::new(()));
    let upstream = RecordingSubscription::new();
    base.set_upstream(upstream.clone());

    let downstream_subscription = OperatorSubscription::new(base.clone());
    downstream_subscription.cancel();
    downstream_subscription.cancel();
    downstream_subscription.cancel();

    assert_eq!(upstream.cancels.load(Ordering::Acquire), 1);
    assert!(base.cancelled());
}

#[test]
fn cancel_before_upstream_arrives_cancels_it_on_arrival() {
    let base = Arc::new(OperatorBase::new(()));
    base.cancel();

    let upstream = RecordingSubscription::new();
    base.set_upstream(upstream.clone());

    assert_eq!(upstream.cancels.load(Ordering::Acquire), 1);
}

#[test]
fn request_before_upstream_arrives_is_dropped_silently() {
    let base = Arc::new(OperatorBase::new(()));
    let downstream_subscription = OperatorSubscription::new(base.clone());
    // No upstream yet: must not panic.
    downstream_subscription.request(5);

    let upstream = RecordingSubscription::new();
    base.set_upstream(upstream.clone());
    assert_eq!(upstream.requested.load(Ordering::Acquire), 0);
}
