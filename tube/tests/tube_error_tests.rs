// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use tube::{BackpressureStrategy, Tube, TubeConfig};
use tube_core::{Publisher, Subscriber, TubeError};
use tube_test_utils::{ManualDemandSubscriber, Signal};

#[test]
fn fail_delivers_onerror_immediately_discarding_the_buffer() {
    let config = TubeConfig::new(BackpressureStrategy::Buffer).buffer_size(4);
    let publisher = Tube::create(config, |handle| {
        handle.send(1);
        handle.send(2);
        handle.fail(TubeError::upstream_failure(std::fmt::Error));
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    subscriber.request(10);
    assert_eq!(subscriber.signals().len(), 1);
    assert!(matches!(subscriber.signals()[0], Signal::Error(_)));
}

#[test]
fn complete_drains_the_buffer_before_signalling_oncomplete() {
    let config = TubeConfig::new(BackpressureStrategy::Buffer).buffer_size(4);
    let publisher = Tube::create(config, |handle| {
        handle.send(1);
        handle.send(2);
        handle.complete();
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    assert!(subscriber.signals().is_empty());
    subscriber.request(10);
    assert_eq!(
        subscriber.signals(),
        vec![Signal::Next(1), Signal::Next(2), Signal::Complete]
    );
}

#[test]
fn operations_after_a_terminal_signal_are_no_ops() {
    let config = TubeConfig::new(BackpressureStrategy::Unbounded);
    let publisher = Tube::create(config, |handle| {
        handle.complete();
        handle.send(1);
        handle.fail(TubeError::illegal_argument("should never be observed"));
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    subscriber.request(10);
    assert_eq!(subscriber.signals(), vec![Signal::Complete]);
}

#[test]
fn cancellation_discards_an_already_buffered_item_before_it_is_delivered() {
    let config = TubeConfig::new(BackpressureStrategy::Unbounded);
    let publisher = Tube::create(config, |handle| {
        // Buffered with zero demand; the subscriber cancels before ever
        // requesting, so this item must never reach `on_next`.
        handle.send(0);
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    subscriber.cancel();
    subscriber.request(10);
    assert!(subscriber.signals().is_empty());
}
