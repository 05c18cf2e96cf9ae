// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use tube::{BackpressureStrategy, Tube, TubeConfig};
use tube_core::{Publisher, Subscriber};
use tube_test_utils::{CollectingSubscriber, ManualDemandSubscriber, Signal};

#[test]
fn buffer_strategy_accepts_exactly_capacity_unconsumed_sends() {
    let config = TubeConfig::new(BackpressureStrategy::Buffer).buffer_size(2);
    let publisher = Tube::create(config, |handle| {
        handle.send('a');
        handle.send('b');
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<char>::new());
    let handle: Arc<dyn Subscriber<char>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    assert!(subscriber.signals().is_empty());
    subscriber.request(2);
    assert_eq!(
        subscriber.signals(),
        vec![Signal::Next('a'), Signal::Next('b')]
    );
}

#[test]
fn buffer_strategy_overflows_on_the_send_past_capacity() {
    let config = TubeConfig::new(BackpressureStrategy::Buffer).buffer_size(2);
    let publisher = Tube::create(config, |handle| {
        handle.send('a');
        handle.send('b');
        handle.send('c');
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<char>::new());
    let sub_handle: Arc<dyn Subscriber<char>> = subscriber.clone();
    publisher.subscribe(Box::new(sub_handle));

    assert_eq!(subscriber.signals().len(), 1);
    assert!(matches!(subscriber.signals()[0], Signal::Error(_)));
}

#[test]
fn latest_strategy_keeps_the_most_recent_items_in_send_order() {
    let config = TubeConfig::new(BackpressureStrategy::Latest).buffer_size(2);
    let publisher = Tube::create(config, |handle| {
        handle.send('a');
        handle.send('b');
        handle.send('c');
        handle.send('d');
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<char>::new());
    let handle: Arc<dyn Subscriber<char>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    assert!(subscriber.signals().is_empty());
    subscriber.request(10);
    assert_eq!(
        subscriber.signals(),
        vec![Signal::Next('c'), Signal::Next('d')]
    );
}

#[test]
fn drop_strategy_silently_discards_when_there_is_no_demand() {
    let config = TubeConfig::new(BackpressureStrategy::Drop);
    let publisher = Tube::create(config, |handle| {
        // `on_subscribe` (and thus any `request` a subscriber issues
        // synchronously from it) has already run by the time this
        // closure executes, but `ManualDemandSubscriber` never
        // auto-requests, so demand is still zero here.
        handle.send(1);
        handle.send(2);
        handle.send(3);
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    assert!(subscriber.signals().is_empty());
    subscriber.request(10);
    // Every item sent with zero demand was dropped; nothing remains to
    // deliver, so the subscription simply has no further signals.
    assert!(subscriber.signals().is_empty());
}

#[test]
fn error_strategy_overflows_on_first_send_with_no_demand() {
    let config = TubeConfig::new(BackpressureStrategy::Error);
    let publisher = Tube::create(config, |handle| {
        handle.send(1);
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    assert_eq!(subscriber.signals().len(), 1);
    assert!(matches!(subscriber.signals()[0], Signal::Error(_)));
}

#[test]
fn unbounded_strategy_buffers_everything_until_demand_arrives() {
    let config = TubeConfig::new(BackpressureStrategy::Unbounded);
    let publisher = Tube::create(config, |handle| {
        for i in 0..100 {
            handle.send(i);
        }
        handle.complete();
    })
    .unwrap();

    let (subscriber, items) = CollectingSubscriber::new();
    publisher.subscribe(Box::new(subscriber));
    assert_eq!(items.lock().len(), 100);
}

#[test]
fn ignore_strategy_delivers_immediately_regardless_of_demand() {
    let config = TubeConfig::new(BackpressureStrategy::Ignore);
    let publisher = Tube::create(config, |handle| {
        handle.send(1);
        handle.send(2);
        handle.send(3);
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    assert_eq!(
        subscriber.signals(),
        vec![Signal::Next(1), Signal::Next(2), Signal::Next(3)]
    );
}

#[test]
fn create_rejects_non_positive_buffer_size_for_buffer_and_latest() {
    let buffer_err = Tube::create(TubeConfig::new(BackpressureStrategy::Buffer), |_: tube::TubeHandle<i32>| {});
    assert!(buffer_err.is_err());

    let latest_err = Tube::create(TubeConfig::new(BackpressureStrategy::Latest), |_: tube::TubeHandle<i32>| {});
    assert!(latest_err.is_err());
}

#[test]
fn create_does_not_require_a_buffer_size_for_other_strategies() {
    assert!(Tube::create(TubeConfig::new(BackpressureStrategy::Drop), |_: tube::TubeHandle<i32>| {}).is_ok());
    assert!(Tube::create(TubeConfig::new(BackpressureStrategy::Error), |_: tube::TubeHandle<i32>| {}).is_ok());
    assert!(Tube::create(TubeConfig::new(BackpressureStrategy::Unbounded), |_: tube::TubeHandle<i32>| {}).is_ok());
    assert!(Tube::create(TubeConfig::new(BackpressureStrategy::Ignore), |_: tube::TubeHandle<i32>| {}).is_ok());
}

#[test]
fn cancellation_invokes_on_cancel_then_on_termination_exactly_once() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let cancel_count = Arc::new(AtomicUsize::new(0));
    let termination_count = Arc::new(AtomicUsize::new(0));
    let cancel_count_clone = cancel_count.clone();
    let termination_count_clone = termination_count.clone();

    let config = TubeConfig::new(BackpressureStrategy::Unbounded);
    let publisher = Tube::create(config, move |handle| {
        let cancel_count = cancel_count_clone.clone();
        let termination_count = termination_count_clone.clone();
        handle.cancel_on_cancellation(move || {
            cancel_count.fetch_add(1, Ordering::SeqCst);
        });
        handle.termination_callback(move || {
            termination_count.fetch_add(1, Ordering::SeqCst);
        });
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    subscriber.cancel();
    subscriber.cancel();
    subscriber.cancel();

    assert_eq!(cancel_count.load(Ordering::SeqCst), 1);
    assert_eq!(termination_count.load(Ordering::SeqCst), 1);
}

#[test]
fn requested_starts_at_zero_before_any_request() {
    let config = TubeConfig::new(BackpressureStrategy::Unbounded);
    let captured = Arc::new(std::sync::Mutex::new(1u64));
    let captured_clone = captured.clone();
    let publisher = Tube::create(config, move |handle| {
        *captured_clone.lock().unwrap() = handle.requested();
    })
    .unwrap();

    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    // The consumer closure runs synchronously from `subscribe`, before the
    // test has issued any `request`, so outstanding demand must be zero.
    assert_eq!(*captured.lock().unwrap(), 0);
}
