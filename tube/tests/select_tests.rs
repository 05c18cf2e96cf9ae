// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use tube::{from_items, select};
use tube_core::{Publisher, Subscriber, TubeError};
use tube_test_utils::{injected_user_callback_error, CollectingSubscriber, ManualDemandSubscriber, Signal};

#[test]
fn keeps_only_matching_items() {
    let publisher = select(from_items(vec![1, 2, 3, 4]), |n: &i32| Ok(n % 2 == 0));
    let (subscriber, items) = CollectingSubscriber::new();
    publisher.subscribe(Box::new(subscriber));
    assert_eq!(*items.lock(), vec![2, 4]);
}

#[test]
fn a_throwing_predicate_cancels_upstream_and_forwards_the_error() {
    let publisher = select(from_items(vec![1, 2, 3]), |n: &i32| -> Result<bool, TubeError> {
        if *n == 2 {
            Err(injected_user_callback_error("boom"))
        } else {
            Ok(true)
        }
    });
    let subscriber = Arc::new(ManualDemandSubscriber::<i32>::new());
    let handle: Arc<dyn Subscriber<i32>> = subscriber.clone();
    publisher.subscribe(Box::new(handle));

    let signals = subscriber.signals();
    assert_eq!(signals.len(), 2);
    assert_eq!(signals[0], Signal::Next(1));
    assert!(matches!(signals[1], Signal::Error(_)));
}

#[test]
fn discarded_items_are_not_redelivered() {
    let publisher = select(from_items(vec![1, 2, 3, 4, 5]), |n: &i32| Ok(*n > 3));
    let (subscriber, items) = CollectingSubscriber::new();
    publisher.subscribe(Box::new(subscriber));
    assert_eq!(*items.lock(), vec![4, 5]);
}
