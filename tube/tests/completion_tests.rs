// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tube::{from_future, to_future, CompletionFuture};
use tube_core::{Publisher, TubeError};
use tube_test_utils::injected_upstream_error;

fn ready<T: Send + 'static>(value: T) -> CompletionFuture<T> {
    Box::pin(async move { Ok(Some(value)) })
}

fn ready_empty<T: Send + 'static>() -> CompletionFuture<T> {
    Box::pin(async move { Ok(None) })
}

fn ready_failed<T: Send + 'static>(error: TubeError) -> CompletionFuture<T> {
    Box::pin(async move { Err(error) })
}

#[tokio::test]
async fn round_trip_resolves_to_present_for_a_non_null_value() {
    let publisher = from_future(|| ready(42));
    let result = to_future(&publisher).await.unwrap();
    assert_eq!(result, Some(42));
}

#[tokio::test]
async fn round_trip_resolves_to_absent_for_no_value() {
    let publisher = from_future(|| ready_empty::<i32>());
    let result = to_future(&publisher).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn a_failed_future_is_delivered_as_onerror() {
    let publisher = from_future(|| ready_failed::<i32>(injected_upstream_error("boom")));
    let result = to_future(&publisher).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn the_supplier_is_invoked_fresh_per_subscription() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    let publisher = from_future(move || {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        ready(1)
    });

    assert_eq!(to_future(&publisher).await.unwrap(), Some(1));
    assert_eq!(to_future(&publisher).await.unwrap(), Some(1));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
