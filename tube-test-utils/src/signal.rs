// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! [`Signal`]: a recorded reactive-streams event, for asserting the
//! universal `onSubscribe (onNext)* (onComplete | onError)?` shape.

use tube_core::TubeError;

/// One signal observed by a subscriber, minus `onSubscribe` itself (which
/// [`crate::ManualDemandSubscriber`] tracks separately as "has a
/// subscription").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<T> {
    /// `onNext(item)`.
    Next(T),
    /// `onComplete()`.
    Complete,
    /// `onError(error)`, compared by rendered message since `TubeError`'s
    /// boxed sources aren't `PartialEq`.
    Error(String),
}

impl<T> Signal<T> {
    pub(crate) fn error(error: &TubeError) -> Self {
        Self::Error(error.to_string())
    }
}
