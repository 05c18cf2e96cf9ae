// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error injection helpers: a lightweight local error type and a couple
//! of constructors for exercising the `UserCallback`/`UpstreamFailure`
//! error paths without pulling in `std::io` or another crate's error
//! type in every test.

use tube_core::TubeError;

/// A minimal, unconditionally-failing error used to exercise a
/// transform/predicate's "it throws" path.
#[derive(Debug, thiserror::Error)]
#[error("injected test failure: {0}")]
pub struct InjectedFailure(pub String);

/// Build a [`TubeError::UserCallback`] wrapping an [`InjectedFailure`]
/// with `context`, as if a transform function or predicate had failed.
#[must_use]
pub fn injected_user_callback_error(context: impl Into<String>) -> TubeError {
    TubeError::user_callback(InjectedFailure(context.into()))
}

/// Build a [`TubeError::UpstreamFailure`] wrapping an [`InjectedFailure`]
/// with `context`, as if an upstream publisher had signalled `onError`.
#[must_use]
pub fn injected_upstream_error(context: impl Into<String>) -> TubeError {
    TubeError::upstream_failure(InjectedFailure(context.into()))
}

/// A transform function that always fails, for feeding into
/// `tube::transform` in tests of the "throwing function" scenario.
pub fn always_fail<I>(context: &'static str) -> impl Fn(I) -> Result<Option<I>, TubeError> + Clone {
    move |_item: I| Err(injected_user_callback_error(context))
}
