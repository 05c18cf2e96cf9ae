// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared test fixtures for the `tube` workspace: a manual-demand
//! subscriber that records the exact signal trace, a simple collecting
//! subscriber, and error injection helpers.

mod collecting;
mod error_injection;
mod manual_demand;
mod signal;

pub use collecting::CollectingSubscriber;
pub use error_injection::{always_fail, injected_upstream_error, injected_user_callback_error, InjectedFailure};
pub use manual_demand::ManualDemandSubscriber;
pub use signal::Signal;
