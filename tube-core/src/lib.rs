// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Protocol primitives and shared operator plumbing for the `tube`
//! reactive streams runtime.
//!
//! This crate holds everything that is *not* a specific publisher:
//! [`Subscriber`], [`Subscription`], [`Publisher`], [`NoopSubscription`],
//! the saturating demand counter in [`demand`], the error type
//! [`TubeError`], and [`operator::OperatorBase`], the state machine every
//! one-to-one operator (`Transform`, `Select`) builds on.

pub mod demand;
pub mod error;
pub mod operator;
pub mod protocol;

pub use demand::AtomicDemand;
pub use error::{Result, TubeError};
pub use operator::{OperatorBase, OperatorSubscription};
pub use protocol::{
    complete_immediately, fail_immediately, NoopSubscription, Publisher, Subscriber, Subscription,
};
