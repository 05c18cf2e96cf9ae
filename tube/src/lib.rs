// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # tube
//!
//! A demand-driven reactive streams runtime: the `Publisher`/`Subscriber`/
//! `Subscription` protocol from [`tube_core`], a family of in-memory
//! sources, the `Transform`/`Select` one-to-one operators, a
//! future-to-publisher completion bridge, and the programmable `Tube`
//! publisher for bridging arbitrary producer code under a configurable
//! backpressure strategy.
//!
//! ## Quick start
//!
//! ```
//! use tube::prelude::*;
//! use tube_test_utils::CollectingSubscriber;
//!
//! let publisher = select(from_items(vec![1, 2, 3, 4]), |n: &i32| Ok(n % 2 == 0));
//! let (subscriber, collected) = CollectingSubscriber::new();
//! publisher.subscribe(Box::new(subscriber));
//! assert_eq!(*collected.lock(), vec![2, 4]);
//! ```
//!
//! Every publisher here is cold: each `subscribe` call replays the source
//! (or, for one-shot sources like `from_stream`/`from_future`, invokes the
//! supplier afresh) from the beginning, matching the protocol's rule that
//! each subscription is an independent channel.

pub mod completion;
pub mod prelude;
pub mod select;
pub mod sources;
pub mod transform;
pub mod tube;

mod poll_thread;

pub use completion::{from_future, to_future, CompletionFuture};
pub use select::{select, Select};
pub use sources::{empty, from_failure, from_generator, from_items, from_iterable, from_stream};
pub use transform::{transform, Transform};
pub use tube::{BackpressureStrategy, Tube, TubeConfig, TubeHandle};

pub use tube_core::{Publisher, Result, Subscriber, Subscription, TubeError};
