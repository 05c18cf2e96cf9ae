// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The in-memory source family: `from_items`, `from_iterable`,
//! `from_stream`, `from_generator`, `empty`, `from_failure`.
//!
//! Every source shares the drain loop in [`cursor_subscription`] except
//! `empty` and `from_failure`, which signal their single terminal signal
//! immediately and never need a cursor at all.

mod cursor_subscription;
mod empty;
mod failure;
mod generator;
mod iterable;
mod stream_source;

pub use empty::{empty, Empty};
pub use failure::{from_failure, FromFailure};
pub use generator::{from_generator, FromGenerator};
pub use iterable::{from_items, from_iterable, FromIterable};
pub use stream_source::{from_stream, FromStream};
