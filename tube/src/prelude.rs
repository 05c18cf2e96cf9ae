// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Glob-importable surface: `use tube::prelude::*;` brings every factory,
//! operator constructor, and core protocol type into scope.

pub use tube_core::{Publisher, Subscriber, Subscription, TubeError};

pub use crate::completion::{from_future, to_future, CompletionFuture};
pub use crate::select::{select, Select};
pub use crate::sources::{empty, from_failure, from_generator, from_items, from_iterable, from_stream};
pub use crate::transform::{transform, Transform};
pub use crate::tube::{BackpressureStrategy, Tube, TubeConfig, TubeHandle};
