// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The downstream-facing [`tube_core::Subscription`] for a `Tube`.

use std::sync::Arc;

use tube_core::Subscription;

use super::state::TubeState;

pub(crate) struct TubeSubscription<T>(pub(crate) Arc<TubeState<T>>);

impl<T: Send + Sync + 'static> Subscription for TubeSubscription<T> {
    fn request(&self, n: i64) {
        self.0.request(n);
    }

    fn cancel(&self) {
        self.0.cancel();
    }
}
