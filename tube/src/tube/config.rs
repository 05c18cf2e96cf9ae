// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! [`TubeConfig`]: the value object configuring a [`super::Tube`].

use tube_core::{Result, TubeError};

use super::strategy::BackpressureStrategy;

/// Configuration for a [`super::Tube`]: which backpressure strategy to
/// apply, and the buffer capacity it governs (when applicable).
///
/// Construction is infallible; `buffer_size` is only required to be
/// strictly positive for the [`BackpressureStrategy::Buffer`] and
/// [`BackpressureStrategy::Latest`] strategies, and that requirement is
/// checked by [`TubeConfig::validate`], called from
/// [`super::Tube::create`] before any subscriber is invoked — deferring
/// validation to `create` rather than to this builder.
#[derive(Debug, Clone, Copy)]
pub struct TubeConfig {
    strategy: BackpressureStrategy,
    buffer_size: usize,
    unbounded_soft_cap: Option<usize>,
}

impl TubeConfig {
    /// Start building a configuration for `strategy`, with no buffer
    /// capacity and no soft cap set yet.
    #[must_use]
    pub fn new(strategy: BackpressureStrategy) -> Self {
        Self {
            strategy,
            buffer_size: 0,
            unbounded_soft_cap: None,
        }
    }

    /// Set the buffer capacity, required to be strictly positive for
    /// `Buffer`/`Latest`.
    #[must_use]
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Impose a soft cap on an `Unbounded` tube's buffer; once reached,
    /// further sends overflow exactly as the `Error` strategy does. Has
    /// no effect under any other strategy.
    #[must_use]
    pub fn unbounded_soft_cap(mut self, cap: usize) -> Self {
        self.unbounded_soft_cap = Some(cap);
        self
    }

    /// The configured strategy.
    #[must_use]
    pub fn strategy(&self) -> BackpressureStrategy {
        self.strategy
    }

    pub(crate) fn buffer_capacity(&self) -> usize {
        self.buffer_size
    }

    pub(crate) fn soft_cap(&self) -> Option<usize> {
        self.unbounded_soft_cap
    }

    /// Reject configurations with a non-positive buffer size under a
    /// strategy that requires one.
    pub(crate) fn validate(&self) -> Result<()> {
        use BackpressureStrategy::{Buffer, Latest};

        if matches!(self.strategy, Buffer | Latest) && self.buffer_size == 0 {
            return Err(TubeError::illegal_argument(format!(
                "buffer_size must be strictly positive for the {:?} strategy",
                self.strategy
            )));
        }
        Ok(())
    }
}
