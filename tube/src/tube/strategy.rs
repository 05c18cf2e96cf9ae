// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! [`BackpressureStrategy`]: the six policies a [`super::Tube`] can apply
//! to a `send` that arrives faster than downstream demand.

/// Governs what a [`super::TubeHandle::send`] does when the current item
/// cannot be delivered immediately because outstanding demand is
/// insufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackpressureStrategy {
    /// Enqueue into a bounded FIFO of `buffer_size` capacity; once full,
    /// the next send overflows to `onError`.
    Buffer,
    /// Silently discard whatever cannot be delivered immediately.
    Drop,
    /// Keep only the most recent `buffer_size` items, evicting the oldest
    /// on overflow rather than erroring.
    Latest,
    /// Any send that cannot be delivered immediately overflows to
    /// `onError` — zero buffering tolerance.
    Error,
    /// Buffer without a hard limit, optionally subject to
    /// [`super::TubeConfig::unbounded_soft_cap`].
    Unbounded,
    /// Bypass demand accounting entirely and deliver every item
    /// immediately.
    ///
    /// This violates reactive-streams rule 2.7 (a subscriber must never
    /// receive more `onNext` signals than it has requested) by design —
    /// intended only for sinks known to process signals faster than they
    /// could ever be produced.
    Ignore,
}
