// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Additive, saturating demand accounting shared by every source and by
//! [`crate::operator::OperatorBase`]'s downstream-facing subscription.

use std::sync::atomic::{AtomicU64, Ordering};

/// "Effectively infinite" demand sentinel. Adding further demand once a
/// counter reaches this value is a no-op.
pub const UNBOUNDED: u64 = u64::MAX;

/// An atomic, saturating demand counter.
///
/// `add` never overflows: it saturates at [`UNBOUNDED`]. `take_one`
/// decrements by one if (and only if) demand is currently positive,
/// returning whether a unit of demand was consumed.
#[derive(Debug, Default)]
pub struct AtomicDemand(AtomicU64);

impl AtomicDemand {
    /// A counter starting at zero outstanding demand.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Add `n` to the outstanding demand, saturating at [`UNBOUNDED`].
    pub fn add(&self, n: u64) {
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(current.saturating_add(n))
            })
            .ok();
    }

    /// Attempt to consume one unit of demand. Returns `true` if demand was
    /// positive and has been decremented (or was already [`UNBOUNDED`], in
    /// which case it remains `UNBOUNDED`); returns `false` if demand was
    /// zero.
    pub fn take_one(&self) -> bool {
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                if current == 0 {
                    None
                } else if current == UNBOUNDED {
                    Some(UNBOUNDED)
                } else {
                    Some(current - 1)
                }
            })
            .is_ok()
    }

    /// Snapshot the current outstanding demand. May be stale the instant
    /// it returns, per the protocol's `requested()` contract.
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// `true` if outstanding demand is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.get() > 0
    }
}

/// Validate a raw, caller-supplied `request(n)` argument.
///
/// Returns `Ok(n as u64)` for `n > 0`; returns an `IllegalArgument` error
/// for `n <= 0`, per the protocol's rule that non-positive demand is a
/// protocol violation rather than a silent no-op.
pub fn validate_request(n: i64) -> crate::Result<u64> {
    if n <= 0 {
        Err(crate::TubeError::illegal_argument(format!(
            "request(n) called with non-positive n = {n}"
        )))
    } else {
        Ok(n as u64)
    }
}
