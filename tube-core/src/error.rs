// Copyright 2026
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the tube reactive streaming runtime.
//!
//! [`TubeError`] is the single error type surfaced on `onError` signals and
//! returned synchronously from construction-time validation. Each variant
//! corresponds to one of the error kinds named by the protocol: illegal
//! arguments, protocol violations, buffer overflow, user callback failures,
//! and upstream failures forwarded as-is.

/// Root error type for all tube operations.
#[derive(Debug, thiserror::Error)]
pub enum TubeError {
    /// A `null`-equivalent or otherwise invalid argument was passed to a
    /// factory or operator constructor, or a non-positive demand/buffer
    /// size was supplied.
    #[error("illegal argument: {context}")]
    IllegalArgument {
        /// Description of the offending argument.
        context: String,
    },

    /// Upstream produced a forbidden `null` item, a transform produced a
    /// `null` result, or a generator yielded a forbidden `null` — the
    /// message identifies the offending position.
    #[error("protocol violation: {context}")]
    ProtocolViolation {
        /// Description identifying the offending item or position.
        context: String,
    },

    /// A `Tube` configured with the `Buffer` or `Error` strategy received
    /// more items than it could hold with no demand to drain them.
    #[error("backpressure overflow: {context}")]
    Overflow {
        /// Description of the overflow (strategy, capacity, position).
        context: String,
    },

    /// A user-supplied callback (supplier, generator function, transform,
    /// or predicate) panicked-equivalent by returning an error.
    #[error("user callback failed: {0}")]
    UserCallback(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An upstream publisher signalled `onError`; the cause is forwarded
    /// unchanged.
    #[error("upstream failure: {0}")]
    UpstreamFailure(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TubeError {
    /// Build an [`TubeError::IllegalArgument`] with the given context.
    pub fn illegal_argument(context: impl Into<String>) -> Self {
        Self::IllegalArgument {
            context: context.into(),
        }
    }

    /// Build a [`TubeError::ProtocolViolation`] with the given context.
    pub fn protocol_violation(context: impl Into<String>) -> Self {
        Self::ProtocolViolation {
            context: context.into(),
        }
    }

    /// Build an [`TubeError::Overflow`] with the given context.
    pub fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow {
            context: context.into(),
        }
    }

    /// Wrap a user callback error.
    pub fn user_callback(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserCallback(Box::new(error))
    }

    /// Wrap an upstream failure, forwarding it unchanged in shape.
    pub fn upstream_failure(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UpstreamFailure(Box::new(error))
    }

    /// `true` for errors that represent a construction-time misuse of the
    /// API rather than a runtime signal.
    #[must_use]
    pub const fn is_illegal_argument(&self) -> bool {
        matches!(self, Self::IllegalArgument { .. })
    }
}

/// Specialized `Result` alias for tube operations.
pub type Result<T> = std::result::Result<T, TubeError>;

impl Clone for TubeError {
    fn clone(&self) -> Self {
        match self {
            Self::IllegalArgument { context } => Self::IllegalArgument {
                context: context.clone(),
            },
            Self::ProtocolViolation { context } => Self::ProtocolViolation {
                context: context.clone(),
            },
            Self::Overflow { context } => Self::Overflow {
                context: context.clone(),
            },
            // The boxed source can't be cloned; degrade to its rendered
            // message so a publisher like `from_failure` can still
            // redeliver an equivalent error on every subscription.
            Self::UserCallback(e) => Self::UserCallback(Box::new(RenderedError(e.to_string()))),
            Self::UpstreamFailure(e) => {
                Self::UpstreamFailure(Box::new(RenderedError(e.to_string())))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct RenderedError(String);
