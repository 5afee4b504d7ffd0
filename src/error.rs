//! Error types for resolver composition.
//!
//! All errors are strongly typed using thiserror so a schema builder can
//! match on the exact failure and report it against the offending field.
//! Composition failures are static configuration defects: none of them
//! are retryable.

use thiserror::Error;

use crate::schema::FieldCoordinate;

/// Errors raised while collapsing one field's candidate resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// The candidate list was absent, empty, or otherwise malformed.
    ///
    /// Every field carries at least the registry's default accessor, so this
    /// always points at a registry defect.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input.
        reason: String,
    },

    /// Batched and scalar resolvers were declared for the same field.
    #[error(
        "Both batched and scalar resolvers detected; batched resolvers can't mix with scalar ones \
         (batched: [{}], scalar: [{}]) in [{}]",
        .batched.join(", "),
        .scalar.join(", "),
        .resolvers.join(", ")
    )]
    MixedModeConflict {
        /// Resolvers classified as batched.
        batched: Vec<String>,
        /// Resolvers classified as scalar.
        scalar: Vec<String>,
        /// The full normalized list, in order.
        resolvers: Vec<String>,
    },
}

impl CompositionError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true if this is a mixed mode conflict.
    #[must_use]
    pub const fn is_mixed_mode_conflict(&self) -> bool {
        matches!(self, Self::MixedModeConflict { .. })
    }
}

/// Top-level error type for schema construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Composition error: {0}")]
    Composition(#[from] CompositionError),

    #[error("Field {coordinate}: {source}")]
    Field {
        coordinate: FieldCoordinate,
        #[source]
        source: CompositionError,
    },

    #[error("Mutation error: {message}")]
    Mutation {
        message: String,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl SchemaError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Creates a mutation error.
    #[must_use]
    pub fn mutation(message: impl Into<String>) -> Self {
        Self::Mutation {
            message: message.into(),
        }
    }

    /// Attaches a field coordinate to a composition failure.
    #[must_use]
    pub fn for_field(coordinate: FieldCoordinate, source: CompositionError) -> Self {
        Self::Field { coordinate, source }
    }

    /// Returns true if this error came out of resolver composition.
    #[must_use]
    pub const fn is_composition(&self) -> bool {
        matches!(self, Self::Composition(_) | Self::Field { .. })
    }

    /// Returns true if this is a mutation error.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Mutation { .. })
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// The field this error was reported against, if any.
    #[must_use]
    pub fn coordinate(&self) -> Option<&FieldCoordinate> {
        match self {
            Self::Field { coordinate, .. } => Some(coordinate),
            _ => None,
        }
    }

    /// The underlying composition failure, if any.
    #[must_use]
    pub fn composition(&self) -> Option<&CompositionError> {
        match self {
            Self::Composition(e) | Self::Field { source: e, .. } => Some(e),
            _ => None,
        }
    }

    /// Schema construction errors never resolve on retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

/// Result type alias for composition.
pub type CompositionResult<T> = Result<T, CompositionError>;

/// Result type alias for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;
