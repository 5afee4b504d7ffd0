//! Relay mutation contract.
//!
//! A Relay mutation takes one input object and returns one payload object,
//! both of which echo the client's mutation id back to it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::schema::FieldCoordinate;

/// Input and payload objects of a Relay mutation.
pub trait RelayMutationType {
    /// The id the client attached to the request, if any.
    fn client_mutation_id(&self) -> Option<&str>;
}

/// Context a mutation is invoked with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationEnvironment {
    /// Mutation field being executed.
    pub field: FieldCoordinate,
    /// Raw arguments as received.
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl MutationEnvironment {
    /// Creates an environment with no arguments.
    #[must_use]
    pub fn new(field: FieldCoordinate) -> Self {
        Self {
            field,
            arguments: Map::new(),
        }
    }

    /// Adds an argument.
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    /// Looks up an argument by name.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }
}

/// A single-method mutation handler.
pub trait RelayMutation<I, R>: Send + Sync
where
    I: RelayMutationType,
    R: RelayMutationType,
{
    /// Applies the mutation.
    ///
    /// # Errors
    /// Implementations return `SchemaError::Mutation` for rejected input.
    fn call(&self, input: I, env: &MutationEnvironment) -> Result<R, SchemaError>;
}
