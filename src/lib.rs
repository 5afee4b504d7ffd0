//! # resolver-compose
//!
//! Collapses the candidate resolvers attached to a GraphQL schema field into
//! exactly one aggregate resolver the execution engine can install.
//!
//! ## Core Concepts
//!
//! - **Resolver**: a candidate strategy for a field (override, default
//!   property accessor, or any other resolver already attached)
//! - **ResolutionMode**: scalar (one entity per call) or batched (one batch per call)
//! - **AggregateResolver**: the single scalar or batched resolver installed for a field
//! - **Composer**: normalizes candidates and enforces a uniform mode per field
//!
//! ## Usage
//!
//! ```rust
//! use resolver_compose::{compose, AggregateResolver, Resolver};
//!
//! let aggregate = compose(vec![
//!     Resolver::override_method("Query.users", "QueryOverrides", "users", true),
//!     Resolver::property("users"),
//! ])?;
//!
//! assert!(matches!(aggregate, AggregateResolver::Batched(_)));
//! # Ok::<(), resolver_compose::CompositionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod compose;
pub mod error;
pub mod mode;
pub mod mutation;
pub mod resolver;
pub mod schema;

// Re-export primary types at crate root for convenience
pub use aggregate::AggregateResolver;
pub use compose::{compose, CandidateList, Composer, ComposerConfig, DEFAULT_WARN_CANDIDATES};
pub use error::{CompositionError, CompositionResult, SchemaError, SchemaResult};
pub use mode::{DeclaredModeClassifier, ModeClassifier, ResolutionMode};
pub use mutation::{MutationEnvironment, RelayMutation, RelayMutationType};
pub use resolver::{
	BatchedAdapter, OtherResolver, OverrideMethod, OverrideResolver, PropertyAccessor, Resolver,
};
pub use schema::{ComposedSchema, FieldCoordinate, SchemaComposer};
