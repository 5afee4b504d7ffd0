//! Resolver composition.
//!
//! Collapses a field's candidate resolvers into exactly one aggregate and
//! enforces that every installed resolver shares one resolution mode.

mod candidates;
mod config;
mod selector;

pub use candidates::CandidateList;
pub use config::{ComposerConfig, DEFAULT_WARN_CANDIDATES};
pub use selector::{compose, Composer};
