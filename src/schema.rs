//! Whole-schema composition.
//!
//! The registry hands over one candidate list per field; this module runs
//! the composer over all of them and either returns every aggregate or
//! aborts on the first defective field.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aggregate::AggregateResolver;
use crate::compose::{CandidateList, Composer};
use crate::error::{CompositionError, SchemaError, SchemaResult};
use crate::mode::{DeclaredModeClassifier, ModeClassifier};
use crate::resolver::Resolver;

/// Identifies a field as `Type.field`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldCoordinate {
    /// Owning type.
    pub type_name: String,
    /// Field on that type.
    pub field_name: String,
}

impl FieldCoordinate {
    /// Creates a coordinate.
    pub fn new(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
        }
    }

    /// Parses `Type.field`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` unless the input is two non-empty names joined by one dot.
    pub fn parse(s: &str) -> Result<Self, CompositionError> {
        match s.split_once('.') {
            Some((t, f)) if !t.is_empty() && !f.is_empty() && !f.contains('.') => {
                Ok(Self::new(t, f))
            }
            _ => Err(CompositionError::invalid_argument(format!(
                "'{s}' is not a Type.field coordinate"
            ))),
        }
    }
}

impl fmt::Display for FieldCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)
    }
}

/// Collects candidate lists per field and composes them together.
#[derive(Debug)]
pub struct SchemaComposer<C = DeclaredModeClassifier> {
    composer: Composer<C>,
    fields: BTreeMap<FieldCoordinate, Vec<Resolver>>,
}

impl Default for SchemaComposer {
    fn default() -> Self {
        Self::with_composer(Composer::new())
    }
}

impl SchemaComposer {
    /// Creates a schema composer using the default [`Composer`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ModeClassifier> SchemaComposer<C> {
    /// Creates a schema composer around `composer`.
    pub fn with_composer(composer: Composer<C>) -> Self {
        Self {
            composer,
            fields: BTreeMap::new(),
        }
    }

    /// Appends candidates for `coordinate`.
    ///
    /// Repeated calls for one field extend its list in call order, so
    /// resolvers inherited from several interfaces keep their precedence.
    pub fn add_field(
        &mut self,
        coordinate: FieldCoordinate,
        candidates: impl IntoIterator<Item = Resolver>,
    ) -> &mut Self {
        self.fields.entry(coordinate).or_default().extend(candidates);
        self
    }

    /// Number of fields registered so far.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Composes every registered field, in coordinate order.
    ///
    /// # Errors
    /// Returns `SchemaError::Field` for the first field whose candidates fail
    /// to compose. No partially composed schema is returned.
    pub fn build(self) -> SchemaResult<ComposedSchema> {
        let mut fields = BTreeMap::new();
        for (coordinate, candidates) in self.fields {
            let aggregate = CandidateList::new(candidates)
                .and_then(|list| self.composer.compose(list));
            match aggregate {
                Ok(aggregate) => {
                    fields.insert(coordinate, aggregate);
                }
                Err(e) => {
                    warn!(field = %coordinate, "aborting schema composition");
                    return Err(SchemaError::for_field(coordinate, e));
                }
            }
        }
        debug!(fields = fields.len(), "composed schema resolvers");
        Ok(ComposedSchema { fields })
    }
}

/// One aggregate resolver per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComposedSchema {
    fields: BTreeMap<FieldCoordinate, AggregateResolver>,
}

impl ComposedSchema {
    /// The aggregate installed for `coordinate`.
    #[must_use]
    pub fn get(&self, coordinate: &FieldCoordinate) -> Option<&AggregateResolver> {
        self.fields.get(coordinate)
    }

    /// The aggregate installed for `type_name.field_name`.
    #[must_use]
    pub fn get_field(&self, type_name: &str, field_name: &str) -> Option<&AggregateResolver> {
        self.get(&FieldCoordinate::new(type_name, field_name))
    }

    /// Number of composed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field was composed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldCoordinate, &AggregateResolver)> {
        self.fields.iter()
    }

    /// Coordinates of every field composed in batched mode.
    pub fn batched_fields(&self) -> impl Iterator<Item = &FieldCoordinate> {
        self.fields
            .iter()
            .filter(|(_, agg)| agg.is_batched())
            .map(|(coordinate, _)| coordinate)
    }
}
