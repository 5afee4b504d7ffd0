//! The single resolver installed for a field.

use std::fmt;

use serde::Serialize;

use crate::mode::ResolutionMode;
use crate::resolver::Resolver;

/// The composed resolver for one field.
///
/// The execution engine invokes a `Scalar` aggregate once per entity and a
/// `Batched` aggregate once per batch. The wrapped list keeps the order the
/// registry supplied; the aggregate's own fallback policy may rely on it.
///
/// Aggregates returned by [`Composer::compose`](crate::Composer::compose)
/// always wrap at least one resolver. One built by hand from the variants
/// carries no such guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "resolvers")]
pub enum AggregateResolver {
    /// Every resolver handles one entity per call.
    Scalar(Vec<Resolver>),
    /// Every resolver handles a batch per call.
    Batched(Vec<Resolver>),
}

impl AggregateResolver {
    /// Wraps `resolvers` in the aggregate for `mode`.
    pub(crate) fn new(mode: ResolutionMode, resolvers: Vec<Resolver>) -> Self {
        match mode {
            ResolutionMode::Scalar => Self::Scalar(resolvers),
            ResolutionMode::Batched => Self::Batched(resolvers),
        }
    }

    /// Mode the engine must invoke this aggregate with.
    #[must_use]
    pub const fn mode(&self) -> ResolutionMode {
        match self {
            Self::Scalar(_) => ResolutionMode::Scalar,
            Self::Batched(_) => ResolutionMode::Batched,
        }
    }

    /// Returns true for a batched aggregate.
    #[must_use]
    pub const fn is_batched(&self) -> bool {
        matches!(self, Self::Batched(_))
    }

    /// The wrapped resolvers, in precedence order.
    #[must_use]
    pub fn resolvers(&self) -> &[Resolver] {
        match self {
            Self::Scalar(r) | Self::Batched(r) => r,
        }
    }

    /// Number of wrapped resolvers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers().len()
    }

    /// Returns true if no resolvers are wrapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers().is_empty()
    }

    /// Consumes the aggregate, returning its resolvers.
    #[must_use]
    pub fn into_resolvers(self) -> Vec<Resolver> {
        match self {
            Self::Scalar(r) | Self::Batched(r) => r,
        }
    }
}

impl fmt::Display for AggregateResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.mode())?;
        for (i, r) in self.resolvers().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{r}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_variant() {
        let scalar = AggregateResolver::new(ResolutionMode::Scalar, vec![Resolver::property("id")]);
        assert_eq!(scalar.mode(), ResolutionMode::Scalar);
        assert!(!scalar.is_batched());

        let batched = AggregateResolver::new(
            ResolutionMode::Batched,
            vec![Resolver::adapt(Resolver::property("id"))],
        );
        assert!(batched.is_batched());
        assert_eq!(batched.len(), 1);
    }

    #[test]
    fn display_lists_resolvers_in_order() {
        let agg = AggregateResolver::Batched(vec![
            Resolver::other("loader", ResolutionMode::Batched),
            Resolver::adapt(Resolver::property("id")),
        ]);
        assert_eq!(agg.to_string(), "batched[other(loader, batched), batched(property(id))]");
    }

    #[test]
    fn hand_built_aggregates_may_be_empty() {
        let agg = AggregateResolver::Scalar(Vec::new());
        assert!(agg.is_empty());
        assert_eq!(agg.to_string(), "scalar[]");

        let composed = crate::compose(vec![Resolver::placeholder("Query.id"), Resolver::property("id")]).unwrap();
        assert!(!composed.is_empty());
    }

    #[test]
    fn serializes_with_mode_tag() {
        let agg = AggregateResolver::Scalar(vec![Resolver::property("id")]);
        let value = serde_json::to_value(&agg).unwrap();
        assert_eq!(value["mode"], "scalar");
        assert_eq!(value["resolvers"][0]["kind"], "property_accessor");
    }
}
