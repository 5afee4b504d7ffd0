use serde::{Deserialize, Serialize};

use crate::error::CompositionError;
use crate::resolver::Resolver;

/// A non-empty, order-preserving list of candidate resolvers for one field.
///
/// - Empty and absent lists are rejected.
/// - Order is kept as supplied; downstream aggregates use it for precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateList(Vec<Resolver>);

impl CandidateList {
    /// Construct a validated candidate list.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `candidates` is empty.
    pub fn new(candidates: Vec<Resolver>) -> Result<Self, CompositionError> {
        if candidates.is_empty() {
            return Err(CompositionError::invalid_argument(
                "candidate resolver list cannot be empty",
            ));
        }
        Ok(Self(candidates))
    }

    /// Construct a validated candidate list from a possibly absent one.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `candidates` is `None` or empty.
    pub fn from_optional(candidates: Option<Vec<Resolver>>) -> Result<Self, CompositionError> {
        let Some(candidates) = candidates else {
            return Err(CompositionError::invalid_argument(
                "candidate resolver list is absent",
            ));
        };
        Self::new(candidates)
    }

    /// Returns the list as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Resolver] {
        &self.0
    }

    /// Number of candidates. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Consumes the list, returning the candidates.
    #[must_use]
    pub fn into_inner(self) -> Vec<Resolver> {
        self.0
    }
}

impl TryFrom<Vec<Resolver>> for CandidateList {
    type Error = CompositionError;

    fn try_from(candidates: Vec<Resolver>) -> Result<Self, Self::Error> {
        Self::new(candidates)
    }
}

impl<'de> Deserialize<'de> for CandidateList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<Vec<Resolver>>::deserialize(deserializer)?;
        CandidateList::from_optional(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ResolutionMode;

    #[test]
    fn rejects_empty() {
        let err = CandidateList::new(Vec::new()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn rejects_absent() {
        let err = CandidateList::from_optional(None).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn preserves_order() {
        let list = CandidateList::new(vec![
            Resolver::other("b", ResolutionMode::Scalar),
            Resolver::other("a", ResolutionMode::Scalar),
        ])
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0], Resolver::other("b", ResolutionMode::Scalar));
    }

    #[test]
    fn deserialization_validates() {
        let err = serde_json::from_str::<CandidateList>("[]").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));

        let err = serde_json::from_str::<CandidateList>("null").unwrap_err();
        assert!(err.to_string().contains("absent"));

        let list: CandidateList =
            serde_json::from_str(r#"[{"kind": "property_accessor", "property": "id"}]"#).unwrap();
        assert_eq!(list.into_inner(), vec![Resolver::property("id")]);
    }
}
