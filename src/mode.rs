//! Resolution modes and the classifier capability that assigns them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resolver::Resolver;

/// How a resolver supplies values to the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// One entity per call.
    #[default]
    Scalar,
    /// A whole batch of entities per call.
    Batched,
}

impl ResolutionMode {
    /// Returns true for `Batched`.
    #[must_use]
    pub const fn is_batched(self) -> bool {
        matches!(self, Self::Batched)
    }

    /// Maps a batching marker to a mode.
    #[must_use]
    pub const fn from_batched(batched: bool) -> Self {
        if batched {
            Self::Batched
        } else {
            Self::Scalar
        }
    }

    /// Returns a short stable identifier suitable for logging/debugging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Batched => "batched",
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Answers whether a resolver operates in batched mode.
///
/// The composer never asks about a `PropertyAccessor` (it is mode-neutral)
/// or about a `BatchedAdapter` (it is batched by construction). Every other
/// resolver kind must get a defined answer.
pub trait ModeClassifier: Send + Sync {
    /// Returns true if `resolver` resolves a batch of entities per call.
    fn is_batched(&self, resolver: &Resolver) -> bool;

    /// Classifies `resolver` as a [`ResolutionMode`].
    fn mode_of(&self, resolver: &Resolver) -> ResolutionMode {
        ResolutionMode::from_batched(self.is_batched(resolver))
    }
}

impl<F> ModeClassifier for F
where
    F: Fn(&Resolver) -> bool + Send + Sync,
{
    fn is_batched(&self, resolver: &Resolver) -> bool {
        self(resolver)
    }
}

/// Classifies resolvers by the marker each one declares.
///
/// - An override follows its method's batching marker; a placeholder with no
///   method is scalar.
/// - Other resolvers report their declared mode.
/// - Adapters are batched.
/// - Property accessors are scalar.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclaredModeClassifier;

impl ModeClassifier for DeclaredModeClassifier {
    fn is_batched(&self, resolver: &Resolver) -> bool {
        match resolver {
            Resolver::Override(r) => r.method.as_ref().is_some_and(|m| m.batched),
            Resolver::Other(r) => r.mode.is_batched(),
            Resolver::Adapted(_) => true,
            Resolver::PropertyAccessor(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_classifier_follows_markers() {
        let c = DeclaredModeClassifier;
        assert!(c.is_batched(&Resolver::override_method("Query.users", "UserOverrides", "users", true)));
        assert!(!c.is_batched(&Resolver::override_method("Query.user", "UserOverrides", "user", false)));
        assert!(!c.is_batched(&Resolver::placeholder("Query.user")));
        assert!(c.is_batched(&Resolver::other("loader", ResolutionMode::Batched)));
        assert!(!c.is_batched(&Resolver::other("fetch", ResolutionMode::Scalar)));
        assert!(c.is_batched(&Resolver::adapt(Resolver::property("name"))));
        assert!(!c.is_batched(&Resolver::property("name")));
    }

    #[test]
    fn closures_are_classifiers() {
        let only_loaders = |r: &Resolver| matches!(r, Resolver::Other(o) if o.name.ends_with("loader"));
        assert_eq!(
            only_loaders.mode_of(&Resolver::other("user_loader", ResolutionMode::Scalar)),
            ResolutionMode::Batched
        );
        assert_eq!(
            only_loaders.mode_of(&Resolver::other("fetch", ResolutionMode::Batched)),
            ResolutionMode::Scalar
        );
    }

    #[test]
    fn mode_round_trips_through_serde() {
        let json = serde_json::to_string(&ResolutionMode::Batched).unwrap();
        assert_eq!(json, "\"batched\"");
        let mode: ResolutionMode = serde_json::from_str("\"scalar\"").unwrap();
        assert_eq!(mode, ResolutionMode::Scalar);
        assert_eq!(mode.to_string(), "scalar");
    }
}
