//! Candidate resolvers for a schema field.
//!
//! A field may be backed by several resolvers at once: user-declared
//! overrides, the registry's default property accessor, and resolvers
//! inherited from interfaces. These are plain descriptors; the execution
//! engine owns the code that actually produces values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mode::ResolutionMode;

/// The user method an override resolver delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverrideMethod {
    /// Type that declares the method.
    pub owner: String,
    /// Method name.
    pub name: String,
    /// Whether the method carries the batching marker.
    #[serde(default)]
    pub batched: bool,
}

impl OverrideMethod {
    /// Creates a method descriptor.
    pub fn new(owner: impl Into<String>, name: impl Into<String>, batched: bool) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            batched,
        }
    }
}

/// A resolver wrapping a user-declared override method.
///
/// The registry inserts overrides without a method as structural
/// placeholders; those carry no resolution semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverrideResolver {
    /// Field the override was declared for.
    pub field: String,
    /// The wrapped method, absent for placeholders.
    #[serde(default)]
    pub method: Option<OverrideMethod>,
}

impl OverrideResolver {
    /// Returns true if the method carries the batching marker.
    #[must_use]
    pub fn is_method_batched(&self) -> bool {
        self.method.as_ref().is_some_and(|m| m.batched)
    }
}

/// The registry's default resolver: reads the field by property access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyAccessor {
    /// Property read from the parent value.
    pub property: String,
}

/// Any other resolver already attached to the field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OtherResolver {
    /// Identifier used in diagnostics.
    pub name: String,
    /// Mode the resolver declares for itself.
    #[serde(default)]
    pub mode: ResolutionMode,
}

/// Presents a scalar resolver through a batched-capable interface.
///
/// The batched execution path calls the adapter once per batch and the
/// adapter feeds the wrapped resolver one entity at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchedAdapter {
    inner: Box<Resolver>,
}

impl BatchedAdapter {
    /// Wraps `resolver`. An adapter is returned unchanged rather than wrapped twice.
    #[must_use]
    pub fn new(resolver: Resolver) -> Self {
        match resolver {
            Resolver::Adapted(adapter) => adapter,
            other => Self {
                inner: Box::new(other),
            },
        }
    }

    /// The wrapped resolver.
    #[must_use]
    pub fn inner(&self) -> &Resolver {
        &self.inner
    }

    /// Unwraps the adapter.
    #[must_use]
    pub fn into_inner(self) -> Resolver {
        *self.inner
    }
}

/// A candidate resolver for one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Resolver {
    /// Wraps a user-declared override method.
    Override(OverrideResolver),
    /// The registry's default property accessor. Mode-neutral.
    PropertyAccessor(PropertyAccessor),
    /// Previously composed or externally supplied.
    Other(OtherResolver),
    /// A scalar resolver upgraded for the batched execution path.
    Adapted(BatchedAdapter),
}

impl Resolver {
    /// Creates an override for `field` backed by `owner::name`.
    pub fn override_method(
        field: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
        batched: bool,
    ) -> Self {
        Self::Override(OverrideResolver {
            field: field.into(),
            method: Some(OverrideMethod::new(owner, name, batched)),
        })
    }

    /// Creates an override placeholder with no method.
    pub fn placeholder(field: impl Into<String>) -> Self {
        Self::Override(OverrideResolver {
            field: field.into(),
            method: None,
        })
    }

    /// Creates a default property accessor.
    pub fn property(property: impl Into<String>) -> Self {
        Self::PropertyAccessor(PropertyAccessor {
            property: property.into(),
        })
    }

    /// Creates an externally supplied resolver with a declared mode.
    pub fn other(name: impl Into<String>, mode: ResolutionMode) -> Self {
        Self::Other(OtherResolver {
            name: name.into(),
            mode,
        })
    }

    /// Wraps `resolver` in a [`BatchedAdapter`].
    #[must_use]
    pub fn adapt(resolver: Resolver) -> Self {
        Self::Adapted(BatchedAdapter::new(resolver))
    }

    /// Returns true for the default property accessor.
    #[must_use]
    pub const fn is_property_accessor(&self) -> bool {
        matches!(self, Self::PropertyAccessor(_))
    }

    /// Returns true for an override with no wrapped method.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Override(OverrideResolver { method: None, .. }))
    }

    /// Returns true for a [`BatchedAdapter`].
    #[must_use]
    pub const fn is_adapted(&self) -> bool {
        matches!(self, Self::Adapted(_))
    }

    /// Returns a short stable identifier for the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Override(_) => "override",
            Self::PropertyAccessor(_) => "property",
            Self::Other(_) => "other",
            Self::Adapted(_) => "batched",
        }
    }
}

impl fmt::Display for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override(OverrideResolver { field, method: None }) => {
                write!(f, "override({field} -> <none>)")
            }
            Self::Override(OverrideResolver {
                field,
                method: Some(m),
            }) => {
                write!(f, "override({field} -> {}::{}", m.owner, m.name)?;
                if m.batched {
                    f.write_str(" [batched]")?;
                }
                f.write_str(")")
            }
            Self::PropertyAccessor(p) => write!(f, "property({})", p.property),
            Self::Other(o) => write!(f, "other({}, {})", o.name, o.mode),
            Self::Adapted(a) => write!(f, "batched({})", a.inner()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_does_not_double_wrap() {
        let once = Resolver::adapt(Resolver::property("name"));
        let twice = Resolver::adapt(once.clone());
        assert_eq!(once, twice);
        let Resolver::Adapted(adapter) = twice else {
            panic!("expected adapter");
        };
        assert_eq!(adapter.into_inner(), Resolver::property("name"));
    }

    #[test]
    fn placeholder_detection() {
        assert!(Resolver::placeholder("User.name").is_placeholder());
        assert!(!Resolver::override_method("User.name", "UserOverrides", "name", false).is_placeholder());
        assert!(!Resolver::property("name").is_placeholder());
    }

    #[test]
    fn display_names_the_resolver() {
        assert_eq!(
            Resolver::override_method("Query.users", "UserOverrides", "users", true).to_string(),
            "override(Query.users -> UserOverrides::users [batched])"
        );
        assert_eq!(Resolver::placeholder("Query.user").to_string(), "override(Query.user -> <none>)");
        assert_eq!(Resolver::property("name").to_string(), "property(name)");
        assert_eq!(
            Resolver::other("loader", ResolutionMode::Batched).to_string(),
            "other(loader, batched)"
        );
        assert_eq!(
            Resolver::adapt(Resolver::property("name")).to_string(),
            "batched(property(name))"
        );
    }

    #[test]
    fn deserializes_tagged_resolvers() {
        let json = r#"[
            {"kind": "override", "field": "Query.user", "method": {"owner": "UserOverrides", "name": "user", "batched": true}},
            {"kind": "override", "field": "Query.user"},
            {"kind": "property_accessor", "property": "user"},
            {"kind": "other", "name": "loader"}
        ]"#;
        let resolvers: Vec<Resolver> = serde_json::from_str(json).unwrap();
        assert_eq!(
            resolvers,
            vec![
                Resolver::override_method("Query.user", "UserOverrides", "user", true),
                Resolver::placeholder("Query.user"),
                Resolver::property("user"),
                Resolver::other("loader", ResolutionMode::Scalar),
            ]
        );
    }
}
