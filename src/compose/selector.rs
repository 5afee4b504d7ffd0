use std::fmt;

use tracing::{debug, trace, warn};

use crate::aggregate::AggregateResolver;
use crate::compose::{CandidateList, ComposerConfig};
use crate::error::{CompositionError, CompositionResult};
use crate::mode::{DeclaredModeClassifier, ModeClassifier, ResolutionMode};
use crate::resolver::Resolver;

/// Selects the aggregate representation for a field's candidate resolvers.
///
/// Composition is pure and synchronous. A `Composer` holds no per-field
/// state, so one instance can serve any number of fields from any thread.
#[derive(Clone, Default)]
pub struct Composer<C = DeclaredModeClassifier> {
    classifier: C,
    config: ComposerConfig,
}

impl Composer {
    /// Creates a composer using the declared batching markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ModeClassifier> Composer<C> {
    /// Creates a composer that classifies with `classifier`.
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            config: ComposerConfig::default(),
        }
    }

    /// Replaces the configuration.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `config` fails [`ComposerConfig::validate`].
    pub fn with_config(mut self, config: ComposerConfig) -> CompositionResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Collapses `candidates` into one aggregate resolver.
    ///
    /// - Override placeholders (no wrapped method) are dropped.
    /// - Overrides whose method is batched are wrapped in a batched adapter.
    /// - Property accessors take no part in the mode decision.
    /// - If every remaining resolver is batched the result is `Batched`, and
    ///   property accessors are adapted; if none is batched it is `Scalar`.
    ///
    /// # Errors
    /// - `InvalidArgument` if nothing is left once placeholders are dropped.
    /// - `MixedModeConflict` if batched and scalar resolvers are both present.
    pub fn compose(&self, candidates: CandidateList) -> CompositionResult<AggregateResolver> {
        let supplied = candidates.len();
        if supplied > self.config.warn_candidates {
            warn!(
                supplied,
                threshold = self.config.warn_candidates,
                "unusually long candidate resolver list"
            );
        }

        let resolvers: Vec<Resolver> = candidates
            .into_inner()
            .into_iter()
            .filter(|r| !r.is_placeholder())
            .map(normalize)
            .collect();

        if resolvers.is_empty() {
            return Err(CompositionError::invalid_argument(format!(
                "no resolvers left after dropping {supplied} placeholder override(s)"
            )));
        }

        let mode = self.select_mode(&resolvers)?;
        let resolvers = match mode {
            ResolutionMode::Scalar => resolvers,
            ResolutionMode::Batched => resolvers
                .into_iter()
                .map(|r| if r.is_property_accessor() { Resolver::adapt(r) } else { r })
                .collect(),
        };

        debug!(
            supplied,
            composed = resolvers.len(),
            mode = mode.name(),
            "composed field resolvers"
        );
        Ok(AggregateResolver::new(mode, resolvers))
    }

    fn is_batched(&self, resolver: &Resolver) -> bool {
        match resolver {
            Resolver::Adapted(_) => true,
            _ => self.classifier.is_batched(resolver),
        }
    }

    fn select_mode(&self, resolvers: &[Resolver]) -> CompositionResult<ResolutionMode> {
        let (batched, scalar): (Vec<&Resolver>, Vec<&Resolver>) = resolvers
            .iter()
            .filter(|r| !r.is_property_accessor())
            .partition(|r| self.is_batched(r));

        if batched.is_empty() {
            return Ok(ResolutionMode::Scalar);
        }
        if scalar.is_empty() {
            return Ok(ResolutionMode::Batched);
        }

        let err = CompositionError::MixedModeConflict {
            batched: batched.iter().map(ToString::to_string).collect(),
            scalar: scalar.iter().map(ToString::to_string).collect(),
            resolvers: resolvers.iter().map(ToString::to_string).collect(),
        };
        warn!(error = %err, "batched and scalar resolvers declared for one field");
        Err(err)
    }
}

impl<C> fmt::Debug for Composer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Upgrades an override whose method carries the batching marker.
///
/// The marker lives on the method, not on the wrapper, so the wrapper has to
/// be replaced before classification can see it.
fn normalize(resolver: Resolver) -> Resolver {
    match resolver {
        Resolver::Override(o) if o.is_method_batched() => {
            trace!(field = %o.field, "adapting batched override");
            Resolver::adapt(Resolver::Override(o))
        }
        other => other,
    }
}

/// Composes `candidates` with the default [`Composer`].
///
/// # Errors
/// See [`Composer::compose`]; an empty list is `InvalidArgument`.
pub fn compose(candidates: Vec<Resolver>) -> CompositionResult<AggregateResolver> {
    Composer::new().compose(CandidateList::new(candidates)?)
}
