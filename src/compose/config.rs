use serde::{Deserialize, Serialize};

use crate::error::CompositionError;

/// Default candidate count above which a field is logged as suspicious.
///
/// Registries produce single-digit lists; anything near this count usually
/// points at a registry defect, but composition still proceeds.
pub const DEFAULT_WARN_CANDIDATES: usize = 64;

/// Composer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Lists longer than this are composed normally but logged with `warn!`.
    pub warn_candidates: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            warn_candidates: DEFAULT_WARN_CANDIDATES,
        }
    }
}

impl ComposerConfig {
    /// Parses a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the JSON is malformed or `warn_candidates` is zero.
    pub fn from_json(json: &str) -> Result<Self, CompositionError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            CompositionError::invalid_argument(format!("failed to parse composer config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `warn_candidates` is zero.
    pub fn validate(&self) -> Result<(), CompositionError> {
        if self.warn_candidates == 0 {
            return Err(CompositionError::invalid_argument(
                "warn_candidates must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = ComposerConfig::from_json("{}").unwrap();
        assert_eq!(config, ComposerConfig::default());
        assert_eq!(config.warn_candidates, DEFAULT_WARN_CANDIDATES);
    }

    #[test]
    fn parses_warn_candidates() {
        let config = ComposerConfig::from_json(r#"{"warn_candidates": 4}"#).unwrap();
        assert_eq!(config.warn_candidates, 4);
    }

    #[test]
    fn rejects_zero_threshold() {
        let err = ComposerConfig::from_json(r#"{"warn_candidates": 0}"#).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ComposerConfig::from_json("{").unwrap_err();
        assert!(err.to_string().contains("failed to parse composer config"));
    }
}
