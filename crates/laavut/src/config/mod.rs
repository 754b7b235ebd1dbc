use crate::{
    error::{LaavutError, Result},
    search::{SearchConfig, SubtitleMatch},
};

/// Highest number of decimals the distance ranking distinguishes.
pub const MAX_DISTANCE_PRECISION: u8 = 6;

/// Builder for creating search configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder with the product defaults
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// A short list for pickers and autocomplete rows
    pub fn quick_pick() -> Self {
        Self::new().limit(10)
    }

    /// Keep at most `limit` results after ranking
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    /// Return every match
    pub fn unlimited(mut self) -> Self {
        self.config.limit = None;
        self
    }

    /// Decimal places of kilometers compared when ranking by distance
    pub fn distance_precision(mut self, decimals: u8) -> Self {
        self.config.distance_precision = decimals.min(MAX_DISTANCE_PRECISION);
        self
    }

    /// Which part of the subtitle a token may match
    pub fn subtitle_match(mut self, subtitle_match: SubtitleMatch) -> Self {
        self.config.subtitle_match = subtitle_match;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SearchConfig {
        self.config
    }

    /// Build, rejecting configurations that can never return a result.
    pub fn try_build(self) -> Result<SearchConfig> {
        if self.config.limit == Some(0) {
            return Err(LaavutError::ConfigError(
                "limit must be at least 1, use unlimited() to return every match".to_string(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder() {
        let config = SearchConfigBuilder::new().build();
        assert_eq!(config.limit, None);
        assert_eq!(config.distance_precision, 1);
        assert_eq!(config.subtitle_match, SubtitleMatch::FirstWord);
    }

    #[test]
    fn test_quick_pick_preset() {
        let config = SearchConfigBuilder::quick_pick().build();
        assert_eq!(config.limit, Some(10));
        assert_eq!(config.distance_precision, 1);
    }

    #[test]
    fn test_method_chaining() {
        let config = SearchConfigBuilder::new()
            .limit(3)
            .distance_precision(2)
            .subtitle_match(SubtitleMatch::AnyWord)
            .build();

        assert_eq!(config.limit, Some(3));
        assert_eq!(config.distance_precision, 2);
        assert_eq!(config.subtitle_match, SubtitleMatch::AnyWord);
    }

    #[test]
    fn test_override_preset() {
        let config = SearchConfigBuilder::quick_pick().unlimited().build();
        assert_eq!(config.limit, None);
    }

    #[test]
    fn test_precision_is_clamped() {
        let config = SearchConfigBuilder::new().distance_precision(42).build();
        assert_eq!(config.distance_precision, MAX_DISTANCE_PRECISION);
    }

    #[test]
    fn test_try_build_rejects_zero_limit() {
        let result = SearchConfigBuilder::new().limit(0).try_build();
        assert!(matches!(result, Err(LaavutError::ConfigError(_))));

        let result = SearchConfigBuilder::new().limit(1).try_build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_from_config() {
        let config = SearchConfig::builder().limit(5).build();
        assert_eq!(config.limit, Some(5));
    }
}
