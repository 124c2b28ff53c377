//! Tunable classifier constants.
//!
//! Every weight and threshold is an empirically chosen product constant, so
//! each one lives here as a named field with its default value instead of a
//! literal inside the scoring code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid value for {key}: {value}")]
    Parse { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub baseline: f64,
    /// Weight on accuracy differences between opposing categories
    pub category_difference_weight: f64,
    pub modality_adjustment: f64,
    pub visual_strength_ratio: f64,
    pub text_strength_ratio: f64,
    pub pace_adjustment: f64,
    pub fast_pace_ratio: f64,
    pub slow_pace_ratio: f64,
    pub hesitation_weight: f64,
    pub answer_change_weight: f64,
    pub speed_test_adjustment: f64,
    pub speed_test_high: f64,
    pub speed_test_low: f64,
    pub reading_bonus: f64,
    pub reading_threshold: f64,
    pub elimination_weight: f64,
    /// Accuracy assumed for categories the learner never attempted
    pub missing_category_default: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            baseline: 0.5,
            category_difference_weight: 0.3,
            modality_adjustment: 0.2,
            visual_strength_ratio: 1.1,
            text_strength_ratio: 0.9,
            pace_adjustment: 0.3,
            fast_pace_ratio: 0.8,
            slow_pace_ratio: 1.2,
            hesitation_weight: 0.2,
            answer_change_weight: 0.2,
            speed_test_adjustment: 0.2,
            speed_test_high: 0.7,
            speed_test_low: 0.5,
            reading_bonus: 0.2,
            reading_threshold: 0.7,
            elimination_weight: 0.2,
            missing_category_default: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceParams {
    /// Confidence of a non-empty sample before any size credit
    pub floor: f64,
    /// Attempt count at which sample confidence saturates
    pub full_sample_size: usize,
    pub max: f64,
    pub signals_per_dimension: usize,
}

impl Default for ConfidenceParams {
    fn default() -> Self {
        Self {
            floor: 40.0,
            full_sample_size: 20,
            max: 100.0,
            signals_per_dimension: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationParams {
    pub weak_category_threshold: f64,
    pub strong_category_threshold: f64,
}

impl Default for RecommendationParams {
    fn default() -> Self {
        Self {
            weak_category_threshold: 0.6,
            strong_category_threshold: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub scoring: ScoringWeights,
    pub confidence: ConfidenceParams,
    pub recommendations: RecommendationParams,
    /// Max distance from 0.5 at which a dimension still counts as ambiguous
    pub ambiguity_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            confidence: ConfidenceParams::default(),
            recommendations: RecommendationParams::default(),
            ambiguity_threshold: 0.15,
        }
    }
}

impl ClassifierConfig {
    /// Defaults with `STYLE_*` environment overrides applied, then validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(val) = parse_var::<f64>(&lookup, "STYLE_AMBIGUITY_THRESHOLD")? {
            config.ambiguity_threshold = val;
        }
        if let Some(val) = parse_var::<f64>(&lookup, "STYLE_FAST_PACE_RATIO")? {
            config.scoring.fast_pace_ratio = val;
        }
        if let Some(val) = parse_var::<f64>(&lookup, "STYLE_SLOW_PACE_RATIO")? {
            config.scoring.slow_pace_ratio = val;
        }
        if let Some(val) = parse_var::<f64>(&lookup, "STYLE_WEAK_CATEGORY_THRESHOLD")? {
            config.recommendations.weak_category_threshold = val;
        }
        if let Some(val) = parse_var::<f64>(&lookup, "STYLE_STRONG_CATEGORY_THRESHOLD")? {
            config.recommendations.strong_category_threshold = val;
        }
        if let Some(val) = parse_var::<usize>(&lookup, "STYLE_FULL_SAMPLE_SIZE")? {
            config.confidence.full_sample_size = val;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        let weights = [
            ("baseline", s.baseline),
            ("category_difference_weight", s.category_difference_weight),
            ("modality_adjustment", s.modality_adjustment),
            ("visual_strength_ratio", s.visual_strength_ratio),
            ("text_strength_ratio", s.text_strength_ratio),
            ("pace_adjustment", s.pace_adjustment),
            ("fast_pace_ratio", s.fast_pace_ratio),
            ("slow_pace_ratio", s.slow_pace_ratio),
            ("hesitation_weight", s.hesitation_weight),
            ("answer_change_weight", s.answer_change_weight),
            ("speed_test_adjustment", s.speed_test_adjustment),
            ("speed_test_high", s.speed_test_high),
            ("speed_test_low", s.speed_test_low),
            ("reading_bonus", s.reading_bonus),
            ("reading_threshold", s.reading_threshold),
            ("elimination_weight", s.elimination_weight),
            ("missing_category_default", s.missing_category_default),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!("{name} must be finite")));
            }
        }

        if !(0.0..=1.0).contains(&s.baseline) {
            return Err(ConfigError::Validation(
                "baseline must be within [0, 1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&s.missing_category_default) {
            return Err(ConfigError::Validation(
                "missing_category_default must be within [0, 1]".to_string(),
            ));
        }
        if s.fast_pace_ratio >= s.slow_pace_ratio {
            return Err(ConfigError::Validation(
                "fast_pace_ratio must be below slow_pace_ratio".to_string(),
            ));
        }
        if s.text_strength_ratio >= s.visual_strength_ratio {
            return Err(ConfigError::Validation(
                "text_strength_ratio must be below visual_strength_ratio".to_string(),
            ));
        }
        if s.speed_test_low > s.speed_test_high {
            return Err(ConfigError::Validation(
                "speed_test_low must not exceed speed_test_high".to_string(),
            ));
        }

        let c = &self.confidence;
        if !c.floor.is_finite() || !c.max.is_finite() || c.floor < 0.0 || c.floor > c.max {
            return Err(ConfigError::Validation(
                "confidence floor must be within [0, max]".to_string(),
            ));
        }
        if c.full_sample_size == 0 || c.signals_per_dimension == 0 {
            return Err(ConfigError::Validation(
                "full_sample_size and signals_per_dimension must be positive".to_string(),
            ));
        }

        let r = &self.recommendations;
        if !(0.0..=1.0).contains(&r.weak_category_threshold)
            || !(0.0..=1.0).contains(&r.strong_category_threshold)
        {
            return Err(ConfigError::Validation(
                "category thresholds must be within [0, 1]".to_string(),
            ));
        }

        if !(0.0..=0.5).contains(&self.ambiguity_threshold) {
            return Err(ConfigError::Validation(
                "ambiguity_threshold must be within [0, 0.5]".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Parse {
                key: key.to_string(),
                value: raw,
            }),
        None => Ok(None),
    }
}
