//! Common Types and Constants
//!
//! Input records handed over by the quiz-collection layer and the
//! analysis record returned to profile consumers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ==================== Constants ====================

/// Schema version stamped on every [`LearningStyleAnalysis`]
pub const ANALYSIS_VERSION: u32 = 1;

/// Neutral position on every dimension axis
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Upper bound for confidence values
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Highest self-reported confidence level
pub const MAX_CONFIDENCE_LEVEL: u8 = 5;

// ==================== Input Types ====================

/// Cognitive skill a diagnostic question probes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    VisualPattern,
    AnalyticalLogic,
    SpeedTest,
    DetailFocus,
    ConceptualReasoning,
    ReadingComprehension,
}

impl DiagnosticCategory {
    pub const ALL: [DiagnosticCategory; 6] = [
        DiagnosticCategory::VisualPattern,
        DiagnosticCategory::AnalyticalLogic,
        DiagnosticCategory::SpeedTest,
        DiagnosticCategory::DetailFocus,
        DiagnosticCategory::ConceptualReasoning,
        DiagnosticCategory::ReadingComprehension,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VisualPattern => "visual_pattern",
            Self::AnalyticalLogic => "analytical_logic",
            Self::SpeedTest => "speed_test",
            Self::DetailFocus => "detail_focus",
            Self::ConceptualReasoning => "conceptual_reasoning",
            Self::ReadingComprehension => "reading_comprehension",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation flags of a question; not mutually exclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityIndicators {
    #[serde(default)]
    pub visual_elements: bool,
    #[serde(default)]
    pub text_heavy: bool,
}

/// One quiz item used for classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticQuestion {
    pub id: String,
    pub diagnostic_category: DiagnosticCategory,
    /// Baseline completion time in milliseconds
    pub expected_response_time: u64,
    #[serde(default)]
    pub complexity_indicators: ComplexityIndicators,
}

/// One learner response to one diagnostic question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticAttempt {
    pub diagnostic_question_id: String,
    /// Elapsed time in milliseconds
    pub response_time: u64,
    pub is_correct: bool,
    #[serde(default)]
    pub showed_hesitation: bool,
    #[serde(default)]
    pub used_elimination: bool,
    #[serde(default)]
    pub changed_answer: bool,
    /// Self-reported confidence, 1..=5
    #[serde(default)]
    pub confidence_level: Option<u8>,
}

// ==================== Style Labels ====================

/// Behavioral axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    VisualAnalytical,
    FastMethodical,
    ConceptualDetail,
}

impl Dimension {
    /// Resolution order, also used to break ties
    pub const ALL: [Dimension; 3] = [
        Dimension::VisualAnalytical,
        Dimension::FastMethodical,
        Dimension::ConceptualDetail,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingLabel {
    Visual,
    Analytical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaceLabel {
    Fast,
    Methodical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusLabel {
    Conceptual,
    Detail,
}

impl ProcessingLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Analytical => "analytical",
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Visual => Self::Analytical,
            Self::Analytical => Self::Visual,
        }
    }
}

impl PaceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Methodical => "methodical",
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Fast => Self::Methodical,
            Self::Methodical => Self::Fast,
        }
    }
}

impl FocusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conceptual => "conceptual",
            Self::Detail => "detail",
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Conceptual => Self::Detail,
            Self::Detail => Self::Conceptual,
        }
    }
}

/// One of the eight `{processing}-{pace}-{focus}` learning style keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub processing: ProcessingLabel,
    pub pace: PaceLabel,
    pub focus: FocusLabel,
}

impl StyleKey {
    pub const ALL: [StyleKey; 8] = [
        StyleKey::new(ProcessingLabel::Visual, PaceLabel::Fast, FocusLabel::Conceptual),
        StyleKey::new(ProcessingLabel::Visual, PaceLabel::Fast, FocusLabel::Detail),
        StyleKey::new(ProcessingLabel::Visual, PaceLabel::Methodical, FocusLabel::Conceptual),
        StyleKey::new(ProcessingLabel::Visual, PaceLabel::Methodical, FocusLabel::Detail),
        StyleKey::new(ProcessingLabel::Analytical, PaceLabel::Fast, FocusLabel::Conceptual),
        StyleKey::new(ProcessingLabel::Analytical, PaceLabel::Fast, FocusLabel::Detail),
        StyleKey::new(ProcessingLabel::Analytical, PaceLabel::Methodical, FocusLabel::Conceptual),
        StyleKey::new(ProcessingLabel::Analytical, PaceLabel::Methodical, FocusLabel::Detail),
    ];

    pub const fn new(processing: ProcessingLabel, pace: PaceLabel, focus: FocusLabel) -> Self {
        Self {
            processing,
            pace,
            focus,
        }
    }

    /// Same key with one dimension's label swapped
    pub fn flip(self, dimension: Dimension) -> Self {
        match dimension {
            Dimension::VisualAnalytical => Self {
                processing: self.processing.flipped(),
                ..self
            },
            Dimension::FastMethodical => Self {
                pace: self.pace.flipped(),
                ..self
            },
            Dimension::ConceptualDetail => Self {
                focus: self.focus.flipped(),
                ..self
            },
        }
    }

    /// Dimensions whose labels differ between `self` and `other`
    pub fn differing_dimensions(&self, other: &StyleKey) -> Vec<Dimension> {
        let mut out = Vec::with_capacity(3);
        if self.processing != other.processing {
            out.push(Dimension::VisualAnalytical);
        }
        if self.pace != other.pace {
            out.push(Dimension::FastMethodical);
        }
        if self.focus != other.focus {
            out.push(Dimension::ConceptualDetail);
        }
        out
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.processing.as_str(),
            self.pace.as_str(),
            self.focus.as_str()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid style key: {0}")]
pub struct ParseStyleKeyError(pub String);

impl FromStr for StyleKey {
    type Err = ParseStyleKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (Some(a), Some(b), Some(c), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseStyleKeyError(s.to_string()));
        };

        let processing = match a {
            "visual" => ProcessingLabel::Visual,
            "analytical" => ProcessingLabel::Analytical,
            _ => return Err(ParseStyleKeyError(s.to_string())),
        };
        let pace = match b {
            "fast" => PaceLabel::Fast,
            "methodical" => PaceLabel::Methodical,
            _ => return Err(ParseStyleKeyError(s.to_string())),
        };
        let focus = match c {
            "conceptual" => FocusLabel::Conceptual,
            "detail" => FocusLabel::Detail,
            _ => return Err(ParseStyleKeyError(s.to_string())),
        };

        Ok(Self::new(processing, pace, focus))
    }
}

impl Serialize for StyleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StyleKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==================== Output Types ====================

/// Axis positions in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    /// 0 = visual, 1 = analytical
    pub visual_analytical: f64,
    /// 0 = fast-paced, 1 = methodical
    pub fast_methodical: f64,
    /// 0 = conceptual, 1 = detail-oriented
    pub conceptual_detail: f64,
}

impl Default for DimensionScores {
    fn default() -> Self {
        Self {
            visual_analytical: NEUTRAL_SCORE,
            fast_methodical: NEUTRAL_SCORE,
            conceptual_detail: NEUTRAL_SCORE,
        }
    }
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::VisualAnalytical => self.visual_analytical,
            Dimension::FastMethodical => self.fast_methodical,
            Dimension::ConceptualDetail => self.conceptual_detail,
        }
    }
}

/// Confidence values in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    pub visual_analytical: f64,
    pub fast_methodical: f64,
    pub conceptual_detail: f64,
    pub overall: f64,
}

/// Audit summary of the input the analysis was computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoints {
    pub total_questions: usize,
    pub avg_response_time: f64,
    pub accuracy_variance: f64,
}

/// Classifier output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStyleAnalysis {
    pub primary_style: StyleKey,
    pub secondary_style: Option<StyleKey>,
    pub scores: DimensionScores,
    pub confidence: ConfidenceScores,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub data_points: DataPoints,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    ANALYSIS_VERSION
}
