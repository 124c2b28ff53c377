//! Style guidance table and performance-derived recommendations.

use serde::{Deserialize, Serialize};

use crate::config::RecommendationParams;
use crate::metrics::DiagnosticMetrics;
use crate::types::{DiagnosticCategory, FocusLabel, PaceLabel, ProcessingLabel, StyleKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
    pub strengths: &'static [&'static str],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
}

const VISUAL_FAST_CONCEPTUAL: StyleProfile = StyleProfile {
    name: "Visual Sprinter",
    description: "Grasps the big picture quickly from diagrams and patterns.",
    recommendations: &[
        "Start each topic with a diagram or concept map before reading details",
        "Use short timed drills to keep momentum",
        "Summarize each lesson as a one-sentence takeaway",
    ],
    strengths: &["Rapid big-picture understanding", "Strong spatial intuition"],
};

const VISUAL_FAST_DETAIL: StyleProfile = StyleProfile {
    name: "Visual Scanner",
    description: "Spots visual specifics fast and keeps an eye on the fine print.",
    recommendations: &[
        "Annotate diagrams directly while working through problems",
        "Use color-coded highlighting to separate key facts",
        "Double-check answers against the figure before moving on",
    ],
    strengths: &["Quick visual scanning", "Eye for visual specifics"],
};

const VISUAL_METHODICAL_CONCEPTUAL: StyleProfile = StyleProfile {
    name: "Visual Architect",
    description: "Builds understanding step by step through structured visuals.",
    recommendations: &[
        "Build flowcharts that connect concepts across lessons",
        "Work through worked examples with illustrated steps",
        "Schedule longer, focused study blocks",
    ],
    strengths: &["Structured visual thinking", "Deep conceptual connections"],
};

const VISUAL_METHODICAL_DETAIL: StyleProfile = StyleProfile {
    name: "Visual Analyst",
    description: "Examines visuals carefully and thoroughly before deciding.",
    recommendations: &[
        "Break complex figures into labeled parts",
        "Keep a visual checklist for multi-step problems",
        "Review charts and tables slowly, one element at a time",
    ],
    strengths: &["Careful visual inspection", "Thorough, accurate work"],
};

const ANALYTICAL_FAST_CONCEPTUAL: StyleProfile = StyleProfile {
    name: "Quick Theorist",
    description: "Reasons abstractly and moves quickly between ideas.",
    recommendations: &[
        "Tackle challenge problems that reward abstract reasoning",
        "Explain principles in your own words before practicing",
        "Pace yourself on long questions to avoid skipping steps",
    ],
    strengths: &["Fast logical inference", "Abstract reasoning"],
};

const ANALYTICAL_FAST_DETAIL: StyleProfile = StyleProfile {
    name: "Rapid Logician",
    description: "Applies rules precisely and efficiently.",
    recommendations: &[
        "Practice rule-based drills under light time pressure",
        "Keep a running list of common traps and exceptions",
        "Verify each step of a logical chain before answering",
    ],
    strengths: &["Efficient rule application", "Precise logical steps"],
};

const ANALYTICAL_METHODICAL_CONCEPTUAL: StyleProfile = StyleProfile {
    name: "Deep Thinker",
    description: "Works through ideas deliberately to understand why they hold.",
    recommendations: &[
        "Study proofs and derivations, not just results",
        "Write structured outlines before answering open questions",
        "Allow extra time for reflection after each session",
    ],
    strengths: &["Thorough reasoning", "Strong theoretical understanding"],
};

const ANALYTICAL_METHODICAL_DETAIL: StyleProfile = StyleProfile {
    name: "Systematic Analyst",
    description: "Methodically verifies every step and detail.",
    recommendations: &[
        "Use step-by-step problem-solving templates",
        "Practice with detailed text-based explanations",
        "Set time targets to avoid over-checking",
    ],
    strengths: &["Systematic problem solving", "High accuracy under complexity"],
};

/// Base guidance for a primary style key
pub fn style_profile(key: StyleKey) -> &'static StyleProfile {
    use FocusLabel::*;
    use PaceLabel::*;
    use ProcessingLabel::*;

    match (key.processing, key.pace, key.focus) {
        (Visual, Fast, Conceptual) => &VISUAL_FAST_CONCEPTUAL,
        (Visual, Fast, Detail) => &VISUAL_FAST_DETAIL,
        (Visual, Methodical, Conceptual) => &VISUAL_METHODICAL_CONCEPTUAL,
        (Visual, Methodical, Detail) => &VISUAL_METHODICAL_DETAIL,
        (Analytical, Fast, Conceptual) => &ANALYTICAL_FAST_CONCEPTUAL,
        (Analytical, Fast, Detail) => &ANALYTICAL_FAST_DETAIL,
        (Analytical, Methodical, Conceptual) => &ANALYTICAL_METHODICAL_CONCEPTUAL,
        (Analytical, Methodical, Detail) => &ANALYTICAL_METHODICAL_DETAIL,
    }
}

/// Remedial tip for a weak category
pub fn remedial_tip(category: DiagnosticCategory) -> &'static str {
    match category {
        DiagnosticCategory::VisualPattern => {
            "Practice pattern-recognition exercises with diagrams and sequences"
        }
        DiagnosticCategory::AnalyticalLogic => {
            "Work through formal logic drills, writing out each inference step"
        }
        DiagnosticCategory::SpeedTest => {
            "Build fluency with short timed practice sets on familiar material"
        }
        DiagnosticCategory::DetailFocus => {
            "Slow down on detail questions and re-read the prompt before answering"
        }
        DiagnosticCategory::ConceptualReasoning => {
            "Connect new facts to underlying principles by explaining why they hold"
        }
        DiagnosticCategory::ReadingComprehension => {
            "Summarize each passage paragraph by paragraph before answering"
        }
    }
}

/// Strength label for a category the learner excels at
pub fn category_strength(category: DiagnosticCategory) -> &'static str {
    match category {
        DiagnosticCategory::VisualPattern => "Visual pattern recognition",
        DiagnosticCategory::AnalyticalLogic => "Logical reasoning",
        DiagnosticCategory::SpeedTest => "Quick processing",
        DiagnosticCategory::DetailFocus => "Detail attention",
        DiagnosticCategory::ConceptualReasoning => "Conceptual thinking",
        DiagnosticCategory::ReadingComprehension => "Reading comprehension",
    }
}

/// Lowest-accuracy category; ties go to the earliest category
pub fn weakest_category(metrics: &DiagnosticMetrics) -> Option<(DiagnosticCategory, f64)> {
    metrics
        .accuracy_by_category
        .iter()
        .fold(None, |weakest: Option<(DiagnosticCategory, f64)>, (&category, &accuracy)| {
            match weakest {
                Some((_, lowest)) if lowest <= accuracy => weakest,
                _ => Some((category, accuracy)),
            }
        })
}

pub fn generate(
    primary: StyleKey,
    metrics: &DiagnosticMetrics,
    params: &RecommendationParams,
) -> Guidance {
    if metrics.total_attempts == 0 {
        return Guidance::default();
    }

    let profile = style_profile(primary);
    let mut recommendations: Vec<String> =
        profile.recommendations.iter().map(|s| s.to_string()).collect();
    let mut strengths: Vec<String> = profile.strengths.iter().map(|s| s.to_string()).collect();

    if let Some((category, accuracy)) = weakest_category(metrics) {
        if accuracy < params.weak_category_threshold {
            recommendations.push(remedial_tip(category).to_string());
        }
    }

    for (&category, &accuracy) in &metrics.accuracy_by_category {
        if accuracy > params.strong_category_threshold {
            let label = category_strength(category);
            if !strengths.iter().any(|s| s == label) {
                strengths.push(label.to_string());
            }
        }
    }

    Guidance {
        recommendations,
        strengths,
    }
}
