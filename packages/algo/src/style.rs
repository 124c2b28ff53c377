//! Style resolution: thresholding dimension scores into style keys.

use serde::{Deserialize, Serialize};

use crate::types::{
    Dimension, DimensionScores, FocusLabel, PaceLabel, ProcessingLabel, StyleKey, NEUTRAL_SCORE,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleResolution {
    pub primary: StyleKey,
    pub secondary: Option<StyleKey>,
    /// Dimension flipped to produce `secondary`
    pub ambiguous_dimension: Option<Dimension>,
}

pub fn primary_style(scores: &DimensionScores) -> StyleKey {
    let processing = if scores.visual_analytical < NEUTRAL_SCORE {
        ProcessingLabel::Visual
    } else {
        ProcessingLabel::Analytical
    };
    let pace = if scores.fast_methodical < NEUTRAL_SCORE {
        PaceLabel::Fast
    } else {
        PaceLabel::Methodical
    };
    let focus = if scores.conceptual_detail < NEUTRAL_SCORE {
        FocusLabel::Conceptual
    } else {
        FocusLabel::Detail
    };
    StyleKey::new(processing, pace, focus)
}

/// Dimension closest to the neutral point and its distance from it.
/// Ties go to the earliest dimension in [`Dimension::ALL`].
pub fn closest_to_neutral(scores: &DimensionScores) -> (Dimension, f64) {
    let mut best = (Dimension::VisualAnalytical, f64::INFINITY);
    for dimension in Dimension::ALL {
        let distance = (scores.get(dimension) - NEUTRAL_SCORE).abs();
        if distance < best.1 {
            best = (dimension, distance);
        }
    }
    best
}

pub fn resolve(scores: &DimensionScores, ambiguity_threshold: f64) -> StyleResolution {
    let primary = primary_style(scores);
    let (dimension, distance) = closest_to_neutral(scores);

    if distance > ambiguity_threshold {
        return StyleResolution {
            primary,
            secondary: None,
            ambiguous_dimension: None,
        };
    }

    let secondary = primary.flip(dimension);
    debug_assert_ne!(secondary, primary);
    StyleResolution {
        primary,
        secondary: Some(secondary),
        ambiguous_dimension: Some(dimension),
    }
}
