//! Property-Based Tests for the learning style classifier
//!
//! Tests the following invariants:
//! - Range: scores stay in [0, 1], confidence in [0, 100]
//! - Determinism: identical input yields identical output
//! - Style key shape: primary matches the three-segment pattern
//! - Secondary style differs from primary in exactly one label
//! - Serialization: JSON round-trip preserves every field

use proptest::prelude::*;

use diagnostic_style_algo::{
    classify, ComplexityIndicators, DiagnosticAttempt, DiagnosticCategory, DiagnosticQuestion,
    LearningStyleAnalysis,
};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_category() -> impl Strategy<Value = DiagnosticCategory> {
    prop_oneof![
        Just(DiagnosticCategory::VisualPattern),
        Just(DiagnosticCategory::AnalyticalLogic),
        Just(DiagnosticCategory::SpeedTest),
        Just(DiagnosticCategory::DetailFocus),
        Just(DiagnosticCategory::ConceptualReasoning),
        Just(DiagnosticCategory::ReadingComprehension),
    ]
}

fn arb_questions() -> impl Strategy<Value = Vec<DiagnosticQuestion>> {
    prop::collection::vec(
        (arb_category(), 0u64..=20_000, any::<bool>(), any::<bool>()),
        0..12,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (category, expected, visual, text))| DiagnosticQuestion {
                id: format!("q{i}"),
                diagnostic_category: category,
                expected_response_time: expected,
                complexity_indicators: ComplexityIndicators {
                    visual_elements: visual,
                    text_heavy: text,
                },
            })
            .collect()
    })
}

fn arb_attempt() -> impl Strategy<Value = DiagnosticAttempt> {
    (
        0usize..14,                           // question index, may not resolve
        0u64..=60_000,                        // response_time
        any::<bool>(),                        // is_correct
        any::<bool>(),                        // showed_hesitation
        any::<bool>(),                        // used_elimination
        any::<bool>(),                        // changed_answer
        proptest::option::of(1u8..=5u8),      // confidence_level
    )
        .prop_map(
            |(idx, response_time, is_correct, hesitation, elimination, changed, level)| {
                DiagnosticAttempt {
                    diagnostic_question_id: format!("q{idx}"),
                    response_time,
                    is_correct,
                    showed_hesitation: hesitation,
                    used_elimination: elimination,
                    changed_answer: changed,
                    confidence_level: level,
                }
            },
        )
}

fn arb_session() -> impl Strategy<Value = (Vec<DiagnosticAttempt>, Vec<DiagnosticQuestion>)> {
    (prop::collection::vec(arb_attempt(), 0..48), arb_questions())
}

fn in_unit(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

fn in_confidence(v: f64) -> bool {
    v.is_finite() && (0.0..=100.0).contains(&v)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_scores_and_confidence_in_range((attempts, questions) in arb_session()) {
        let analysis = classify(&attempts, &questions);

        prop_assert!(in_unit(analysis.scores.visual_analytical));
        prop_assert!(in_unit(analysis.scores.fast_methodical));
        prop_assert!(in_unit(analysis.scores.conceptual_detail));

        prop_assert!(in_confidence(analysis.confidence.visual_analytical));
        prop_assert!(in_confidence(analysis.confidence.fast_methodical));
        prop_assert!(in_confidence(analysis.confidence.conceptual_detail));
        prop_assert!(in_confidence(analysis.confidence.overall));

        prop_assert!(analysis.data_points.avg_response_time.is_finite());
        prop_assert!(analysis.data_points.accuracy_variance.is_finite());
    }

    #[test]
    fn prop_classification_is_deterministic((attempts, questions) in arb_session()) {
        let a = classify(&attempts, &questions);
        let b = classify(&attempts, &questions);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_primary_style_shape((attempts, questions) in arb_session()) {
        let key = classify(&attempts, &questions).primary_style.to_string();
        let parts: Vec<&str> = key.split('-').collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts[0] == "visual" || parts[0] == "analytical");
        prop_assert!(parts[1] == "fast" || parts[1] == "methodical");
        prop_assert!(parts[2] == "conceptual" || parts[2] == "detail");
    }

    #[test]
    fn prop_secondary_differs_in_one_label((attempts, questions) in arb_session()) {
        let analysis = classify(&attempts, &questions);
        if let Some(secondary) = analysis.secondary_style {
            let primary = analysis.primary_style.to_string();
            let secondary = secondary.to_string();
            let differing = primary
                .split('-')
                .zip(secondary.split('-'))
                .filter(|(a, b)| a != b)
                .count();
            prop_assert_eq!(differing, 1);
        }
    }

    #[test]
    fn prop_empty_session_never_has_guidance(questions in arb_questions()) {
        let analysis = classify(&[], &questions);
        prop_assert!(analysis.recommendations.is_empty());
        prop_assert!(analysis.strengths.is_empty());
        prop_assert!(analysis.secondary_style.is_none());
        prop_assert_eq!(analysis.confidence.overall, 0.0);
    }

    #[test]
    fn prop_json_round_trip((attempts, questions) in arb_session()) {
        let analysis = classify(&attempts, &questions);
        let json = serde_json::to_string(&analysis).unwrap();
        let back: LearningStyleAnalysis = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, analysis);
    }
}
