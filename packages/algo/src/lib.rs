//! # diagnostic-style-algo - 诊断测验学习风格分类
//!
//! Turns one learner's diagnostic quiz attempts into a three-dimensional
//! behavioral profile:
//!
//! - **visual ↔ analytical**
//! - **fast ↔ methodical**
//! - **conceptual ↔ detail**
//!
//! together with per-dimension confidence, a primary and (when the profile
//! is ambiguous on one axis) a secondary style key, and guidance strings.
//!
//! ## 模块结构
//!
//! - [`metrics`] - 指标聚合 (accuracy by category, timing, behavioral flags)
//! - [`scoring`] - 三维评分 (bounded additive heuristics)
//! - [`confidence`] - 置信度 (sample size × signal availability)
//! - [`style`] - 风格判定 (primary / secondary style keys)
//! - [`recommendations`] - 学习建议 (style table + weak/strong categories)
//! - [`classifier`] - 完整流水线 (single and parallel batch classification)
//! - [`config`] - 可调参数
//! - [`validation`] - 严格输入校验
//! - [`sanitize`] - 数值保护
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use diagnostic_style_algo::{classify, DiagnosticAttempt, DiagnosticCategory, DiagnosticQuestion};
//!
//! let questions = vec![DiagnosticQuestion {
//!     id: "q1".to_string(),
//!     diagnostic_category: DiagnosticCategory::SpeedTest,
//!     expected_response_time: 4000,
//!     complexity_indicators: Default::default(),
//! }];
//! let attempts = vec![DiagnosticAttempt {
//!     diagnostic_question_id: "q1".to_string(),
//!     response_time: 1500,
//!     is_correct: true,
//!     showed_hesitation: false,
//!     used_elimination: false,
//!     changed_answer: false,
//!     confidence_level: Some(4),
//! }];
//!
//! let analysis = classify(&attempts, &questions);
//! assert!(analysis.scores.fast_methodical < 0.5);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod classifier;
pub mod confidence;
pub mod config;
pub mod metrics;
pub mod recommendations;
pub mod sanitize;
pub mod scoring;
pub mod style;
pub mod types;
pub mod validation;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

pub use classifier::{classify, classify_batch, classify_with_config, ClassificationRequest};
pub use config::{
    ClassifierConfig, ConfidenceParams, ConfigError, RecommendationParams, ScoringWeights,
};
pub use metrics::{aggregate, DiagnosticMetrics};
pub use recommendations::{style_profile, Guidance, StyleProfile};
pub use style::{resolve, StyleResolution};
pub use validation::{validate_input, InputError};
