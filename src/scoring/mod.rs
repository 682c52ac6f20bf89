//! Architecture scoring
//!
//! Scores a component graph on eight dimensions and combines them into an
//! overall score weighted by the team's development goal.
//!
//! # Scoring Formula
//!
//! ```text
//! raw[d]   = sum(weights[d]) / known_nodes        (cost is summed, not averaged)
//! raw[d]  += adjustments of every fired pattern rule
//! raw[d]  *= constraint modifiers (timeline, budget, team, traffic)
//!
//! score[d] = clamp(raw[d], 1, 10)                 buildSpeed, scalability,
//!                                                 reliability, aiReadiness
//! score[d] = clamp(10 - raw[d], 1, 10)            complexity, opsBurden, lockIn
//! cost     = clamp(10 - monthlyCost / divisor, 1, 10)
//!
//! overall  = sum(score[d] * goal_weight[d]) / sum(goal_weight)
//! ```
//!
//! All scores are rounded to one decimal place.

mod dimensions;
mod engine;
mod explain;
mod pattern_rules;
mod violations;

pub use dimensions::{Dimension, DimensionVector};
pub use engine::{
    clamp_score, goal_weights, overall_score, score_architecture, score_architecture_with,
    ScoreEngine, NEUTRAL_SCORE, SCORE_MAX, SCORE_MIN,
};
pub use explain::{explain_dimension, EMPTY_GRAPH_EXPLANATION};
pub use pattern_rules::{pattern_rule, PatternCheck, PatternRule, PATTERN_RULES};
pub use violations::{
    check_constraint_violations, ConstraintViolation, ViolationSeverity,
    HACKATHON_MIN_BUILD_SPEED, SOLO_MAX_SERVICES,
};
