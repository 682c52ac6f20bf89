//! Architecture score engine
//!
//! Aggregates per-component weights, applies pattern rules and
//! constraint-driven modifiers, then normalizes everything to bounded
//! 1-10 scores with explanations and a goal-weighted overall score.

use super::dimensions::{Dimension, DimensionVector};
use super::explain::{explain_dimension, EMPTY_GRAPH_EXPLANATION};
use super::pattern_rules::{PatternRule, PATTERN_RULES};
use super::violations::check_constraint_violations;
use crate::catalog::weights_for;
use crate::config::ProjectConfig;
use crate::error::run_guarded;
use crate::graph::{normalize, Graph};
use crate::models::{
    BudgetLevel, Constraints, CostScore, DevExperienceGoal, DimensionScore, Dimensions, RawEdge,
    RawNode, ScoreResult, TrafficLevel,
};
use tracing::{debug, info, warn};

pub const SCORE_MIN: f64 = 1.0;
pub const SCORE_MAX: f64 = 10.0;
/// Every dimension of an empty graph
pub const NEUTRAL_SCORE: f64 = 5.0;

pub const HACKATHON_BUILD_SPEED_BOOST: f64 = 1.4;
pub const HACKATHON_SCALABILITY_DAMPING: f64 = 0.7;
pub const LONG_TIMELINE_RELIABILITY_BOOST: f64 = 1.3;
pub const LONG_TIMELINE_SCALABILITY_BOOST: f64 = 1.2;
pub const LONG_TIMELINE_BUILD_SPEED_DAMPING: f64 = 0.8;
pub const LOW_BUDGET_COST_PRESSURE: f64 = 1.5;
pub const SOLO_OPS_BURDEN_BOOST: f64 = 1.4;
pub const SOLO_COMPLEXITY_BOOST: f64 = 1.3;
pub const VERY_HIGH_TRAFFIC_SCALABILITY_BOOST: f64 = 1.4;

/// Overall-score weights per dimension, in [`Dimension::ALL`] order
pub fn goal_weights(goal: DevExperienceGoal) -> [f64; 8] {
    match goal {
        DevExperienceGoal::MvpSpeed => [3.0, 2.0, 0.5, 1.5, 2.0, 0.5, 1.0, 1.0],
        DevExperienceGoal::ScaleReady => [1.0, 1.0, 3.0, 1.0, 1.5, 1.5, 2.0, 1.0],
        DevExperienceGoal::Balanced => [1.5, 1.5, 1.5, 1.5, 1.5, 1.0, 1.5, 1.0],
    }
}

/// Clamp to the score range and round to one decimal
pub fn clamp_score(value: f64) -> f64 {
    round1(value.clamp(SCORE_MIN, SCORE_MAX))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rule hits collected per dimension, in rule registration order
type RuleHits = [Vec<String>; 8];

/// Score engine bound to a project configuration
pub struct ScoreEngine<'a> {
    config: &'a ProjectConfig,
}

impl<'a> ScoreEngine<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self { config }
    }

    /// Score a normalized graph
    pub fn score(&self, graph: &Graph, constraints: &Constraints) -> ScoreResult {
        if graph.is_empty() {
            debug!("Empty graph, returning neutral scores");
            return neutral_result();
        }

        let (mut raw, counted) = aggregate(graph);
        let monthly_cost = raw[Dimension::Cost];
        debug!(
            "Aggregated {} of {} nodes, base monthly cost ${}",
            counted,
            graph.len(),
            monthly_cost
        );

        let hits = self.apply_pattern_rules(graph, constraints, &mut raw);
        apply_modifiers(constraints, &mut raw);

        let divisor = self.config.scoring.effective_cost_divisor();
        let mut scores = DimensionVector::default();
        for d in Dimension::ALL {
            scores[d] = match d {
                Dimension::Cost => clamp_score(10.0 - monthly_cost / divisor),
                d if d.is_inverted() => clamp_score(10.0 - raw[d]),
                d => clamp_score(raw[d]),
            };
        }

        let overall = overall_score(&scores, constraints.dev_experience_goal);
        let violations = check_constraint_violations(
            graph,
            constraints,
            monthly_cost,
            scores[Dimension::BuildSpeed],
            self.config.scoring.low_budget_ceiling,
        );

        info!(
            "Architecture score {:.1} ({} nodes, {} violations)",
            overall,
            graph.len(),
            violations.len()
        );

        let dim = |d: Dimension| DimensionScore {
            score: scores[d],
            explanation: explain_dimension(d, scores[d], &hits[d.index()]),
            rule_hits: hits[d.index()].clone(),
        };

        ScoreResult {
            overall,
            dimensions: Dimensions {
                build_speed: dim(Dimension::BuildSpeed),
                complexity: dim(Dimension::Complexity),
                scalability: dim(Dimension::Scalability),
                estimated_cost: CostScore {
                    dimension: dim(Dimension::Cost),
                    monthly_cost,
                    adjusted_monthly_cost: raw[Dimension::Cost],
                },
                ops_burden: dim(Dimension::OpsBurden),
                lock_in_risk: dim(Dimension::LockIn),
                reliability: dim(Dimension::Reliability),
                ai_readiness: dim(Dimension::AiReadiness),
            },
            constraint_violations: violations.into_iter().map(|v| v.message).collect(),
        }
    }

    /// Effective adjustments of a rule after config overrides.
    ///
    /// Configured dimensions replace the built-in value; new dimensions are
    /// appended in name order.
    fn adjustments_for(&self, rule: &PatternRule) -> Vec<(Dimension, f64)> {
        let mut adjustments = rule.adjustments.to_vec();
        let Some(overrides) = self.config.pattern_adjustments(rule.id) else {
            return adjustments;
        };

        let mut keys: Vec<&String> = overrides.keys().collect();
        keys.sort();
        for key in keys {
            let value = overrides[key];
            match key.parse::<Dimension>() {
                Ok(d) => match adjustments.iter_mut().find(|(existing, _)| *existing == d) {
                    Some(slot) => slot.1 = value,
                    None => adjustments.push((d, value)),
                },
                Err(e) => warn!("Ignoring adjustment for rule {}: {}", rule.id, e),
            }
        }
        adjustments
    }

    fn apply_pattern_rules(
        &self,
        graph: &Graph,
        constraints: &Constraints,
        raw: &mut DimensionVector,
    ) -> RuleHits {
        let mut hits: RuleHits = Default::default();

        for rule in PATTERN_RULES {
            if !self.config.is_pattern_rule_enabled(rule.id) {
                debug!("Pattern rule {} disabled by config", rule.id);
                continue;
            }
            let fired = run_guarded("Pattern", rule.id, || (rule.check)(graph, constraints))
                .unwrap_or(false);
            if !fired {
                continue;
            }
            debug!("Pattern rule {} fired", rule.id);
            for (d, delta) in self.adjustments_for(rule) {
                raw[d] += delta;
                hits[d.index()].push(rule.explanation.to_string());
            }
        }

        hits
    }
}

/// Sum known component weights and average every dimension except cost
fn aggregate(graph: &Graph) -> (DimensionVector, usize) {
    let mut raw = DimensionVector::default();
    let mut counted = 0usize;

    for node in graph.nodes() {
        match weights_for(&node.component_type) {
            Some(w) => {
                raw += DimensionVector::from(w);
                counted += 1;
            }
            None => debug!(
                "Node {} has no weights for type '{}', skipping",
                node.id, node.component_type
            ),
        }
    }

    if counted > 0 {
        for d in Dimension::ALL {
            if d != Dimension::Cost {
                raw[d] /= counted as f64;
            }
        }
    }

    (raw, counted)
}

/// Constraint-driven multipliers, applied in a fixed order
fn apply_modifiers(constraints: &Constraints, raw: &mut DimensionVector) {
    if constraints.is_hackathon() {
        raw[Dimension::BuildSpeed] *= HACKATHON_BUILD_SPEED_BOOST;
        raw[Dimension::Scalability] *= HACKATHON_SCALABILITY_DAMPING;
    } else if constraints.is_long_timeline() {
        raw[Dimension::Reliability] *= LONG_TIMELINE_RELIABILITY_BOOST;
        raw[Dimension::Scalability] *= LONG_TIMELINE_SCALABILITY_BOOST;
        raw[Dimension::BuildSpeed] *= LONG_TIMELINE_BUILD_SPEED_DAMPING;
    }

    if constraints.budget_level == BudgetLevel::Low {
        raw[Dimension::Cost] *= LOW_BUDGET_COST_PRESSURE;
    }

    if constraints.is_solo() {
        raw[Dimension::OpsBurden] *= SOLO_OPS_BURDEN_BOOST;
        raw[Dimension::Complexity] *= SOLO_COMPLEXITY_BOOST;
    }

    if constraints.traffic_expectation == TrafficLevel::VeryHigh {
        raw[Dimension::Scalability] *= VERY_HIGH_TRAFFIC_SCALABILITY_BOOST;
    }
}

/// Weighted mean of the eight scores under the goal's profile
pub fn overall_score(scores: &DimensionVector, goal: DevExperienceGoal) -> f64 {
    let weights = goal_weights(goal);
    let mut total = 0.0;
    let mut weight_sum = 0.0;
    for (d, score) in scores.iter() {
        total += score * weights[d.index()];
        weight_sum += weights[d.index()];
    }
    if weight_sum > 0.0 {
        round1(total / weight_sum)
    } else {
        NEUTRAL_SCORE
    }
}

fn neutral_result() -> ScoreResult {
    let neutral = || DimensionScore {
        score: NEUTRAL_SCORE,
        explanation: EMPTY_GRAPH_EXPLANATION.to_string(),
        rule_hits: Vec::new(),
    };
    ScoreResult {
        overall: NEUTRAL_SCORE,
        dimensions: Dimensions {
            build_speed: neutral(),
            complexity: neutral(),
            scalability: neutral(),
            estimated_cost: CostScore {
                dimension: neutral(),
                monthly_cost: 0.0,
                adjusted_monthly_cost: 0.0,
            },
            ops_burden: neutral(),
            lock_in_risk: neutral(),
            reliability: neutral(),
            ai_readiness: neutral(),
        },
        constraint_violations: Vec::new(),
    }
}

/// Score an architecture with default configuration
pub fn score_architecture(
    nodes: &[RawNode],
    edges: &[RawEdge],
    constraints: &Constraints,
) -> ScoreResult {
    score_architecture_with(nodes, edges, constraints, &ProjectConfig::default())
}

/// Score an architecture with a project configuration
pub fn score_architecture_with(
    nodes: &[RawNode],
    edges: &[RawEdge],
    constraints: &Constraints,
    config: &ProjectConfig,
) -> ScoreResult {
    let graph = normalize(nodes, edges);
    ScoreEngine::new(config).score(&graph, constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, RawEdge};

    fn backends(n: usize) -> Vec<RawNode> {
        (0..n)
            .map(|i| RawNode::component(format!("be{}", i), "fastapi", Category::Backend))
            .collect()
    }

    #[test]
    fn test_empty_graph_is_neutral() {
        let result = score_architecture(&[], &[], &Constraints::default());
        assert_eq!(result.overall, 5.0);
        for (_, dim) in result.dimensions.iter() {
            assert_eq!(dim.score, 5.0);
            assert_eq!(dim.explanation, "Add components to see scores.");
            assert!(dim.rule_hits.is_empty());
        }
        assert_eq!(result.dimensions.estimated_cost.monthly_cost, 0.0);
        assert!(result.constraint_violations.is_empty());
    }

    #[test]
    fn test_single_component_scores() {
        // fastapi: speed 7, complexity 4, scale 7, cost 15, ops 5, lock 2, rel 7, ai 8
        let result = score_architecture(&backends(1), &[], &Constraints::default());
        let d = &result.dimensions;
        // minimal-stack: +2 speed, -1 complexity
        assert_eq!(d.build_speed.score, 9.0);
        assert_eq!(d.complexity.score, 7.0);
        assert_eq!(d.scalability.score, 7.0);
        assert_eq!(d.estimated_cost.monthly_cost, 15.0);
        assert_eq!(d.estimated_cost.dimension.score, 9.3);
        assert_eq!(d.ops_burden.score, 5.0);
        assert_eq!(d.lock_in_risk.score, 8.0);
        assert_eq!(d.reliability.score, 7.0);
        assert_eq!(d.ai_readiness.score, 8.0);
        assert_eq!(
            d.build_speed.rule_hits,
            vec!["Minimal stack enables rapid development".to_string()]
        );
    }

    #[test]
    fn test_too_many_services_vs_minimal_stack() {
        let result = score_architecture(&backends(9), &[], &Constraints::default());
        let hits = &result.dimensions.build_speed.rule_hits;
        assert!(hits.iter().any(|h| h.starts_with("Large number of services")));
        assert!(!hits.iter().any(|h| h.starts_with("Minimal stack")));
        // 7 - 2
        assert_eq!(result.dimensions.build_speed.score, 5.0);
        // 10 - (4 + 2)
        assert_eq!(result.dimensions.complexity.score, 4.0);

        let result = score_architecture(&backends(3), &[], &Constraints::default());
        let hits = &result.dimensions.build_speed.rule_hits;
        assert!(hits.iter().any(|h| h.starts_with("Minimal stack")));
        assert!(!hits.iter().any(|h| h.starts_with("Large number of services")));
    }

    #[test]
    fn test_unknown_types_excluded_from_average() {
        let mut nodes = backends(1);
        nodes.push(RawNode::component("x", "mainframe", Category::Backend));
        nodes.push(RawNode::new("blank"));
        let result = score_architecture(&nodes, &[], &Constraints::default());
        // Averages over the single known node; minimal-stack still counts all 3
        assert_eq!(result.dimensions.scalability.score, 7.0);
        assert_eq!(result.dimensions.estimated_cost.monthly_cost, 15.0);
    }

    #[test]
    fn test_modifiers_and_violations() {
        let nodes = vec![
            RawNode::component("be", "fastapi", Category::Backend),
            RawNode::component("ai", "anthropic", Category::Ml),
        ];
        let edges = vec![RawEdge::new("e1", "be", "ai")];
        let constraints = Constraints {
            budget_level: BudgetLevel::Low,
            ..Default::default()
        };
        let result = score_architecture(&nodes, &edges, &constraints);
        let cost = &result.dimensions.estimated_cost;
        assert_eq!(cost.monthly_cost, 75.0);
        // (75 + 20 sync penalty) * 1.5 low-budget pressure
        assert_eq!(cost.adjusted_monthly_cost, 142.5);
        assert_eq!(cost.dimension.score, 6.3);
        assert_eq!(
            result.constraint_violations,
            vec!["Estimated $75/mo exceeds low budget target ($50)".to_string()]
        );
    }

    #[test]
    fn test_bounds_with_extreme_constraints() {
        let mut nodes = backends(12);
        nodes.push(RawNode::component("k", "kafka", Category::Queue));
        nodes.push(RawNode::component("ec2", "aws-ec2", Category::Hosting));
        let constraints = Constraints {
            team_size: 1,
            timeline: "hackathon".into(),
            traffic_expectation: TrafficLevel::VeryHigh,
            uptime_target: 99.99,
            ..Default::default()
        };
        let result = score_architecture(&nodes, &[], &constraints);
        for (name, dim) in result.dimensions.iter() {
            assert!((1.0..=10.0).contains(&dim.score), "{} out of bounds", name);
        }
        assert!((1.0..=10.0).contains(&result.overall));
    }

    #[test]
    fn test_goal_profiles_change_overall() {
        let nodes = vec![
            RawNode::component("fe", "nextjs", Category::Frontend),
            RawNode::component("be", "spring", Category::Backend),
            RawNode::component("db", "postgresql", Category::Database),
        ];
        let mvp = Constraints {
            dev_experience_goal: DevExperienceGoal::MvpSpeed,
            ..Default::default()
        };
        let scale = Constraints {
            dev_experience_goal: DevExperienceGoal::ScaleReady,
            ..Default::default()
        };
        let a = score_architecture(&nodes, &[], &mvp);
        let b = score_architecture(&nodes, &[], &scale);
        assert_eq!(a.dimensions, b.dimensions);
        assert_ne!(a.overall, b.overall);
    }

    #[test]
    fn test_config_overrides_rules() {
        let mut config = ProjectConfig::default();
        config.scoring.rules.insert(
            "minimal-stack".into(),
            crate::config::PatternRuleOverride {
                enabled: Some(false),
                ..Default::default()
            },
        );
        let result =
            score_architecture_with(&backends(1), &[], &Constraints::default(), &config);
        assert_eq!(result.dimensions.build_speed.score, 7.0);
        assert!(result.dimensions.build_speed.rule_hits.is_empty());

        let mut config = ProjectConfig::default();
        config.scoring.rules.insert(
            "minimal-stack".into(),
            crate::config::PatternRuleOverride {
                enabled: None,
                adjustments: [("buildSpeed".to_string(), 1.0), ("ai_readiness".to_string(), 1.0)]
                    .into_iter()
                    .collect(),
            },
        );
        let result =
            score_architecture_with(&backends(1), &[], &Constraints::default(), &config);
        assert_eq!(result.dimensions.build_speed.score, 8.0);
        assert_eq!(result.dimensions.ai_readiness.score, 9.0);
        // complexity keeps its built-in -1
        assert_eq!(result.dimensions.complexity.score, 7.0);
    }

    #[test]
    fn test_cost_divisor_config() {
        let mut config = ProjectConfig::default();
        config.scoring.cost_divisor = 5.0;
        let result =
            score_architecture_with(&backends(1), &[], &Constraints::default(), &config);
        assert_eq!(result.dimensions.estimated_cost.dimension.score, 7.0);
    }

    #[test]
    fn test_deterministic() {
        let mut nodes = backends(3);
        nodes.push(RawNode::component("ai", "openai", Category::Ml));
        nodes.push(RawNode::component("db", "mongodb", Category::Database));
        let edges = vec![RawEdge::new("e1", "be0", "ai"), RawEdge::new("e2", "be1", "db")];
        let c = Constraints::default();
        let first = score_architecture(&nodes, &edges, &c);
        for _ in 0..5 {
            assert_eq!(score_architecture(&nodes, &edges, &c), first);
        }
    }
}
