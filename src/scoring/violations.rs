//! Constraint-violation checks
//!
//! Hard violations break a stated constraint outright (over budget, an
//! avoided vendor in use); soft ones are mismatches worth flagging.

use crate::catalog::provider_for;
use crate::graph::Graph;
use crate::models::{BudgetLevel, Constraints};
use serde::Serialize;

/// Build-speed score below which a hackathon plan is considered unrealistic
pub const HACKATHON_MIN_BUILD_SPEED: f64 = 6.0;

/// Node count above which a solo developer is considered overloaded
pub const SOLO_MAX_SERVICES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationSeverity {
    Hard,
    Soft,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintViolation {
    pub constraint_id: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub suggested_action: String,
}

/// Evaluate every constraint check against a scored graph.
///
/// `monthly_cost` is the unadjusted dollar estimate and `build_speed` the
/// final build-speed score.
pub fn check_constraint_violations(
    graph: &Graph,
    constraints: &Constraints,
    monthly_cost: f64,
    build_speed: f64,
    low_budget_ceiling: f64,
) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();

    if constraints.budget_level == BudgetLevel::Low && monthly_cost > low_budget_ceiling {
        violations.push(ConstraintViolation {
            constraint_id: "budget".into(),
            severity: ViolationSeverity::Hard,
            message: format!(
                "Estimated ${}/mo exceeds low budget target (${})",
                monthly_cost, low_budget_ceiling
            ),
            suggested_action: "Remove optional services or switch to cheaper alternatives".into(),
        });
    }

    if constraints.is_hackathon() && build_speed < HACKATHON_MIN_BUILD_SPEED {
        violations.push(ConstraintViolation {
            constraint_id: "timeline".into(),
            severity: ViolationSeverity::Hard,
            message: "Architecture complexity too high for hackathon timeline".into(),
            suggested_action: "Reduce to 4-5 core services, prefer managed/serverless".into(),
        });
    }

    if constraints.is_solo() && graph.len() > SOLO_MAX_SERVICES {
        violations.push(ConstraintViolation {
            constraint_id: "team".into(),
            severity: ViolationSeverity::Soft,
            message: "Too many services for a solo developer".into(),
            suggested_action: "Consolidate services or choose managed alternatives".into(),
        });
    }

    for preferred in &constraints.preferred_providers {
        let used = graph
            .nodes()
            .iter()
            .any(|n| provider_for(&n.component_type) == preferred);
        if !used {
            violations.push(ConstraintViolation {
                constraint_id: format!("prefer_{}", preferred),
                severity: ViolationSeverity::Soft,
                message: format!("Preferred provider \"{}\" not used", preferred),
                suggested_action: format!("Consider adding a {} service", preferred),
            });
        }
    }

    for avoided in &constraints.avoid_providers {
        let found: Vec<&str> = graph
            .nodes()
            .iter()
            .filter(|n| provider_for(&n.component_type) == avoided)
            .map(|n| n.display_name())
            .collect();
        if !found.is_empty() {
            violations.push(ConstraintViolation {
                constraint_id: format!("avoid_{}", avoided),
                severity: ViolationSeverity::Hard,
                message: format!("\"{}\" is in your avoid list but used in architecture", avoided),
                suggested_action: format!("Replace {} with alternatives", found.join(", ")),
            });
        }
    }

    violations
}
