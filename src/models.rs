//! Core data models for PreFlight
//!
//! Raw graph shapes as producers send them (canvas exports, AI-generated
//! plans, hand-written project files), project constraints, and the result
//! types returned by the scoring and lint engines.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Free-form per-node configuration (`{"rateLimiting": true, ...}`)
pub type ConfigMap = Map<String, Value>;

/// Closed set of component categories understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Database,
    Cache,
    Auth,
    Queue,
    Storage,
    Search,
    Ml,
    Monitoring,
    Hosting,
    Cicd,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Frontend,
        Category::Backend,
        Category::Database,
        Category::Cache,
        Category::Auth,
        Category::Queue,
        Category::Storage,
        Category::Search,
        Category::Ml,
        Category::Monitoring,
        Category::Hosting,
        Category::Cicd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Database => "database",
            Category::Cache => "cache",
            Category::Auth => "auth",
            Category::Queue => "queue",
            Category::Storage => "storage",
            Category::Search => "search",
            Category::Ml => "ml",
            Category::Monitoring => "monitoring",
            Category::Hosting => "hosting",
            Category::Cicd => "cicd",
        }
    }

    /// Parse a producer-supplied category string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canvas coordinates of a node
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The `data` sub-object most canvas producers attach to a node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fields the engine does not interpret, kept for round-tripping
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A component node as supplied by the caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NodeData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Node in the canvas shape: type and category carried in `data`
    pub fn component(id: impl Into<String>, component_type: &str, category: Category) -> Self {
        Self {
            id: id.into(),
            data: Some(NodeData {
                component_id: Some(component_type.to_string()),
                category: Some(category.as_str().to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn with_config(mut self, key: &str, value: Value) -> Self {
        self.config
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
        self
    }

    /// Display label, falling back to the node id
    pub fn label(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|d| d.label.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Optional sub-object some producers use for edge attributes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_async: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An integration link as supplied by the caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_async: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawEdge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn with_sync_async(mut self, mode: SyncMode) -> Self {
        self.sync_async = Some(mode.as_str().to_string());
        self
    }

    pub fn with_relationship(mut self, relationship: &str) -> Self {
        self.relationship = Some(relationship.to_string());
        self
    }
}

/// Call style of an integration link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    Sync,
    Async,
}

impl SyncMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncMode::Sync => "sync",
            SyncMode::Async => "async",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sync" => Some(SyncMode::Sync),
            "async" => Some(SyncMode::Async),
            _ => None,
        }
    }
}

// ── Constraints ──
//
// Constraint levels come from free-form editor state. Unrecognised values
// fall back to the default level instead of rejecting the whole project.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum BudgetLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl From<String> for BudgetLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "low" => BudgetLevel::Low,
            "high" => BudgetLevel::High,
            _ => BudgetLevel::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TrafficLevel {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl From<String> for TrafficLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "low" => TrafficLevel::Low,
            "high" => TrafficLevel::High,
            "very_high" => TrafficLevel::VeryHigh,
            _ => TrafficLevel::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DataSensitivity {
    #[default]
    Low,
    Medium,
    High,
}

impl From<String> for DataSensitivity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "medium" => DataSensitivity::Medium,
            "high" => DataSensitivity::High,
            _ => DataSensitivity::Low,
        }
    }
}

/// Which trade-off the overall score should favour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DevExperienceGoal {
    MvpSpeed,
    #[default]
    Balanced,
    ScaleReady,
}

impl From<String> for DevExperienceGoal {
    fn from(s: String) -> Self {
        match s.as_str() {
            "mvp_speed" => DevExperienceGoal::MvpSpeed,
            "scale_ready" => DevExperienceGoal::ScaleReady,
            _ => DevExperienceGoal::Balanced,
        }
    }
}

/// Timeline values with special meaning to the scorer
pub const TIMELINE_HACKATHON: &str = "hackathon";
pub const LONG_TIMELINES: &[&str] = &["3_months", "6_months", "production"];

/// Project constraints the architecture is evaluated against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraints {
    pub budget_level: BudgetLevel,
    pub team_size: u32,
    /// hackathon, 1_month, 3_months, 6_months, production
    pub timeline: String,
    pub traffic_expectation: TrafficLevel,
    pub data_volume: String,
    /// Percent, e.g. 99.9
    pub uptime_target: f64,
    pub region_count: u32,
    pub data_sensitivity: DataSensitivity,
    pub dev_experience_goal: DevExperienceGoal,
    pub preferred_providers: Vec<String>,
    pub avoid_providers: Vec<String>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            budget_level: BudgetLevel::Medium,
            team_size: 2,
            timeline: "1_month".to_string(),
            traffic_expectation: TrafficLevel::Medium,
            data_volume: "medium".to_string(),
            uptime_target: 99.0,
            region_count: 1,
            data_sensitivity: DataSensitivity::Low,
            dev_experience_goal: DevExperienceGoal::Balanced,
            preferred_providers: Vec::new(),
            avoid_providers: Vec::new(),
        }
    }
}

impl Constraints {
    pub fn is_hackathon(&self) -> bool {
        self.timeline == TIMELINE_HACKATHON
    }

    pub fn is_long_timeline(&self) -> bool {
        LONG_TIMELINES.contains(&self.timeline.as_str())
    }

    pub fn is_solo(&self) -> bool {
        self.team_size == 1
    }
}

// ── Scoring output ──

/// One bounded dimension score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub score: f64,
    pub explanation: String,
    pub rule_hits: Vec<String>,
}

/// Cost dimension, additionally carrying the dollar estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostScore {
    #[serde(flatten)]
    pub dimension: DimensionScore,
    /// Sum of per-component monthly cost before rule adjustments
    pub monthly_cost: f64,
    /// Monthly cost after pattern-rule penalties and budget pressure
    pub adjusted_monthly_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub build_speed: DimensionScore,
    pub complexity: DimensionScore,
    pub scalability: DimensionScore,
    pub estimated_cost: CostScore,
    pub ops_burden: DimensionScore,
    pub lock_in_risk: DimensionScore,
    pub reliability: DimensionScore,
    pub ai_readiness: DimensionScore,
}

impl Dimensions {
    /// All eight dimension scores in reporting order, keyed by output name
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &DimensionScore)> {
        [
            ("buildSpeed", &self.build_speed),
            ("complexity", &self.complexity),
            ("scalability", &self.scalability),
            ("estimatedCost", &self.estimated_cost.dimension),
            ("opsBurden", &self.ops_burden),
            ("lockInRisk", &self.lock_in_risk),
            ("reliability", &self.reliability),
            ("aiReadiness", &self.ai_readiness),
        ]
        .into_iter()
    }
}

/// Complete result of scoring an architecture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall: f64,
    pub dimensions: Dimensions,
    pub constraint_violations: Vec<String>,
}

// ── Lint output ──

/// Lint issue severity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Sort rank: error 0, warning 1, info 2
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" | "err" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            other => Err(format!(
                "unknown severity '{}', expected error, warning or info",
                other
            )),
        }
    }
}

/// Area a lint rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintCategory {
    Security,
    Performance,
    Reliability,
    Cost,
    Dx,
    Ai,
    Structural,
}

impl LintCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LintCategory::Security => "security",
            LintCategory::Performance => "performance",
            LintCategory::Reliability => "reliability",
            LintCategory::Cost => "cost",
            LintCategory::Dx => "dx",
            LintCategory::Ai => "ai",
            LintCategory::Structural => "structural",
        }
    }
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a lint issue points at
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintTarget {
    pub node_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edge_ids: Vec<String>,
    pub message: String,
}

impl LintTarget {
    pub fn new(node_ids: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            node_ids,
            edge_ids: Vec::new(),
            message: message.into(),
        }
    }

    /// Graph-wide target with no specific node
    pub fn global(message: impl Into<String>) -> Self {
        Self::new(Vec::new(), message)
    }

    pub fn with_edges(mut self, edge_ids: Vec<String>) -> Self {
        self.edge_ids = edge_ids;
        self
    }
}

/// A detected anti-pattern, recomputed on every evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintIssue {
    pub rule_id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub category: LintCategory,
    pub targets: LintTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
    #[serde(default)]
    pub auto_fixable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("backend"), Some(Category::Backend));
        assert_eq!(Category::parse(" ML "), Some(Category::Ml));
        assert_eq!(Category::parse("payments"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_unknown_constraint_levels_use_defaults() {
        let c: Constraints =
            serde_json::from_str(r#"{"devExperienceGoal":"ship_it","teamSize":3}"#).unwrap();
        assert_eq!(c.dev_experience_goal, DevExperienceGoal::Balanced);
        assert_eq!(c.team_size, 3);

        let c: Constraints = serde_json::from_str(
            r#"{"trafficExpectation":"extreme","budgetLevel":"free","dataSensitivity":"secret"}"#,
        )
        .unwrap();
        assert_eq!(c.traffic_expectation, TrafficLevel::Medium);
        assert_eq!(c.budget_level, BudgetLevel::Medium);
        assert_eq!(c.data_sensitivity, DataSensitivity::Low);

        let c: Constraints = serde_json::from_str(
            r#"{"trafficExpectation":"very_high","devExperienceGoal":"scale_ready"}"#,
        )
        .unwrap();
        assert_eq!(c.traffic_expectation, TrafficLevel::VeryHigh);
        assert_eq!(c.dev_experience_goal, DevExperienceGoal::ScaleReady);
        assert_eq!(
            serde_json::to_value(c.traffic_expectation).unwrap(),
            serde_json::json!("very_high")
        );
    }

    #[test]
    fn test_severity_rank_order() {
        assert!(Severity::Error.rank() < Severity::Warning.rank());
        assert!(Severity::Warning.rank() < Severity::Info.rank());
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn test_constraints_defaults_from_partial_json() {
        let c: Constraints =
            serde_json::from_str(r#"{"budgetLevel": "low", "teamSize": 1}"#).unwrap();
        assert_eq!(c.budget_level, BudgetLevel::Low);
        assert_eq!(c.team_size, 1);
        assert_eq!(c.traffic_expectation, TrafficLevel::Medium);
        assert_eq!(c.dev_experience_goal, DevExperienceGoal::Balanced);
        assert!(c.is_solo());
        assert!(!c.is_hackathon());
    }

    #[test]
    fn test_raw_node_round_trips_unknown_fields() {
        let json = r#"{"id":"n1","type":"custom","selected":true,
            "data":{"componentId":"fastapi","category":"backend","width":120}}"#;
        let node: RawNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.extra.get("selected"), Some(&Value::Bool(true)));
        let data = node.data.as_ref().unwrap();
        assert_eq!(data.component_id.as_deref(), Some("fastapi"));
        assert!(data.extra.contains_key("width"));

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["selected"], Value::Bool(true));
        assert_eq!(back["data"]["width"], 120);
    }

    #[test]
    fn test_long_timeline() {
        let mut c = Constraints::default();
        assert!(!c.is_long_timeline());
        c.timeline = "production".into();
        assert!(c.is_long_timeline());
    }
}
