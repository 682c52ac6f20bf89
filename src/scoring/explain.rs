//! Natural-language explanations for dimension scores

use super::dimensions::Dimension;

/// Score at or above which a dimension reads as strong
const STRONG: f64 = 8.0;
/// Score at or above which a dimension reads as adequate
const ADEQUATE: f64 = 5.0;

/// Shown for every dimension of an empty graph
pub const EMPTY_GRAPH_EXPLANATION: &str = "Add components to see scores.";

fn template(dimension: Dimension, score: f64) -> &'static str {
    let band = if score >= STRONG {
        0
    } else if score >= ADEQUATE {
        1
    } else {
        2
    };
    let [strong, adequate, weak] = match dimension {
        Dimension::BuildSpeed => [
            "Minimal services and managed tooling enable rapid development.",
            "Moderate service count balances features with development speed.",
            "High service count will slow initial development.",
        ],
        Dimension::Complexity => [
            "Simple architecture with few moving parts.",
            "Moderate complexity -- manageable for a small team.",
            "Complex architecture with many interconnected services.",
        ],
        Dimension::Scalability => [
            "Well-positioned for 10x-100x traffic growth.",
            "Can handle moderate growth with some refactoring.",
            "Will likely need architectural changes to scale.",
        ],
        Dimension::Cost => [
            "Low infrastructure cost at current scale.",
            "Moderate infrastructure spend.",
            "High monthly infrastructure cost -- consider cheaper alternatives.",
        ],
        Dimension::OpsBurden => [
            "Serverless/managed -- minimal operational maintenance.",
            "Some operational work required for updates and monitoring.",
            "Significant DevOps effort needed for this stack.",
        ],
        Dimension::LockIn => [
            "Portable stack with minimal vendor lock-in.",
            "Some vendor-specific patterns, but migration is feasible.",
            "Heavily locked into specific vendors -- migration would be costly.",
        ],
        Dimension::Reliability => [
            "Strong fault tolerance and data safety.",
            "Good for current scale but gaps at higher load.",
            "Reliability risks -- consider monitoring and redundancy.",
        ],
        Dimension::AiReadiness => [
            "Well-equipped for AI/ML features (vector search, async pipelines).",
            "Can support basic AI features with some additions.",
            "Would need significant changes to support AI features.",
        ],
    };
    match band {
        0 => strong,
        1 => adequate,
        _ => weak,
    }
}

/// Banded template for the score, followed by every rule hit
pub fn explain_dimension(dimension: Dimension, score: f64, rule_hits: &[String]) -> String {
    let mut text = template(dimension, score).to_string();
    for hit in rule_hits {
        text.push(' ');
        text.push_str(hit);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(
            explain_dimension(Dimension::Scalability, 8.0, &[]),
            "Well-positioned for 10x-100x traffic growth."
        );
        assert_eq!(
            explain_dimension(Dimension::Scalability, 7.9, &[]),
            "Can handle moderate growth with some refactoring."
        );
        assert_eq!(
            explain_dimension(Dimension::Scalability, 4.9, &[]),
            "Will likely need architectural changes to scale."
        );
    }

    #[test]
    fn test_rule_hits_appended() {
        let hits = vec!["First.".to_string(), "Second.".to_string()];
        assert_eq!(
            explain_dimension(Dimension::Cost, 9.0, &hits),
            "Low infrastructure cost at current scale. First. Second."
        );
    }
}
