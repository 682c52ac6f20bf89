//! Built-in component table
//!
//! Every known component type with its display label, category and the eight
//! raw contributions it makes to the architecture score. `cost` is an
//! approximate monthly dollar figure; every other value is on a 0-10 scale.

use crate::models::Category;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Raw per-component contributions, before aggregation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentWeights {
    pub build_speed: f64,
    pub complexity: f64,
    pub scalability: f64,
    pub cost: f64,
    pub ops_burden: f64,
    pub lock_in: f64,
    pub reliability: f64,
    pub ai_readiness: f64,
}

impl ComponentWeights {
    /// Values in dimension order: build speed, complexity, scalability, cost,
    /// ops burden, lock-in, reliability, AI readiness
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.build_speed,
            self.complexity,
            self.scalability,
            self.cost,
            self.ops_burden,
            self.lock_in,
            self.reliability,
            self.ai_readiness,
        ]
    }
}

/// One row of the component table
#[derive(Debug)]
pub struct ComponentSpec {
    pub component_type: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub color: &'static str,
    pub weights: ComponentWeights,
}

const DEFAULT_COLOR: &str = "#6b7280";

const fn spec(
    component_type: &'static str,
    label: &'static str,
    category: Category,
    color: &'static str,
    w: [f64; 8],
) -> ComponentSpec {
    ComponentSpec {
        component_type,
        label,
        category,
        color,
        weights: ComponentWeights {
            build_speed: w[0],
            complexity: w[1],
            scalability: w[2],
            cost: w[3],
            ops_burden: w[4],
            lock_in: w[5],
            reliability: w[6],
            ai_readiness: w[7],
        },
    }
}

use Category::*;

pub static COMPONENTS: &[ComponentSpec] = &[
    // Backend
    spec("fastapi", "FastAPI", Backend, "#009688", [7.0, 4.0, 7.0, 15.0, 5.0, 2.0, 7.0, 8.0]),
    spec("express", "Express", Backend, "#000000", [8.0, 3.0, 6.0, 10.0, 4.0, 1.0, 6.0, 5.0]),
    spec("nodejs", "Node.js", Backend, "#339933", [8.0, 3.0, 6.0, 10.0, 4.0, 1.0, 6.0, 5.0]),
    spec("django", "Django", Backend, "#092e20", [6.0, 5.0, 7.0, 15.0, 5.0, 2.0, 8.0, 6.0]),
    spec("flask", "Flask", Backend, "#000000", [8.0, 3.0, 5.0, 10.0, 4.0, 1.0, 5.0, 7.0]),
    spec("spring", "Spring", Backend, "#6db33f", [4.0, 7.0, 9.0, 20.0, 6.0, 2.0, 9.0, 4.0]),
    spec("nestjs", "NestJS", Backend, "#e0234e", [6.0, 5.0, 7.0, 12.0, 4.0, 2.0, 7.0, 5.0]),
    spec("go", "Go", Backend, "#00add8", [5.0, 5.0, 9.0, 8.0, 5.0, 1.0, 8.0, 4.0]),
    // Frontend
    spec("react", "React", Frontend, "#61dafb", [7.0, 2.0, 7.0, 0.0, 2.0, 1.0, 7.0, 4.0]),
    spec("nextjs", "Next.js", Frontend, "#000000", [8.0, 3.0, 8.0, 0.0, 2.0, 2.0, 8.0, 5.0]),
    spec("vue", "Vue", Frontend, "#42b883", [8.0, 2.0, 7.0, 0.0, 2.0, 1.0, 7.0, 3.0]),
    spec("svelte", "Svelte", Frontend, "#ff3e00", [8.0, 2.0, 6.0, 0.0, 2.0, 2.0, 6.0, 3.0]),
    spec("angular", "Angular", Frontend, "#dd0031", [5.0, 6.0, 8.0, 0.0, 3.0, 3.0, 8.0, 3.0]),
    spec("solid", "SolidJS", Frontend, "#2c4f7c", [7.0, 2.0, 7.0, 0.0, 2.0, 2.0, 6.0, 3.0]),
    spec("astro", "Astro", Frontend, "#ff5d01", [8.0, 2.0, 7.0, 0.0, 1.0, 2.0, 7.0, 3.0]),
    // Database
    spec("postgresql", "PostgreSQL", Database, "#4169e1", [5.0, 4.0, 8.0, 15.0, 5.0, 1.0, 9.0, 5.0]),
    spec("mysql", "MySQL", Database, "#4479a1", [5.0, 4.0, 7.0, 12.0, 5.0, 1.0, 8.0, 3.0]),
    spec("mongodb", "MongoDB", Database, "#47a248", [7.0, 3.0, 8.0, 25.0, 3.0, 3.0, 7.0, 6.0]),
    spec("supabase", "Supabase", Database, "#3ecf8e", [8.0, 2.0, 7.0, 25.0, 1.0, 4.0, 7.0, 5.0]),
    spec("firebase", "Firebase", Database, "#ffca28", [9.0, 2.0, 7.0, 25.0, 1.0, 6.0, 7.0, 4.0]),
    spec("redis", "Redis", Database, "#dc382d", [6.0, 3.0, 9.0, 10.0, 3.0, 1.0, 7.0, 3.0]),
    spec("amazondynamodb", "DynamoDB", Database, "#4053d6", [6.0, 4.0, 10.0, 20.0, 2.0, 7.0, 9.0, 3.0]),
    spec("planetscale", "PlanetScale", Database, "#000000", [7.0, 2.0, 8.0, 29.0, 1.0, 4.0, 8.0, 3.0]),
    // Hosting
    spec("vercel", "Vercel", Hosting, "#000000", [10.0, 1.0, 8.0, 20.0, 0.0, 4.0, 9.0, 3.0]),
    spec("netlify", "Netlify", Hosting, "#00c7b7", [9.0, 1.0, 7.0, 19.0, 0.0, 3.0, 8.0, 2.0]),
    spec("aws-ec2", "AWS EC2", Hosting, "#ff9900", [3.0, 7.0, 10.0, 50.0, 8.0, 5.0, 9.0, 5.0]),
    spec("gcp-compute", "GCP Compute Engine", Hosting, "#4285f4", [3.0, 7.0, 10.0, 45.0, 8.0, 5.0, 9.0, 6.0]),
    spec("azure-vm", "Azure VM", Hosting, "#0078d4", [3.0, 7.0, 10.0, 48.0, 8.0, 5.0, 9.0, 5.0]),
    spec("railway", "Railway", Hosting, "#0b0d0e", [9.0, 1.0, 6.0, 5.0, 1.0, 2.0, 7.0, 3.0]),
    spec("render", "Render", Hosting, "#46e3b7", [9.0, 1.0, 6.0, 7.0, 1.0, 2.0, 7.0, 3.0]),
    spec("cloudrun", "Cloud Run", Hosting, "#4285f4", [7.0, 3.0, 9.0, 15.0, 2.0, 4.0, 8.0, 4.0]),
    // ML / AI
    spec("tensorflow", "TensorFlow", Ml, "#ff6f00", [4.0, 7.0, 7.0, 50.0, 6.0, 3.0, 7.0, 9.0]),
    spec("pytorch", "PyTorch", Ml, "#ee4c2c", [4.0, 7.0, 7.0, 50.0, 6.0, 3.0, 7.0, 9.0]),
    spec("opencv", "OpenCV", Ml, "#5c3ee8", [5.0, 5.0, 6.0, 0.0, 4.0, 1.0, 6.0, 6.0]),
    spec("scikitlearn", "scikit-learn", Ml, "#f7931e", [6.0, 4.0, 5.0, 0.0, 3.0, 1.0, 6.0, 7.0]),
    spec("huggingface", "Hugging Face", Ml, "#ffcc00", [7.0, 3.0, 7.0, 9.0, 3.0, 3.0, 7.0, 10.0]),
    spec("openai", "OpenAI", Ml, "#10a37f", [9.0, 1.0, 8.0, 50.0, 1.0, 4.0, 8.0, 10.0]),
    spec("anthropic", "Anthropic", Ml, "#d4a574", [9.0, 1.0, 8.0, 60.0, 1.0, 4.0, 8.0, 10.0]),
    // Auth
    spec("auth0", "Auth0", Auth, "#eb5424", [7.0, 3.0, 9.0, 23.0, 2.0, 5.0, 9.0, 0.0]),
    spec("clerk", "Clerk", Auth, "#6c47ff", [9.0, 1.0, 9.0, 25.0, 0.0, 5.0, 9.0, 0.0]),
    spec("firebase-auth", "Firebase Auth", Auth, "#ffca28", [8.0, 2.0, 8.0, 0.0, 1.0, 5.0, 8.0, 0.0]),
    spec("supabase-auth", "Supabase Auth", Auth, "#3ecf8e", [8.0, 2.0, 7.0, 0.0, 1.0, 4.0, 7.0, 0.0]),
    spec("jwt", "JWT", Auth, DEFAULT_COLOR, [6.0, 4.0, 6.0, 0.0, 5.0, 0.0, 5.0, 0.0]),
    spec("nextauth", "NextAuth", Auth, "#000000", [7.0, 4.0, 6.0, 0.0, 4.0, 2.0, 6.0, 0.0]),
    spec("cognito", "Cognito", Auth, "#ff9900", [5.0, 5.0, 9.0, 15.0, 3.0, 6.0, 9.0, 0.0]),
    // Cache
    spec("redis-cache", "Redis Cache", Cache, "#dc382d", [5.0, 3.0, 9.0, 10.0, 3.0, 1.0, 8.0, 2.0]),
    spec("memcached", "Memcached", Cache, "#000000", [5.0, 3.0, 8.0, 8.0, 3.0, 1.0, 7.0, 1.0]),
    spec("cloudflare-cdn", "Cloudflare CDN", Cache, "#f38020", [8.0, 1.0, 10.0, 20.0, 0.0, 2.0, 10.0, 0.0]),
    spec("cloudfront", "CloudFront", Cache, "#ff9900", [6.0, 3.0, 10.0, 15.0, 2.0, 5.0, 10.0, 0.0]),
    spec("varnish", "Varnish", Cache, DEFAULT_COLOR, [4.0, 5.0, 8.0, 0.0, 6.0, 1.0, 7.0, 0.0]),
    // Queue
    spec("rabbitmq", "RabbitMQ", Queue, "#ff6600", [4.0, 6.0, 8.0, 12.0, 6.0, 2.0, 8.0, 2.0]),
    spec("kafka", "Kafka", Queue, "#231f20", [3.0, 8.0, 10.0, 50.0, 8.0, 3.0, 9.0, 3.0]),
    spec("sqs", "SQS", Queue, "#ff9900", [6.0, 3.0, 10.0, 10.0, 1.0, 6.0, 10.0, 2.0]),
    spec("redis-pubsub", "Redis Pub/Sub", Queue, "#dc382d", [6.0, 3.0, 7.0, 0.0, 3.0, 1.0, 6.0, 1.0]),
    spec("pubsub", "Pub/Sub", Queue, "#4285f4", [6.0, 3.0, 10.0, 15.0, 1.0, 5.0, 9.0, 2.0]),
    // Storage
    spec("s3", "S3", Storage, "#569a31", [6.0, 3.0, 10.0, 5.0, 2.0, 3.0, 10.0, 2.0]),
    spec("gcs", "Cloud Storage", Storage, "#4285f4", [6.0, 3.0, 10.0, 5.0, 2.0, 4.0, 10.0, 2.0]),
    spec("azure-blob", "Azure Blob", Storage, "#0078d4", [5.0, 3.0, 10.0, 6.0, 2.0, 5.0, 10.0, 2.0]),
    spec("cloudflare-r2", "Cloudflare R2", Storage, "#f38020", [7.0, 2.0, 10.0, 3.0, 1.0, 2.0, 9.0, 2.0]),
    spec("supabase-storage", "Supabase Storage", Storage, "#3ecf8e", [9.0, 1.0, 7.0, 0.0, 0.0, 4.0, 7.0, 2.0]),
    // CI/CD
    spec("github-actions", "GitHub Actions", Cicd, "#2088ff", [8.0, 2.0, 8.0, 0.0, 2.0, 3.0, 8.0, 0.0]),
    spec("gitlab-ci", "GitLab CI", Cicd, "#fc6d26", [7.0, 3.0, 8.0, 0.0, 3.0, 3.0, 8.0, 0.0]),
    spec("circleci", "CircleCI", Cicd, "#343434", [7.0, 3.0, 8.0, 15.0, 2.0, 3.0, 8.0, 0.0]),
    spec("jenkins", "Jenkins", Cicd, "#d24939", [4.0, 7.0, 8.0, 10.0, 7.0, 1.0, 7.0, 0.0]),
    spec("vercel-deploy", "Vercel Deploy", Cicd, "#000000", [10.0, 1.0, 8.0, 0.0, 0.0, 4.0, 9.0, 0.0]),
    // Monitoring
    spec("sentry", "Sentry", Monitoring, "#362d59", [9.0, 1.0, 8.0, 26.0, 1.0, 2.0, 9.0, 0.0]),
    spec("datadog", "Datadog", Monitoring, "#632ca6", [6.0, 4.0, 10.0, 50.0, 3.0, 4.0, 10.0, 2.0]),
    spec("newrelic", "New Relic", Monitoring, "#008c99", [6.0, 4.0, 9.0, 25.0, 3.0, 4.0, 9.0, 1.0]),
    spec("prometheus", "Prometheus", Monitoring, "#e6522c", [5.0, 5.0, 8.0, 0.0, 5.0, 1.0, 8.0, 0.0]),
    spec("logrocket", "LogRocket", Monitoring, "#764abc", [8.0, 2.0, 7.0, 99.0, 1.0, 3.0, 7.0, 0.0]),
    // Search
    spec("elasticsearch", "Elasticsearch", Search, "#005571", [4.0, 6.0, 9.0, 45.0, 6.0, 3.0, 8.0, 5.0]),
    spec("algolia", "Algolia", Search, "#5468ff", [8.0, 2.0, 9.0, 50.0, 1.0, 5.0, 9.0, 3.0]),
    spec("meilisearch", "Meilisearch", Search, "#ff5caa", [7.0, 3.0, 7.0, 0.0, 3.0, 2.0, 7.0, 3.0]),
    spec("typesense", "Typesense", Search, "#d32f2f", [7.0, 3.0, 7.0, 0.0, 3.0, 2.0, 7.0, 3.0]),
];

fn index() -> &'static FxHashMap<&'static str, &'static ComponentSpec> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static ComponentSpec>> = OnceLock::new();
    INDEX.get_or_init(|| {
        COMPONENTS
            .iter()
            .map(|c| (c.component_type, c))
            .collect()
    })
}

/// Table row for a component type
pub fn component_spec(component_type: &str) -> Option<&'static ComponentSpec> {
    index().get(component_type).copied()
}

/// Raw contributions for a component type, if it is known
pub fn weights_for(component_type: &str) -> Option<&'static ComponentWeights> {
    component_spec(component_type).map(|c| &c.weights)
}

/// Monthly dollar estimate for a component type (0 when unknown)
pub fn monthly_cost_of(component_type: &str) -> f64 {
    weights_for(component_type).map(|w| w.cost).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_weights() {
        let w = weights_for("fastapi").unwrap();
        assert_eq!(w.build_speed, 7.0);
        assert_eq!(w.cost, 15.0);
        assert_eq!(w.ai_readiness, 8.0);
        assert_eq!(w.as_array()[3], 15.0);
    }

    #[test]
    fn test_unknown_type() {
        assert!(weights_for("cobol-mainframe").is_none());
        assert_eq!(monthly_cost_of("cobol-mainframe"), 0.0);
        assert!(weights_for("").is_none());
    }

    #[test]
    fn test_table_has_unique_types() {
        assert_eq!(index().len(), COMPONENTS.len());
    }

    #[test]
    fn test_fix_components_present() {
        for t in ["clerk", "redis-cache", "sentry", "fastapi", "sqs", "cloudflare-cdn", "github-actions"] {
            assert!(component_spec(t).is_some(), "missing {}", t);
        }
        assert_eq!(component_spec("redis-cache").unwrap().category, Category::Cache);
        assert_eq!(component_spec("clerk").unwrap().category, Category::Auth);
    }
}
