//! Vendor and implementation-language lookups for component types

use std::fmt;

/// Provider reported for components that are not tied to a hosted vendor
pub const SELF_MANAGED: &str = "self-managed";

/// Hosting vendor behind a component type
pub fn provider_for(component_type: &str) -> &'static str {
    match component_type {
        "vercel" | "nextjs" | "vercel-deploy" => "vercel",
        "aws-ec2" | "s3" | "sqs" | "amazondynamodb" | "cloudfront" | "cognito" => "aws",
        "gcp-compute" | "cloudrun" | "pubsub" | "gcs" => "gcp",
        "azure-vm" | "azure-blob" => "azure",
        "cloudflare-cdn" | "cloudflare-r2" => "cloudflare",
        "supabase" | "supabase-auth" | "supabase-storage" => "supabase",
        "firebase" | "firebase-auth" => "google",
        "openai" => "openai",
        "anthropic" => "anthropic",
        "clerk" => "clerk",
        "auth0" => "auth0",
        "sentry" => "sentry",
        "datadog" => "datadog",
        "newrelic" => "newrelic",
        "mongodb" => "mongodb",
        _ => SELF_MANAGED,
    }
}

/// Implementation language of a server or framework component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Python,
    TypeScript,
    Go,
    Java,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Python => "Python",
            Language::TypeScript => "TypeScript",
            Language::Go => "Go",
            Language::Java => "Java",
        };
        f.write_str(name)
    }
}

pub fn language_for(component_type: &str) -> Option<Language> {
    match component_type {
        "fastapi" | "django" | "flask" => Some(Language::Python),
        "express" | "nestjs" | "nextjs" | "nodejs" => Some(Language::TypeScript),
        "go" => Some(Language::Go),
        "spring" => Some(Language::Java),
        _ => None,
    }
}
