//! Error types shared by the rule engines

use thiserror::Error;
use tracing::{error, warn};

/// Failure while evaluating a single pattern or lint rule.
///
/// Rule errors never escape the engines: the caller logs them and treats
/// the rule as not having fired.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("node '{node}' has invalid config field '{field}': expected {expected}")]
    InvalidConfig {
        node: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("rule '{rule}' failed: {reason}")]
    Evaluation { rule: &'static str, reason: String },
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;

/// Run a rule body, containing both returned errors and panics.
///
/// Returns `None` when the rule failed; the failure is logged against
/// `kind` and `id` so one faulty rule cannot abort an evaluation.
pub(crate) fn run_guarded<T>(
    kind: &str,
    id: &str,
    body: impl FnOnce() -> RuleResult<T>,
) -> Option<T> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(body)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            warn!("{} rule {} skipped: {}", kind, id, e);
            None
        }
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            error!("{} rule {} panicked: {}", kind, id, panic_msg);
            None
        }
    }
}
