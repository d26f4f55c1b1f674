use thiserror::Error;

/// Errors surfaced by the scoring and gap-analysis core
///
/// Degenerate inputs (empty skill sets, an empty vocabulary) are not errors;
/// they are handled by the scorer's pass-through path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl MatchError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
