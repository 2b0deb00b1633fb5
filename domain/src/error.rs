/// Raised while building a job spec, before anything is logged or forwarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobSpecError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: String, reason: String },
}

impl JobSpecError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::InvalidParameter { field, .. } => field,
        }
    }
}
