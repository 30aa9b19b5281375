use thiserror::Error;

/// Failure reported by a [`LinguisticPrimitives`](crate::LinguisticPrimitives) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// The backend does not provide this capability at all.
    #[error("linguistic primitive unavailable: {capability}")]
    Unavailable { capability: &'static str },

    /// The capability exists but failed on this input.
    #[error("{operation} failed: {message}")]
    Failed {
        operation: &'static str,
        message: String,
    },
}

impl PrimitiveError {
    pub fn failed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Failed {
            operation,
            message: message.into(),
        }
    }
}

/// Failure contained at the boundary of a single analysis component.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentError {
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),

    #[error("benchmark catalogue is empty")]
    EmptyCatalogue,

    #[error("invalid benchmark '{name}': {reason}")]
    InvalidBenchmark { name: String, reason: String },
}
