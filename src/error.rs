use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unknown {kind}: {name}")]
    InvalidParameterName { kind: &'static str, name: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid grid reference: {0}")]
    InvalidGridReference(String),

    #[error("Grid reference digits must be even and between 2 and 10, got {0}")]
    InvalidDigits(u8),

    #[error("{solver} did not converge after {iterations} iterations")]
    NonConvergence {
        solver: &'static str,
        iterations: usize,
    },

    #[error("Parameter table error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ConversionError {
    pub(crate) fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        ConversionError::InvalidParameterName {
            kind,
            name: name.into(),
        }
    }
}
