use chrono::{DateTime, Utc};

/// Top-level error type for the Tally engine.
///
/// "No data" is not an error: operations that may find nothing to work on
/// return `Option` instead.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error("malformed observation from {source_id} at {timestamp}: {reason}")]
    MalformedObservation {
        source_id: String,
        timestamp: DateTime<Utc>,
        reason: String,
    },

    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("unknown weighting scheme: {name}")]
    UnknownWeighting { name: String },

    #[error("invalid config: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("seat projection failed: {reason}")]
    SeatProjection { reason: String },
}

impl TallyError {
    /// Whether this error stems from bad input data rather than from
    /// configuration or an external collaborator.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TallyError::MalformedObservation { .. }
                | TallyError::UnknownCategory { .. }
                | TallyError::Serialization(_)
        )
    }
}
