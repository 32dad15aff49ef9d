use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatArbError {
    #[error("Invalid parameter: {field} — {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error("Misaligned series: {left} vs {right} — {reason}")]
    MisalignedSeries {
        left: String,
        right: String,
        reason: String,
    },

    #[error("Degenerate series: {0}")]
    DegenerateSeries(String),

    #[error("Empty series: {0}")]
    EmptySeries(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StatArbError {
    fn from(e: serde_json::Error) -> Self {
        StatArbError::Serialization(e.to_string())
    }
}
