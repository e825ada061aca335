use thiserror::Error;

/// Configuration errors for callers that build a [`crate::RunConfig`] by hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("days must be within {min}..={max}, got {value}")]
    DaysOutOfRange { value: i64, min: i64, max: i64 },
    #[error("host cannot be empty")]
    EmptyHost,
    #[error("currency selection cannot be empty")]
    EmptySelection,
}

/// A 200 response whose body does not match the daily payload schema.
///
/// Unlike transport and status failures this is not recovered: it aborts the run.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed payload from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raised by the legacy aggregation mode only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("no payload available for {url}")]
    AbsentPayload { url: String },
}

/// Top-level error type for a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}
