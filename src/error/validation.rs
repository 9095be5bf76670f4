use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing URL (set --url or provide in config).")]
    MissingUrl,
    #[error("URL must not be empty.")]
    UrlEmpty,
    #[error("Total requests must be > 0, got {value}.")]
    RequestsNotPositive { value: i64 },
    #[error("Missing request count (set --requests or provide in config).")]
    MissingRequests,
    #[error("Concurrency must be > 0, got {value}.")]
    ConcurrencyNotPositive { value: i64 },
    #[error("Value {value} is too large for this platform.")]
    ValueTooLarge { value: i64 },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
