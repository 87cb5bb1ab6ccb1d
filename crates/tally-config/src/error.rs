use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the config shape.
    #[error("bad config source: {0}")]
    Figment(#[from] figment::Error),

    /// Loaded values that contradict each other or are out of range.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
