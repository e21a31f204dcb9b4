use thiserror::Error;

/// Raised when a mark cannot be attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkError {
    #[error("Cannot mark a missing fault")]
    MissingFault,

    #[error("Strict marking rejects a null payload")]
    NullPayload,
}

/// Raised while building settings, never while walking a fault.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Max depth {value} is out of range ({min}..={max})")]
    MaxDepthOutOfRange { value: i64, min: u8, max: u8 },

    #[error("Unknown logging backend '{0}'. Valid backends: dummy, tracing, json")]
    UnknownBackend(String),

    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Environment error: {0}")]
    EnvError(String),
}
