use thiserror::Error;

/// Result type alias for drnu operations
pub type Result<T> = std::result::Result<T, DrNuError>;

/// Failure talking to the catalog API
///
/// Both transport failures and undecodable payloads surface as the same
/// API-level error, regardless of whether the payload came from the network
/// or from the local cache.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request failed (connect error, timeout, non-2xx status)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that can occur during drnu operations
#[derive(Error, Debug)]
pub enum DrNuError {
    /// Catalog API error
    #[error("DR NU API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Rendering command output failed
    #[error("Failed to format output: {0}")]
    Output(#[from] serde_json::Error),

    /// Requested catalog item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

impl From<reqwest::Error> for DrNuError {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(ApiError::Transport(err))
    }
}

impl DrNuError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_)
            | Self::Config(_)
            | Self::Toml(_)
            | Self::TomlSerialize(_) => 2,
            Self::Api(_) => 3,
            Self::NotFound(_) => 4,
            Self::Io(_) | Self::Env(_) | Self::Output(_) => 1,
        }
    }

    /// Create an invalid argument error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_is_api_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: DrNuError = ApiError::Decode(json_err).into();

        assert!(matches!(err, DrNuError::Api(ApiError::Decode(_))));
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().starts_with("DR NU API error"));
    }

    #[test]
    fn test_output_serialization_error_is_not_api_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: DrNuError = json_err.into();

        assert!(matches!(err, DrNuError::Output(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(!err.to_string().contains("DR NU API error"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DrNuError::invalid("bad").exit_code(), 2);
        assert_eq!(DrNuError::NotFound("x".into()).exit_code(), 4);
        assert_eq!(DrNuError::Config("x".into()).exit_code(), 2);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(DrNuError::from(io).exit_code(), 1);
    }
}
