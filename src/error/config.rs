use thiserror::Error;

/// Raised when an environment variable is present but cannot be used.
///
/// Missing variables never produce this error; they fall back to defaults.
///
/// # Example
/// ```
/// use date_access::error::ConfigError;
///
/// let err = ConfigError::InvalidLogLevel("chatty".into());
/// assert_eq!(err.to_string(), "LOG_LEVEL: unknown level `chatty`");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("LOG_LEVEL: unknown level `{0}`")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_variable_and_value() {
        let err = ConfigError::InvalidLogLevel("loud".into());
        assert_eq!(err.to_string(), "LOG_LEVEL: unknown level `loud`");
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = ConfigError::InvalidLogLevel("x".into()).into();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidLogLevel("x".into()))
        );
    }
}
