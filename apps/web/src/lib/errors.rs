use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl AppError {
    /// True for 401 responses, which routes may surface as a credential
    /// problem instead of a raw HTTP error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status: 401, .. })
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn unauthorized_detection_only_matches_401() {
        let unauthorized = AppError::Http {
            status: 401,
            message: "nope".to_string(),
        };
        let forbidden = AppError::Http {
            status: 403,
            message: "nope".to_string(),
        };

        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
        assert!(!AppError::Network("offline".to_string()).is_unauthorized());
    }

    #[test]
    fn display_includes_status_code() {
        let err = AppError::Http {
            status: 502,
            message: "bad gateway".to_string(),
        };

        assert_eq!(err.to_string(), "Request failed (502): bad gateway");
    }
}
