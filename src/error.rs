use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Team not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// User-visible failure category of a team-matches view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Decode,
    NotFound,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_) => ErrorKind::Network,
            AppError::Decode(_) => ErrorKind::Decode,
            AppError::NotFound(_) => ErrorKind::NotFound,
            // Config problems abort before any view mounts
            AppError::Config(_) => ErrorKind::Network,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Network(s)
            | AppError::Decode(s)
            | AppError::NotFound(s)
            | AppError::Config(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(AppError::Network("x".into()).kind(), ErrorKind::Network);
        assert_eq!(AppError::Decode("x".into()).kind(), ErrorKind::Decode);
        assert_eq!(AppError::NotFound("x".into()).kind(), ErrorKind::NotFound);
    }

    #[test]
    fn display_includes_detail() {
        let err = AppError::NotFound("XYZ".to_string());
        assert_eq!(err.to_string(), "Team not found: XYZ");
        assert_eq!(err.detail(), "XYZ");
    }
}
