use store::StorageError;
use thiserror::Error;

/// Failure of a backend call, as seen by the pages.
///
/// `Clone` so that it can sit inside a Dioxus resource or signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Authentication failed. Please log in again.")]
    Unauthorized,
    #[error("You do not have permission to do that.")]
    Forbidden,
    #[error("The requested resource was not found.")]
    NotFound,
    #[error("Server error ({0}). Please try again later.")]
    Server(u16),
    /// The backend refused the request and said why.
    #[error("{0}")]
    Rejected(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Local storage error: {0}")]
    Storage(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Map a non-success HTTP status. `message` is the backend's own
    /// explanation, kept only for statuses without a dedicated variant.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            500..=599 => ApiError::Server(status),
            _ => ApiError::Rejected(
                message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("Request failed with status {status}")),
            ),
        }
    }

    /// Errors that mean the session is no longer usable.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::from_status(status.as_u16(), None)
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses() {
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, Some("nope".into())), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
        assert_eq!(ApiError::from_status(503, None), ApiError::Server(503));
        assert_eq!(
            ApiError::from_status(409, Some("A report for this date already exists".into())),
            ApiError::Rejected("A report for this date already exists".into())
        );
        assert_eq!(
            ApiError::from_status(400, Some("  ".into())),
            ApiError::Rejected("Request failed with status 400".into())
        );
    }

    #[test]
    fn only_unauthorized_is_an_auth_error() {
        assert!(ApiError::Unauthorized.is_auth());
        assert!(!ApiError::Forbidden.is_auth());
        assert!(!ApiError::Network("offline".into()).is_auth());
    }
}
