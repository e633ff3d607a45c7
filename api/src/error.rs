use thiserror::Error;

/// Failure taxonomy for every call against the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server confirmed the credentials, token, or role are not accepted
    /// (401 or 403, or a rejected login).
    #[error("{message}")]
    Auth { status: u16, message: String },

    /// Any other non-2xx response, carrying the server-provided body text.
    #[error("request failed ({status}): {message}")]
    Request { status: u16, message: String },

    /// Transport failure: no response was received.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = if body.is_empty() {
            "Request failed".to_string()
        } else {
            body
        };
        match status {
            401 | 403 => ApiError::Auth { status, message },
            _ => ApiError::Request { status, message },
        }
    }

    /// True when the server confirmed the token or role is invalid. Transport
    /// failures are never auth failures, which is what lets hydration keep a
    /// persisted session across a network blip.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    /// True for a 403: the caller is signed in but the role may not access
    /// the resource. Screens show this as "admins only" rather than a
    /// generic error banner.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Auth { status: 403, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth { status, .. } | ApiError::Request { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses() {
        assert!(ApiError::from_status(401, "expired".into()).is_auth_failure());
        assert!(ApiError::from_status(403, "forbidden".into()).is_auth_failure());
        assert!(ApiError::from_status(403, "forbidden".into()).is_forbidden());
        assert!(!ApiError::from_status(401, "expired".into()).is_forbidden());
        assert!(!ApiError::from_status(500, "boom".into()).is_auth_failure());
        assert!(!ApiError::Network("timed out".into()).is_auth_failure());
    }

    #[test]
    fn carries_body_text() {
        let err = ApiError::from_status(422, "eventDate is required".into());
        assert_eq!(err.to_string(), "request failed (422): eventDate is required");

        let err = ApiError::from_status(500, String::new());
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("Request failed"));
    }
}
