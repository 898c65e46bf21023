use thiserror::Error;

#[derive(Debug, Error)]
pub enum OktaError {
    #[error("Okta resource not found")]
    NotFound,
    #[error("Okta returned status code {0}")]
    UnexpectedStatus(u16),
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("api token is not a valid header value")]
    InvalidToken,
    #[error("request cancelled")]
    Cancelled,
    #[error("request deadline exceeded")]
    DeadlineExceeded,
    #[error("encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("config: {0}")]
    Config(String),
}

impl OktaError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub type OktaResult<T> = Result<T, OktaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguished_by_kind() {
        assert!(OktaError::NotFound.is_not_found());
        assert!(!OktaError::UnexpectedStatus(404).is_not_found());
        assert!(!OktaError::Cancelled.is_not_found());
    }

    #[test]
    fn unexpected_status_message_carries_code() {
        assert_eq!(
            OktaError::UnexpectedStatus(502).to_string(),
            "Okta returned status code 502"
        );
    }
}
