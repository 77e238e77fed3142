//! HTTP client for the module feed

use thiserror::Error;

use crate::domain::ModuleRecord;

/// Fixed message for HTTP-level failures; the status code itself is not
/// shown to the user.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load module data";

/// Fallback when an underlying error carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend returned status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body was not a module list: {0}")]
    Decode(#[source] reqwest::Error),
}

impl BackendError {
    /// The message surfaced in the error state. HTTP failures collapse to
    /// a fixed string; everything else uses its own message.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Status(_) => LOAD_FAILED_MESSAGE.to_string(),
            BackendError::Transport(err) | BackendError::Decode(err) => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    message
                }
            }
        }
    }
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full module list. Any non-2xx status is a failure; the
    /// body of failed responses is not inspected.
    pub async fn fetch_modules(&self) -> Result<Vec<ModuleRecord>, BackendError> {
        let url = format!("{}/api/modules", self.base_url);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        response
            .json::<Vec<ModuleRecord>>()
            .await
            .map_err(BackendError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_use_the_fixed_message() {
        let err = BackendError::Status(500);
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);

        let err = BackendError::Status(404);
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }
}
