use async_trait::async_trait;
use portfolio_contact::{ContactResponse, SubmissionRequest};
use thiserror::Error;

/// Status and decoded body of a `/api/contact` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ContactResponse,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to contact endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Transport used by [`ContactForm::submit`](crate::ContactForm::submit).
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn post_contact(&self, request: &SubmissionRequest) -> Result<ApiResponse, ApiError>;
}

/// `ContactApi` over HTTP.
///
/// No request timeout is set: a submission stays pending until the
/// connection resolves or fails.
#[derive(Clone, Debug)]
pub struct HttpContactApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactApi {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl AsRef<str>) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/contact", base_url.as_ref().trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn post_contact(&self, request: &SubmissionRequest) -> Result<ApiResponse, ApiError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status().as_u16();

        // Only the status decides the outcome, an unreadable body is not a failure.
        let body = match response.json::<ContactResponse>().await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(error = %err, status, "Contact response body is not JSON");
                ContactResponse::default()
            }
        };

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url() {
        assert_eq!(
            HttpContactApi::new("http://localhost:3000/").endpoint(),
            "http://localhost:3000/api/contact"
        );
        assert_eq!(
            HttpContactApi::new("https://alexchen.dev").endpoint(),
            "https://alexchen.dev/api/contact"
        );
    }

    #[test]
    fn success_is_any_2xx() {
        let response = |status| ApiResponse {
            status,
            body: ContactResponse::default(),
        };

        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(400).is_success());
        assert!(!response(500).is_success());
    }
}
