use std::time::Duration;

use client_logging::client_debug;
use serde::Deserialize;

use crate::{FailureKind, GenerationOutput, RequestId, ServiceError};

/// Path of the generation endpoint, relative to the service base URL.
const GENERATE_PATH: &str = "generate-qr/";

#[derive(Debug, Clone)]
pub struct RequestSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Wire shape of a successful generation response. Anything that does not
/// deserialize into this is a malformed response.
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    message: String,
    qr_code_url: String,
}

#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(
        &self,
        request_id: RequestId,
        target_url: &str,
    ) -> Result<GenerationOutput, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    endpoint: reqwest::Url,
    client: reqwest::Client,
}

impl HttpGenerationClient {
    pub fn new(base_url: &str, settings: RequestSettings) -> Result<Self, ServiceError> {
        let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), GENERATE_PATH);
        let endpoint = reqwest::Url::parse(&endpoint)
            .map_err(|err| ServiceError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = build_client(&settings)?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait::async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn generate(
        &self,
        request_id: RequestId,
        target_url: &str,
    ) -> Result<GenerationOutput, ServiceError> {
        let mut url = self.endpoint.clone();
        // The original page spliced the target into the query string without
        // escaping; append_pair percent-encodes it instead.
        url.query_pairs_mut().append_pair("url", target_url);

        client_debug!("request {} POST {}", request_id, url);
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: GenerationResponse = serde_json::from_slice(&body)
            .map_err(|err| ServiceError::new(FailureKind::MalformedResponse, err.to_string()))?;

        Ok(GenerationOutput {
            message: parsed.message,
            image_url: parsed.qr_code_url,
        })
    }
}

pub(crate) fn build_client(settings: &RequestSettings) -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| ServiceError::new(FailureKind::Transport, err.to_string()))
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    ServiceError::new(FailureKind::Transport, err.to_string())
}
