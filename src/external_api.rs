pub mod blog_api;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    multipart, Client, StatusCode, Url,
};
use thiserror::Error;
use tracing::debug;

const APPLICATION_JSON: &str = "application/json";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Api error {0}: {1}")]
    Api(StatusCode, String),
    #[error("Deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("URL parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to retrieve the user's directories")]
    NotFoundUserDir,
    #[error("Couldn't parse the config at path: <{0}>")]
    NotParseConfig(String),
    #[error("The string entered must be a URL")]
    InvalidUrl,
    #[error("No base API url: pass --base-url, set POSTBOARD_BASE_API_URL or run `postboard init`")]
    MissingBaseUrl,
    #[error("The ID must be greater than zero")]
    IdMoreThenZero,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Invalid argument for {0}: {1}")]
    InvalidArgument(String, String),
}

/// Basic api client
pub struct BaseApiClient {
    client: Client,
    pub base_url: Url,
}

impl BaseApiClient {
    /// Endpoints are appended to the base url, so a base with a path prefix keeps it
    fn build_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}{}", base, endpoint)).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api(status, body));
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => Err(ApiError::Serde(e)),
        }
    }

    /// Only the status matters, the body is discarded
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ApiError::Api(status, body));
        }
        Ok(())
    }

    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .default_headers(Self::get_default_headers())
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        let parse_base_url = Url::parse(base_url).map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(Self {
            client,
            base_url: parse_base_url,
        })
    }

    pub async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint)?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    pub async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        multipart: multipart::Form,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint)?;
        debug!(%url, "POST multipart");
        let response = self.client.post(url).multipart(multipart).send().await?;
        self.handle_response(response).await
    }

    pub async fn put_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint)?;
        debug!(%url, "PUT");
        let response = self.client.put(url).json(body).send().await?;
        self.handle_response(response).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let url = self.build_url(endpoint)?;
        debug!(%url, "DELETE");
        let response = self.client.delete(url).send().await?;
        self.handle_empty_response(response).await
    }
}
