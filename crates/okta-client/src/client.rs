use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, LINK};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::{ClientConfig, Environment};
use crate::constants::{AUTH_SCHEME, BASE_PATH};
use crate::context::RequestContext;
use crate::error::{OktaError, OktaResult};

/// Okta management API client.
///
/// Holds only read-only configuration and a `reqwest::Client`, so it is cheap
/// to clone and safe to share between tasks.
#[derive(Clone)]
pub struct OktaClient {
    token: String,
    organization: String,
    host: String,
    http: reqwest::Client,
}

/// A successful response as seen by the executor.
#[derive(Debug, Default)]
pub(crate) struct ApiResponse {
    /// `None` for 204, otherwise the full body (possibly empty).
    pub(crate) body: Option<Vec<u8>>,
    /// The server advertised a `rel="next"` link that was not followed.
    pub(crate) has_next_page: bool,
}

impl fmt::Debug for OktaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OktaClient")
            .field("token", &"<redacted>")
            .field("organization", &self.organization)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl OktaClient {
    /// `organization` is the Okta org id (e.g. `dev-1234`); pass an empty
    /// string to target the bare host. A default `reqwest::Client` is built
    /// when `http` is `None`.
    pub fn new(
        token: impl Into<String>,
        organization: impl Into<String>,
        environment: Environment,
        http: Option<reqwest::Client>,
    ) -> Self {
        Self {
            token: token.into(),
            organization: organization.into(),
            host: environment.host().to_string(),
            http: http.unwrap_or_default(),
        }
    }

    pub fn from_config(config: &ClientConfig, http: Option<reqwest::Client>) -> Self {
        Self::new(
            config.token.clone(),
            config.organization.clone(),
            config.environment,
            http,
        )
        .with_host(config.resolved_host())
    }

    /// Replaces the domain suffix. With an empty organization the host is
    /// used verbatim, so it may carry its own scheme (`http://127.0.0.1:8080`).
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn root_url(&self) -> String {
        if self.organization.is_empty() {
            format!("{}{}/", self.host, BASE_PATH)
        } else {
            format!("https://{}.{}{}/", self.organization, self.host, BASE_PATH)
        }
    }

    /// Joins path segments onto the root URL. Segments are not escaped.
    pub(crate) fn resource_url(&self, segments: &[&str]) -> String {
        let mut url = self.root_url();
        url.push_str(&segments.join("/"));
        url
    }

    /// Sends one request and decodes a JSON body into `T`.
    ///
    /// Returns `Ok(None)` for 204 responses and for 2xx responses with an
    /// empty body. A 404 maps to [`OktaError::NotFound`]; any status outside
    /// 200/201/202/204/404 maps to [`OktaError::UnexpectedStatus`].
    pub async fn send_request<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> OktaResult<Option<T>> {
        let response = self.execute(ctx, method, url, body).await?;
        decode(response.body)
    }

    /// Sends one request and discards whatever body comes back.
    pub async fn send_empty(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> OktaResult<()> {
        self.execute(ctx, method, url, body).await.map(|_| ())
    }

    pub(crate) async fn execute(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> OktaResult<ApiResponse> {
        ctx.run(self.execute_once(method, url, body)).await
    }

    async fn execute_once(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> OktaResult<ApiResponse> {
        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.auth_header()?);
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        debug!(method = %method, url = %url, "okta request");
        let start = std::time::Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %method,
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "okta response"
        );
        check_status(response).await
    }

    fn auth_header(&self) -> OktaResult<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("{AUTH_SCHEME} {}", self.token))
            .map_err(|_| OktaError::InvalidToken)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

async fn check_status(response: reqwest::Response) -> OktaResult<ApiResponse> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => {
            let has_next_page = has_next_link(response.headers());
            let body = response.bytes().await?;
            Ok(ApiResponse {
                body: Some(body.to_vec()),
                has_next_page,
            })
        }
        StatusCode::NO_CONTENT => {
            drain(response).await;
            Ok(ApiResponse::default())
        }
        StatusCode::NOT_FOUND => {
            drain(response).await;
            Err(OktaError::NotFound)
        }
        status => {
            drain(response).await;
            Err(OktaError::UnexpectedStatus(status.as_u16()))
        }
    }
}

/// Reads the rest of the body so the connection can go back to the pool.
async fn drain(response: reqwest::Response) {
    if let Err(err) = response.bytes().await {
        debug!(error = %err, "failed to drain okta response body");
    }
}

fn has_next_link(headers: &HeaderMap) -> bool {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split('<').skip(1))
        .filter_map(|link| link.split_once('>').map(|(_, params)| params))
        .any(|params| {
            params.split(';').skip(1).any(|param| {
                param
                    .trim()
                    .trim_end_matches(',')
                    .trim_end()
                    .eq_ignore_ascii_case("rel=\"next\"")
            })
        })
}

pub(crate) fn decode<T: DeserializeOwned>(body: Option<Vec<u8>>) -> OktaResult<Option<T>> {
    match body {
        Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(OktaError::Decode),
        _ => Ok(None),
    }
}

pub(crate) fn encode<T: Serialize>(value: &T) -> OktaResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(OktaError::Encode)
}
