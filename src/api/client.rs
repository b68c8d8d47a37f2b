use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::access::SessionStore;
use crate::api::Endpoint;
use crate::common::{ApiError, ConfigError};
use crate::config::ApiConfig;

/// Forces a full navigation outside the router, e.g. after the session expired.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that only logs; used where no browser is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        log::info!("navigation to {} requested outside the router", path);
    }
}

/// Sets `window.location.href`.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

#[cfg(feature = "csr")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let moved = web_sys::window().map(|w| w.location().set_href(path));
        if !matches!(moved, Some(Ok(()))) {
            log::error!("could not navigate to {}", path);
        }
    }
}

/// JSON client for the catalog API.
///
/// Attaches `Authorization: Bearer <token>` whenever the session holds a
/// token. A 401 from the server clears the session and sends the user to the
/// login page before the error is returned.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl ApiClient {
    pub fn new(
        config: &ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|u| !u.cannot_be_a_base())
            .ok_or_else(|| ConfigError::InvalidBaseUrl(config.base_url.clone()))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            session,
            navigator,
            login_path: config.login_path.clone(),
        })
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint, with each path segment percent-encoded.
    pub fn url(&self, endpoint: &Endpoint) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(&endpoint.segments);
        }
        if !endpoint.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&endpoint.query);
        }
        url
    }

    pub async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let url = self.url(&endpoint);
        log::info!("[api request] {} {}", endpoint.method, url);

        let mut request = self
            .http
            .request(endpoint.method.clone(), url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.load().token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &endpoint.body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                log::error!("[api error] {} {}: {}", endpoint.method, url, e);
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("[api error response] {} {}: {}", status.as_u16(), url, body);
            return Err(self.reject(status, body));
        }

        let bytes = response.bytes().await?;
        log::info!("[api response] {} {} ({} bytes)", status.as_u16(), url, bytes.len());

        if bytes.is_empty() {
            return Ok(serde_json::from_slice(b"null")?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Maps a non-success status to an error, expiring the session on 401.
    pub fn reject(&self, status: StatusCode, body: String) -> ApiError {
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            self.navigator.navigate(&self.login_path);
            return ApiError::Unauthorized;
        }

        ApiError::Status {
            status: status.as_u16(),
            body,
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("login_path", &self.login_path)
            .finish()
    }
}
