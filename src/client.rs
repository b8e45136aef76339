use std::sync::RwLock;
use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::auth::Session;
use crate::config::AppConfig;
use crate::errors::ApiError;

/// Collection and resource endpoints answer either with the bare payload or
/// wrapped in a `{ success, data, message }` envelope, depending on the
/// backend route. Both shapes are accepted transparently.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped {
        #[serde(default)]
        success: Option<bool>,
        data: T,
        #[serde(default)]
        message: Option<String>,
    },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data, .. } => data,
            Envelope::Bare(data) => data,
        }
    }
}

/// Typed client for the SmartBox REST backend.
///
/// The session lifecycle is explicit: `install_session` on login,
/// `clear_session` on logout or after a 401. Requests carry the installed
/// bearer token; there are no retries and no request de-duplication.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: RwLock<Option<Session>>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let mut base = config.api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| ApiError::BaseUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            session: RwLock::new(None),
        })
    }

    /// Installs the session obtained from login; subsequent requests carry
    /// its bearer token.
    pub fn install_session(&self, session: Session) {
        *self.session.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
    }

    /// Tears the session down (logout, or a 401 observed by the caller).
    pub fn clear_session(&self) {
        *self.session.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::BaseUrl(e.to_string()))?;
        let mut builder = self.http.request(method, url);
        let guard = self.session.read().unwrap_or_else(|e| e.into_inner());
        if let Some(session) = guard.as_ref() {
            builder = builder.bearer_auth(&session.token);
        }
        Ok(builder)
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_status(status.as_u16(), &body);
            warn!(status = status.as_u16(), error = %err, "request failed");
            return Err(err);
        }

        serde_json::from_str::<Envelope<T>>(&body)
            .map(Envelope::into_inner)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetches a single resource.
    pub async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(%path, "GET");
        self.execute(self.request(Method::GET, path)?).await
    }

    /// Fetches a collection; both bare arrays and `{ data: [...] }` pass.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.get_one(path).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(%path, "POST");
        self.execute(self.request(Method::POST, path)?.json(body))
            .await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(%path, "PATCH");
        self.execute(self.request(Method::PATCH, path)?.json(body))
            .await
    }

    /// PUT without a body, used by rental lifecycle transitions.
    pub async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(%path, "PUT");
        self.execute(self.request(Method::PUT, path)?).await
    }

    /// DELETE, discarding whatever body the backend returns.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(%path, "DELETE");
        let response = self.request(Method::DELETE, path)?.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(())
    }

    /// Exposes the resolved base URL, mainly for diagnostics.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
