//! API client for communicating with the HomeLedger backend.
//!
//! This module provides the `ApiClient` struct for issuing authenticated
//! REST requests. All resource accessors (auth, family, transaction,
//! task, reward, service) are built on the dispatcher here: one network
//! call per operation, no automatic retry, response classified into
//! success / unauthorized / request failure, with a user-facing notice
//! emitted on every failure path before the error propagates.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, multipart, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::Session;
use crate::config::Config;
use crate::notify::{Notify, TracingNotifier, NETWORK_ERROR_NOTICE};

use super::{ApiError, ApiResult};

/// HTTP request timeout in seconds.
/// 30s allows for slow backend responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the HomeLedger backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    pub(crate) session: Arc<Session>,
    pub(crate) notify: Arc<dyn Notify>,
}

impl ApiClient {
    /// Create a new API client bound to the configured base URL and the
    /// shared session object.
    pub fn new(config: &Config, session: Arc<Session>) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            notify: Arc::new(TracingNotifier),
        })
    }

    /// Replace the notice hook, e.g. with the front-end's toast surface.
    pub fn with_notify(mut self, notify: Arc<dyn Notify>) -> Self {
        self.notify = notify;
        self
    }

    /// The shared session this client attaches credentials from.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authorization header iff a credential exists. A token that cannot
    /// be encoded as a header value is dropped; the request then fails
    /// with a 401 and clears the session through the normal path.
    fn auth_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.session.token() {
            match header::HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(e) => {
                    warn!(error = %e, "Stored token is not header-encodable, sending unauthenticated");
                }
            }
        }
        headers
    }

    /// Generic request entry point: relative path, optional JSON body,
    /// optional caller header overrides. The typed resource methods are
    /// thin wrappers over this.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        headers: Option<header::HeaderMap>,
    ) -> ApiResult<T> {
        let mut builder = self.client.request(method, self.endpoint(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }
        if let Some(overrides) = headers {
            builder = builder.headers(overrides);
        }
        self.execute(builder).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.client.get(self.endpoint(path))).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.client.post(self.endpoint(path)).json(body))
            .await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.client.put(self.endpoint(path)).json(body))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.client.delete(self.endpoint(path))).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> ApiResult<T> {
        self.execute(self.client.post(self.endpoint(path)).multipart(form))
            .await
    }

    /// Perform one call to completion and classify the response.
    ///
    /// Fire-once: no retry, no idempotency token, no cancellation. Two
    /// rapid user actions can race; de-duplication is not provided here.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let builder = builder.headers(self.auth_headers());

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Request did not reach the backend");
                self.notify.toast(NETWORK_ERROR_NOTICE);
                return Err(ApiError::Network(e));
            }
        };

        let status = response.status();
        debug!(status = %status, "Response received");

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                let err = ApiError::InvalidResponse(e.to_string());
                warn!(error = %err, "Failed to decode response body");
                self.notify.toast(&err.to_string());
                err
            })
        } else if status == StatusCode::UNAUTHORIZED {
            warn!("Backend returned 401, clearing session");
            self.session.clear();
            self.notify.session_expired();
            Err(ApiError::Unauthorized)
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);
            warn!(status = status.as_u16(), error = %err, "Request failed");
            self.notify.toast(&err.to_string());
            Err(err)
        }
    }
}
