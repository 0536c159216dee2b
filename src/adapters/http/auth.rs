//! HTTP client for the auth endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::adapters::http::retry::RetryPolicy;
use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::{ApiConfig, AuthResponse, Credentials, User};
use crate::domain::ports::AuthApi;

/// Reqwest-backed implementation of [`AuthApi`].
///
/// Takes the token as an argument instead of reading storage: the
/// session store owns token lifecycle and decides what to send.
#[derive(Clone)]
pub struct HttpAuthApi {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpAuthApi {
    pub fn new(config: &ApiConfig, retry: RetryPolicy) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn read_json<D: DeserializeOwned>(response: reqwest::Response) -> ApiResult<D> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<D>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, body))
        }
    }

    async fn login_once(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn current_user_once(&self, token: &str) -> ApiResult<User> {
        let response = self
            .http
            .get(self.url("/auth/me"))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?;
        Self::read_json(response).await
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.retry.execute(|| self.login_once(credentials)).await
    }

    /// Logout is fire-and-forget from the server's point of view, so a
    /// failed notification is reported but never retried.
    #[instrument(skip(self, token))]
    async fn logout(&self, token: &str) -> ApiResult<()> {
        let response = self
            .http
            .post(self.url("/auth/logout"))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, body))
        }
    }

    #[instrument(skip(self, token))]
    async fn current_user(&self, token: &str) -> ApiResult<User> {
        self.retry.execute(|| self.current_user_once(token)).await
    }
}
