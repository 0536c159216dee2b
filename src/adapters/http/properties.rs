//! HTTP client for the property listings endpoints.
//!
//! A thin transport wrapper: it serializes filters to query params,
//! attaches the bearer token when one is stored, maps response statuses
//! to [`ApiError`], and retries transient failures. Caching and
//! client-side narrowing live elsewhere.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::adapters::http::retry::RetryPolicy;
use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::{ApiConfig, NewProperty, Property, PropertyPatch, SearchFilters};
use crate::domain::ports::{PropertyRepository, TokenStorage, KEY_TOKEN};

/// Reqwest-backed implementation of [`PropertyRepository`].
#[derive(Clone)]
pub struct HttpPropertyRepository {
    http: Client,
    base_url: String,
    storage: Arc<dyn TokenStorage>,
    retry: RetryPolicy,
}

impl HttpPropertyRepository {
    /// Build a repository client from config.
    ///
    /// `storage` supplies the bearer token for authenticated requests;
    /// requests go out anonymous while no token is stored.
    pub fn new(
        config: &ApiConfig,
        storage: Arc<dyn TokenStorage>,
        retry: RetryPolicy,
    ) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            storage,
            retry,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Build a request, attaching `Authorization: Bearer <token>` when a
    /// token is present in the session store.
    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.storage.get(KEY_TOKEN)? {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        Ok(req)
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

    async fn search_once(&self, filters: &SearchFilters) -> ApiResult<Vec<Property>> {
        let response = self
            .request(Method::GET, "/properties")?
            .query(&filters.to_query_pairs())
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn get_once(&self, id: &str) -> ApiResult<Property> {
        let response = self
            .request(Method::GET, &format!("/properties/{id}"))?
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn featured_once(&self) -> ApiResult<Vec<Property>> {
        let response = self
            .request(Method::GET, "/properties/featured")?
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn create_once(&self, property: &NewProperty) -> ApiResult<Property> {
        let response = self
            .request(Method::POST, "/properties")?
            .json(property)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn update_once(&self, id: &str, patch: &PropertyPatch) -> ApiResult<Property> {
        let response = self
            .request(Method::PUT, &format!("/properties/{id}"))?
            .json(patch)
            .send()
            .await?;
        Self::read_json(response).await
    }
}

#[async_trait]
impl PropertyRepository for HttpPropertyRepository {
    #[instrument(skip(self, filters), fields(key = %filters.cache_key()))]
    async fn search(&self, filters: &SearchFilters) -> ApiResult<Vec<Property>> {
        self.retry.execute(|| self.search_once(filters)).await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> ApiResult<Property> {
        self.retry.execute(|| self.get_once(id)).await
    }

    #[instrument(skip(self))]
    async fn featured(&self) -> ApiResult<Vec<Property>> {
        self.retry.execute(|| self.featured_once()).await
    }

    #[instrument(skip(self, property), fields(title = %property.title))]
    async fn create(&self, property: &NewProperty) -> ApiResult<Property> {
        self.retry.execute(|| self.create_once(property)).await
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &str, patch: &PropertyPatch) -> ApiResult<Property> {
        self.retry.execute(|| self.update_once(id, patch)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryTokenStorage;

    fn repo(base_url: &str) -> HttpPropertyRepository {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        };
        HttpPropertyRepository::new(&config, Arc::new(MemoryTokenStorage::new()), RetryPolicy::none())
            .unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let repo = repo("http://localhost:3001/api/");
        assert_eq!(repo.url("/properties"), "http://localhost:3001/api/properties");
    }

    #[test]
    fn test_url_joining() {
        let repo = repo("http://localhost:3001/api");
        assert_eq!(
            repo.url("/properties/abc"),
            "http://localhost:3001/api/properties/abc"
        );
    }
}
