//! Cached access to the fleet tracker REST API.
//!
//! Every list read through [`DataService::get`] is kept in a per-path [`Cache`]. Writes keep
//! that cache in step with the server, either by patching the affected item or by
//! refetching the path.

use std::collections::HashMap;

use reqwest::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{
    client::{cache::Cache, error::ClientError},
    model::api::ErrorDto,
};

pub struct DataService {
    base_url: String,
    http: reqwest::Client,
    caches: RwLock<HashMap<String, Cache>>,
}

impl DataService {
    /// Creates a service for the API rooted at `base_url`, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            http,
            caches: RwLock::new(HashMap::new()),
        }
    }

    /// Fetches the list at `path` and replaces its cache.
    ///
    /// When the request fails the cached items are returned instead, provided there are
    /// any. With an empty cache the request error is returned.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        match self.fetch_list(path).await {
            Ok(items) => {
                let decoded = decode_all(&items)?;
                self.caches
                    .write()
                    .await
                    .entry(path.to_string())
                    .or_default()
                    .set(items);

                Ok(decoded)
            }
            Err(err) => {
                let caches = self.caches.read().await;
                match caches.get(path).filter(|cache| !cache.is_empty()) {
                    Some(cache) => {
                        tracing::warn!("Serving cached {} after failed request: {}", path, err);
                        decode_all(cache.items())
                    }
                    None => Err(err),
                }
            }
        }
    }

    /// Returns the cached items of `path` without touching the network.
    pub async fn cached<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let caches = self.caches.read().await;
        match caches.get(path) {
            Some(cache) => decode_all(cache.items()),
            None => Ok(Vec::new()),
        }
    }

    /// Fetches any JSON document at `path` with the given query, bypassing the cache.
    pub async fn get_no_cache<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let request = self.http.get(self.url(path, None)).query(query);
        let body = self.send(request).await?;

        Ok(serde_json::from_value(body.unwrap_or(Value::Null))?)
    }

    /// Fetches a single item at `path/id`, bypassing the cache.
    pub async fn get_single_no_cache<T: DeserializeOwned>(
        &self,
        path: &str,
        id: &str,
    ) -> Result<T, ClientError> {
        let body = self.send(self.http.get(self.url(path, Some(id)))).await?;

        Ok(serde_json::from_value(body.unwrap_or(Value::Null))?)
    }

    /// Fetches a single item at `path/id` and stores it in the cache of `path`.
    pub async fn get_single<T: DeserializeOwned>(
        &self,
        path: &str,
        id: &str,
    ) -> Result<T, ClientError> {
        let item = self
            .send(self.http.get(self.url(path, Some(id))))
            .await?
            .unwrap_or(Value::Null);
        let decoded = serde_json::from_value(item.clone())?;

        self.caches
            .write()
            .await
            .entry(path.to_string())
            .or_default()
            .update(item);

        Ok(decoded)
    }

    /// Posts `body` to `path` with query parameters in the given order.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Created item, also appended to the cache of `path`
    /// - `Ok(None)` - The server answered without a body
    /// - `Err(ClientError)` - Request failed or the server rejected it
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, ClientError> {
        let request = self.http.post(self.url(path, None)).query(query).json(body);
        let Some(item) = self.send(request).await? else {
            return Ok(None);
        };
        let decoded = serde_json::from_value(item.clone())?;

        self.caches
            .write()
            .await
            .entry(path.to_string())
            .or_default()
            .add(item);

        Ok(Some(decoded))
    }

    /// Puts `body` to `path/id`.
    ///
    /// With `update_all` the whole list at `path` is refetched afterwards. Otherwise the
    /// returned item replaces its cache entry. A failed refetch is logged and does not
    /// fail the update.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        id: &str,
        body: &B,
        update_all: bool,
    ) -> Result<Option<T>, ClientError> {
        let request = self.http.put(self.url(path, Some(id))).json(body);
        let item = self.send(request).await?;

        let decoded = match &item {
            Some(item) => Some(serde_json::from_value(item.clone())?),
            None => None,
        };

        if update_all {
            self.refresh(path).await;
        } else if let Some(item) = item {
            self.caches
                .write()
                .await
                .entry(path.to_string())
                .or_default()
                .update(item);
        }

        Ok(decoded)
    }

    /// Deletes `path/id`, then refetches the list at `path`.
    pub async fn delete(&self, path: &str, id: &str) -> Result<(), ClientError> {
        self.send(self.http.delete(self.url(path, Some(id))))
            .await?;
        self.refresh(path).await;

        Ok(())
    }

    async fn refresh(&self, path: &str) {
        match self.fetch_list(path).await {
            Ok(items) => self
                .caches
                .write()
                .await
                .entry(path.to_string())
                .or_default()
                .set(items),
            Err(err) => tracing::warn!("Failed to refresh {}: {}", path, err),
        }
    }

    async fn fetch_list(&self, path: &str) -> Result<Vec<Value>, ClientError> {
        let body = self.send(self.http.get(self.url(path, None))).await?;

        match body {
            Some(body) => Ok(serde_json::from_value(body)?),
            None => Ok(Vec::new()),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Option<Value>, ClientError> {
        let response = request.send().await?;
        parse_response(response).await
    }

    fn url(&self, path: &str, id: Option<&str>) -> String {
        let path = path.trim_matches('/');
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, path, id),
            None => format!("{}/{}", self.base_url, path),
        }
    }
}

/// Reads a response body as JSON, mapping non-success statuses to `ClientError::Api`.
///
/// An empty success body yields `None`.
async fn parse_response(response: Response) -> Result<Option<Value>, ClientError> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(None);
        }
        return Ok(Some(serde_json::from_str(&text)?));
    }

    let message = match serde_json::from_str::<ErrorDto>(&text) {
        Ok(error_dto) => error_dto.error,
        Err(_) if text.is_empty() => "Unknown error".to_string(),
        Err(_) => text,
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn decode_all<T: DeserializeOwned>(items: &[Value]) -> Result<Vec<T>, ClientError> {
    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).map_err(ClientError::from))
        .collect()
}
