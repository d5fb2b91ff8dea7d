use crate::errors::FetchError;
use crate::models::{AdminLoginRequest, Identity, LoginRequest, Order, Service, Stats};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Thin client for the five remote endpoints the page talks to.
///
/// Stateless apart from the connection pool; no retries, no caching.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: Client,
    base_url: String,
}

impl CatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn services(&self) -> Result<Vec<Service>, FetchError> {
        self.fetch_json(self.client.get(self.endpoint("/services"))).await
    }

    pub async fn login(&self, tg_id: &str) -> Result<Identity, FetchError> {
        let request = self
            .client
            .post(self.endpoint("/login"))
            .json(&LoginRequest { tg_id });
        self.fetch_json(request).await
    }

    /// Any 2xx counts as success; the body is never read.
    pub async fn admin_login(&self, admin_id: &str) -> Result<(), FetchError> {
        let request = self
            .client
            .post(self.endpoint("/admin/login"))
            .json(&AdminLoginRequest { admin_id });
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::http(response.status()));
        }
        Ok(())
    }

    pub async fn user_orders(&self, user_id: &str) -> Result<Vec<Order>, FetchError> {
        let request = self
            .client
            .get(self.endpoint("/user/orders"))
            .query(&[("userId", user_id)]);
        self.fetch_json(request).await
    }

    pub async fn admin_stats(&self) -> Result<Stats, FetchError> {
        self.fetch_json(self.client.get(self.endpoint("/admin/stats")))
            .await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http(status));
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;
    use axum::{
        extract::Query,
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use std::collections::HashMap;

    #[test]
    fn endpoints_join_without_double_slash() {
        let api = CatalogApi::new("http://localhost:1/api/");
        assert_eq!(api.endpoint("/services"), "http://localhost:1/api/services");
    }

    #[tokio::test]
    async fn services_decode_from_json_array() {
        let mock = MockApi::start(Router::new().route(
            "/api/services",
            get(|| async {
                Json(serde_json::json!([{
                    "name": "A", "description": "d",
                    "price_usd": 1, "price_btc": 0.01, "price_stars": 5
                }]))
            }),
        ))
        .await;

        let services = CatalogApi::new(mock.base_url()).services().await.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "A");
        assert_eq!(services[0].price_btc, 0.01);
    }

    #[tokio::test]
    async fn non_success_status_becomes_http_error() {
        let mock = MockApi::start(Router::new().route(
            "/api/login",
            post(|| async { StatusCode::NOT_FOUND }),
        ))
        .await;

        let err = CatalogApi::new(mock.base_url()).login("1").await.unwrap_err();
        assert_eq!(err, FetchError::Http { status: 404 });
    }

    #[tokio::test]
    async fn wrong_shape_becomes_malformed() {
        let mock = MockApi::start(Router::new().route(
            "/api/admin/stats",
            get(|| async { Json(serde_json::json!({ "users": "many" })) }),
        ))
        .await;

        let err = CatalogApi::new(mock.base_url()).admin_stats().await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_host_becomes_transport_error() {
        let base_url = MockApi::unused_base_url();
        let err = CatalogApi::new(base_url).services().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn orders_send_user_id_as_query() {
        let mock = MockApi::start(Router::new().route(
            "/api/user/orders",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let user = params.get("userId").cloned().unwrap_or_default();
                Json(serde_json::json!([
                    { "order_id": 1, "service_name": user, "status": "new" }
                ]))
            }),
        ))
        .await;

        let orders = CatalogApi::new(mock.base_url()).user_orders("777").await.unwrap();
        assert_eq!(orders[0].service_name, "777");
    }

    #[tokio::test]
    async fn admin_login_ignores_body() {
        let mock = MockApi::start(Router::new().route(
            "/api/admin/login",
            post(|| async { (StatusCode::CREATED, "not json at all") }),
        ))
        .await;

        CatalogApi::new(mock.base_url()).admin_login("root").await.unwrap();
    }
}
