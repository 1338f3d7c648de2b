//! REST client for the storefront stock and catalog endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use storecart_core::catalog::{Product, ProductCatalog, ProductRecord, Stock, StockService};
use storecart_core::{Currency, ProductId, ServiceError};
use tracing::{debug, instrument};

use crate::config::ApiConfig;
use crate::error::FetchError;

/// Storefront API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    currency: Currency,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                currency: config.currency,
            }),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Resolve a path against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON body.
    #[instrument(skip(self), fields(base_url = %self.inner.base_url))]
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        let resp = self.inner.client.get(&url).send().await?;

        // Anything but 2xx is an error, including unfollowed redirects
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url,
            });
        }
        let status = status.as_u16();

        let bytes = resp.bytes().await?;
        let result: T = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;

        debug!(%url, status, "fetched");
        Ok(result)
    }
}

#[async_trait]
impl StockService for ApiClient {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        self.fetch::<Stock>(&format!("stock/{product_id}"))
            .await
            .map_err(|e| e.into_service_error(product_id))
    }
}

#[async_trait]
impl ProductCatalog for ApiClient {
    async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError> {
        let record = self
            .fetch::<ProductRecord>(&format!("products/{product_id}"))
            .await
            .map_err(|e| e.into_service_error(product_id))?;
        Ok(record.into_product(self.inner.currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}")
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new(&ApiConfig::new("http://localhost:3333/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3333");
        assert_eq!(client.url("stock/1"), "http://localhost:3333/stock/1");
        assert_eq!(client.url("/products/2"), "http://localhost:3333/products/2");
    }

    #[tokio::test]
    async fn test_stock_lookup() {
        let base = serve_once("200 OK", r#"{"id": 1, "amount": 3}"#).await;
        let client = ApiClient::new(&ApiConfig::new(base)).unwrap();

        let stock = client.stock(ProductId::new(1)).await.unwrap();
        assert_eq!(stock, Stock::new(1, 3));
    }

    #[tokio::test]
    async fn test_product_lookup_converts_price() {
        let base = serve_once(
            "200 OK",
            r#"{"id": 2, "title": "Tênis VR Caminhada", "price": 139.9, "image": "b.jpg"}"#,
        )
        .await;
        let client = ApiClient::new(&ApiConfig::new(base)).unwrap();

        let product = client.product(ProductId::new(2)).await.unwrap();
        assert_eq!(product.title, "Tênis VR Caminhada");
        assert_eq!(product.price.amount_cents, 13990);
        assert_eq!(product.price.currency, Currency::BRL);
    }

    #[tokio::test]
    async fn test_not_found() {
        let base = serve_once("404 Not Found", "{}").await;
        let client = ApiClient::new(&ApiConfig::new(base)).unwrap();

        assert!(matches!(
            client.stock(ProductId::new(99)).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_decoded() {
        let base = serve_once("204 No Content", "").await;
        let client = ApiClient::new(&ApiConfig::new(base)).unwrap();

        assert!(matches!(
            client.fetch::<Stock>("stock/1").await,
            Err(FetchError::Http { status: 204, .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let base = serve_once("200 OK", r#"{"amount": "lots"}"#).await;
        let client = ApiClient::new(&ApiConfig::new(base)).unwrap();

        assert!(matches!(
            client.stock(ProductId::new(1)).await,
            Err(ServiceError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(&ApiConfig::new(format!("http://{addr}"))).unwrap();
        assert!(matches!(
            client.stock(ProductId::new(1)).await,
            Err(ServiceError::Unavailable(_))
        ));
    }
}
