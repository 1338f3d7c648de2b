//! HTTP stock and catalog client for storecart.
//!
//! This crate provides:
//! - `ApiClient` - REST client implementing `StockService` and `ProductCatalog`
//! - `ApiConfig` - base URL, timeout and price currency
//! - `FetchError` - transport failures, mapped onto `ServiceError`

mod client;
mod config;
mod error;

pub use client::*;
pub use config::*;
pub use error::*;
