//! HTTP client module
//!
//! Provides the reqwest wrapper and the combinations endpoint client.
//!
//! # Features
//!
//! - **Base URL joining**: Relative paths resolve against a configured base
//! - **Status classification**: Non-2xx responses surface as `Error::HttpStatus`
//! - **Typed pages**: `CombinationsApi` decodes `{ items, totalCount }` bodies

mod api;
mod client;

pub use api::{CombinationsApi, PAGE_INDEX_PARAM, PAGE_SIZE_PARAM};
pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, Query};

#[cfg(test)]
mod tests;
