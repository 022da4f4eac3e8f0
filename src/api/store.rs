//! Parameter store abstraction
//!
//! The driver only sees this trait. `SsmStore` implements it against AWS; tests
//! implement it in memory.

use super::models::{PageToken, ParameterPage, ParameterType};
use crate::error::StoreError;
use async_trait::async_trait;

/// Request for one page of parameters under a path
#[derive(Debug, Clone)]
pub struct FetchRequest<'a> {
    pub path: &'a str,
    pub recursive: bool,
    pub with_decryption: bool,
    /// Page size hint; `None` lets the store pick
    pub page_size: Option<i32>,
    pub next_token: Option<&'a PageToken>,
}

impl<'a> FetchRequest<'a> {
    /// Recursive, decrypting fetch of the first page under `path`
    pub fn under(path: &'a str) -> Self {
        Self {
            path,
            recursive: true,
            with_decryption: true,
            page_size: None,
            next_token: None,
        }
    }

    pub fn page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Continue after the page that returned `token`
    pub fn after(mut self, token: Option<&'a PageToken>) -> Self {
        self.next_token = token;
        self
    }
}

/// Request to store a parameter value under a given type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub parameter_type: ParameterType,
    pub overwrite: bool,
}

impl<'a> WriteRequest<'a> {
    /// Replace `name` with the same value stored as `SecureString`
    pub fn secure_overwrite(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value,
            parameter_type: ParameterType::SecureString,
            overwrite: true,
        }
    }
}

#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch one page of parameters matching `request`
    async fn fetch_page(&self, request: &FetchRequest<'_>) -> Result<ParameterPage, StoreError>;

    /// Create or replace a single parameter
    async fn write_parameter(&self, request: &WriteRequest<'_>) -> Result<(), StoreError>;
}
