//! In-memory parameter store used by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use ssm_secure_migrate::StoreError;
use ssm_secure_migrate::api::{
    FetchRequest, PageToken, Parameter, ParameterPage, ParameterStore, ParameterType, WriteRequest,
};
use std::sync::Mutex;

/// A fetch call as the store saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFetch {
    pub path: String,
    pub recursive: bool,
    pub with_decryption: bool,
    pub page_size: Option<i32>,
    pub token: Option<String>,
}

/// A write call as the store saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub name: String,
    pub value: String,
    pub parameter_type: ParameterType,
    pub overwrite: bool,
}

/// Serves scripted pages keyed by the continuation token it expects, and
/// records every call.
#[derive(Default)]
pub struct FakeStore {
    pages: Vec<(Option<String>, ParameterPage)>,
    fail_write_on: Option<String>,
    fail_fetch_on_call: Option<usize>,
    fetches: Mutex<Vec<RecordedFetch>>,
    writes: Mutex<Vec<RecordedWrite>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from pages of names; page `i` is reached with token `T{i}`
    pub fn paged(pages: Vec<Vec<Parameter>>) -> Self {
        let count = pages.len();
        let mut store = Self::new();
        for (i, params) in pages.into_iter().enumerate() {
            let expects = (i > 0).then(|| format!("T{}", i));
            let next = (i + 1 < count).then(|| format!("T{}", i + 1));
            store = store.page(expects, params, next);
        }
        store
    }

    /// Add a page served when the request carries `expects` as its token
    pub fn page(
        mut self,
        expects: Option<String>,
        parameters: Vec<Parameter>,
        next: Option<String>,
    ) -> Self {
        self.pages.push((
            expects,
            ParameterPage::new(parameters, PageToken::from_response(next)),
        ));
        self
    }

    pub fn fail_write_on(mut self, name: &str) -> Self {
        self.fail_write_on = Some(name.to_string());
        self
    }

    /// Fail the n-th fetch call (1-based)
    pub fn fail_fetch_on_call(mut self, call: usize) -> Self {
        self.fail_fetch_on_call = Some(call);
        self
    }

    pub fn fetches(&self) -> Vec<RecordedFetch> {
        self.fetches.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ParameterStore for FakeStore {
    async fn fetch_page(&self, request: &FetchRequest<'_>) -> Result<ParameterPage, StoreError> {
        let token = request.next_token.map(|t| t.as_str().to_string());
        let call = {
            let mut fetches = self.fetches.lock().unwrap();
            fetches.push(RecordedFetch {
                path: request.path.to_string(),
                recursive: request.recursive,
                with_decryption: request.with_decryption,
                page_size: request.page_size,
                token: token.clone(),
            });
            fetches.len()
        };

        if self.fail_fetch_on_call == Some(call) {
            return Err(StoreError::new("GetParametersByPath", "ThrottlingException"));
        }

        self.pages
            .iter()
            .find(|(expects, _)| *expects == token)
            .map(|(_, page)| page.clone())
            .ok_or_else(|| {
                StoreError::new("GetParametersByPath", format!("unknown token {:?}", token))
            })
    }

    async fn write_parameter(&self, request: &WriteRequest<'_>) -> Result<(), StoreError> {
        self.writes.lock().unwrap().push(RecordedWrite {
            name: request.name.to_string(),
            value: request.value.to_string(),
            parameter_type: request.parameter_type.clone(),
            overwrite: request.overwrite,
        });

        if self.fail_write_on.as_deref() == Some(request.name) {
            return Err(StoreError::new("PutParameter", "AccessDeniedException"));
        }
        Ok(())
    }
}

pub fn plain(name: &str, value: &str) -> Parameter {
    Parameter::new(name, Some(value.to_string()), ParameterType::String)
}

/// `count` plaintext parameters named `/app/p000`, `/app/p001`, ...
pub fn numbered(start: usize, count: usize) -> Vec<Parameter> {
    (start..start + count)
        .map(|i| plain(&format!("/app/p{:03}", i), &format!("value-{}", i)))
        .collect()
}
