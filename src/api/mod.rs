//! AWS SSM Parameter Store access
//!
//! `ParameterStore` is the seam the migration driver talks through; `SsmStore`
//! is the real implementation on top of `aws-sdk-ssm`.

pub mod client;
pub mod models;
pub mod store;

pub use client::SsmStore;
pub use models::{PageToken, Parameter, ParameterPage, ParameterType};
pub use store::{FetchRequest, ParameterStore, WriteRequest};
