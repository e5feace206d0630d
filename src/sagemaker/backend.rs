//! Transport seam between the invocation layer and the AWS SDK.

use super::Request;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Something that can perform a SageMaker call.
///
/// [`SdkBackend`](super::SdkBackend) is the real implementation; tests swap
/// in mocks or stubs to observe whether and how often a call happens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SageMakerBackend: Send + Sync {
    /// Perform exactly one remote call for `request` and return the
    /// service response as structured data.
    async fn send(&self, request: &Request) -> Result<Value>;
}
