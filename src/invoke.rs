//! Invocation pipeline shared by every operation.
//!
//! A call goes through the same steps regardless of which SageMaker API it
//! targets:
//!
//! 1. [`Prepared::new`] checks required parameters and parses the output
//!    selector. Nothing touches the network here.
//! 2. [`Invoker::run`] asks for confirmation when the operation is
//!    destructive and `force` is not set.
//! 3. The backend performs exactly one call; the caller's cancellation token
//!    aborts it.
//! 4. The response is projected through the selector.

use crate::error::{Error, Result};
use crate::sagemaker::{Request, SageMakerBackend};
use crate::select::Selector;
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// How to treat required parameters that were not supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Fail before the call
    #[default]
    Strict,
    /// Warn and let the service decide
    Lenient,
}

/// Options controlling a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeOptions {
    /// Required-parameter handling
    pub strictness: Strictness,
    /// Skip the confirmation prompt for destructive operations
    pub force: bool,
    /// Prompt before destructive operations at all
    pub confirm_destructive: bool,
    /// Selector expression; the operation default when unset
    pub select: Option<String>,
}

impl Default for InvokeOptions {
    fn default() -> Self {
        Self {
            strictness: Strictness::Strict,
            force: false,
            confirm_destructive: true,
            select: None,
        }
    }
}

/// Source of yes/no answers for destructive operations
pub trait Confirm: Send + Sync {
    /// Ask the question; `Ok(true)` means proceed.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Always answers yes
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Always answers no
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(false)
    }
}

/// Result of an invocation that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The call ran; holds the selected output
    Completed(Value),
    /// The user declined the confirmation prompt; no call was made
    Declined,
}

/// A validated request with its resolved selector
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    request: Request,
    selector: Selector,
}

impl Prepared {
    /// Validate `request` and resolve its selector.
    pub fn new(request: Request, options: &InvokeOptions) -> Result<Self> {
        let missing = request.missing_required();
        if let Some(&first) = missing.first() {
            match options.strictness {
                Strictness::Strict => {
                    return Err(Error::MissingParameter {
                        operation: request.name(),
                        parameter: first,
                    });
                }
                Strictness::Lenient => {
                    warn!(
                        operation = request.name(),
                        missing = ?missing,
                        "required parameters not supplied, sending anyway"
                    );
                }
            }
        }

        let expr = options.select.as_deref().unwrap_or(request.default_select());
        let selector = Selector::parse(expr)?;
        selector.validate(request.name(), request.parameter_names())?;

        Ok(Self { request, selector })
    }

    /// The validated request
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// The resolved selector
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Confirmation prompt shown for destructive operations
    pub fn prompt(&self) -> String {
        format!(
            "{} '{}' ({})?",
            capitalize(self.request.kind().verb()),
            self.request.target(),
            self.request.name()
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Runs prepared requests against a backend
pub struct Invoker {
    backend: Arc<dyn SageMakerBackend>,
    confirm: Arc<dyn Confirm>,
    options: InvokeOptions,
}

impl Invoker {
    /// Create a new invoker
    pub fn new(
        backend: Arc<dyn SageMakerBackend>,
        confirm: Arc<dyn Confirm>,
        options: InvokeOptions,
    ) -> Self {
        Self {
            backend,
            confirm,
            options,
        }
    }

    /// Options this invoker was built with
    pub fn options(&self) -> &InvokeOptions {
        &self.options
    }

    /// Validate and run `request` in one step.
    pub async fn invoke(&self, request: Request, cancel: &CancellationToken) -> Result<Outcome> {
        let prepared = Prepared::new(request, &self.options)?;
        self.run(&prepared, cancel).await
    }

    /// Run an already validated request.
    pub async fn run(&self, prepared: &Prepared, cancel: &CancellationToken) -> Result<Outcome> {
        let request = prepared.request();
        let operation = request.name();

        let gated = request.kind().is_destructive()
            && self.options.confirm_destructive
            && !self.options.force;
        if gated && !self.confirm.confirm(&prepared.prompt())? {
            info!(operation, target = %request.target(), "declined, nothing was changed");
            return Ok(Outcome::Declined);
        }

        let parameters = request.parameters();
        debug!(operation, parameters = %parameters, "sending request");

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled(operation)),
            result = self.backend.send(request) => result?,
        };

        info!(operation, target = %request.target(), "request completed");

        Ok(Outcome::Completed(
            prepared.selector().apply(&response, &parameters),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sagemaker::backend::MockSageMakerBackend;
    use crate::sagemaker::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn describe(name: &str) -> Request {
        DescribeTrainingJobRequest {
            training_job_name: Some(name.to_string()),
        }
        .into()
    }

    fn delete_endpoint(name: &str) -> Request {
        DeleteEndpointRequest {
            endpoint_name: Some(name.to_string()),
        }
        .into()
    }

    fn invoker(
        mock: MockSageMakerBackend,
        confirm: impl Confirm + 'static,
        options: InvokeOptions,
    ) -> Invoker {
        Invoker::new(Arc::new(mock), Arc::new(confirm), options)
    }

    #[tokio::test]
    async fn test_describe_returns_stub_response_unchanged() {
        let mut mock = MockSageMakerBackend::new();
        mock.expect_send()
            .withf(|r| r.name() == "DescribeTrainingJob" && r.target() == "job-1")
            .times(1)
            .returning(|_| Ok(json!({"status": "Completed"})));

        let outcome = invoker(mock, AssumeNo, InvokeOptions::default())
            .invoke(describe("job-1"), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Completed(json!({"status": "Completed"})));
    }

    #[tokio::test]
    async fn test_missing_required_never_calls_backend() {
        let mut mock = MockSageMakerBackend::new();
        mock.expect_send().times(0);

        let err = invoker(mock, AssumeYes, InvokeOptions::default())
            .invoke(
                DescribeTrainingJobRequest::default().into(),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MissingParameter {
                parameter: "TrainingJobName",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_lenient_sends_incomplete_request() {
        let mut mock = MockSageMakerBackend::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(Error::service("DescribeTrainingJob", None, "name required")));

        let options = InvokeOptions {
            strictness: Strictness::Lenient,
            ..InvokeOptions::default()
        };
        let err = invoker(mock, AssumeYes, options)
            .invoke(
                DescribeTrainingJobRequest::default().into(),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_declined_destructive_call_is_not_sent() {
        let mut mock = MockSageMakerBackend::new();
        mock.expect_send().times(0);

        let outcome = invoker(mock, AssumeNo, InvokeOptions::default())
            .invoke(delete_endpoint("ep-1"), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Declined);
    }

    #[tokio::test]
    async fn test_force_skips_confirmation() {
        let mut mock = MockSageMakerBackend::new();
        mock.expect_send().times(1).returning(|_| Ok(json!({})));

        let options = InvokeOptions {
            force: true,
            ..InvokeOptions::default()
        };
        let outcome = invoker(mock, AssumeNo, options)
            .invoke(delete_endpoint("ep-1"), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Completed(json!({})));
    }

    #[tokio::test]
    async fn test_confirmation_disabled_in_config() {
        let mut mock = MockSageMakerBackend::new();
        mock.expect_send().times(1).returning(|_| Ok(json!({})));

        let options = InvokeOptions {
            confirm_destructive: false,
            ..InvokeOptions::default()
        };
        let outcome = invoker(mock, AssumeNo, options)
            .invoke(delete_endpoint("ep-1"), &CancellationToken::new())
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Completed(_)));
    }

    #[tokio::test]
    async fn test_default_selector_and_echo() {
        let response = json!({
            "NodeDetails": {"InstanceId": "i-0abc"},
            "ResponseMetadata": {}
        });

        let mut mock = MockSageMakerBackend::new();
        let body = response.clone();
        mock.expect_send().times(2).returning(move |_| Ok(body.clone()));

        let request: Request = DescribeClusterNodeRequest {
            cluster_name: Some("hp".to_string()),
            node_id: Some("i-0abc".to_string()),
        }
        .into();

        let invoker = invoker(mock, AssumeYes, InvokeOptions::default());
        let cancel = CancellationToken::new();

        let outcome = invoker.invoke(request.clone(), &cancel).await.unwrap();
        assert_eq!(outcome, Outcome::Completed(json!({"InstanceId": "i-0abc"})));

        let echo = Prepared::new(
            request,
            &InvokeOptions {
                select: Some("^ClusterName".to_string()),
                ..InvokeOptions::default()
            },
        )
        .unwrap();
        let outcome = invoker.run(&echo, &cancel).await.unwrap();
        assert_eq!(outcome, Outcome::Completed(json!("hp")));
    }

    #[test]
    fn test_unknown_echo_parameter_rejected() {
        let err = Prepared::new(
            describe("job-1"),
            &InvokeOptions {
                select: Some("^EndpointName".to_string()),
                ..InvokeOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSelector { .. }));
    }

    #[tokio::test]
    async fn test_cancelled_before_send() {
        let mut mock = MockSageMakerBackend::new();
        mock.expect_send().returning(|_| Ok(json!({})));

        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = invoker(mock, AssumeYes, InvokeOptions::default())
            .invoke(describe("job-1"), &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Cancelled("DescribeTrainingJob")));
        assert_eq!(err.exit_code(), 130);
    }

    #[test]
    fn test_prompt_names_target_and_operation() {
        let prepared = Prepared::new(delete_endpoint("ep-1"), &InvokeOptions::default()).unwrap();
        assert_eq!(prepared.prompt(), "Remove 'ep-1' (DeleteEndpoint)?");
    }
}
