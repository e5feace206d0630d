//! SageMaker client built from the AWS SDK.

use super::backend::SageMakerBackend;
use super::{ops, Request};
use crate::config::AwsSettings;
use crate::error::{Error, Result};
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_sagemaker::config::endpoint::{DefaultResolver, Params, ResolveEndpoint};
use aws_sdk_sagemaker::config::Region;
use aws_sdk_sagemaker::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sagemaker::{Client, Config as SdkConfig};
use serde_json::Value;
use std::error::Error as StdError;
use tracing::debug;

/// Fragments that identify a host-name lookup failure somewhere in an error chain.
const NAME_RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname",
    "no such host",
    "temporary failure in name resolution",
];

/// Returns true if `err` or any of its sources is a DNS lookup failure.
pub fn is_name_resolution_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        let text = e.to_string().to_lowercase();
        if NAME_RESOLUTION_MARKERS.iter().any(|m| text.contains(m)) {
            return true;
        }
        current = e.source();
    }
    false
}

/// Endpoint the SDK's own rules pick for `region`.
///
/// Falls back to a descriptive label when the rules reject the region.
pub async fn default_endpoint(region: &str) -> String {
    let resolved = match Params::builder()
        .region(region)
        .use_fips(false)
        .use_dual_stack(false)
        .build()
    {
        Ok(params) => ResolveEndpoint::resolve_endpoint(&DefaultResolver::new(), &params)
            .await
            .map(|endpoint| endpoint.url().to_string())
            .ok(),
        Err(_) => None,
    };
    resolved.unwrap_or_else(|| format!("the default SageMaker endpoint for {region}"))
}

/// Backend that sends requests through `aws_sdk_sagemaker::Client`.
#[derive(Debug, Clone)]
pub struct SdkBackend {
    client: Client,
    region: String,
    endpoint: String,
}

impl SdkBackend {
    /// Build a client from the resolved settings.
    ///
    /// Unset values fall through to the SDK's default provider chains. A
    /// region must resolve from one of them.
    pub async fn connect(settings: &AwsSettings) -> Result<Self> {
        settings.validate()?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(url) = &settings.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        if let Some(timeout) = settings.operation_timeout() {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            );
        }
        if let Some(attempts) = settings.max_attempts {
            loader = loader.retry_config(RetryConfig::standard().with_max_attempts(attempts));
        }

        let shared = loader.load().await;
        Self::from_conf(SdkConfig::from(&shared), settings.endpoint_url.as_deref()).await
    }

    /// Build a client from an SDK configuration.
    ///
    /// `endpoint_url` is the custom endpoint the configuration carries, if
    /// any; it is only used to label failures.
    pub async fn from_conf(conf: SdkConfig, endpoint_url: Option<&str>) -> Result<Self> {
        let region = conf.region().map(|r| r.to_string()).ok_or_else(|| {
            Error::Config(
                "no AWS region configured; pass --region, set SAGECTL_REGION or AWS_REGION, \
                 or set a region in the AWS profile"
                    .to_string(),
            )
        })?;

        let endpoint = match endpoint_url {
            Some(url) => url.to_string(),
            None => default_endpoint(&region).await,
        };

        debug!(region = %region, endpoint = %endpoint, "SageMaker client configured");

        Ok(Self {
            client: Client::from_conf(conf),
            region,
            endpoint,
        })
    }

    /// Underlying SDK client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Region the client resolved to
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Endpoint calls are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Map an SDK failure onto the crate error taxonomy.
    pub(crate) fn translate<E, R>(&self, operation: &'static str, err: SdkError<E, R>) -> Error
    where
        E: ProvideErrorMetadata + StdError + Send + Sync + 'static,
        R: std::fmt::Debug + Send + Sync + 'static,
    {
        if is_name_resolution_failure(&err) {
            return Error::NameResolution {
                operation,
                region: self.region.clone(),
                endpoint: self.endpoint.clone(),
                message: DisplayErrorContext(&err).to_string(),
            };
        }

        match &err {
            SdkError::ServiceError(context) => {
                let service_err = context.err();
                let message = service_err
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| service_err.to_string());
                Error::service(operation, service_err.code().map(str::to_string), message)
            }
            SdkError::TimeoutError(_) => Error::Timeout {
                operation,
                message: DisplayErrorContext(&err).to_string(),
            },
            _ => Error::transport(operation, DisplayErrorContext(&err).to_string()),
        }
    }
}

#[async_trait]
impl SageMakerBackend for SdkBackend {
    async fn send(&self, request: &Request) -> Result<Value> {
        ops::dispatch(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source.as_deref().map(|s| s as &(dyn StdError + 'static))
        }
    }

    fn chain(messages: &[&'static str]) -> Layer {
        let mut layer: Option<Box<Layer>> = None;
        for &message in messages.iter().rev() {
            layer = Some(Box::new(Layer {
                message,
                source: layer,
            }));
        }
        *layer.expect("at least one message")
    }

    #[tokio::test]
    async fn test_default_endpoint_follows_partition() {
        assert_eq!(
            default_endpoint("us-east-1").await,
            "https://api.sagemaker.us-east-1.amazonaws.com"
        );
        assert_eq!(
            default_endpoint("cn-north-1").await,
            "https://api.sagemaker.cn-north-1.amazonaws.com.cn"
        );
        assert!(default_endpoint("us-gov-west-1")
            .await
            .contains("us-gov-west-1"));
    }

    #[tokio::test]
    async fn test_from_conf_labels_endpoint() {
        let conf = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("cn-northwest-1"))
            .build();
        let backend = SdkBackend::from_conf(conf, None).await.unwrap();
        assert_eq!(backend.region(), "cn-northwest-1");
        assert!(backend.endpoint().ends_with(".amazonaws.com.cn"));

        let conf = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .endpoint_url("http://localhost:4566")
            .build();
        let backend = SdkBackend::from_conf(conf, Some("http://localhost:4566"))
            .await
            .unwrap();
        assert_eq!(backend.endpoint(), "http://localhost:4566");

        let conf = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .build();
        let err = SdkBackend::from_conf(conf, None).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_connect_rejects_zero_timeout() {
        let settings = AwsSettings {
            region: Some("us-east-1".to_string()),
            timeout: Some(0),
            ..AwsSettings::default()
        };
        let err = SdkBackend::connect(&settings).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_detects_dns_failure_deep_in_chain() {
        let err = chain(&[
            "dispatch failure",
            "io error",
            "error trying to connect: dns error: failed to lookup address information: \
             Name or service not known",
        ]);
        assert!(is_name_resolution_failure(&err));
    }

    #[test]
    fn test_detects_macos_wording() {
        let err = chain(&["nodename nor servname provided, or not known"]);
        assert!(is_name_resolution_failure(&err));
    }

    #[test]
    fn test_other_failures_are_not_dns() {
        let err = chain(&["dispatch failure", "connection refused (os error 111)"]);
        assert!(!is_name_resolution_failure(&err));

        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        assert!(!is_name_resolution_failure(&io));
    }
}
