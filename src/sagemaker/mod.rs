//! SageMaker control-plane operations.
//!
//! Every supported call is described by a request struct implementing
//! [`Operation`]. The [`Request`] enum gathers them into one value that the
//! CLI parses directly (it doubles as the clap subcommand set) and that a
//! [`SageMakerBackend`] knows how to send.
//!
//! ```text
//!  CLI flags ──► Request ──► Prepared (validate + selector) ──► backend.send()
//!                                                                   │
//!  stdout ◄── Selector::apply ◄── serde_json::Value ◄───────────────┘
//! ```

pub mod backend;
pub mod client;
pub mod requests;

mod capture;
mod ops;

pub use backend::SageMakerBackend;
pub use client::{is_name_resolution_failure, SdkBackend};
pub use requests::*;

use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;

/// What an operation does to the resource it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Describe or list; no side effects
    Get,
    /// Delete a resource
    Remove,
    /// Stop a running job or instance
    Stop,
    /// Modify a resource in place
    Update,
}

impl OperationKind {
    /// Whether the operation needs confirmation before it runs
    pub fn is_destructive(self) -> bool {
        !matches!(self, OperationKind::Get)
    }

    /// Command verb
    pub fn verb(self) -> &'static str {
        match self {
            OperationKind::Get => "get",
            OperationKind::Remove => "remove",
            OperationKind::Stop => "stop",
            OperationKind::Update => "update",
        }
    }
}

/// Static description of a single SageMaker API call.
pub trait Operation: Serialize {
    /// API operation name, e.g. `DescribeTrainingJob`
    const NAME: &'static str;

    /// Operation kind
    const KIND: OperationKind;

    /// Every parameter the request carries, by service member name
    const PARAMETERS: &'static [&'static str];

    /// Parameters that must be present before the call is made
    const REQUIRED: &'static [&'static str];

    /// Selector applied when the caller does not pass one
    const DEFAULT_SELECT: &'static str = "*";

    /// Human-readable identifier of the resource the call acts on
    fn target(&self) -> String;

    /// Supplied parameters keyed by service member name
    fn parameters(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Required parameters that were not supplied
    fn missing_required(&self) -> Vec<&'static str> {
        let params = self.parameters();
        Self::REQUIRED
            .iter()
            .copied()
            .filter(|name| match params.get(name) {
                None | Some(Value::Null) => true,
                Some(Value::Array(items)) => items.is_empty(),
                Some(_) => false,
            })
            .collect()
    }
}

/// Catalog entry describing one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    /// CLI subcommand name
    pub command: String,
    /// API operation name
    pub operation: &'static str,
    /// Operation kind
    pub kind: OperationKind,
    /// Default output selector
    pub default_select: &'static str,
    /// Required parameters
    pub required: &'static [&'static str],
    /// All parameters
    pub parameters: &'static [&'static str],
}

/// Convert a variant identifier to the kebab-case subcommand clap derives from it.
fn command_name(variant: &str) -> String {
    let mut out = String::with_capacity(variant.len() + 8);
    for (i, ch) in variant.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

macro_rules! operations {
    ($( $(#[$meta:meta])* $variant:ident($request:ty) ),* $(,)?) => {
        /// One SageMaker call with its parameters.
        #[derive(Debug, Clone, PartialEq, Subcommand)]
        pub enum Request {
            $( $(#[$meta])* $variant($request), )*
        }

        impl Request {
            /// API operation name
            pub fn name(&self) -> &'static str {
                match self {
                    $( Request::$variant(_) => <$request as Operation>::NAME, )*
                }
            }

            /// CLI subcommand name
            pub fn command(&self) -> String {
                match self {
                    $( Request::$variant(_) => command_name(stringify!($variant)), )*
                }
            }

            /// Operation kind
            pub fn kind(&self) -> OperationKind {
                match self {
                    $( Request::$variant(_) => <$request as Operation>::KIND, )*
                }
            }

            /// Default output selector
            pub fn default_select(&self) -> &'static str {
                match self {
                    $( Request::$variant(_) => <$request as Operation>::DEFAULT_SELECT, )*
                }
            }

            /// All parameter names accepted by the operation
            pub fn parameter_names(&self) -> &'static [&'static str] {
                match self {
                    $( Request::$variant(_) => <$request as Operation>::PARAMETERS, )*
                }
            }

            /// Supplied parameters keyed by service member name
            pub fn parameters(&self) -> Value {
                match self {
                    $( Request::$variant(r) => r.parameters(), )*
                }
            }

            /// Required parameters that were not supplied
            pub fn missing_required(&self) -> Vec<&'static str> {
                match self {
                    $( Request::$variant(r) => r.missing_required(), )*
                }
            }

            /// Identifier of the resource the call acts on
            pub fn target(&self) -> String {
                match self {
                    $( Request::$variant(r) => r.target(), )*
                }
            }

            /// Every supported operation, in declaration order
            pub fn catalog() -> Vec<OperationInfo> {
                vec![
                    $( OperationInfo {
                        command: command_name(stringify!($variant)),
                        operation: <$request as Operation>::NAME,
                        kind: <$request as Operation>::KIND,
                        default_select: <$request as Operation>::DEFAULT_SELECT,
                        required: <$request as Operation>::REQUIRED,
                        parameters: <$request as Operation>::PARAMETERS,
                    }, )*
                ]
            }
        }

        $(
            impl From<$request> for Request {
                fn from(request: $request) -> Self {
                    Request::$variant(request)
                }
            }
        )*
    };
}

operations! {
    /// Describe an AutoML job (DescribeAutoMLJob)
    GetAutoMlJob(DescribeAutoMlJobRequest),
    /// Describe an AutoML V2 job (DescribeAutoMLJobV2)
    GetAutoMlJobV2(DescribeAutoMlJobV2Request),
    /// Describe a HyperPod cluster (DescribeCluster)
    GetCluster(DescribeClusterRequest),
    /// Describe one node of a HyperPod cluster (DescribeClusterNode)
    GetClusterNode(DescribeClusterNodeRequest),
    /// List the nodes of a HyperPod cluster (ListClusterNodes)
    GetClusterNodeList(ListClusterNodesRequest),
    /// Describe a model compilation job (DescribeCompilationJob)
    GetCompilationJob(DescribeCompilationJobRequest),
    /// Describe an endpoint (DescribeEndpoint)
    GetEndpoint(DescribeEndpointRequest),
    /// Describe a hyperparameter tuning job (DescribeHyperParameterTuningJob)
    GetHyperParameterTuningJob(DescribeHyperParameterTuningJobRequest),
    /// Describe a model (DescribeModel)
    GetModel(DescribeModelRequest),
    /// Describe several model packages at once (BatchDescribeModelPackage)
    GetModelPackageBatch(BatchDescribeModelPackageRequest),
    /// Describe a notebook instance (DescribeNotebookInstance)
    GetNotebookInstance(DescribeNotebookInstanceRequest),
    /// Describe a processing job (DescribeProcessingJob)
    GetProcessingJob(DescribeProcessingJobRequest),
    /// Describe a training job (DescribeTrainingJob)
    GetTrainingJob(DescribeTrainingJobRequest),
    /// List training jobs (ListTrainingJobs)
    GetTrainingJobList(ListTrainingJobsRequest),
    /// Describe a batch transform job (DescribeTransformJob)
    GetTransformJob(DescribeTransformJobRequest),
    /// Delete an algorithm (DeleteAlgorithm)
    RemoveAlgorithm(DeleteAlgorithmRequest),
    /// Delete a HyperPod cluster (DeleteCluster)
    RemoveCluster(DeleteClusterRequest),
    /// Delete nodes from a HyperPod cluster (BatchDeleteClusterNodes)
    RemoveClusterNode(BatchDeleteClusterNodesRequest),
    /// Delete a model compilation job (DeleteCompilationJob)
    RemoveCompilationJob(DeleteCompilationJobRequest),
    /// Delete an endpoint (DeleteEndpoint)
    RemoveEndpoint(DeleteEndpointRequest),
    /// Delete a model (DeleteModel)
    RemoveModel(DeleteModelRequest),
    /// Delete a notebook instance (DeleteNotebookInstance)
    RemoveNotebookInstance(DeleteNotebookInstanceRequest),
    /// Stop an AutoML job (StopAutoMLJob)
    StopAutoMlJob(StopAutoMlJobRequest),
    /// Stop a model compilation job (StopCompilationJob)
    StopCompilationJob(StopCompilationJobRequest),
    /// Stop a hyperparameter tuning job (StopHyperParameterTuningJob)
    StopHyperParameterTuningJob(StopHyperParameterTuningJobRequest),
    /// Stop a notebook instance (StopNotebookInstance)
    StopNotebookInstance(StopNotebookInstanceRequest),
    /// Stop a processing job (StopProcessingJob)
    StopProcessingJob(StopProcessingJobRequest),
    /// Stop a training job (StopTrainingJob)
    StopTrainingJob(StopTrainingJobRequest),
    /// Stop a batch transform job (StopTransformJob)
    StopTransformJob(StopTransformJobRequest),
    /// Update the software of a HyperPod cluster (UpdateClusterSoftware)
    UpdateClusterSoftware(UpdateClusterSoftwareRequest),
    /// Point an endpoint at a new endpoint configuration (UpdateEndpoint)
    UpdateEndpoint(UpdateEndpointRequest),
    /// Update a model package's approval status (UpdateModelPackage)
    UpdateModelPackage(UpdateModelPackageRequest),
    /// Update a notebook instance (UpdateNotebookInstance)
    UpdateNotebookInstance(UpdateNotebookInstanceRequest),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Command, Subcommand};
    use std::collections::HashSet;

    #[test]
    fn test_command_name() {
        assert_eq!(command_name("GetTrainingJob"), "get-training-job");
        assert_eq!(command_name("GetAutoMlJobV2"), "get-auto-ml-job-v2");
        assert_eq!(
            command_name("StopHyperParameterTuningJob"),
            "stop-hyper-parameter-tuning-job"
        );
    }

    #[test]
    fn test_catalog_matches_clap_subcommands() {
        let cmd = Request::augment_subcommands(Command::new("sagectl"));
        for info in Request::catalog() {
            assert!(
                cmd.find_subcommand(&info.command).is_some(),
                "no subcommand named {}",
                info.command
            );
        }
    }

    #[test]
    fn test_catalog_is_consistent() {
        let catalog = Request::catalog();
        assert_eq!(catalog.len(), 33);

        let names: HashSet<_> = catalog.iter().map(|i| i.operation).collect();
        assert_eq!(names.len(), catalog.len());

        for info in &catalog {
            assert!(info.command.starts_with(info.kind.verb()));
            for required in info.required {
                assert!(
                    info.parameters.contains(required),
                    "{} requires unknown parameter {}",
                    info.operation,
                    required
                );
            }
            let root = info.default_select.split('.').next().unwrap_or_default();
            assert!(!root.starts_with('^'), "{} defaults to echo", info.operation);
        }
    }

    #[test]
    fn test_kind_destructive() {
        assert!(!OperationKind::Get.is_destructive());
        assert!(OperationKind::Remove.is_destructive());
        assert!(OperationKind::Stop.is_destructive());
        assert!(OperationKind::Update.is_destructive());
    }

    #[test]
    fn test_request_dispatch() {
        let request = Request::from(DescribeClusterNodeRequest {
            cluster_name: Some("hp-cluster".to_string()),
            node_id: Some("i-0abc".to_string()),
        });
        assert_eq!(request.name(), "DescribeClusterNode");
        assert_eq!(request.command(), "get-cluster-node");
        assert_eq!(request.kind(), OperationKind::Get);
        assert_eq!(request.default_select(), "NodeDetails");
        assert_eq!(request.target(), "hp-cluster/i-0abc");
        assert!(request.missing_required().is_empty());
    }
}
