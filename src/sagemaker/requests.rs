//! Request parameters for each supported operation.
//!
//! Every field is optional at the type level so that a request can be
//! built from whatever the caller supplied; required members are checked
//! separately (see [`Operation::missing_required`]). Fields serialize under
//! their SageMaker member names and absent fields are omitted.

use super::{Operation, OperationKind};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

fn display(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "<unset>".to_string())
}

// ============================================================================
// Enumerated parameter values
// ============================================================================

/// Closed set of values for an enum member, spelled the way the service
/// spells them on the command line, in serialized parameters and on the wire.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
        pub enum $name {
            $(
                #[value(name = $wire)]
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }
    };
}

wire_enum! {
    /// Sort direction for list calls
    SortOrder {
        Ascending => "Ascending",
        Descending => "Descending",
    }
}

wire_enum! {
    /// Sort key for ListTrainingJobs
    SortBy {
        Name => "Name",
        CreationTime => "CreationTime",
        Status => "Status",
    }
}

wire_enum! {
    /// Sort key for ListClusterNodes
    ClusterSortBy {
        CreationTime => "CREATION_TIME",
        Name => "NAME",
    }
}

wire_enum! {
    /// Training job status filter
    TrainingJobStatus {
        InProgress => "InProgress",
        Completed => "Completed",
        Failed => "Failed",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
}

wire_enum! {
    /// Warm pool status filter
    WarmPoolResourceStatus {
        Available => "Available",
        Terminated => "Terminated",
        Reused => "Reused",
        InUse => "InUse",
    }
}

wire_enum! {
    /// Model package approval status
    ModelApprovalStatus {
        Approved => "Approved",
        Rejected => "Rejected",
        PendingManualApproval => "PendingManualApproval",
    }
}

wire_enum! {
    /// Whether a model package version is logged or registered
    ModelPackageRegistrationType {
        Logged => "Logged",
        Registered => "Registered",
    }
}

wire_enum! {
    /// Root access for notebook instance users
    RootAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

wire_enum! {
    /// Address family of a notebook instance
    IpAddressType {
        Ipv4 => "ipv4",
        Dualstack => "dualstack",
    }
}

wire_enum! {
    /// Endpoint variant property that UpdateEndpoint can take from the new configuration
    VariantPropertyType {
        DesiredInstanceCount => "DesiredInstanceCount",
        DesiredWeight => "DesiredWeight",
        DataCaptureConfig => "DataCaptureConfig",
    }
}

// ============================================================================
// Structured parameter values
// ============================================================================

/// Variant property excluded from retention on UpdateEndpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariantProperty {
    pub variant_property_type: VariantPropertyType,
}

impl FromStr for VariantProperty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <VariantPropertyType as ValueEnum>::from_str(s, true)
            .map(|variant_property_type| VariantProperty {
                variant_property_type,
            })
            .map_err(|_| {
                Error::invalid_parameter(
                    "ExcludeRetainedVariantProperties",
                    format!(
                        "unknown variant property '{s}', expected DesiredInstanceCount, \
                         DesiredWeight or DataCaptureConfig"
                    ),
                )
            })
    }
}

/// Instance metadata service settings of a notebook instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceMetadataServiceConfiguration {
    pub minimum_instance_metadata_service_version: String,
}

impl FromStr for InstanceMetadataServiceConfiguration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            version @ ("1" | "2") => Ok(InstanceMetadataServiceConfiguration {
                minimum_instance_metadata_service_version: version.to_string(),
            }),
            other => Err(Error::invalid_parameter(
                "InstanceMetadataServiceConfiguration",
                format!("minimum IMDS version must be 1 or 2, got '{other}'"),
            )),
        }
    }
}

/// Parse one `KEY=VALUE` pair of a string map member.
pub fn parse_key_value(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(Error::invalid_parameter(
            "CustomerMetadataProperties",
            format!("expected KEY=VALUE, got '{s}'"),
        )),
    }
}

/// Serialize `KEY=VALUE` pairs as the JSON object the service expects.
mod key_values {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(
        pairs: &[(String, String)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, String)>, D::Error> {
        Ok(BTreeMap::<String, String>::deserialize(deserializer)?
            .into_iter()
            .collect())
    }
}

// ============================================================================
// AutoML
// ============================================================================

/// Parameters for DescribeAutoMLJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
pub struct DescribeAutoMlJobRequest {
    /// Name of the AutoML job
    #[arg(long)]
    #[serde(rename = "AutoMLJobName", skip_serializing_if = "Option::is_none")]
    pub auto_ml_job_name: Option<String>,
}

impl Operation for DescribeAutoMlJobRequest {
    const NAME: &'static str = "DescribeAutoMLJob";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["AutoMLJobName"];
    const REQUIRED: &'static [&'static str] = &["AutoMLJobName"];

    fn target(&self) -> String {
        display(&self.auto_ml_job_name)
    }
}

/// Parameters for DescribeAutoMLJobV2
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
pub struct DescribeAutoMlJobV2Request {
    /// Name of the AutoML job
    #[arg(long)]
    #[serde(rename = "AutoMLJobName", skip_serializing_if = "Option::is_none")]
    pub auto_ml_job_name: Option<String>,
}

impl Operation for DescribeAutoMlJobV2Request {
    const NAME: &'static str = "DescribeAutoMLJobV2";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["AutoMLJobName"];
    const REQUIRED: &'static [&'static str] = &["AutoMLJobName"];

    fn target(&self) -> String {
        display(&self.auto_ml_job_name)
    }
}

/// Parameters for StopAutoMLJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
pub struct StopAutoMlJobRequest {
    /// Name of the AutoML job to stop
    #[arg(long)]
    #[serde(rename = "AutoMLJobName", skip_serializing_if = "Option::is_none")]
    pub auto_ml_job_name: Option<String>,
}

impl Operation for StopAutoMlJobRequest {
    const NAME: &'static str = "StopAutoMLJob";
    const KIND: OperationKind = OperationKind::Stop;
    const PARAMETERS: &'static [&'static str] = &["AutoMLJobName"];
    const REQUIRED: &'static [&'static str] = &["AutoMLJobName"];

    fn target(&self) -> String {
        display(&self.auto_ml_job_name)
    }
}

// ============================================================================
// HyperPod clusters
// ============================================================================

/// Parameters for DescribeCluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeClusterRequest {
    /// Name or ARN of the cluster
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

impl Operation for DescribeClusterRequest {
    const NAME: &'static str = "DescribeCluster";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["ClusterName"];
    const REQUIRED: &'static [&'static str] = &["ClusterName"];

    fn target(&self) -> String {
        display(&self.cluster_name)
    }
}

/// Parameters for DescribeClusterNode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeClusterNodeRequest {
    /// Name or ARN of the cluster the node belongs to
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,

    /// ID of the node (instance ID)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

impl Operation for DescribeClusterNodeRequest {
    const NAME: &'static str = "DescribeClusterNode";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["ClusterName", "NodeId"];
    const REQUIRED: &'static [&'static str] = &["ClusterName", "NodeId"];
    const DEFAULT_SELECT: &'static str = "NodeDetails";

    fn target(&self) -> String {
        format!("{}/{}", display(&self.cluster_name), display(&self.node_id))
    }
}

/// Parameters for ListClusterNodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct ListClusterNodesRequest {
    /// Name or ARN of the cluster
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,

    /// Only return nodes launched after this time (RFC 3339)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time_after: Option<DateTime<Utc>>,

    /// Only return nodes launched before this time (RFC 3339)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time_before: Option<DateTime<Utc>>,

    /// Only return nodes whose instance group name contains this string
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_group_name_contains: Option<String>,

    /// Maximum number of nodes to return
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous call
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Field to sort by
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<ClusterSortBy>,

    /// Sort direction
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Include the logical IDs of nodes in the summaries
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_node_logical_ids: Option<bool>,
}

impl Operation for ListClusterNodesRequest {
    const NAME: &'static str = "ListClusterNodes";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &[
        "ClusterName",
        "CreationTimeAfter",
        "CreationTimeBefore",
        "InstanceGroupNameContains",
        "MaxResults",
        "NextToken",
        "SortBy",
        "SortOrder",
        "IncludeNodeLogicalIds",
    ];
    const REQUIRED: &'static [&'static str] = &["ClusterName"];
    const DEFAULT_SELECT: &'static str = "ClusterNodeSummaries";

    fn target(&self) -> String {
        display(&self.cluster_name)
    }
}

/// Parameters for DeleteCluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteClusterRequest {
    /// Name or ARN of the cluster to delete
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

impl Operation for DeleteClusterRequest {
    const NAME: &'static str = "DeleteCluster";
    const KIND: OperationKind = OperationKind::Remove;
    const PARAMETERS: &'static [&'static str] = &["ClusterName"];
    const REQUIRED: &'static [&'static str] = &["ClusterName"];
    const DEFAULT_SELECT: &'static str = "ClusterArn";

    fn target(&self) -> String {
        display(&self.cluster_name)
    }
}

/// Parameters for BatchDeleteClusterNodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteClusterNodesRequest {
    /// Name or ARN of the cluster
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,

    /// Node IDs to delete (repeat the flag or separate with commas)
    #[arg(long = "node-id", value_delimiter = ',')]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_ids: Vec<String>,
}

impl Operation for BatchDeleteClusterNodesRequest {
    const NAME: &'static str = "BatchDeleteClusterNodes";
    const KIND: OperationKind = OperationKind::Remove;
    const PARAMETERS: &'static [&'static str] = &["ClusterName", "NodeIds"];
    const REQUIRED: &'static [&'static str] = &["ClusterName", "NodeIds"];

    fn target(&self) -> String {
        format!("{}/{}", display(&self.cluster_name), self.node_ids.join(","))
    }
}

/// Parameters for UpdateClusterSoftware
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateClusterSoftwareRequest {
    /// Name or ARN of the cluster to patch
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

impl Operation for UpdateClusterSoftwareRequest {
    const NAME: &'static str = "UpdateClusterSoftware";
    const KIND: OperationKind = OperationKind::Update;
    const PARAMETERS: &'static [&'static str] = &["ClusterName"];
    const REQUIRED: &'static [&'static str] = &["ClusterName"];
    const DEFAULT_SELECT: &'static str = "ClusterArn";

    fn target(&self) -> String {
        display(&self.cluster_name)
    }
}

// ============================================================================
// Compilation jobs
// ============================================================================

/// Parameters for DescribeCompilationJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCompilationJobRequest {
    /// Name of the compilation job
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compilation_job_name: Option<String>,
}

impl Operation for DescribeCompilationJobRequest {
    const NAME: &'static str = "DescribeCompilationJob";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["CompilationJobName"];
    const REQUIRED: &'static [&'static str] = &["CompilationJobName"];

    fn target(&self) -> String {
        display(&self.compilation_job_name)
    }
}

/// Parameters for DeleteCompilationJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCompilationJobRequest {
    /// Name of the compilation job to delete
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compilation_job_name: Option<String>,
}

impl Operation for DeleteCompilationJobRequest {
    const NAME: &'static str = "DeleteCompilationJob";
    const KIND: OperationKind = OperationKind::Remove;
    const PARAMETERS: &'static [&'static str] = &["CompilationJobName"];
    const REQUIRED: &'static [&'static str] = &["CompilationJobName"];

    fn target(&self) -> String {
        display(&self.compilation_job_name)
    }
}

/// Parameters for StopCompilationJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct StopCompilationJobRequest {
    /// Name of the compilation job to stop
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compilation_job_name: Option<String>,
}

impl Operation for StopCompilationJobRequest {
    const NAME: &'static str = "StopCompilationJob";
    const KIND: OperationKind = OperationKind::Stop;
    const PARAMETERS: &'static [&'static str] = &["CompilationJobName"];
    const REQUIRED: &'static [&'static str] = &["CompilationJobName"];

    fn target(&self) -> String {
        display(&self.compilation_job_name)
    }
}

// ============================================================================
// Endpoints
// ============================================================================

/// Parameters for DescribeEndpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEndpointRequest {
    /// Name of the endpoint
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,
}

impl Operation for DescribeEndpointRequest {
    const NAME: &'static str = "DescribeEndpoint";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["EndpointName"];
    const REQUIRED: &'static [&'static str] = &["EndpointName"];

    fn target(&self) -> String {
        display(&self.endpoint_name)
    }
}

/// Parameters for DeleteEndpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteEndpointRequest {
    /// Name of the endpoint to delete
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,
}

impl Operation for DeleteEndpointRequest {
    const NAME: &'static str = "DeleteEndpoint";
    const KIND: OperationKind = OperationKind::Remove;
    const PARAMETERS: &'static [&'static str] = &["EndpointName"];
    const REQUIRED: &'static [&'static str] = &["EndpointName"];

    fn target(&self) -> String {
        display(&self.endpoint_name)
    }
}

/// Parameters for UpdateEndpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateEndpointRequest {
    /// Name of the endpoint to update
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,

    /// Endpoint configuration to deploy
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_config_name: Option<String>,

    /// Keep the variant properties of the current configuration
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_all_variant_properties: Option<bool>,

    /// Variant properties to take from the new configuration even when
    /// retaining the rest (repeat the flag or separate with commas)
    #[arg(long = "exclude-retained-variant-property", value_delimiter = ',')]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_retained_variant_properties: Vec<VariantProperty>,

    /// Keep the deployment configuration of the current configuration
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_deployment_config: Option<bool>,
}

impl Operation for UpdateEndpointRequest {
    const NAME: &'static str = "UpdateEndpoint";
    const KIND: OperationKind = OperationKind::Update;
    const PARAMETERS: &'static [&'static str] = &[
        "EndpointName",
        "EndpointConfigName",
        "RetainAllVariantProperties",
        "ExcludeRetainedVariantProperties",
        "RetainDeploymentConfig",
    ];
    const REQUIRED: &'static [&'static str] = &["EndpointName", "EndpointConfigName"];
    const DEFAULT_SELECT: &'static str = "EndpointArn";

    fn target(&self) -> String {
        display(&self.endpoint_name)
    }
}

// ============================================================================
// Hyperparameter tuning jobs
// ============================================================================

/// Parameters for DescribeHyperParameterTuningJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHyperParameterTuningJobRequest {
    /// Name of the tuning job
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameter_tuning_job_name: Option<String>,
}

impl Operation for DescribeHyperParameterTuningJobRequest {
    const NAME: &'static str = "DescribeHyperParameterTuningJob";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["HyperParameterTuningJobName"];
    const REQUIRED: &'static [&'static str] = &["HyperParameterTuningJobName"];

    fn target(&self) -> String {
        display(&self.hyper_parameter_tuning_job_name)
    }
}

/// Parameters for StopHyperParameterTuningJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct StopHyperParameterTuningJobRequest {
    /// Name of the tuning job to stop
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameter_tuning_job_name: Option<String>,
}

impl Operation for StopHyperParameterTuningJobRequest {
    const NAME: &'static str = "StopHyperParameterTuningJob";
    const KIND: OperationKind = OperationKind::Stop;
    const PARAMETERS: &'static [&'static str] = &["HyperParameterTuningJobName"];
    const REQUIRED: &'static [&'static str] = &["HyperParameterTuningJobName"];

    fn target(&self) -> String {
        display(&self.hyper_parameter_tuning_job_name)
    }
}

// ============================================================================
// Models, model packages and algorithms
// ============================================================================

/// Parameters for DescribeModel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeModelRequest {
    /// Name of the model
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

impl Operation for DescribeModelRequest {
    const NAME: &'static str = "DescribeModel";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["ModelName"];
    const REQUIRED: &'static [&'static str] = &["ModelName"];

    fn target(&self) -> String {
        display(&self.model_name)
    }
}

/// Parameters for DeleteModel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteModelRequest {
    /// Name of the model to delete
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

impl Operation for DeleteModelRequest {
    const NAME: &'static str = "DeleteModel";
    const KIND: OperationKind = OperationKind::Remove;
    const PARAMETERS: &'static [&'static str] = &["ModelName"];
    const REQUIRED: &'static [&'static str] = &["ModelName"];

    fn target(&self) -> String {
        display(&self.model_name)
    }
}

/// Parameters for BatchDescribeModelPackage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDescribeModelPackageRequest {
    /// Model package ARNs (repeat the flag or separate with commas)
    #[arg(long = "model-package-arn", value_delimiter = ',')]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model_package_arn_list: Vec<String>,
}

impl Operation for BatchDescribeModelPackageRequest {
    const NAME: &'static str = "BatchDescribeModelPackage";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["ModelPackageArnList"];
    const REQUIRED: &'static [&'static str] = &["ModelPackageArnList"];

    fn target(&self) -> String {
        self.model_package_arn_list.join(",")
    }
}

/// Parameters for UpdateModelPackage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateModelPackageRequest {
    /// ARN of the model package
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_package_arn: Option<String>,

    /// New approval status
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_approval_status: Option<ModelApprovalStatus>,

    /// Whether the version is logged or registered
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_package_registration_type: Option<ModelPackageRegistrationType>,

    /// Description for the approval status change
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_description: Option<String>,

    /// Metadata property to add or overwrite, as KEY=VALUE (repeatable)
    #[arg(
        long = "customer-metadata-property",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value
    )]
    #[serde(default, with = "key_values", skip_serializing_if = "Vec::is_empty")]
    pub customer_metadata_properties: Vec<(String, String)>,

    /// Metadata property keys to remove (repeat the flag or separate with commas)
    #[arg(long = "customer-metadata-property-to-remove", value_delimiter = ',')]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_metadata_properties_to_remove: Vec<String>,

    /// URI of the model source
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,

    /// Idempotency token for the update
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

impl Operation for UpdateModelPackageRequest {
    const NAME: &'static str = "UpdateModelPackage";
    const KIND: OperationKind = OperationKind::Update;
    const PARAMETERS: &'static [&'static str] = &[
        "ModelPackageArn",
        "ModelApprovalStatus",
        "ModelPackageRegistrationType",
        "ApprovalDescription",
        "CustomerMetadataProperties",
        "CustomerMetadataPropertiesToRemove",
        "SourceUri",
        "ClientToken",
    ];
    const REQUIRED: &'static [&'static str] = &["ModelPackageArn"];
    const DEFAULT_SELECT: &'static str = "ModelPackageArn";

    fn target(&self) -> String {
        display(&self.model_package_arn)
    }
}

/// Parameters for DeleteAlgorithm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteAlgorithmRequest {
    /// Name of the algorithm to delete
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
}

impl Operation for DeleteAlgorithmRequest {
    const NAME: &'static str = "DeleteAlgorithm";
    const KIND: OperationKind = OperationKind::Remove;
    const PARAMETERS: &'static [&'static str] = &["AlgorithmName"];
    const REQUIRED: &'static [&'static str] = &["AlgorithmName"];

    fn target(&self) -> String {
        display(&self.algorithm_name)
    }
}

// ============================================================================
// Notebook instances
// ============================================================================

/// Parameters for DescribeNotebookInstance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNotebookInstanceRequest {
    /// Name of the notebook instance
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
}

impl Operation for DescribeNotebookInstanceRequest {
    const NAME: &'static str = "DescribeNotebookInstance";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["NotebookInstanceName"];
    const REQUIRED: &'static [&'static str] = &["NotebookInstanceName"];

    fn target(&self) -> String {
        display(&self.notebook_instance_name)
    }
}

/// Parameters for DeleteNotebookInstance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteNotebookInstanceRequest {
    /// Name of the notebook instance to delete
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
}

impl Operation for DeleteNotebookInstanceRequest {
    const NAME: &'static str = "DeleteNotebookInstance";
    const KIND: OperationKind = OperationKind::Remove;
    const PARAMETERS: &'static [&'static str] = &["NotebookInstanceName"];
    const REQUIRED: &'static [&'static str] = &["NotebookInstanceName"];

    fn target(&self) -> String {
        display(&self.notebook_instance_name)
    }
}

/// Parameters for StopNotebookInstance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct StopNotebookInstanceRequest {
    /// Name of the notebook instance to stop
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
}

impl Operation for StopNotebookInstanceRequest {
    const NAME: &'static str = "StopNotebookInstance";
    const KIND: OperationKind = OperationKind::Stop;
    const PARAMETERS: &'static [&'static str] = &["NotebookInstanceName"];
    const REQUIRED: &'static [&'static str] = &["NotebookInstanceName"];

    fn target(&self) -> String {
        display(&self.notebook_instance_name)
    }
}

/// Parameters for UpdateNotebookInstance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateNotebookInstanceRequest {
    /// Name of the notebook instance to update
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,

    /// New ML compute instance type, e.g. ml.t3.medium
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,

    /// Address family of the instance
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<IpAddressType>,

    /// Platform identifier of the notebook instance runtime
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_identifier: Option<String>,

    /// IAM role the notebook instance assumes
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Lifecycle configuration to associate
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_name: Option<String>,

    /// Remove the currently associated lifecycle configuration
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_lifecycle_config: Option<bool>,

    /// ML storage volume size in GB
    #[arg(long = "volume-size-in-gb")]
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,

    /// Git repository or CodeCommit repository to use as the default
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,

    /// Additional Git repositories (repeat the flag or separate with commas)
    #[arg(long = "additional-code-repository", value_delimiter = ',')]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_code_repositories: Vec<String>,

    /// Elastic Inference accelerator types, e.g. ml.eia2.medium
    #[arg(long = "accelerator-type", value_delimiter = ',')]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accelerator_types: Vec<String>,

    /// Remove all associated accelerator types
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_accelerator_types: Option<bool>,

    /// Remove the default code repository
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_default_code_repository: Option<bool>,

    /// Remove all additional code repositories
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_additional_code_repositories: Option<bool>,

    /// Whether users have root access on the instance
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_access: Option<RootAccess>,

    /// Minimum instance metadata service version (1 or 2)
    #[arg(long = "minimum-instance-metadata-service-version", value_name = "VERSION")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_metadata_service_configuration: Option<InstanceMetadataServiceConfiguration>,
}

impl Operation for UpdateNotebookInstanceRequest {
    const NAME: &'static str = "UpdateNotebookInstance";
    const KIND: OperationKind = OperationKind::Update;
    const PARAMETERS: &'static [&'static str] = &[
        "NotebookInstanceName",
        "InstanceType",
        "IpAddressType",
        "PlatformIdentifier",
        "RoleArn",
        "LifecycleConfigName",
        "DisassociateLifecycleConfig",
        "VolumeSizeInGB",
        "DefaultCodeRepository",
        "AdditionalCodeRepositories",
        "AcceleratorTypes",
        "DisassociateAcceleratorTypes",
        "DisassociateDefaultCodeRepository",
        "DisassociateAdditionalCodeRepositories",
        "RootAccess",
        "InstanceMetadataServiceConfiguration",
    ];
    const REQUIRED: &'static [&'static str] = &["NotebookInstanceName"];

    fn target(&self) -> String {
        display(&self.notebook_instance_name)
    }
}

// ============================================================================
// Processing jobs
// ============================================================================

/// Parameters for DescribeProcessingJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProcessingJobRequest {
    /// Name of the processing job
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_job_name: Option<String>,
}

impl Operation for DescribeProcessingJobRequest {
    const NAME: &'static str = "DescribeProcessingJob";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["ProcessingJobName"];
    const REQUIRED: &'static [&'static str] = &["ProcessingJobName"];

    fn target(&self) -> String {
        display(&self.processing_job_name)
    }
}

/// Parameters for StopProcessingJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct StopProcessingJobRequest {
    /// Name of the processing job to stop
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_job_name: Option<String>,
}

impl Operation for StopProcessingJobRequest {
    const NAME: &'static str = "StopProcessingJob";
    const KIND: OperationKind = OperationKind::Stop;
    const PARAMETERS: &'static [&'static str] = &["ProcessingJobName"];
    const REQUIRED: &'static [&'static str] = &["ProcessingJobName"];

    fn target(&self) -> String {
        display(&self.processing_job_name)
    }
}

// ============================================================================
// Training jobs
// ============================================================================

/// Parameters for DescribeTrainingJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTrainingJobRequest {
    /// Name of the training job
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
}

impl Operation for DescribeTrainingJobRequest {
    const NAME: &'static str = "DescribeTrainingJob";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["TrainingJobName"];
    const REQUIRED: &'static [&'static str] = &["TrainingJobName"];

    fn target(&self) -> String {
        display(&self.training_job_name)
    }
}

/// Parameters for ListTrainingJobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrainingJobsRequest {
    /// Pagination token from a previous call
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Maximum number of jobs to return
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Only return jobs created after this time (RFC 3339)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time_after: Option<DateTime<Utc>>,

    /// Only return jobs created before this time (RFC 3339)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time_before: Option<DateTime<Utc>>,

    /// Only return jobs modified after this time (RFC 3339)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time_after: Option<DateTime<Utc>>,

    /// Only return jobs modified before this time (RFC 3339)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time_before: Option<DateTime<Utc>>,

    /// Only return jobs whose name contains this string
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,

    /// Only return jobs with this status
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_equals: Option<TrainingJobStatus>,

    /// Field to sort by
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,

    /// Sort direction
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Only return jobs whose warm pool has this status
    #[arg(long, ignore_case = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_pool_status_equals: Option<WarmPoolResourceStatus>,

    /// Only return jobs that use this training plan
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_plan_arn_equals: Option<String>,
}

impl Operation for ListTrainingJobsRequest {
    const NAME: &'static str = "ListTrainingJobs";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &[
        "NextToken",
        "MaxResults",
        "CreationTimeAfter",
        "CreationTimeBefore",
        "LastModifiedTimeAfter",
        "LastModifiedTimeBefore",
        "NameContains",
        "StatusEquals",
        "SortBy",
        "SortOrder",
        "WarmPoolStatusEquals",
        "TrainingPlanArnEquals",
    ];
    const REQUIRED: &'static [&'static str] = &[];
    const DEFAULT_SELECT: &'static str = "TrainingJobSummaries";

    fn target(&self) -> String {
        self.name_contains.clone().unwrap_or_else(|| "*".to_string())
    }
}

/// Parameters for StopTrainingJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct StopTrainingJobRequest {
    /// Name of the training job to stop
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
}

impl Operation for StopTrainingJobRequest {
    const NAME: &'static str = "StopTrainingJob";
    const KIND: OperationKind = OperationKind::Stop;
    const PARAMETERS: &'static [&'static str] = &["TrainingJobName"];
    const REQUIRED: &'static [&'static str] = &["TrainingJobName"];

    fn target(&self) -> String {
        display(&self.training_job_name)
    }
}

// ============================================================================
// Transform jobs
// ============================================================================

/// Parameters for DescribeTransformJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTransformJobRequest {
    /// Name of the transform job
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_job_name: Option<String>,
}

impl Operation for DescribeTransformJobRequest {
    const NAME: &'static str = "DescribeTransformJob";
    const KIND: OperationKind = OperationKind::Get;
    const PARAMETERS: &'static [&'static str] = &["TransformJobName"];
    const REQUIRED: &'static [&'static str] = &["TransformJobName"];

    fn target(&self) -> String {
        display(&self.transform_job_name)
    }
}

/// Parameters for StopTransformJob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct StopTransformJobRequest {
    /// Name of the transform job to stop
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_job_name: Option<String>,
}

impl Operation for StopTransformJobRequest {
    const NAME: &'static str = "StopTransformJob";
    const KIND: OperationKind = OperationKind::Stop;
    const PARAMETERS: &'static [&'static str] = &["TransformJobName"];
    const REQUIRED: &'static [&'static str] = &["TransformJobName"];

    fn target(&self) -> String {
        display(&self.transform_job_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_supplied_fields_only() {
        let request = ListTrainingJobsRequest {
            name_contains: Some("resnet".to_string()),
            max_results: Some(10),
            ..Default::default()
        };
        assert_eq!(
            request.parameters(),
            json!({"NameContains": "resnet", "MaxResults": 10})
        );
    }

    #[test]
    fn test_fully_specified_request() {
        let request = UpdateNotebookInstanceRequest {
            notebook_instance_name: Some("nb-1".to_string()),
            instance_type: Some("ml.t3.large".to_string()),
            role_arn: Some("arn:aws:iam::123456789012:role/nb".to_string()),
            lifecycle_config_name: Some("on-start".to_string()),
            disassociate_lifecycle_config: Some(false),
            volume_size_in_gb: Some(50),
            ip_address_type: Some(IpAddressType::Dualstack),
            platform_identifier: Some("notebook-al2-v3".to_string()),
            default_code_repository: Some("https://github.com/org/repo.git".to_string()),
            additional_code_repositories: vec!["extra".to_string()],
            accelerator_types: vec!["ml.eia2.medium".to_string()],
            disassociate_accelerator_types: Some(false),
            disassociate_default_code_repository: Some(false),
            disassociate_additional_code_repositories: Some(true),
            root_access: Some(RootAccess::Disabled),
            instance_metadata_service_configuration: Some("2".parse().unwrap()),
        };
        assert_eq!(
            request.parameters(),
            json!({
                "NotebookInstanceName": "nb-1",
                "InstanceType": "ml.t3.large",
                "IpAddressType": "dualstack",
                "PlatformIdentifier": "notebook-al2-v3",
                "RoleArn": "arn:aws:iam::123456789012:role/nb",
                "LifecycleConfigName": "on-start",
                "DisassociateLifecycleConfig": false,
                "VolumeSizeInGB": 50,
                "DefaultCodeRepository": "https://github.com/org/repo.git",
                "AdditionalCodeRepositories": ["extra"],
                "AcceleratorTypes": ["ml.eia2.medium"],
                "DisassociateAcceleratorTypes": false,
                "DisassociateDefaultCodeRepository": false,
                "DisassociateAdditionalCodeRepositories": true,
                "RootAccess": "Disabled",
                "InstanceMetadataServiceConfiguration": {
                    "MinimumInstanceMetadataServiceVersion": "2"
                }
            })
        );
        let keys: Vec<_> = request
            .parameters()
            .as_object()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        for key in keys {
            assert!(UpdateNotebookInstanceRequest::PARAMETERS.contains(&key.as_str()));
        }
    }

    #[test]
    fn test_automl_member_names() {
        let request = StopAutoMlJobRequest {
            auto_ml_job_name: Some("automl-7".to_string()),
        };
        assert_eq!(request.parameters(), json!({"AutoMLJobName": "automl-7"}));
    }

    #[test]
    fn test_missing_required() {
        let request = DescribeClusterNodeRequest {
            cluster_name: Some("hp".to_string()),
            node_id: None,
        };
        assert_eq!(request.missing_required(), vec!["NodeId"]);

        let empty = BatchDeleteClusterNodesRequest {
            cluster_name: Some("hp".to_string()),
            node_ids: vec![],
        };
        assert_eq!(empty.missing_required(), vec!["NodeIds"]);

        assert!(ListTrainingJobsRequest::default().missing_required().is_empty());
    }

    #[test]
    fn test_enum_parameters_use_service_values() {
        let request = UpdateModelPackageRequest {
            model_package_arn: Some("arn:pkg".to_string()),
            model_approval_status: Some(ModelApprovalStatus::PendingManualApproval),
            ..Default::default()
        };
        assert_eq!(
            request.parameters(),
            json!({"ModelPackageArn": "arn:pkg", "ModelApprovalStatus": "PendingManualApproval"})
        );
        assert_eq!(SortOrder::Descending.as_str(), "Descending");
        assert_eq!(TrainingJobStatus::InProgress.as_str(), "InProgress");
        assert_eq!(ClusterSortBy::CreationTime.as_str(), "CREATION_TIME");
        assert_eq!(WarmPoolResourceStatus::InUse.as_str(), "InUse");
        assert_eq!(
            serde_json::to_value(ClusterSortBy::Name).unwrap(),
            json!("NAME")
        );
    }

    #[test]
    fn test_list_filters_serialize_under_member_names() {
        let after = "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let request = ListTrainingJobsRequest {
            creation_time_after: Some(after),
            sort_by: Some(SortBy::CreationTime),
            sort_order: Some(SortOrder::Descending),
            warm_pool_status_equals: Some(WarmPoolResourceStatus::Available),
            ..Default::default()
        };
        assert_eq!(
            request.parameters(),
            json!({
                "CreationTimeAfter": "2024-01-01T00:00:00Z",
                "SortBy": "CreationTime",
                "SortOrder": "Descending",
                "WarmPoolStatusEquals": "Available"
            })
        );

        let nodes = ListClusterNodesRequest {
            cluster_name: Some("hp".to_string()),
            sort_by: Some(ClusterSortBy::Name),
            include_node_logical_ids: Some(true),
            ..Default::default()
        };
        assert_eq!(
            nodes.parameters(),
            json!({"ClusterName": "hp", "SortBy": "NAME", "IncludeNodeLogicalIds": true})
        );
    }

    #[test]
    fn test_customer_metadata_properties_serialize_as_object() {
        let request = UpdateModelPackageRequest {
            model_package_arn: Some("arn:pkg".to_string()),
            customer_metadata_properties: vec![
                parse_key_value("team=vision").unwrap(),
                parse_key_value("stage=a=b").unwrap(),
            ],
            customer_metadata_properties_to_remove: vec!["old".to_string()],
            ..Default::default()
        };
        assert_eq!(
            request.parameters(),
            json!({
                "ModelPackageArn": "arn:pkg",
                "CustomerMetadataProperties": {"team": "vision", "stage": "a=b"},
                "CustomerMetadataPropertiesToRemove": ["old"]
            })
        );

        let parsed: UpdateModelPackageRequest =
            serde_json::from_value(request.parameters()).unwrap();
        assert_eq!(parsed.customer_metadata_properties.len(), 2);
    }

    #[test]
    fn test_structured_values_reject_bad_input() {
        for bad in ["team", "=vision", ""] {
            let err = parse_key_value(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { .. }), "{bad}");
        }

        let property: VariantProperty = "desiredweight".parse().unwrap();
        assert_eq!(property.variant_property_type, VariantPropertyType::DesiredWeight);
        let err = "Weight".parse::<VariantProperty>().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("ExcludeRetainedVariantProperties"));

        assert!("3".parse::<InstanceMetadataServiceConfiguration>().is_err());
        assert_eq!(
            "1".parse::<InstanceMetadataServiceConfiguration>()
                .unwrap()
                .minimum_instance_metadata_service_version,
            "1"
        );
    }

    #[test]
    fn test_targets() {
        let request = BatchDeleteClusterNodesRequest {
            cluster_name: Some("hp".to_string()),
            node_ids: vec!["i-1".to_string(), "i-2".to_string()],
        };
        assert_eq!(request.target(), "hp/i-1,i-2");
        assert_eq!(DeleteModelRequest::default().target(), "<unset>");
    }
}
