//! Per-operation SDK calls.
//!
//! Each function sets exactly the request fields that were supplied,
//! performs one `send()` with a [`ResponseCapture`] attached, and returns
//! the response body as the service sent it.

mod clusters;
mod endpoints;
mod jobs;
mod models;
mod notebooks;

use super::capture::ResponseCapture;
use super::client::SdkBackend;
use super::Request;
use crate::error::Result;
use aws_sdk_sagemaker::primitives::DateTime;
use serde_json::Value;

/// Route a request to its SDK call.
pub(super) async fn dispatch(sdk: &SdkBackend, request: &Request) -> Result<Value> {
    match request {
        Request::GetAutoMlJob(r) => jobs::describe_auto_ml_job(sdk, r).await,
        Request::GetAutoMlJobV2(r) => jobs::describe_auto_ml_job_v2(sdk, r).await,
        Request::GetCluster(r) => clusters::describe_cluster(sdk, r).await,
        Request::GetClusterNode(r) => clusters::describe_cluster_node(sdk, r).await,
        Request::GetClusterNodeList(r) => clusters::list_cluster_nodes(sdk, r).await,
        Request::GetCompilationJob(r) => jobs::describe_compilation_job(sdk, r).await,
        Request::GetEndpoint(r) => endpoints::describe_endpoint(sdk, r).await,
        Request::GetHyperParameterTuningJob(r) => {
            jobs::describe_hyper_parameter_tuning_job(sdk, r).await
        }
        Request::GetModel(r) => models::describe_model(sdk, r).await,
        Request::GetModelPackageBatch(r) => models::batch_describe_model_package(sdk, r).await,
        Request::GetNotebookInstance(r) => notebooks::describe_notebook_instance(sdk, r).await,
        Request::GetProcessingJob(r) => jobs::describe_processing_job(sdk, r).await,
        Request::GetTrainingJob(r) => jobs::describe_training_job(sdk, r).await,
        Request::GetTrainingJobList(r) => jobs::list_training_jobs(sdk, r).await,
        Request::GetTransformJob(r) => jobs::describe_transform_job(sdk, r).await,
        Request::RemoveAlgorithm(r) => models::delete_algorithm(sdk, r).await,
        Request::RemoveCluster(r) => clusters::delete_cluster(sdk, r).await,
        Request::RemoveClusterNode(r) => clusters::batch_delete_cluster_nodes(sdk, r).await,
        Request::RemoveCompilationJob(r) => jobs::delete_compilation_job(sdk, r).await,
        Request::RemoveEndpoint(r) => endpoints::delete_endpoint(sdk, r).await,
        Request::RemoveModel(r) => models::delete_model(sdk, r).await,
        Request::RemoveNotebookInstance(r) => notebooks::delete_notebook_instance(sdk, r).await,
        Request::StopAutoMlJob(r) => jobs::stop_auto_ml_job(sdk, r).await,
        Request::StopCompilationJob(r) => jobs::stop_compilation_job(sdk, r).await,
        Request::StopHyperParameterTuningJob(r) => {
            jobs::stop_hyper_parameter_tuning_job(sdk, r).await
        }
        Request::StopNotebookInstance(r) => notebooks::stop_notebook_instance(sdk, r).await,
        Request::StopProcessingJob(r) => jobs::stop_processing_job(sdk, r).await,
        Request::StopTrainingJob(r) => jobs::stop_training_job(sdk, r).await,
        Request::StopTransformJob(r) => jobs::stop_transform_job(sdk, r).await,
        Request::UpdateClusterSoftware(r) => clusters::update_cluster_software(sdk, r).await,
        Request::UpdateEndpoint(r) => endpoints::update_endpoint(sdk, r).await,
        Request::UpdateModelPackage(r) => models::update_model_package(sdk, r).await,
        Request::UpdateNotebookInstance(r) => notebooks::update_notebook_instance(sdk, r).await,
    }
}

/// Timestamp member in the SDK's representation.
fn timestamp(value: Option<chrono::DateTime<chrono::Utc>>) -> Option<DateTime> {
    value.map(|t| DateTime::from_secs_and_nanos(t.timestamp(), t.timestamp_subsec_nanos()))
}

/// List member; an empty list is not sent.
fn list<T: Clone>(items: &[T]) -> Option<Vec<T>> {
    (!items.is_empty()).then(|| items.to_vec())
}

/// List member whose items are converted to SDK types.
fn list_of<T, U>(items: &[T], convert: impl Fn(&T) -> U) -> Option<Vec<U>> {
    (!items.is_empty()).then(|| items.iter().map(convert).collect())
}
