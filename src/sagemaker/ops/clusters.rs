//! HyperPod clusters and their nodes.

use super::{list, timestamp, ResponseCapture};
use crate::error::Result;
use crate::sagemaker::client::SdkBackend;
use crate::sagemaker::requests::*;
use crate::sagemaker::Operation;
use aws_sdk_sagemaker::types as sm;
use serde_json::Value;

pub(super) async fn describe_cluster(
    sdk: &SdkBackend,
    request: &DescribeClusterRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_cluster()
        .set_cluster_name(request.cluster_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeClusterRequest::NAME, e))?;
    capture.into_value(DescribeClusterRequest::NAME)
}

pub(super) async fn describe_cluster_node(
    sdk: &SdkBackend,
    request: &DescribeClusterNodeRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_cluster_node()
        .set_cluster_name(request.cluster_name.clone())
        .set_node_id(request.node_id.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeClusterNodeRequest::NAME, e))?;
    capture.into_value(DescribeClusterNodeRequest::NAME)
}

pub(super) async fn list_cluster_nodes(
    sdk: &SdkBackend,
    request: &ListClusterNodesRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .list_cluster_nodes()
        .set_cluster_name(request.cluster_name.clone())
        .set_creation_time_after(timestamp(request.creation_time_after))
        .set_creation_time_before(timestamp(request.creation_time_before))
        .set_instance_group_name_contains(request.instance_group_name_contains.clone())
        .set_max_results(request.max_results)
        .set_next_token(request.next_token.clone())
        .set_sort_by(request.sort_by.map(|s| sm::ClusterSortBy::from(s.as_str())))
        .set_sort_order(request.sort_order.map(|s| sm::SortOrder::from(s.as_str())))
        .set_include_node_logical_ids(request.include_node_logical_ids)
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(ListClusterNodesRequest::NAME, e))?;
    capture.into_value(ListClusterNodesRequest::NAME)
}

pub(super) async fn delete_cluster(
    sdk: &SdkBackend,
    request: &DeleteClusterRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .delete_cluster()
        .set_cluster_name(request.cluster_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DeleteClusterRequest::NAME, e))?;
    capture.into_value(DeleteClusterRequest::NAME)
}

pub(super) async fn batch_delete_cluster_nodes(
    sdk: &SdkBackend,
    request: &BatchDeleteClusterNodesRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .batch_delete_cluster_nodes()
        .set_cluster_name(request.cluster_name.clone())
        .set_node_ids(list(&request.node_ids))
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(BatchDeleteClusterNodesRequest::NAME, e))?;
    capture.into_value(BatchDeleteClusterNodesRequest::NAME)
}

pub(super) async fn update_cluster_software(
    sdk: &SdkBackend,
    request: &UpdateClusterSoftwareRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .update_cluster_software()
        .set_cluster_name(request.cluster_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(UpdateClusterSoftwareRequest::NAME, e))?;
    capture.into_value(UpdateClusterSoftwareRequest::NAME)
}
