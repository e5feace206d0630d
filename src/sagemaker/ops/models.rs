//! Models, model packages and algorithms.

use super::{list, ResponseCapture};
use crate::error::Result;
use crate::sagemaker::client::SdkBackend;
use crate::sagemaker::requests::*;
use crate::sagemaker::Operation;
use aws_sdk_sagemaker::types as sm;
use serde_json::Value;
use std::collections::HashMap;

pub(super) async fn describe_model(
    sdk: &SdkBackend,
    request: &DescribeModelRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_model()
        .set_model_name(request.model_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeModelRequest::NAME, e))?;
    capture.into_value(DescribeModelRequest::NAME)
}

pub(super) async fn delete_model(sdk: &SdkBackend, request: &DeleteModelRequest) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .delete_model()
        .set_model_name(request.model_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DeleteModelRequest::NAME, e))?;
    capture.into_value(DeleteModelRequest::NAME)
}

pub(super) async fn batch_describe_model_package(
    sdk: &SdkBackend,
    request: &BatchDescribeModelPackageRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .batch_describe_model_package()
        .set_model_package_arn_list(list(&request.model_package_arn_list))
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(BatchDescribeModelPackageRequest::NAME, e))?;
    capture.into_value(BatchDescribeModelPackageRequest::NAME)
}

pub(super) async fn update_model_package(
    sdk: &SdkBackend,
    request: &UpdateModelPackageRequest,
) -> Result<Value> {
    let properties = (!request.customer_metadata_properties.is_empty()).then(|| {
        request
            .customer_metadata_properties
            .iter()
            .cloned()
            .collect::<HashMap<_, _>>()
    });

    let capture = ResponseCapture::default();
    sdk.client()
        .update_model_package()
        .set_model_package_arn(request.model_package_arn.clone())
        .set_model_approval_status(
            request
                .model_approval_status
                .map(|s| sm::ModelApprovalStatus::from(s.as_str())),
        )
        .set_model_package_registration_type(
            request
                .model_package_registration_type
                .map(|t| sm::ModelPackageRegistrationType::from(t.as_str())),
        )
        .set_approval_description(request.approval_description.clone())
        .set_customer_metadata_properties(properties)
        .set_customer_metadata_properties_to_remove(list(
            &request.customer_metadata_properties_to_remove,
        ))
        .set_source_uri(request.source_uri.clone())
        .set_client_token(request.client_token.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(UpdateModelPackageRequest::NAME, e))?;
    capture.into_value(UpdateModelPackageRequest::NAME)
}

pub(super) async fn delete_algorithm(
    sdk: &SdkBackend,
    request: &DeleteAlgorithmRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .delete_algorithm()
        .set_algorithm_name(request.algorithm_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DeleteAlgorithmRequest::NAME, e))?;
    capture.into_value(DeleteAlgorithmRequest::NAME)
}
