//! Real-time inference endpoints.

use super::{list_of, ResponseCapture};
use crate::error::Result;
use crate::sagemaker::client::SdkBackend;
use crate::sagemaker::requests::*;
use crate::sagemaker::Operation;
use aws_sdk_sagemaker::types as sm;
use serde_json::Value;

pub(super) async fn describe_endpoint(
    sdk: &SdkBackend,
    request: &DescribeEndpointRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_endpoint()
        .set_endpoint_name(request.endpoint_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeEndpointRequest::NAME, e))?;
    capture.into_value(DescribeEndpointRequest::NAME)
}

pub(super) async fn delete_endpoint(
    sdk: &SdkBackend,
    request: &DeleteEndpointRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .delete_endpoint()
        .set_endpoint_name(request.endpoint_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DeleteEndpointRequest::NAME, e))?;
    capture.into_value(DeleteEndpointRequest::NAME)
}

pub(super) async fn update_endpoint(
    sdk: &SdkBackend,
    request: &UpdateEndpointRequest,
) -> Result<Value> {
    let excluded = list_of(&request.exclude_retained_variant_properties, |p| {
        sm::VariantProperty::builder()
            .variant_property_type(sm::VariantPropertyType::from(
                p.variant_property_type.as_str(),
            ))
            .build()
    });

    let capture = ResponseCapture::default();
    sdk.client()
        .update_endpoint()
        .set_endpoint_name(request.endpoint_name.clone())
        .set_endpoint_config_name(request.endpoint_config_name.clone())
        .set_retain_all_variant_properties(request.retain_all_variant_properties)
        .set_exclude_retained_variant_properties(excluded)
        .set_retain_deployment_config(request.retain_deployment_config)
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(UpdateEndpointRequest::NAME, e))?;
    capture.into_value(UpdateEndpointRequest::NAME)
}
