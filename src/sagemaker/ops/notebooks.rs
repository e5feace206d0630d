//! Notebook instances.

use super::{list, list_of, ResponseCapture};
use crate::error::Result;
use crate::sagemaker::client::SdkBackend;
use crate::sagemaker::requests::*;
use crate::sagemaker::Operation;
use aws_sdk_sagemaker::types as sm;
use serde_json::Value;

pub(super) async fn describe_notebook_instance(
    sdk: &SdkBackend,
    request: &DescribeNotebookInstanceRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_notebook_instance()
        .set_notebook_instance_name(request.notebook_instance_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeNotebookInstanceRequest::NAME, e))?;
    capture.into_value(DescribeNotebookInstanceRequest::NAME)
}

pub(super) async fn delete_notebook_instance(
    sdk: &SdkBackend,
    request: &DeleteNotebookInstanceRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .delete_notebook_instance()
        .set_notebook_instance_name(request.notebook_instance_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DeleteNotebookInstanceRequest::NAME, e))?;
    capture.into_value(DeleteNotebookInstanceRequest::NAME)
}

pub(super) async fn stop_notebook_instance(
    sdk: &SdkBackend,
    request: &StopNotebookInstanceRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .stop_notebook_instance()
        .set_notebook_instance_name(request.notebook_instance_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(StopNotebookInstanceRequest::NAME, e))?;
    capture.into_value(StopNotebookInstanceRequest::NAME)
}

pub(super) async fn update_notebook_instance(
    sdk: &SdkBackend,
    request: &UpdateNotebookInstanceRequest,
) -> Result<Value> {
    let metadata_service = request
        .instance_metadata_service_configuration
        .as_ref()
        .map(|c| {
            sm::InstanceMetadataServiceConfiguration::builder()
                .minimum_instance_metadata_service_version(
                    c.minimum_instance_metadata_service_version.clone(),
                )
                .build()
        });

    let capture = ResponseCapture::default();
    sdk.client()
        .update_notebook_instance()
        .set_notebook_instance_name(request.notebook_instance_name.clone())
        .set_instance_type(request.instance_type.as_deref().map(sm::InstanceType::from))
        .set_ip_address_type(request.ip_address_type.map(|t| sm::IpAddressType::from(t.as_str())))
        .set_platform_identifier(request.platform_identifier.clone())
        .set_role_arn(request.role_arn.clone())
        .set_lifecycle_config_name(request.lifecycle_config_name.clone())
        .set_disassociate_lifecycle_config(request.disassociate_lifecycle_config)
        .set_volume_size_in_gb(request.volume_size_in_gb)
        .set_default_code_repository(request.default_code_repository.clone())
        .set_additional_code_repositories(list(&request.additional_code_repositories))
        .set_accelerator_types(list_of(&request.accelerator_types, |t| {
            sm::NotebookInstanceAcceleratorType::from(t.as_str())
        }))
        .set_disassociate_accelerator_types(request.disassociate_accelerator_types)
        .set_disassociate_default_code_repository(request.disassociate_default_code_repository)
        .set_disassociate_additional_code_repositories(
            request.disassociate_additional_code_repositories,
        )
        .set_root_access(request.root_access.map(|r| sm::RootAccess::from(r.as_str())))
        .set_instance_metadata_service_configuration(metadata_service)
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(UpdateNotebookInstanceRequest::NAME, e))?;
    capture.into_value(UpdateNotebookInstanceRequest::NAME)
}
