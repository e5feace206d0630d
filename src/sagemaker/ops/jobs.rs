//! AutoML, compilation, tuning, processing, training and transform jobs.

use super::{timestamp, ResponseCapture};
use crate::error::Result;
use crate::sagemaker::client::SdkBackend;
use crate::sagemaker::requests::*;
use crate::sagemaker::Operation;
use aws_sdk_sagemaker::types as sm;
use serde_json::Value;

// ============================================================================
// AutoML
// ============================================================================

pub(super) async fn describe_auto_ml_job(
    sdk: &SdkBackend,
    request: &DescribeAutoMlJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_auto_ml_job()
        .set_auto_ml_job_name(request.auto_ml_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeAutoMlJobRequest::NAME, e))?;
    capture.into_value(DescribeAutoMlJobRequest::NAME)
}

pub(super) async fn describe_auto_ml_job_v2(
    sdk: &SdkBackend,
    request: &DescribeAutoMlJobV2Request,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_auto_ml_job_v2()
        .set_auto_ml_job_name(request.auto_ml_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeAutoMlJobV2Request::NAME, e))?;
    capture.into_value(DescribeAutoMlJobV2Request::NAME)
}

pub(super) async fn stop_auto_ml_job(
    sdk: &SdkBackend,
    request: &StopAutoMlJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .stop_auto_ml_job()
        .set_auto_ml_job_name(request.auto_ml_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(StopAutoMlJobRequest::NAME, e))?;
    capture.into_value(StopAutoMlJobRequest::NAME)
}

// ============================================================================
// Compilation
// ============================================================================

pub(super) async fn describe_compilation_job(
    sdk: &SdkBackend,
    request: &DescribeCompilationJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_compilation_job()
        .set_compilation_job_name(request.compilation_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeCompilationJobRequest::NAME, e))?;
    capture.into_value(DescribeCompilationJobRequest::NAME)
}

pub(super) async fn delete_compilation_job(
    sdk: &SdkBackend,
    request: &DeleteCompilationJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .delete_compilation_job()
        .set_compilation_job_name(request.compilation_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DeleteCompilationJobRequest::NAME, e))?;
    capture.into_value(DeleteCompilationJobRequest::NAME)
}

pub(super) async fn stop_compilation_job(
    sdk: &SdkBackend,
    request: &StopCompilationJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .stop_compilation_job()
        .set_compilation_job_name(request.compilation_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(StopCompilationJobRequest::NAME, e))?;
    capture.into_value(StopCompilationJobRequest::NAME)
}

// ============================================================================
// Hyperparameter tuning
// ============================================================================

pub(super) async fn describe_hyper_parameter_tuning_job(
    sdk: &SdkBackend,
    request: &DescribeHyperParameterTuningJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_hyper_parameter_tuning_job()
        .set_hyper_parameter_tuning_job_name(request.hyper_parameter_tuning_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeHyperParameterTuningJobRequest::NAME, e))?;
    capture.into_value(DescribeHyperParameterTuningJobRequest::NAME)
}

pub(super) async fn stop_hyper_parameter_tuning_job(
    sdk: &SdkBackend,
    request: &StopHyperParameterTuningJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .stop_hyper_parameter_tuning_job()
        .set_hyper_parameter_tuning_job_name(request.hyper_parameter_tuning_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(StopHyperParameterTuningJobRequest::NAME, e))?;
    capture.into_value(StopHyperParameterTuningJobRequest::NAME)
}

// ============================================================================
// Processing
// ============================================================================

pub(super) async fn describe_processing_job(
    sdk: &SdkBackend,
    request: &DescribeProcessingJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_processing_job()
        .set_processing_job_name(request.processing_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeProcessingJobRequest::NAME, e))?;
    capture.into_value(DescribeProcessingJobRequest::NAME)
}

pub(super) async fn stop_processing_job(
    sdk: &SdkBackend,
    request: &StopProcessingJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .stop_processing_job()
        .set_processing_job_name(request.processing_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(StopProcessingJobRequest::NAME, e))?;
    capture.into_value(StopProcessingJobRequest::NAME)
}

// ============================================================================
// Training
// ============================================================================

pub(super) async fn describe_training_job(
    sdk: &SdkBackend,
    request: &DescribeTrainingJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_training_job()
        .set_training_job_name(request.training_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeTrainingJobRequest::NAME, e))?;
    capture.into_value(DescribeTrainingJobRequest::NAME)
}

pub(super) async fn list_training_jobs(
    sdk: &SdkBackend,
    request: &ListTrainingJobsRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .list_training_jobs()
        .set_next_token(request.next_token.clone())
        .set_max_results(request.max_results)
        .set_creation_time_after(timestamp(request.creation_time_after))
        .set_creation_time_before(timestamp(request.creation_time_before))
        .set_last_modified_time_after(timestamp(request.last_modified_time_after))
        .set_last_modified_time_before(timestamp(request.last_modified_time_before))
        .set_name_contains(request.name_contains.clone())
        .set_status_equals(
            request
                .status_equals
                .map(|s| sm::TrainingJobStatus::from(s.as_str())),
        )
        .set_sort_by(request.sort_by.map(|s| sm::SortBy::from(s.as_str())))
        .set_sort_order(request.sort_order.map(|s| sm::SortOrder::from(s.as_str())))
        .set_warm_pool_status_equals(
            request
                .warm_pool_status_equals
                .map(|s| sm::WarmPoolResourceStatus::from(s.as_str())),
        )
        .set_training_plan_arn_equals(request.training_plan_arn_equals.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(ListTrainingJobsRequest::NAME, e))?;
    capture.into_value(ListTrainingJobsRequest::NAME)
}

pub(super) async fn stop_training_job(
    sdk: &SdkBackend,
    request: &StopTrainingJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .stop_training_job()
        .set_training_job_name(request.training_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(StopTrainingJobRequest::NAME, e))?;
    capture.into_value(StopTrainingJobRequest::NAME)
}

// ============================================================================
// Batch transform
// ============================================================================

pub(super) async fn describe_transform_job(
    sdk: &SdkBackend,
    request: &DescribeTransformJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .describe_transform_job()
        .set_transform_job_name(request.transform_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(DescribeTransformJobRequest::NAME, e))?;
    capture.into_value(DescribeTransformJobRequest::NAME)
}

pub(super) async fn stop_transform_job(
    sdk: &SdkBackend,
    request: &StopTransformJobRequest,
) -> Result<Value> {
    let capture = ResponseCapture::default();
    sdk.client()
        .stop_transform_job()
        .set_transform_job_name(request.transform_job_name.clone())
        .customize()
        .interceptor(capture.clone())
        .send()
        .await
        .map_err(|e| sdk.translate(StopTransformJobRequest::NAME, e))?;
    capture.into_value(StopTransformJobRequest::NAME)
}
