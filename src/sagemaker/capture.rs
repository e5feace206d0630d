//! Raw response capture.
//!
//! Output selection works on the body the service sent, not on the SDK's
//! typed output, which fills unsent required members with defaults.

use crate::error::{Error, Result};
use aws_sdk_sagemaker::config::interceptors::AfterDeserializationInterceptorContextRef;
use aws_sdk_sagemaker::config::{ConfigBag, Intercept, RuntimeComponents};
use aws_sdk_sagemaker::error::BoxError;
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex, PoisonError};

/// Interceptor that keeps the last response body of one operation call.
///
/// Clone it into `customize().interceptor(..)`; the clone shares storage
/// with the original, which reads the body back with [`into_value`].
///
/// [`into_value`]: ResponseCapture::into_value
#[derive(Debug, Clone, Default)]
pub(crate) struct ResponseCapture {
    body: Arc<Mutex<Option<Vec<u8>>>>,
}

impl ResponseCapture {
    /// Store a body, replacing the one from any earlier attempt.
    fn record(&self, body: Option<&[u8]>) {
        let mut slot = self.body.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = body.map(<[u8]>::to_vec);
    }

    /// Parse the captured body.
    ///
    /// Operations with no output members answer with an empty body, which
    /// becomes an empty object.
    pub(crate) fn into_value(self, operation: &'static str) -> Result<Value> {
        let body = self
            .body
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or_else(|| Error::transport(operation, "response body was not captured"))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_slice(&body).map_err(|e| {
            Error::transport(operation, format!("response body is not valid JSON: {e}"))
        })
    }
}

impl Intercept for ResponseCapture {
    fn name(&self) -> &'static str {
        "ResponseCapture"
    }

    fn read_after_deserialization(
        &self,
        context: &AfterDeserializationInterceptorContextRef<'_>,
        _runtime_components: &RuntimeComponents,
        _cfg: &mut ConfigBag,
    ) -> std::result::Result<(), BoxError> {
        self.record(context.response().body().bytes());
        Ok(())
    }
}
