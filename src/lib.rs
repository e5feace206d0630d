//! # sagectl - Command-line adapters for the Amazon SageMaker control plane
//!
//! sagectl exposes a fixed set of SageMaker describe, delete, stop and
//! update calls as typed requests. Each request is validated locally,
//! gated behind confirmation when it changes something, sent through the
//! AWS SDK exactly once, and its response is projected through an output
//! selector.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           CLI Interface                              │
//! │        (clap subcommands derived from the Request enum)             │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                    │
//!                                    ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                             Invoker                                  │
//! │   (required-parameter check, selector, confirmation, cancellation)  │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                    │
//!                                    ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       SageMakerBackend                               │
//! │         (aws-sdk-sagemaker client, one call per request)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use sagectl::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load(None)?;
//!     let backend = SdkBackend::connect(&config.aws).await?;
//!     let invoker = Invoker::new(Arc::new(backend), Arc::new(AssumeNo), InvokeOptions::default());
//!
//!     let request = DescribeTrainingJobRequest {
//!         training_job_name: Some("job-1".to_string()),
//!     };
//!     if let Outcome::Completed(value) = invoker.invoke(request.into(), &Default::default()).await? {
//!         println!("{value}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod invoke;
pub mod sagemaker;
pub mod select;

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    pub use crate::config::{AwsSettings, Config};
    pub use crate::error::{Error, Result};
    pub use crate::invoke::{
        AssumeNo, AssumeYes, Confirm, InvokeOptions, Invoker, Outcome, Prepared, Strictness,
    };
    pub use crate::sagemaker::*;
    pub use crate::select::Selector;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
