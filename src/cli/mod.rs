//! CLI module for sagectl
//!
//! This module provides the command-line interface for sagectl,
//! including argument parsing, confirmation prompts, output formatting and
//! subcommand handling.

pub mod commands;
pub mod completions;
pub mod output;
pub mod prompt;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use sagectl::sagemaker::Request;
use std::path::PathBuf;

/// sagectl - describe, delete, stop and update Amazon SageMaker resources
#[derive(Parser, Debug, Clone)]
#[command(name = "sagectl")]
#[command(author = "sagectl Contributors")]
#[command(version)]
#[command(about = "Command-line adapters for the Amazon SageMaker control plane", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// AWS region (overrides the profile and environment)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Named AWS profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Custom SageMaker endpoint URL
    #[arg(long, global = true)]
    pub endpoint_url: Option<String>,

    /// Output selector: '*' for the full response, a property path, or '^Param' to echo an input
    #[arg(short = 's', long, global = true)]
    pub select: Option<String>,

    /// Skip the confirmation prompt for delete, stop and update operations
    #[arg(short = 'f', long, global = true)]
    pub force: bool,

    /// Warn about missing required parameters instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Output format
    #[arg(long, global = true)]
    pub output: Option<OutputFormat>,

    /// Per-operation timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true, env = "SAGECTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
    /// Bare scalars, one line per array item, JSON for anything nested
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(flatten)]
    Api(Request),

    /// List every supported operation
    Operations,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the effective verbosity level (0-3)
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagectl::sagemaker::{
        ClusterSortBy, OperationKind, RootAccess, SortOrder, VariantPropertyType,
    };

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "sagectl",
            "get-training-job",
            "--training-job-name",
            "job-1",
        ])
        .unwrap();
        match cli.command {
            Commands::Api(request) => {
                assert_eq!(request.name(), "DescribeTrainingJob");
                assert_eq!(request.target(), "job-1");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sagectl",
            "remove-endpoint",
            "--endpoint-name",
            "ep-1",
            "--force",
            "-s",
            "^EndpointName",
            "--region",
            "us-west-2",
            "-vv",
        ])
        .unwrap();
        assert!(cli.force);
        assert_eq!(cli.select.as_deref(), Some("^EndpointName"));
        assert_eq!(cli.region.as_deref(), Some("us-west-2"));
        assert_eq!(cli.verbosity(), 2);
        match cli.command {
            Commands::Api(request) => assert_eq!(request.kind(), OperationKind::Remove),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_list_and_enum_parameters() {
        let cli = Cli::try_parse_from([
            "sagectl",
            "get-cluster-node-list",
            "--cluster-name",
            "hp",
            "--sort-order",
            "descending",
            "--max-results",
            "5",
        ])
        .unwrap();
        let Commands::Api(Request::GetClusterNodeList(list)) = cli.command else {
            panic!("expected get-cluster-node-list");
        };
        assert_eq!(list.sort_order, Some(SortOrder::Descending));
        assert_eq!(list.max_results, Some(5));

        let cli = Cli::try_parse_from([
            "sagectl",
            "remove-cluster-node",
            "--cluster-name",
            "hp",
            "--node-id",
            "i-1,i-2",
            "--node-id",
            "i-3",
        ])
        .unwrap();
        let Commands::Api(Request::RemoveClusterNode(nodes)) = cli.command else {
            panic!("expected remove-cluster-node");
        };
        assert_eq!(nodes.node_ids, vec!["i-1", "i-2", "i-3"]);
    }

    #[test]
    fn test_structured_parameters() {
        let cli = Cli::try_parse_from([
            "sagectl",
            "get-cluster-node-list",
            "--cluster-name",
            "hp",
            "--sort-by",
            "CREATION_TIME",
            "--creation-time-after",
            "2024-05-01T00:00:00Z",
        ])
        .unwrap();
        let Commands::Api(Request::GetClusterNodeList(list)) = cli.command else {
            panic!("expected get-cluster-node-list");
        };
        assert_eq!(list.sort_by, Some(ClusterSortBy::CreationTime));
        assert_eq!(
            list.creation_time_after.map(|t| t.timestamp()),
            Some(1_714_521_600)
        );

        let cli = Cli::try_parse_from([
            "sagectl",
            "update-endpoint",
            "--endpoint-name",
            "ep",
            "--exclude-retained-variant-property",
            "DesiredWeight,DesiredInstanceCount",
        ])
        .unwrap();
        let Commands::Api(Request::UpdateEndpoint(update)) = cli.command else {
            panic!("expected update-endpoint");
        };
        let kinds: Vec<_> = update
            .exclude_retained_variant_properties
            .iter()
            .map(|p| p.variant_property_type)
            .collect();
        assert_eq!(
            kinds,
            vec![
                VariantPropertyType::DesiredWeight,
                VariantPropertyType::DesiredInstanceCount
            ]
        );

        let cli = Cli::try_parse_from([
            "sagectl",
            "update-model-package",
            "--model-package-arn",
            "arn:pkg",
            "--customer-metadata-property",
            "team=vision",
            "--customer-metadata-property",
            "stage=prod",
        ])
        .unwrap();
        let Commands::Api(Request::UpdateModelPackage(package)) = cli.command else {
            panic!("expected update-model-package");
        };
        assert_eq!(
            package.customer_metadata_properties,
            vec![
                ("team".to_string(), "vision".to_string()),
                ("stage".to_string(), "prod".to_string())
            ]
        );

        let cli = Cli::try_parse_from([
            "sagectl",
            "update-notebook-instance",
            "--notebook-instance-name",
            "nb",
            "--root-access",
            "disabled",
            "--minimum-instance-metadata-service-version",
            "2",
        ])
        .unwrap();
        let Commands::Api(Request::UpdateNotebookInstance(notebook)) = cli.command else {
            panic!("expected update-notebook-instance");
        };
        assert_eq!(notebook.root_access, Some(RootAccess::Disabled));
        assert!(notebook.instance_metadata_service_configuration.is_some());
    }

    #[test]
    fn test_malformed_structured_parameters_rejected() {
        for args in [
            ["update-model-package", "--customer-metadata-property", "novalue"],
            ["update-endpoint", "--exclude-retained-variant-property", "Weight"],
            ["update-notebook-instance", "--minimum-instance-metadata-service-version", "3"],
        ] {
            let err = Cli::try_parse_from(std::iter::once("sagectl").chain(args)).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{args:?}");
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Cli::try_parse_from(["sagectl", "--timeout", "0", "operations"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        let cli = Cli::try_parse_from(["sagectl", "--timeout", "1", "operations"]).unwrap();
        assert_eq!(cli.timeout, Some(1));
    }

    #[test]
    fn test_required_flags_are_not_enforced_by_clap() {
        // Missing required parameters are reported by the invoker
        let cli = Cli::try_parse_from(["sagectl", "get-model"]).unwrap();
        assert!(matches!(cli.command, Commands::Api(Request::GetModel(_))));
    }

    #[test]
    fn test_output_format() {
        let cli = Cli::try_parse_from(["sagectl", "--output", "yaml", "operations"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Yaml));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_completions_command() {
        let cli = Cli::try_parse_from(["sagectl", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Bash }
        ));
    }
}
