//! Subcommands module for sagectl CLI
//!
//! Resolves the effective settings for a run and dispatches subcommands.

use crate::cli::completions::generate_completions;
use crate::cli::output::OutputFormatter;
use crate::cli::prompt::TerminalConfirm;
use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use sagectl::config::Config;
use sagectl::invoke::{InvokeOptions, Invoker, Outcome, Prepared, Strictness};
use sagectl::sagemaker::{Request, SdkBackend};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Common context shared between commands
pub struct CommandContext {
    /// Configuration with command-line overrides applied
    pub config: Config,
    /// Output formatter
    pub output: OutputFormatter,
    /// Invocation options
    pub invoke: InvokeOptions,
    /// Verbosity level
    pub verbosity: u8,
}

impl CommandContext {
    /// Create a new command context from CLI arguments
    pub fn new(cli: &Cli, mut config: Config) -> Self {
        if let Some(region) = &cli.region {
            config.aws.region = Some(region.clone());
        }
        if let Some(profile) = &cli.profile {
            config.aws.profile = Some(profile.clone());
        }
        if let Some(url) = &cli.endpoint_url {
            config.aws.endpoint_url = Some(url.clone());
        }
        if let Some(timeout) = cli.timeout {
            config.aws.timeout = Some(timeout);
        }

        let format = cli
            .output
            .or_else(|| config.defaults.output.parse().ok())
            .unwrap_or_default();
        let use_color = !cli.no_color && config.colors.enabled;
        let output = OutputFormatter::new(use_color, format, cli.verbosity());

        let strictness = if cli.lenient || !config.defaults.strict_required {
            Strictness::Lenient
        } else {
            Strictness::Strict
        };

        let invoke = InvokeOptions {
            strictness,
            force: cli.force,
            confirm_destructive: config.defaults.confirm_destructive,
            select: cli.select.clone(),
        };

        Self {
            config,
            output,
            invoke,
            verbosity: cli.verbosity(),
        }
    }
}

/// Run the selected subcommand and return the process exit code
pub async fn execute(cli: &Cli, ctx: &CommandContext, cancel: &CancellationToken) -> Result<i32> {
    match &cli.command {
        Commands::Api(request) => call(request.clone(), ctx, cancel).await,
        Commands::Operations => {
            ctx.output
                .emit_catalog(&Request::catalog())
                .context("failed to write operation list")?;
            Ok(0)
        }
        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(0)
        }
    }
}

async fn call(request: Request, ctx: &CommandContext, cancel: &CancellationToken) -> Result<i32> {
    // Validation happens before any AWS configuration is resolved
    let prepared = Prepared::new(request, &ctx.invoke)?;

    let backend = SdkBackend::connect(&ctx.config.aws).await?;
    ctx.output.info(&format!(
        "{} -> {} ({})",
        prepared.request().name(),
        backend.endpoint(),
        backend.region()
    ));

    let invoker = Invoker::new(
        Arc::new(backend),
        Arc::new(TerminalConfirm::new()),
        ctx.invoke.clone(),
    );

    match invoker.run(&prepared, cancel).await? {
        Outcome::Completed(value) => {
            ctx.output.emit(&value).context("failed to write result")?;
        }
        Outcome::Declined => {
            ctx.output.warning(&format!(
                "{} was not confirmed; nothing was changed",
                prepared.request().command()
            ));
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "sagectl",
            "--region",
            "eu-central-1",
            "--timeout",
            "10",
            "--lenient",
            "operations",
        ])
        .unwrap();
        let mut config = Config::default();
        config.aws.region = Some("us-east-1".to_string());
        config.aws.profile = Some("ml".to_string());

        let ctx = CommandContext::new(&cli, config);
        assert_eq!(ctx.config.aws.region.as_deref(), Some("eu-central-1"));
        assert_eq!(ctx.config.aws.profile.as_deref(), Some("ml"));
        assert_eq!(ctx.config.aws.timeout, Some(10));
        assert_eq!(ctx.invoke.strictness, Strictness::Lenient);
        assert!(!ctx.invoke.force);
    }

    #[test]
    fn test_config_defaults_apply() {
        let cli = Cli::try_parse_from(["sagectl", "--force", "operations"]).unwrap();
        let mut config = Config::default();
        config.defaults.strict_required = false;
        config.defaults.confirm_destructive = false;
        config.defaults.output = "yaml".to_string();

        let ctx = CommandContext::new(&cli, config);
        assert_eq!(ctx.invoke.strictness, Strictness::Lenient);
        assert!(!ctx.invoke.confirm_destructive);
        assert!(ctx.invoke.force);
        assert_eq!(
            ctx.output.render(&serde_json::json!({"a": 1})).unwrap(),
            "a: 1\n"
        );
    }

    #[tokio::test]
    async fn test_missing_parameter_fails_before_connecting() {
        let cli = Cli::try_parse_from(["sagectl", "get-endpoint"]).unwrap();
        let ctx = CommandContext::new(&cli, Config::default());

        let err = execute(&cli, &ctx, &CancellationToken::new())
            .await
            .unwrap_err();
        let err = err.downcast_ref::<sagectl::error::Error>().unwrap();
        assert_eq!(err.exit_code(), 2);
    }
}
