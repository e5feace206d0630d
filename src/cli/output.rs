//! Output formatting module for sagectl
//!
//! Results go to stdout in the selected format; diagnostics go to stderr,
//! colored when enabled.

use super::OutputFormat;
use colored::Colorize;
use sagectl::error::Result;
use sagectl::sagemaker::OperationInfo;
use serde_json::Value;
use std::io::{self, Write};

/// Output formatter for results and diagnostics
pub struct OutputFormatter {
    /// Use colored output
    use_color: bool,
    /// Result format
    format: OutputFormat,
    /// Verbosity level
    verbosity: u8,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(use_color: bool, format: OutputFormat, verbosity: u8) -> Self {
        // Respect NO_COLOR environment variable
        let use_color = use_color && std::env::var("NO_COLOR").is_err();

        if !use_color {
            colored::control::set_override(false);
        }

        Self {
            use_color,
            format,
            verbosity,
        }
    }

    /// Render a value in the configured format
    pub fn render(&self, value: &Value) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Text => render_text(value),
        })
    }

    /// Write a result to stdout
    pub fn emit(&self, value: &Value) -> Result<()> {
        let rendered = self.render(value)?;
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", rendered)?;
        if !rendered.ends_with('\n') {
            writeln!(stdout)?;
        }
        Ok(())
    }

    /// Write the operation catalog to stdout
    pub fn emit_catalog(&self, catalog: &[OperationInfo]) -> Result<()> {
        if self.format != OutputFormat::Text {
            return self.emit(&serde_json::to_value(catalog)?);
        }

        let width = catalog.iter().map(|i| i.command.len()).max().unwrap_or(0);
        let mut stdout = io::stdout().lock();
        for info in catalog {
            let marker = if info.kind.is_destructive() { "!" } else { " " };
            let required = if info.required.is_empty() {
                "-".to_string()
            } else {
                info.required.join(",")
            };
            let command = format!("{:width$}", info.command, width = width);
            if self.use_color {
                writeln!(
                    stdout,
                    "{} {} {:36} select={:22} required={}",
                    marker.red().bold(),
                    command.bright_white().bold(),
                    info.operation,
                    info.default_select.cyan(),
                    required
                )?;
            } else {
                writeln!(
                    stdout,
                    "{} {} {:36} select={:22} required={}",
                    marker, command, info.operation, info.default_select, required
                )?;
            }
        }
        Ok(())
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "ERROR:".red().bold(), message.red());
        } else {
            eprintln!("ERROR: {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "WARNING:".yellow().bold(), message.yellow());
        } else {
            eprintln!("WARNING: {}", message);
        }
    }

    /// Print an info message (only with -v)
    pub fn info(&self, message: &str) {
        if self.verbosity == 0 {
            return;
        }

        if self.use_color {
            eprintln!("{} {}", "INFO:".blue().bold(), message);
        } else {
            eprintln!("INFO: {}", message);
        }
    }
}

/// Plain rendering: strings unquoted, arrays one item per line, null as
/// nothing, objects as compact JSON.
fn render_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json() {
        let formatter = OutputFormatter::new(false, OutputFormat::Json, 0);
        let rendered = formatter.render(&json!({"status": "Completed"})).unwrap();
        assert_eq!(rendered, "{\n  \"status\": \"Completed\"\n}");
    }

    #[test]
    fn test_render_yaml() {
        let formatter = OutputFormatter::new(false, OutputFormat::Yaml, 0);
        let rendered = formatter.render(&json!({"EndpointStatus": "InService"})).unwrap();
        assert_eq!(rendered, "EndpointStatus: InService\n");
    }

    #[test]
    fn test_render_text() {
        let formatter = OutputFormatter::new(false, OutputFormat::Text, 0);
        assert_eq!(formatter.render(&json!("arn:aws:sagemaker:x")).unwrap(), "arn:aws:sagemaker:x");
        assert_eq!(formatter.render(&json!(["i-1", "i-2"])).unwrap(), "i-1\ni-2");
        assert_eq!(formatter.render(&json!(42)).unwrap(), "42");
        assert_eq!(formatter.render(&Value::Null).unwrap(), "");
        assert_eq!(
            formatter.render(&json!({"Status": "Running"})).unwrap(),
            "{\"Status\":\"Running\"}"
        );
    }
}
