//! Shell completions module for sagectl
//!
//! Provides shell completion scripts for bash, zsh, fish, powershell, and elvish.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completions and write to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "sagectl", &mut io::stdout());
}

/// Get completions as a string
#[cfg_attr(not(test), allow(dead_code))]
pub fn get_completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "sagectl", &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}
