//! Interactive confirmation for destructive operations.

use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm as ConfirmPrompt};
use is_terminal::IsTerminal;
use sagectl::error::{Error, Result};
use sagectl::invoke::Confirm;
use tracing::warn;

/// Asks on the terminal; answers no when there is no terminal to ask on.
pub struct TerminalConfirm {
    term: Term,
    theme: ColorfulTheme,
}

impl Default for TerminalConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConfirm {
    /// Create a prompt bound to stderr
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }

    fn interactive() -> bool {
        std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if !Self::interactive() {
            warn!("not running on a terminal; pass --force to proceed without confirmation");
            return Ok(false);
        }

        ConfirmPrompt::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_on(&self.term)
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}
