//! Interactive login prompts.

use std::io::{self, IsTerminal};

use dialoguer::{Input, Password};

use crate::core::flow::Prompt;
use crate::error::{Error, Result};

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn require_terminal(what: &'static str) -> Result<()> {
        if io::stdin().is_terminal() {
            Ok(())
        } else {
            Err(Error::NonInteractive(what))
        }
    }
}

impl Prompt for TerminalPrompt {
    fn email(&mut self) -> Result<String> {
        Self::require_terminal("email")?;

        let email = Password::new()
            .with_prompt("What is your email address?")
            .interact()?;

        Ok(email)
    }

    fn short_code(&mut self) -> Result<String> {
        Self::require_terminal("short code")?;

        let code: String = Input::new()
            .with_prompt("Enter the short code sent to your email")
            .interact_text()?;

        Ok(code)
    }
}
