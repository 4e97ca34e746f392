//! Interactive acknowledgement prompt
//!
//! Used for the one-time onboarding message the test scraper shows when a
//! user searches for one of its example keywords.

use thiserror::Error;

/// Errors that can occur while prompting the user
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal interaction failed (e.g. stdin is not a terminal)
    #[error("Prompt failed: {0}")]
    Interaction(#[from] dialoguer::Error),
}

/// Shows a message and blocks until the user acknowledges it
pub trait Prompter {
    fn acknowledge(&self, message: &str) -> Result<(), PromptError>;
}

/// Prompts on the attached terminal using dialoguer
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn acknowledge(&self, message: &str) -> Result<(), PromptError> {
        println!("{}", message);

        dialoguer::Input::<String>::new()
            .with_prompt("  Press ENTER to continue...")
            .allow_empty(true)
            .report(false)
            .interact_text()?;

        Ok(())
    }
}
