use anyhow::Result;
use dialoguer::Confirm;

/// Yes/no confirmation from the operator.
pub trait Prompt {
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Interactive prompt on the terminal. Defaults to "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}
