use dialoguer::{Input, Select};

use crate::{naming, Result};

/// Source of answers for the scaffold's questions.
pub trait Prompter {
    /// Asks for a name, asking again until it passes [`naming::validate`].
    /// With `optional`, an empty answer is accepted as-is.
    fn name(&mut self, prompt: &str, optional: bool) -> Result<String>;

    /// Asks for free text; an empty answer is accepted.
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Asks to pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;
}

/// Interactive prompts on the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn name(&mut self, prompt: &str, optional: bool) -> Result<String> {
        let name = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(optional)
            .validate_with(move |input: &String| -> std::result::Result<(), &'static str> {
                if (optional && input.is_empty()) || naming::validate(input) {
                    Ok(())
                } else {
                    Err("must start with a letter and contain only letters, digits, '-' or '_'")
                }
            })
            .interact_text()?;
        Ok(name)
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        let text = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(text)
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let idx_selected = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(idx_selected)
    }
}
