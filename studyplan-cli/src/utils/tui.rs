use anyhow::Result;
use dialoguer::{Confirm, Select};

/// Ask before a destructive action. `--force` skips the prompt.
pub fn confirm(prompt: String, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    Ok(confirmed)
}

/// Pick one item from a list. Returns the chosen index.
pub fn select(prompt: &str, items: &[String]) -> Result<usize> {
    let index = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;

    Ok(index)
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
