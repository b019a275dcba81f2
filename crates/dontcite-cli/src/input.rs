//! Selection input from flags or stdin

use anyhow::{Context, Result};
use clap::Args;
use dontcite::Selection;
use std::io::Read;

/// Where the selected text comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Selected text
    #[arg(long, conflicts_with_all = ["stdin", "json"])]
    pub text: Option<String>,
    /// Read the selected text from stdin
    #[arg(long, conflicts_with = "json")]
    pub stdin: bool,
    /// Read a `{"text", "url", "title"}` selection message from stdin
    #[arg(long)]
    pub json: bool,
    /// URL of the page the text came from
    #[arg(short, long, default_value = "")]
    pub url: String,
    /// Title of the page
    #[arg(short, long, default_value = "")]
    pub title: String,
}

impl SelectionArgs {
    /// Build the selection, reading stdin when asked to
    pub fn read(&self) -> Result<Selection> {
        if self.json || self.stdin {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read selection from stdin")?;
            return self.parse_input(&input);
        }

        Ok(Selection::new(
            self.text.clone(),
            self.url.clone(),
            self.title.clone(),
        ))
    }

    fn parse_input(&self, input: &str) -> Result<Selection> {
        if self.json {
            let mut selection: Selection =
                serde_json::from_str(input).context("Failed to parse selection JSON")?;
            if selection.url.is_empty() {
                selection.url = self.url.clone();
            }
            if selection.title.is_empty() {
                selection.title = self.title.clone();
            }
            return Ok(selection);
        }

        let text = input.trim_end_matches(['\n', '\r']).to_string();
        let text = if text.is_empty() { None } else { Some(text) };

        Ok(Selection::new(text, self.url.clone(), self.title.clone()))
    }
}
