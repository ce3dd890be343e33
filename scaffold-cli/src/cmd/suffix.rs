use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use scaffold_sdk::{
	naming::unique_suffix,
	settings::{normalize_extensions, Settings},
	storage::LocalFileSystem,
};

use super::Configured;

/// Prints the lowest numeric suffix that makes <BASE> free under every extension.
#[derive(Parser, Debug)]
pub struct Suffix {
	#[arg(value_hint = ValueHint::DirPath)]
	directory: PathBuf,
	base: String,
	#[arg(long = "ext", short = 'e', help = "Extension to check, without the dot (defaults to the configured pair)")]
	extensions: Vec<String>,
}

impl Configured for Suffix {
	fn run(self, settings: Settings) -> Result<()> {
		let extensions = if self.extensions.is_empty() {
			settings.extensions
		} else {
			normalize_extensions(&self.extensions).context("invalid --ext value")?
		};
		let suffix = unique_suffix(&LocalFileSystem, &self.directory, &self.base, &extensions)
			.with_context(|| format!("could not scan {}", self.directory.display()))?;
		println!("{suffix}");
		Ok(())
	}
}
