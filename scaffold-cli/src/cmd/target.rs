use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use console::{style, Emoji};
use scaffold_sdk::{
	location::{SourceRoot, TargetRequest},
	settings::Settings,
	storage::LocalFileSystem,
};

use super::Configured;

/// Resolves the directory for <CLASS_NAME>, creating missing folders, and
/// lists the files the pair would occupy.
#[derive(Parser, Debug)]
pub struct Target {
	#[arg(value_hint = ValueHint::DirPath)]
	root: PathBuf,
	#[arg(help = "Class name, optionally prefixed by folders (`io/Reader`)")]
	class_name: String,
	#[arg(long, short = 'f', default_value = "")]
	folder: String,
}

impl Configured for Target {
	fn run(self, settings: Settings) -> Result<()> {
		let request = TargetRequest::new(SourceRoot::from_path(&self.root), self.folder, self.class_name);
		let target = request
			.resolve(&LocalFileSystem)
			.with_context(|| format!("could not prepare a folder under {}", self.root.display()))?;

		println!("{} {}", style(Emoji("✔", "ok")).green(), target.directory.display());
		for file in target.files(&settings.extensions) {
			println!("  {}", file.display());
		}
		Ok(())
	}
}
