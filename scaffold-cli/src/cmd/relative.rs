use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueHint};
use scaffold_sdk::location::relative_path;
use scaffold_stdx::path::to_display_path;

use super::Cmd;

/// Prints <FOLDER> relative to <ROOT>; nothing when it lies outside of it.
#[derive(Parser, Debug)]
pub struct Relative {
	#[arg(value_hint = ValueHint::DirPath)]
	root: PathBuf,
	#[arg(value_hint = ValueHint::DirPath)]
	folder: Option<PathBuf>,
	#[arg(long, help = "Use the platform separator instead of `/`")]
	display: bool,
}

impl Cmd for Relative {
	fn run(self) -> Result<()> {
		let relative = relative_path(&self.root, self.folder.as_deref())?;
		if self.display {
			println!("{}", to_display_path(&relative));
		} else {
			println!("{relative}");
		}
		Ok(())
	}
}
