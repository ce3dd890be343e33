use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueHint};
use console::style;
use scaffold_sdk::{
	location::{Placement, SourceRoot},
	settings::Settings,
	storage::LocalFileSystem,
};

use super::Configured;

/// Shows where a new file pair would go by default.
#[derive(Parser, Debug)]
pub struct Locate {
	#[arg(long = "root", short = 'r', value_hint = ValueHint::DirPath, help = "Candidate source root, in priority order (replaces the configured roots)")]
	roots: Vec<PathBuf>,
	#[arg(long, short = 'p', value_hint = ValueHint::DirPath)]
	preselected: Option<PathBuf>,
}

impl Configured for Locate {
	fn run(self, settings: Settings) -> Result<()> {
		let roots = if self.roots.is_empty() {
			settings.roots.clone()
		} else {
			self.roots.into_iter().map(SourceRoot::from_path).collect()
		};
		if roots.is_empty() {
			bail!("no source roots given; pass --root or add [[roots]] to the configuration")
		}

		let placement = Placement::for_preselected(&LocalFileSystem, &roots, self.preselected.as_deref(), &settings)?;
		println!("{} {} ({})", style("root:").bold(), placement.root, placement.root.path.display());
		println!("{} {}", style("folder:").bold(), placement.folder);
		println!("{} {}", style("name:").bold(), placement.suggested_name);
		Ok(())
	}
}
