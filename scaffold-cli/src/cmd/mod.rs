use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use locate::Locate;
use relative::Relative;
use scaffold_sdk::settings::Settings;
use suffix::Suffix;
use target::Target;

mod locate;
mod relative;
mod suffix;
mod target;

#[derive(Subcommand)]
enum Command {
	Suffix(Suffix),
	Relative(Relative),
	Locate(Locate),
	Target(Target),
}

#[derive(Parser)]
#[command(about, author, version)]
pub struct App {
	#[arg(long, short = 'c', global = true, value_hint = ValueHint::FilePath)]
	config: Option<PathBuf>,
	#[arg(long, short = 'v', global = true, action = ArgAction::Count, help = "Print more diagnostics to stderr (repeatable)")]
	verbose: u8,
	#[command(subcommand)]
	command: Command,
}

impl App {
	pub fn verbosity(&self) -> u8 {
		self.verbose
	}
}

pub trait Cmd {
	fn run(self) -> anyhow::Result<()>;
}

/// Subcommands that read the settings file.
pub(crate) trait Configured {
	fn run(self, settings: Settings) -> anyhow::Result<()>;
}

impl Cmd for App {
	fn run(self) -> anyhow::Result<()> {
		let config = self.config;
		let settings = || Settings::resolve(config.as_deref());
		match self.command {
			Command::Suffix(cmd) => cmd.run(settings()?),
			Command::Relative(cmd) => Cmd::run(cmd),
			Command::Locate(cmd) => cmd.run(settings()?),
			Command::Target(cmd) => cmd.run(settings()?),
		}
	}
}
