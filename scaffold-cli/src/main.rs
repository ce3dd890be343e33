use crate::cmd::{App, Cmd};
use anyhow::Result;
use clap::Parser;

mod cmd;
mod logs;

fn main() -> Result<()> {
	let app: App = App::parse();
	let _guard = logs::init(app.verbosity())?;
	app.run()
}
