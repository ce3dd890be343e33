use std::path::{Path, PathBuf};

use crate::{
	error::{Error, Result},
	plugins::namespace::Namespace,
};

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl Namespace for LocalFileSystem {
	fn exists(&self, path: &Path) -> Result<bool> {
		path.try_exists().map_err(|e| Error::io(e, path))
	}

	fn create_dir_chain(&self, root: &Path, relative_subpath: &str) -> Result<PathBuf> {
		let target = root.join(relative_subpath);
		std::fs::create_dir_all(&target).map_err(|e| Error::io(e, &target))?;
		tracing::info!("Created folder {}", target.display());
		Ok(target)
	}
}
