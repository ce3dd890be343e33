use std::{
	fmt::Debug,
	path::{Path, PathBuf},
};

use scaffold_stdx::path::PathExt;

use crate::error::Result;

/// The hierarchical file namespace the placement core reads from.
/// Directory handles are plain paths; everything that touches storage goes
/// through this trait so front ends can plug in their own file system view.
pub trait Namespace: Sync + Send + Debug {
	fn exists(&self, path: &Path) -> Result<bool>;

	/// Strict ancestry: a directory is not its own ancestor.
	fn is_ancestor(&self, candidate_root: &Path, path: &Path) -> bool {
		path.is_within(candidate_root) && path.normalize() != candidate_root.normalize()
	}

	/// Finds `name.extension` inside `directory`, `name` alone when the
	/// extension is empty.
	fn lookup_child(&self, directory: &Path, name: &str, extension: &str) -> Result<Option<PathBuf>> {
		let child = if extension.is_empty() {
			directory.join(name)
		} else {
			directory.join(format!("{name}.{extension}"))
		};
		Ok(self.exists(&child)?.then_some(child))
	}

	/// Creates every missing directory between `root` and `root/relative_subpath`
	/// and returns the deepest one.
	fn create_dir_chain(&self, root: &Path, relative_subpath: &str) -> Result<PathBuf>;
}
