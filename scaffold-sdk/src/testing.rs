use std::{
	collections::BTreeSet,
	io,
	path::{Path, PathBuf},
	sync::Mutex,
};

use crate::{
	error::{Error, Result},
	plugins::namespace::Namespace,
};

/// In-memory namespace: a set of existing paths plus a log of every
/// `create_dir_chain` call.
#[derive(Debug, Default)]
pub(crate) struct MemoryNamespace {
	entries: Mutex<BTreeSet<PathBuf>>,
	pub(crate) created: Mutex<Vec<PathBuf>>,
}

impl MemoryNamespace {
	pub(crate) fn with<I, P>(paths: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		Self {
			entries: Mutex::new(paths.into_iter().map(Into::into).collect()),
			created: Mutex::default(),
		}
	}

	pub(crate) fn add(&self, path: impl Into<PathBuf>) {
		self.entries.lock().unwrap().insert(path.into());
	}
}

impl Namespace for MemoryNamespace {
	fn exists(&self, path: &Path) -> Result<bool> {
		Ok(self.entries.lock().unwrap().contains(path))
	}

	fn create_dir_chain(&self, root: &Path, relative_subpath: &str) -> Result<PathBuf> {
		let mut current = root.to_path_buf();
		let mut entries = self.entries.lock().unwrap();
		for segment in relative_subpath.split('/').filter(|s| !s.is_empty()) {
			current.push(segment);
			entries.insert(current.clone());
		}
		self.created.lock().unwrap().push(current.clone());
		Ok(current)
	}
}

/// Every operation fails with a permission error.
#[derive(Debug, Default)]
pub(crate) struct FailingNamespace;

impl Namespace for FailingNamespace {
	fn exists(&self, path: &Path) -> Result<bool> {
		Err(Error::io(io::Error::from(io::ErrorKind::PermissionDenied), path))
	}

	fn create_dir_chain(&self, root: &Path, _relative_subpath: &str) -> Result<PathBuf> {
		Err(Error::io(io::Error::from(io::ErrorKind::PermissionDenied), root))
	}
}

/// Empty and read-only: lookups succeed, creating a directory fails.
#[derive(Debug, Default)]
pub(crate) struct ReadOnlyNamespace;

impl Namespace for ReadOnlyNamespace {
	fn exists(&self, _path: &Path) -> Result<bool> {
		Ok(false)
	}

	fn create_dir_chain(&self, root: &Path, relative_subpath: &str) -> Result<PathBuf> {
		Err(Error::io(io::Error::from(io::ErrorKind::PermissionDenied), root.join(relative_subpath)))
	}
}
