use std::{
	fmt,
	path::{Component, Path, PathBuf},
};

use scaffold_stdx::path::PathExt;
use serde::{Deserialize, Serialize};

use crate::{
	error::{Error, Result},
	plugins::namespace::Namespace,
};

mod placement;
mod request;

pub use placement::Placement;
pub use request::{Target, TargetRequest};

/// A directory designated to receive generated sources.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct SourceRoot {
	pub name: String,
	pub path: PathBuf,
}

impl SourceRoot {
	pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
		}
	}

	/// Names the root after its last path component.
	pub fn from_path(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let name = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| path.display().to_string());
		Self { name, path }
	}
}

impl fmt::Display for SourceRoot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

/// Picks the first root that contains `preselected` (or is it), falling back to
/// the first root. `None` only when `roots` is empty.
#[tracing::instrument(ret, level = "debug", skip(namespace, roots))]
pub fn select_root<'a, N>(namespace: &N, roots: &'a [SourceRoot], preselected: Option<&Path>) -> Option<&'a SourceRoot>
where
	N: Namespace + ?Sized,
{
	let first = roots.first()?;
	let Some(folder) = preselected else {
		return Some(first);
	};
	let folder = folder.normalize();
	roots
		.iter()
		.find(|root| namespace.is_ancestor(&root.path, &folder) || root.path.normalize() == folder)
		.or(Some(first))
}

/// Forward-slash path from `root` to `folder`.
///
/// An absent `folder` and a `folder` outside of `root` both yield `""`.
pub fn relative_path(root: &Path, folder: Option<&Path>) -> Result<String> {
	if root.as_os_str().is_empty() {
		return Err(Error::InvalidArgument("no root given to compute a relative path from".into()));
	}
	Ok(folder.and_then(|folder| folder.relative_to(root)).unwrap_or_default())
}

/// Returns the directory `relative_subpath` points to under `root`, creating
/// the missing part of the chain through `namespace`.
#[tracing::instrument(ret, err(Debug), level = "debug", skip(namespace))]
pub fn resolve_target<N>(namespace: &N, root: &Path, relative_subpath: &str) -> Result<PathBuf>
where
	N: Namespace + ?Sized,
{
	if relative_subpath.is_empty() {
		return Ok(root.to_path_buf());
	}
	let escapes = Path::new(relative_subpath)
		.components()
		.any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
	if escapes {
		return Err(Error::InvalidArgument(format!(
			"`{relative_subpath}` does not stay inside {}",
			root.display()
		)));
	}

	let candidate = root.join(relative_subpath);
	if namespace.exists(&candidate)? {
		return Ok(candidate);
	}
	namespace.create_dir_chain(root, relative_subpath)
}
