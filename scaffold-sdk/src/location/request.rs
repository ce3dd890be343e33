use std::path::PathBuf;

use scaffold_stdx::path::from_display_path;

use crate::{
	error::{Error, Result},
	location::{resolve_target, SourceRoot},
	plugins::namespace::Namespace,
};

/// What a front end collected before the files get written: the chosen root,
/// the folder typed under it (display form) and the class name, which may
/// carry extra folders of its own (`io/Reader`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRequest {
	pub root: SourceRoot,
	pub folder: String,
	pub class_name: String,
}

/// Final placement of a generated file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
	pub directory: PathBuf,
	pub name: String,
}

impl Target {
	/// One path per extension, in the given order. An empty extension names
	/// the bare file, as [`Namespace::lookup_child`] does.
	pub fn files<S: AsRef<str>>(&self, extensions: &[S]) -> Vec<PathBuf> {
		extensions
			.iter()
			.map(|ext| match ext.as_ref() {
				"" => self.directory.join(&self.name),
				ext => self.directory.join(format!("{}.{ext}", self.name)),
			})
			.collect()
	}
}

impl TargetRequest {
	pub fn new(root: SourceRoot, folder: impl Into<String>, class_name: impl Into<String>) -> Self {
		Self {
			root,
			folder: folder.into(),
			class_name: class_name.into(),
		}
	}

	/// Splits a folder prefix off the class name into the target folder and
	/// resolves (creating when needed) the resulting directory.
	#[tracing::instrument(ret, err(Debug), level = "debug", skip(namespace))]
	pub fn resolve<N>(&self, namespace: &N) -> Result<Target>
	where
		N: Namespace + ?Sized,
	{
		let (folder, name) = self.split();
		if name.is_empty() || name.contains('/') {
			return Err(Error::InvalidArgument(format!("`{}` is not a valid class name", self.class_name.trim())));
		}
		let directory = resolve_target(namespace, &self.root.path, &folder)?;
		Ok(Target {
			directory,
			name: name.to_string(),
		})
	}

	fn split(&self) -> (String, &str) {
		let folder = from_display_path(self.folder.trim());
		let class_name = self.class_name.trim();
		// a leading slash is not a folder prefix
		match class_name.rfind('/') {
			Some(last) if class_name.find('/') > Some(0) => {
				let (prefix, name) = (&class_name[..last], &class_name[last + 1..]);
				let folder = if folder.is_empty() { prefix.to_string() } else { format!("{folder}/{prefix}") };
				(folder, name)
			}
			_ => (folder, class_name),
		}
	}
}
