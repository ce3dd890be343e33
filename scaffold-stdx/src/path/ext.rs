use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use path_clean::PathClean;

pub trait PathExt {
	fn normalize(&self) -> PathBuf;
	fn to_slash(&self) -> String;
	fn is_within(&self, root: &Path) -> bool;
	fn relative_to(&self, root: &Path) -> Option<String>;
}

impl<T: AsRef<Path>> PathExt for T {
	/// Lexically resolves `.` and `..` segments. Nothing is read from disk.
	fn normalize(&self) -> PathBuf {
		self.as_ref().clean()
	}

	fn to_slash(&self) -> String {
		let rendered = self.as_ref().to_string_lossy();
		if MAIN_SEPARATOR == '/' {
			rendered.into_owned()
		} else {
			rendered.replace(MAIN_SEPARATOR, "/")
		}
	}

	/// True when `root` is this path or one of its ancestors.
	fn is_within(&self, root: &Path) -> bool {
		strip_root(self.as_ref(), root).is_some()
	}

	/// Forward-slash path from `root` down to this path, `""` when both are
	/// the same location and `None` when this path is not under `root`.
	fn relative_to(&self, root: &Path) -> Option<String> {
		strip_root(self.as_ref(), root).map(|rest| rest.to_slash())
	}
}

/// `path` with the cleaned `root` taken off its front. Cleaning keeps a bare
/// `.` but drops a leading `./` elsewhere, so a `.` root owns every relative
/// path that does not climb out with `..`.
fn strip_root(path: &Path, root: &Path) -> Option<PathBuf> {
	let path = path.normalize();
	let root = root.normalize();
	if root != Path::new(".") {
		return path.strip_prefix(&root).ok().map(Path::to_path_buf);
	}
	match path.components().next() {
		Some(Component::CurDir) | None => Some(PathBuf::new()),
		Some(Component::Normal(_)) => Some(path),
		_ => None,
	}
}
