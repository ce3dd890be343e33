use std::{
	ffi::OsStr,
	path::{Path, PathBuf},
};

pub trait Expand {
	fn expand_user(&self) -> PathBuf;
}

impl<T: AsRef<Path>> Expand for T {
	/// Replaces a leading `~` component with the user's home directory.
	/// The path is returned untouched when no home directory can be found.
	fn expand_user(&self) -> PathBuf {
		let path = self.as_ref();
		let mut components = path.components();
		if let Some(component) = components.next() {
			if component.as_os_str() == OsStr::new("~") {
				if let Some(mut home) = dirs::home_dir() {
					home.extend(components);
					return home;
				}
			}
		}
		path.to_path_buf()
	}
}
