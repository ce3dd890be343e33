//! Collision-free class names for file pairs that share a base name but
//! differ in extension.

use std::{fmt::Debug, path::Path};

use crate::{error::Result, plugins::namespace::Namespace};

/// Returns the smallest numeric suffix (`""`, `"1"`, `"2"`, ...) such that no
/// `base_name + suffix` file exists in `directory` under any of `extensions`.
///
/// The scan is not capped: a directory holding `n` entries can block at most
/// `n` candidates, so it always ends. Lookup failures abort the scan.
#[tracing::instrument(ret, err(Debug), level = "debug", skip(namespace))]
pub fn unique_suffix<N, S>(namespace: &N, directory: &Path, base_name: &str, extensions: &[S]) -> Result<String>
where
	N: Namespace + ?Sized,
	S: AsRef<str> + Debug,
{
	let mut i: u64 = 0;
	loop {
		let suffix = if i == 0 { String::new() } else { i.to_string() };
		let candidate = format!("{base_name}{suffix}");
		if !collides(namespace, directory, &candidate, extensions)? {
			return Ok(suffix);
		}
		i += 1;
	}
}

/// `base_name` with its [`unique_suffix`] appended.
pub fn suggest_name<N, S>(namespace: &N, directory: &Path, base_name: &str, extensions: &[S]) -> Result<String>
where
	N: Namespace + ?Sized,
	S: AsRef<str> + Debug,
{
	let suffix = unique_suffix(namespace, directory, base_name, extensions)?;
	Ok(format!("{base_name}{suffix}"))
}

fn collides<N, S>(namespace: &N, directory: &Path, candidate: &str, extensions: &[S]) -> Result<bool>
where
	N: Namespace + ?Sized,
	S: AsRef<str>,
{
	for extension in extensions {
		if let Some(existing) = namespace.lookup_child(directory, candidate, extension.as_ref())? {
			tracing::debug!("{} is taken", existing.display());
			return Ok(true);
		}
	}
	Ok(false)
}
