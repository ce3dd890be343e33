use std::path::{Path, PathBuf};

use scaffold_stdx::path::Expand;
use serde::{Deserialize, Serialize};

use crate::{
	error::{Error, Result},
	location::SourceRoot,
	PROJECT_NAME,
};

pub const CONFIG_DIR_VAR: &str = "SCAFFOLD_CONFIG_DIR";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
	#[serde(default = "defaults::suggested_name")]
	pub suggested_name: String,
	/// Extensions of the generated pair, without the leading dot.
	#[serde(default = "defaults::extensions")]
	pub extensions: Vec<String>,
	#[serde(default)]
	pub roots: Vec<SourceRoot>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			suggested_name: defaults::suggested_name(),
			extensions: defaults::extensions(),
			roots: Vec::new(),
		}
	}
}

impl Settings {
	pub fn parse(content: &str) -> Result<Self> {
		let mut settings: Settings = toml::from_str(content)?;
		settings.extensions = normalize_extensions(&settings.extensions).map_err(|_| Error::Config("at least one extension is required".into()))?;
		if settings.suggested_name.trim().is_empty() {
			return Err(Error::Config("`suggested_name` cannot be empty".into()));
		}
		for root in &mut settings.roots {
			root.path = root.path.expand_user();
		}
		Ok(settings)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
		tracing::debug!("Loaded settings from {}", path.display());
		Self::parse(&content)
	}

	/// An explicit path must exist; the default location is optional.
	pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load(path);
		}
		match Self::default_path() {
			Some(path) => Ok(Self::load_optional(&path)?.unwrap_or_default()),
			None => Ok(Self::default()),
		}
	}

	/// `None` when nothing is at `path`. Errors other than "not found" are kept.
	pub fn load_optional(path: &Path) -> Result<Option<Self>> {
		if path.try_exists().map_err(|e| Error::io(e, path))? {
			Self::load(path).map(Some)
		} else {
			Ok(None)
		}
	}

	pub fn default_path() -> Option<PathBuf> {
		Self::default_dir().map(|dir| dir.join("config.toml"))
	}

	pub fn default_dir() -> Option<PathBuf> {
		std::env::var_os(CONFIG_DIR_VAR)
			.map(PathBuf::from)
			.or_else(|| dirs::config_dir().map(|dir| dir.join(PROJECT_NAME)))
	}
}

/// Trims whitespace and leading dots and drops entries left empty, keeping
/// order. Fails when nothing remains.
pub fn normalize_extensions<S: AsRef<str>>(extensions: &[S]) -> Result<Vec<String>> {
	let cleaned: Vec<String> = extensions
		.iter()
		.map(|ext| ext.as_ref().trim().trim_start_matches('.').trim().to_string())
		.filter(|ext| !ext.is_empty())
		.collect();
	if cleaned.is_empty() {
		return Err(Error::InvalidArgument("at least one non-empty extension is required".into()));
	}
	Ok(cleaned)
}

mod defaults {
	pub(super) fn suggested_name() -> String {
		"ImageFilter".to_string()
	}

	pub(super) fn extensions() -> Vec<String> {
		vec!["hxx".to_string(), "h".to_string()]
	}
}
