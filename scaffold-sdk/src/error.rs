use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The primary error type for the placement core.
#[derive(Error, Debug)]
pub enum Error {
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	#[error("I/O failure at {path:?}")]
	Io {
		#[source]
		source: std::io::Error,
		path: PathBuf,
	},

	#[error("Error in configuration: {0}")]
	Config(String),

	#[error("Could not parse configuration")]
	Toml(#[from] toml::de::Error),
}

impl Error {
	pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
		Self::Io { source, path: path.into() }
	}

	/// Returns `true` if the error is [`InvalidArgument`].
	///
	/// [`InvalidArgument`]: Error::InvalidArgument
	#[must_use]
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Self::InvalidArgument(..))
	}

	/// Returns `true` if the error is [`Io`].
	///
	/// [`Io`]: Error::Io
	#[must_use]
	pub fn is_io(&self) -> bool {
		matches!(self, Self::Io { .. })
	}
}
