//! Conversion between the canonical forward-slash form of a relative path
//! and the platform form shown to users while they edit it.

use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// `sub/dir` -> `sub\dir` on Windows, unchanged elsewhere.
pub fn to_display_path(relative: &str) -> String {
	if MAIN_SEPARATOR == '/' {
		relative.to_string()
	} else {
		relative.replace('/', MAIN_SEPARATOR_STR)
	}
}

/// Inverse of [`to_display_path`].
pub fn from_display_path(displayed: &str) -> String {
	if MAIN_SEPARATOR == '/' {
		displayed.to_string()
	} else {
		displayed.replace(MAIN_SEPARATOR, "/")
	}
}
