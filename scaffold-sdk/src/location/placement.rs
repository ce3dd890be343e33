use std::path::Path;

use scaffold_stdx::path::to_display_path;

use crate::{
	error::{Error, Result},
	location::{relative_path, select_root, SourceRoot},
	naming::suggest_name,
	plugins::namespace::Namespace,
	settings::Settings,
};

/// The initial values a front end offers for a new file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<'a> {
	pub root: &'a SourceRoot,
	/// Folder under `root`, display form.
	pub folder: String,
	pub suggested_name: String,
}

impl<'a> Placement<'a> {
	/// The suggestion is computed in `preselected` when given, in the chosen
	/// root otherwise.
	pub fn for_preselected<N>(namespace: &N, roots: &'a [SourceRoot], preselected: Option<&Path>, settings: &Settings) -> Result<Self>
	where
		N: Namespace + ?Sized,
	{
		let root = select_root(namespace, roots, preselected).ok_or_else(|| Error::InvalidArgument("no source roots configured".into()))?;
		let folder = relative_path(&root.path, preselected)?;
		let current = preselected.unwrap_or(&root.path);
		let suggested_name = suggest_name(namespace, current, &settings.suggested_name, &settings.extensions)?;
		Ok(Self {
			root,
			folder: to_display_path(&folder),
			suggested_name,
		})
	}
}
