mod display;
mod expand;
mod ext;

pub use display::{from_display_path, to_display_path};
pub use expand::Expand;
pub use ext::PathExt;
