pub const PROJECT_NAME: &str = "scaffold";

pub mod error;
pub mod location;
pub mod naming;
pub mod plugins;
pub mod settings;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
