mod local;

pub use local::LocalFileSystem;
