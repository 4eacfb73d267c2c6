//! FileSystem abstraction for testable script collection and manifest output

#[cfg(test)]
mod mock;
mod real;
mod r#trait;

#[cfg(test)]
pub use mock::MockFileSystem;
pub use r#trait::{DirEntry, FileSystem, FileType};
pub use real::RealFileSystem;
