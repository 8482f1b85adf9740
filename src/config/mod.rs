#[cfg(feature = "cli")]
pub mod cli;
pub mod package_file;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
pub use package_file::PackageFile;
