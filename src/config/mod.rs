pub mod reference;
pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, OutputFormat};
pub use reference::ReferenceTables;
pub use toml_config::SiteConfig;
