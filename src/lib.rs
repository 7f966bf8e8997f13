pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{AnySource, HttpConstantSource, LocalConstantSource};
pub use config::{ReferenceTables, SiteConfig};
pub use self::core::render::{IndividualsPage, Page, RacesPage, RecentExpendituresPage, Rendered};
pub use utils::error::{Result, SiteError};
