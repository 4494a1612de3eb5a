pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{LocalStorage, ResourceStorage, DEFAULT_RESOURCE};
pub use config::{toml_config::TomlConfig, AppConfig};
pub use crate::core::{mapper::EconomicTermsMapper, parser::GoldenSchemaParser, processor::CdmProcessor};
pub use domain::cdm::EconomicTerms;
pub use utils::error::{CdmError, MappingError, MappingErrorKind, Result};
