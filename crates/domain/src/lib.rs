//! zone-finder domain layer
pub mod config;
pub mod errors;
pub mod hostname;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use hostname::{validate_address, validate_hostname};
pub use zone::{LookupResult, PrefixRecord, ZoneMatcher};
