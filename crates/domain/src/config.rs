pub mod cache;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod subnets;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::{AddressFamily, ResolverConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use subnets::SubnetsConfig;
