#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Subnet file {0} not found")]
    SubnetsFileMissing(String),

    #[error("Failed to load subnet data from {0}: {1}")]
    SubnetsParse(String, String),

    #[error("Invalid subnet table: {0}")]
    InvalidSubnets(String),
}
