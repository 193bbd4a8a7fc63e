#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    #[display("Failed to read config file: {}", _0)]
    Read(String),

    #[display("Failed to write config file: {}", _0)]
    Write(String),

    #[display("Failed to serialize config: {}", _0)]
    Serialize(String),

    #[display("Failed to deserialize config: {}", _0)]
    Deserialize(String),

    #[display("Config validation error: {}", _0)]
    Validation(String),
}

impl std::error::Error for ConfigError {}
