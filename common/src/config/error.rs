use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[display("failed to write config file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[display("failed to serialize config: {_0}")]
    Serialize(serde_yaml_ng::Error),

    #[display("failed to deserialize config: {_0}")]
    Deserialize(serde_yaml_ng::Error),

    #[display("config validation error: {_0}")]
    Invalid(#[error(not(source))] String),
}
