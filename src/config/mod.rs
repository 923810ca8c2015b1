mod manager;

pub use manager::{
    ConfigError, ConfigFile, ConfigManager, ResolveOptions, TransConfig, resolve_config,
};
