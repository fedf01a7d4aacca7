pub mod console_toml;

pub use console_toml::{ConfigError, TomlConfigSource};
