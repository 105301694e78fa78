//! Configuration module.
//!
//! Layered resolution: defaults, then the TOML file, then environment
//! variables, then CLI flags.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ConfigFile, ResolvedConfig,
};
