// Core configuration types
mod core;
mod loader;
pub mod validation;

pub use self::core::{
    default_initial, default_max_steps, default_repeat, default_steps, ChainConfig,
    ConfigOverrides, ResolvedChain, CONFIG_FILE_NAME,
};
pub use loader::{
    default_config_toml, directory_ancestors, discover_config, load_config,
    load_config_from_path, parse_config,
};
pub use validation::{validate_config, validate_config_result};
