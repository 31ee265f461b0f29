use crate::config::{default_config_toml, CONFIG_FILE_NAME};
use crate::errors::ChainError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default config into `dir`, refusing to clobber an existing file.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, default_config_toml())
        .map_err(|e| ChainError::io_with_path(e.to_string(), &config_path))?;
    log::debug!("Wrote default config to {}", config_path.display());

    Ok(config_path)
}
