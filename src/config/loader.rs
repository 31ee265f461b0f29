use std::fs;
use std::path::{Path, PathBuf};

use super::core::{ChainConfig, CONFIG_FILE_NAME};
use crate::errors::ChainError;

/// Maximum number of directories searched, starting with the current one.
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<ChainConfig, ChainError> {
    toml::from_str::<ChainConfig>(contents)
        .map_err(|e| ChainError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load a config file that must exist and parse.
pub fn load_config_from_path(path: &Path) -> Result<ChainConfig, ChainError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ChainError::io_with_path(e.to_string(), path))?;

    toml::from_str::<ChainConfig>(&contents)
        .map_err(|e| ChainError::config_with_path(e.to_string(), path))
}

/// Try loading config from a discovered path, tolerating absence and damage.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ChainConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf)).take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn discover_config(start: PathBuf) -> Option<ChainConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Load config from the current directory hierarchy, falling back to defaults.
pub fn load_config() -> ChainConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return ChainConfig::default();
        }
    };

    discover_config(current).unwrap_or_else(|| {
        log::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        ChainConfig::default()
    })
}

/// Text written by `shortchain init`.
pub fn default_config_toml() -> String {
    let config = ChainConfig::default();
    format!(
        "# shortchain configuration\n\
         \n\
         # Value the chain starts from\n\
         initial = {}\n\
         \n\
         # Step names applied in order (see `shortchain steps`)\n\
         steps = [{}]\n\
         \n\
         # Number of times the steps list is applied\n\
         repeat = {}\n\
         \n\
         # Upper bound on steps * repeat\n\
         max_steps = {}\n",
        config.initial,
        config
            .steps
            .iter()
            .map(|s| format!("\"{}\"", s))
            .collect::<Vec<_>>()
            .join(", "),
        config.repeat,
        config.max_steps
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(indoc! {r#"
            initial = 1024
            steps = ["half", "third"]
            repeat = 2
            max_steps = 50
        "#})
        .unwrap();

        assert_eq!(
            config,
            ChainConfig {
                initial: 1024,
                steps: vec!["half".to_string(), "third".to_string()],
                repeat: 2,
                max_steps: 50,
            }
        );
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), ChainConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = parse_config("initail = 3").unwrap_err();
        assert!(matches!(err, ChainError::Config { .. }));
    }

    #[test]
    fn test_default_config_toml_round_trips() {
        assert_eq!(
            parse_config(&default_config_toml()).unwrap(),
            ChainConfig::default()
        );
    }

    #[test]
    fn test_directory_ancestors_depth_limit() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "initial = 7\n").unwrap();
        let nested = temp.path().join("inner").join("deeper");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested).unwrap();
        assert_eq!(config.initial, 7);
    }

    #[test]
    fn test_discover_skips_unparseable_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "initial = [").unwrap();
        let nested = temp.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "not toml at all ===").unwrap();

        // Both candidates are damaged; nothing within the temp dir should load.
        let found = directory_ancestors(nested, 2)
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find_map(|path| try_load_config_from_path(&path));
        assert!(found.is_none());
    }

    #[test]
    fn test_discover_falls_back_to_parent_past_damaged_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "initial = 7\n").unwrap();
        let nested = temp.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "initial = [").unwrap();

        let config = discover_config(nested).unwrap();
        assert_eq!(config.initial, 7);
    }

    #[test]
    fn test_load_unparseable_path_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "initial = [").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(matches!(err, ChainError::Config { path: Some(_), .. }));
    }

    #[test]
    fn test_load_from_missing_path_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ChainError::Io { path: Some(_), .. }));
    }
}
