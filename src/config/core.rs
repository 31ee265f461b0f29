use serde::{Deserialize, Serialize};

use crate::chain::{Chain, ChainBuilder};
use crate::transforms::StepKind;

/// File name searched for during config discovery.
pub const CONFIG_FILE_NAME: &str = ".shortchain.toml";

pub fn default_initial() -> i64 {
    20
}

pub fn default_steps() -> Vec<String> {
    vec![StepKind::Half.to_string()]
}

pub fn default_repeat() -> usize {
    10
}

pub fn default_max_steps() -> usize {
    1000
}

/// Root configuration structure, as read from `.shortchain.toml`.
///
/// Step names stay as raw strings here so validation can report every
/// unknown name at once rather than failing on the first during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Value the chain starts from
    #[serde(default = "default_initial")]
    pub initial: i64,

    /// Step names, applied in order
    #[serde(default = "default_steps")]
    pub steps: Vec<String>,

    /// How many times the `steps` list is applied
    #[serde(default = "default_repeat")]
    pub repeat: usize,

    /// Upper bound on the expanded chain length
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            steps: default_steps(),
            repeat: default_repeat(),
            max_steps: default_max_steps(),
        }
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub initial: Option<i64>,
    pub steps: Option<Vec<String>>,
    pub repeat: Option<usize>,
}

impl ChainConfig {
    /// Pure function to apply command-line overrides.
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            initial: overrides.initial.unwrap_or(self.initial),
            steps: overrides.steps.unwrap_or(self.steps),
            repeat: overrides.repeat.unwrap_or(self.repeat),
            max_steps: self.max_steps,
        }
    }
}

/// A validated chain description with the repeated step list expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedChain {
    pub initial: i64,
    pub steps: Vec<StepKind>,
}

impl ResolvedChain {
    /// Build an executable chain from the resolved steps.
    pub fn to_chain(&self) -> Chain {
        ChainBuilder::new().steps(self.steps.iter().copied()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_sample_program() {
        let config = ChainConfig::default();
        assert_eq!(config.initial, 20);
        assert_eq!(config.steps, vec!["half"]);
        assert_eq!(config.repeat, 10);
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = ChainConfig::default().with_overrides(ConfigOverrides {
            initial: Some(1024),
            steps: None,
            repeat: Some(3),
        });

        assert_eq!(config.initial, 1024);
        assert_eq!(config.steps, vec!["half"]);
        assert_eq!(config.repeat, 3);
        assert_eq!(config.max_steps, 1000);
    }

    #[test]
    fn test_resolved_chain_runs() {
        let resolved = ResolvedChain {
            initial: 1024,
            steps: vec![StepKind::Half; 10],
        };
        assert_eq!(resolved.to_chain().run(resolved.initial), Some(1));
    }
}
