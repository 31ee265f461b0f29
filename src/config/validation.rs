//! Validation with error accumulation for configuration.
//!
//! Every check runs even when an earlier one has failed, so a config with
//! three unknown step names and a zero `repeat` reports all four problems.
//!
//! # Example
//!
//! ```rust
//! use shortchain::config::{validate_config, ChainConfig};
//!
//! let resolved = validate_config(&ChainConfig::default());
//! assert!(resolved.is_success());
//! ```

use super::core::{ChainConfig, ResolvedChain};
use crate::effects::{
    combine_validations, run_validation, validation_failure, validation_success, ChainValidation,
};
use crate::errors::ChainError;
use crate::transforms::StepKind;
use stillwater::{NonEmptyVec, Validation};

/// Validate a config and expand it into a resolved chain, accumulating ALL errors.
pub fn validate_config(config: &ChainConfig) -> ChainValidation<ResolvedChain> {
    let names = validate_step_names(&config.steps);
    let limits = combine_validations(vec![
        validate_repeat(config.repeat),
        validate_max_steps(config.max_steps),
        validate_chain_length(config.steps.len(), config.repeat, config.max_steps),
    ]);

    match (names, limits) {
        (Validation::Success(kinds), Validation::Success(_)) => {
            validation_success(expand(config.initial, &kinds, config.repeat))
        }
        (Validation::Failure(errors), Validation::Success(_))
        | (Validation::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
        // Name errors first, then limit errors in check order.
        (Validation::Failure(names), Validation::Failure(limits)) => {
            let mut errors = names.into_vec();
            let head = errors.remove(0);
            errors.extend(limits.into_vec());
            Validation::Failure(NonEmptyVec::new(head, errors))
        }
    }
}

/// Validate config with a fail-fast `anyhow::Result` API.
pub fn validate_config_result(config: &ChainConfig) -> anyhow::Result<ResolvedChain> {
    run_validation(validate_config(config))
}

fn expand(initial: i64, kinds: &[StepKind], repeat: usize) -> ResolvedChain {
    let steps = std::iter::repeat_n(kinds, repeat)
        .flatten()
        .copied()
        .collect();
    ResolvedChain { initial, steps }
}

/// Resolve every step name, one error per unknown name.
fn validate_step_names(names: &[String]) -> ChainValidation<Vec<StepKind>> {
    let validations = names
        .iter()
        .map(|name| match name.parse::<StepKind>() {
            Ok(kind) => validation_success(kind),
            Err(e) => validation_failure(e),
        })
        .collect();

    combine_validations(validations)
}

fn validate_repeat(repeat: usize) -> ChainValidation<()> {
    if repeat >= 1 {
        validation_success(())
    } else {
        validation_failure(ChainError::validation("repeat must be at least 1"))
    }
}

fn validate_max_steps(max_steps: usize) -> ChainValidation<()> {
    if max_steps >= 1 {
        validation_success(())
    } else {
        validation_failure(ChainError::validation("max_steps must be at least 1"))
    }
}

fn validate_chain_length(steps: usize, repeat: usize, max_steps: usize) -> ChainValidation<()> {
    match steps.checked_mul(repeat) {
        Some(total) if total <= max_steps => validation_success(()),
        Some(total) => validation_failure(ChainError::validation(format!(
            "chain has {} steps ({} x {}), more than max_steps = {}",
            total, steps, repeat, max_steps
        ))),
        None => validation_failure(ChainError::validation(format!(
            "chain length {} x {} overflows",
            steps, repeat
        ))),
    }
}
