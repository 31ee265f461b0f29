//! Validation aliases and helpers built on stillwater.
//!
//! Unlike `Result`, a [`ChainValidation`] accumulates ALL errors instead of
//! stopping at the first one, so a broken configuration is reported in a
//! single pass.
//!
//! # Example
//!
//! ```rust
//! use shortchain::effects::{combine_validations, validation_failure, validation_success};
//! use shortchain::errors::ChainError;
//!
//! let combined = combine_validations(vec![
//!     validation_success(1),
//!     validation_failure(ChainError::UnknownStep("double".into())),
//!     validation_failure(ChainError::UnknownStep("triple".into())),
//! ]);
//! assert!(combined.is_failure());
//! ```

use crate::errors::{errors_to_anyhow, ChainError};
use stillwater::{NonEmptyVec, Validation};

/// Error collection type for validation accumulation.
pub type ChainErrors = NonEmptyVec<ChainError>;

/// Validation type for configuration and input checks.
pub type ChainValidation<T> = Validation<T, ChainErrors>;

/// Create a successful validation result.
pub fn validation_success<T>(value: T) -> ChainValidation<T> {
    Validation::Success(value)
}

/// Create a failed validation result with a single error.
pub fn validation_failure<T>(error: ChainError) -> ChainValidation<T> {
    Validation::Failure(NonEmptyVec::new(error, Vec::new()))
}

/// Convert a validation to `anyhow::Result` at the command boundary.
///
/// If the validation failed with multiple errors, they are formatted as a list.
pub fn run_validation<T>(validation: ChainValidation<T>) -> anyhow::Result<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(errors_to_anyhow(errors.into_vec())),
    }
}

/// Combine multiple validations, accumulating all errors.
///
/// If every validation succeeds the values are collected in order;
/// otherwise every error from every failed validation is kept.
pub fn combine_validations<T>(validations: Vec<ChainValidation<T>>) -> ChainValidation<Vec<T>> {
    let mut successes = Vec::new();
    let mut failures: Vec<ChainError> = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => failures.extend(errors.into_vec()),
        }
    }

    let mut failures = failures.into_iter();
    match failures.next() {
        Some(head) => Validation::Failure(NonEmptyVec::new(head, failures.collect())),
        None => Validation::Success(successes),
    }
}

/// Map a function over a validation's success value.
pub fn validation_map<T, U, F>(validation: ChainValidation<T>, f: F) -> ChainValidation<U>
where
    F: FnOnce(T) -> U,
{
    match validation {
        Validation::Success(value) => Validation::Success(f(value)),
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_success() {
        let v: ChainValidation<i32> = validation_success(42);
        match v {
            Validation::Success(n) => assert_eq!(n, 42),
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn test_combine_collects_all_errors() {
        let combined = combine_validations(vec![
            validation_success(1),
            validation_failure(ChainError::validation("error 1")),
            validation_success(3),
            validation_failure(ChainError::validation("error 2")),
        ]);

        match combined {
            Validation::Failure(errors) => assert_eq!(errors.into_vec().len(), 2),
            Validation::Success(_) => panic!("Expected failure"),
        }
    }

    #[test]
    fn test_combine_all_success_keeps_order() {
        let combined = combine_validations(vec![
            validation_success(1),
            validation_success(2),
            validation_success(3),
        ]);
        assert_eq!(run_validation(combined).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_run_validation_failure() {
        let v: ChainValidation<i32> = validation_failure(ChainError::validation("bad input"));
        let err = run_validation(v).unwrap_err();
        assert!(err.to_string().contains("bad input"));
    }

    #[test]
    fn test_validation_map() {
        let v = validation_map(validation_success(2), |n| n * 10);
        assert_eq!(run_validation(v).unwrap(), 20);
    }
}
