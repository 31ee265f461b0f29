//! Step abstractions for short-circuiting chains.
//!
//! A step is a named, total transform from an integer to an optional integer.
//! Returning `None` is how a step declines to produce a value; it is a normal
//! outcome, not an error, and it ends the chain the step belongs to.

/// A single try-transform in a chain.
///
/// Implementations must be total: every `i64` input maps to `Some` or `None`
/// without panicking or overflowing.
///
/// # Example
///
/// ```rust
/// use shortchain::chain::{FnStep, Step};
///
/// let step = FnStep::new("half", |x| (x % 2 == 0).then_some(x / 2));
/// assert_eq!(step.apply(20), Some(10));
/// assert_eq!(step.apply(5), None);
/// ```
pub trait Step {
    /// Apply this step to a present value.
    fn apply(&self, value: i64) -> Option<i64>;

    /// Get the step name for traces and reports.
    fn name(&self) -> &str;
}

/// A step backed by a closure.
///
/// Useful for ad-hoc steps and for test doubles that count invocations.
pub struct FnStep<F> {
    name: String,
    func: F,
}

impl<F> FnStep<F>
where
    F: Fn(i64) -> Option<i64>,
{
    /// Create a new step with a name and transform function.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Step for FnStep<F>
where
    F: Fn(i64) -> Option<i64>,
{
    fn apply(&self, value: i64) -> Option<i64> {
        (self.func)(value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<S: Step + ?Sized> Step for &S {
    fn apply(&self, value: i64) -> Option<i64> {
        (**self).apply(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: Step + ?Sized> Step for Box<S> {
    fn apply(&self, value: i64) -> Option<i64> {
        (**self).apply(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
