//! The short-circuiting fold at the heart of every chain.

/// Thread `initial` through `steps` left to right, stopping at the first `None`.
///
/// Steps after the first `None` are never invoked. An empty sequence yields
/// `Some(initial)`.
///
/// # Example
///
/// ```rust
/// use shortchain::{half, run_chain};
///
/// assert_eq!(run_chain(1024, [half; 10]), Some(1));
/// assert_eq!(run_chain(20, [half; 10]), None);
/// ```
pub fn run_chain<I, F>(initial: i64, steps: I) -> Option<i64>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(i64) -> Option<i64>,
{
    steps.into_iter().try_fold(initial, |value, step| step(value))
}
