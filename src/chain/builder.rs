//! Chain builder for composing steps.
//!
//! This module provides a fluent API for building reusable chains.

use super::step::Step;
use super::trace::{ChainTrace, StepRecord};

/// Builder for constructing chains.
///
/// # Example
///
/// ```rust
/// use shortchain::chain::ChainBuilder;
/// use shortchain::StepKind;
///
/// let chain = ChainBuilder::new()
///     .repeat(10, |_| StepKind::Half)
///     .build();
///
/// assert_eq!(chain.run(20), None);
/// assert_eq!(chain.run(1024), Some(1));
/// ```
pub struct ChainBuilder {
    steps: Vec<Box<dyn Step + Send + Sync>>,
}

impl ChainBuilder {
    /// Create a new empty chain builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step to the chain.
    pub fn step<S>(mut self, step: S) -> Self
    where
        S: Step + Send + Sync + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Append `count` steps, each produced by `make` from its 0-based index.
    pub fn repeat<S, F>(self, count: usize, mut make: F) -> Self
    where
        S: Step + Send + Sync + 'static,
        F: FnMut(usize) -> S,
    {
        (0..count).fold(self, |builder, i| builder.step(make(i)))
    }

    /// Append all steps from an iterator, in order.
    pub fn steps<S, I>(self, steps: I) -> Self
    where
        S: Step + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
    {
        steps.into_iter().fold(self, |builder, s| builder.step(s))
    }

    /// Apply `f` to the builder only if `condition` holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shortchain::chain::ChainBuilder;
    /// use shortchain::StepKind;
    ///
    /// let strict = true;
    /// let chain = ChainBuilder::new()
    ///     .step(StepKind::Half)
    ///     .when(strict, |b| b.step(StepKind::Third))
    ///     .build();
    ///
    /// assert_eq!(chain.len(), 2);
    /// ```
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition {
            f(self)
        } else {
            self
        }
    }

    /// Build the final chain ready for execution.
    pub fn build(self) -> Chain {
        Chain { steps: self.steps }
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built chain ready for execution.
///
/// The chain holds no mutable state and can be run any number of times.
pub struct Chain {
    steps: Vec<Box<dyn Step + Send + Sync>>,
}

impl Chain {
    /// Run the chain from `initial`.
    ///
    /// Returns `None` as soon as any step declines; no later step is invoked.
    pub fn run(&self, initial: i64) -> Option<i64> {
        self.steps
            .iter()
            .enumerate()
            .try_fold(initial, |value, (i, step)| self.apply_step(i, step.as_ref(), value))
    }

    /// Run the chain and record every invoked step.
    pub fn run_with_trace(&self, initial: i64) -> ChainTrace {
        let mut trace = ChainTrace::new(initial, self.steps.len());

        let _ = self
            .steps
            .iter()
            .enumerate()
            .try_fold(initial, |value, (i, step)| {
                let output = self.apply_step(i, step.as_ref(), value);
                trace.push(StepRecord {
                    position: i + 1,
                    name: step.name().to_string(),
                    input: value,
                    output,
                });
                output
            });

        trace
    }

    // Shared by both run paths so they log identically.
    fn apply_step(&self, index: usize, step: &(dyn Step + Send + Sync), value: i64) -> Option<i64> {
        let total = self.steps.len();
        let output = step.apply(value);
        log::trace!(
            "Step {}/{}: {}({}) -> {:?}",
            index + 1,
            total,
            step.name(),
            value,
            output
        );
        if output.is_none() {
            log::debug!(
                "Chain short-circuited at step {} of {}; {} steps skipped",
                index + 1,
                total,
                total - index - 1
            );
        }
        output
    }

    /// Get the number of steps in this chain.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps; an empty chain returns its input.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Names of the steps in order.
    pub fn step_names(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.name().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::step::FnStep;
    use crate::transforms::StepKind;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    static CAPTURED: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut captured) = CAPTURED.lock() {
                captured.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    /// Messages at `level` mentioning `needle`, captured process-wide.
    fn captured(level: log::Level, needle: &str) -> Vec<String> {
        CAPTURED
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, msg)| *l == level && msg.contains(needle))
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    #[test]
    fn test_chain_builder() {
        let chain = ChainBuilder::new()
            .step(FnStep::new("Add 1", |x: i64| x.checked_add(1)))
            .step(FnStep::new("Double", |x: i64| x.checked_mul(2)))
            .build();

        assert_eq!(chain.run(1), Some(4));
    }

    #[test]
    fn test_chain_conditional() {
        let with_extra = ChainBuilder::new()
            .step(FnStep::new("Start", |x: i64| x.checked_add(1)))
            .when(true, |b| b.step(FnStep::new("Add 10", |x: i64| x.checked_add(10))))
            .step(FnStep::new("Double", |x: i64| x.checked_mul(2)))
            .build();

        let without_extra = ChainBuilder::new()
            .step(FnStep::new("Start", |x: i64| x.checked_add(1)))
            .when(false, |b| {
                b.step(FnStep::new("Add 10", |x: i64| x.checked_add(10)))
            })
            .step(FnStep::new("Double", |x: i64| x.checked_mul(2)))
            .build();

        assert_eq!(with_extra.run(0), Some(22)); // (0 + 1 + 10) * 2
        assert_eq!(without_extra.run(0), Some(2)); // (0 + 1) * 2
    }

    #[test]
    fn test_chain_trace_sample() {
        let chain = ChainBuilder::new().repeat(10, |_| StepKind::Half).build();

        let trace = chain.run_with_trace(20);

        assert_eq!(trace.result(), None);
        assert_eq!(trace.invoked(), 3);
        assert_eq!(trace.skipped(), 7);
        assert_eq!(trace.failed_at(), Some(3));
        let outputs: Vec<_> = trace.records().iter().map(|r| r.output).collect();
        assert_eq!(outputs, vec![Some(10), Some(5), None]);
    }

    #[test]
    fn test_trace_matches_run() {
        let chain = ChainBuilder::new()
            .steps([StepKind::Half, StepKind::Third, StepKind::Decrement])
            .build();

        for initial in [-12, 0, 6, 7, 18, 600] {
            assert_eq!(chain.run_with_trace(initial).result(), chain.run(initial));
        }
    }

    #[test]
    fn test_empty_chain() {
        let chain = ChainBuilder::default().build();
        assert!(chain.is_empty());
        assert_eq!(chain.run(5), Some(5));
        assert_eq!(chain.run_with_trace(5).result(), Some(5));
    }

    #[test]
    fn test_step_names() {
        let chain = ChainBuilder::new()
            .step(StepKind::Half)
            .step(StepKind::Negate)
            .build();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.step_names(), vec!["half", "negate"]);
    }

    #[test]
    fn test_run_logs_steps_and_short_circuit() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let chain = ChainBuilder::new()
            .repeat(10, |_| FnStep::new("logged_half", crate::transforms::half))
            .build();
        assert_eq!(chain.run(20), None);

        let steps = captured(log::Level::Trace, "logged_half(");
        assert_eq!(
            steps,
            vec![
                "Step 1/10: logged_half(20) -> Some(10)",
                "Step 2/10: logged_half(10) -> Some(5)",
                "Step 3/10: logged_half(5) -> None",
            ]
        );
        assert_eq!(
            captured(log::Level::Debug, "short-circuited at step 3 of 10"),
            vec!["Chain short-circuited at step 3 of 10; 7 steps skipped"]
        );
    }
}
