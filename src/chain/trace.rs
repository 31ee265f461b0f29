//! Execution traces for chains.

use serde::Serialize;

/// One invoked step: where it sat in the chain, what it saw and what it gave back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 1-based position in the chain
    pub position: usize,

    /// Name of the step
    pub name: String,

    /// Value the step was invoked with
    pub input: i64,

    /// Value the step produced, `None` when it declined
    pub output: Option<i64>,
}

impl StepRecord {
    /// Format the record as `name(input) -> output`.
    pub fn format(&self) -> String {
        match self.output {
            Some(v) => format!("{}({}) -> {}", self.name, self.input, v),
            None => format!("{}({}) -> absent", self.name, self.input),
        }
    }
}

/// Record of a single chain run.
///
/// Only invoked steps are recorded; steps skipped after a short-circuit
/// show up solely in [`ChainTrace::skipped`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainTrace {
    initial: i64,
    total_steps: usize,
    records: Vec<StepRecord>,
}

impl ChainTrace {
    pub(crate) fn new(initial: i64, total_steps: usize) -> Self {
        Self {
            initial,
            total_steps,
            records: Vec::with_capacity(total_steps),
        }
    }

    pub(crate) fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    pub fn initial(&self) -> i64 {
        self.initial
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Number of steps that were actually invoked.
    pub fn invoked(&self) -> usize {
        self.records.len()
    }

    /// Number of steps never invoked because an earlier step declined.
    pub fn skipped(&self) -> usize {
        self.total_steps - self.records.len()
    }

    /// Position of the step that returned `None`, if any did.
    pub fn failed_at(&self) -> Option<usize> {
        self.records
            .last()
            .filter(|r| r.output.is_none())
            .map(|r| r.position)
    }

    /// Final value of the run.
    pub fn result(&self) -> Option<i64> {
        match self.records.last() {
            Some(record) => record.output,
            None => Some(self.initial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(position: usize, input: i64, output: Option<i64>) -> StepRecord {
        StepRecord {
            position,
            name: "half".to_string(),
            input,
            output,
        }
    }

    #[test]
    fn test_empty_trace_result_is_initial() {
        let trace = ChainTrace::new(9, 0);
        assert_eq!(trace.result(), Some(9));
        assert_eq!(trace.failed_at(), None);
        assert_eq!(trace.skipped(), 0);
    }

    #[test]
    fn test_failed_trace_views() {
        let mut trace = ChainTrace::new(20, 10);
        trace.push(record(1, 20, Some(10)));
        trace.push(record(2, 10, Some(5)));
        trace.push(record(3, 5, None));

        assert_eq!(trace.result(), None);
        assert_eq!(trace.invoked(), 3);
        assert_eq!(trace.skipped(), 7);
        assert_eq!(trace.failed_at(), Some(3));
    }

    #[test]
    fn test_record_format() {
        assert_eq!(record(1, 20, Some(10)).format(), "half(20) -> 10");
        assert_eq!(record(3, 5, None).format(), "half(5) -> absent");
    }
}
