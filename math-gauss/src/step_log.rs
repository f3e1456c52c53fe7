//! Per-solve step trace
//!
//! A [`StepLog`] is created for each solve and handed explicitly to the
//! elimination stages. Lines come out in the order they were recorded.

use serde::{Deserialize, Serialize};

/// Append-only, ordered record of elimination decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLog {
    lines: Vec<String>,
}

impl StepLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line
    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::trace!("{}", line);
        self.lines.push(line);
    }

    /// Move every line of `other` onto the end of this log.
    ///
    /// The lines were already mirrored to `trace` when first recorded, so
    /// they are not emitted again.
    pub fn append(&mut self, other: StepLog) {
        self.lines.extend(other.lines);
    }

    /// Lines in chronological order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of recorded lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines recorded from position `start` onwards, for incremental readers
    pub fn since(&self, start: usize) -> &[String] {
        &self.lines[start.min(self.lines.len())..]
    }

    /// All lines joined with `\n`
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Consume the log, keeping the lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl std::fmt::Display for StepLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chronological_order() {
        let mut log = StepLog::new();
        log.record("first");
        log.record(String::from("second"));
        log.record(format!("third {}", 3));

        assert_eq!(log.lines(), ["first", "second", "third 3"]);
        assert_eq!(log.to_text(), "first\nsecond\nthird 3");
    }

    #[test]
    fn test_since() {
        let mut log = StepLog::new();
        log.record("a");
        let mark = log.len();
        log.record("b");
        log.record("c");

        assert_eq!(log.since(mark), ["b", "c"]);
        assert!(log.since(10).is_empty());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut outer = StepLog::new();
        outer.record("start");
        let mut inner = StepLog::new();
        inner.record("inner 1");
        inner.record("inner 2");

        outer.append(inner);
        outer.record("end");

        assert_eq!(outer.lines(), ["start", "inner 1", "inner 2", "end"]);
        assert_eq!(outer.into_lines().len(), 4);
    }

    #[test]
    fn test_logs_are_independent() {
        let mut a = StepLog::new();
        let b = StepLog::new();
        a.record("only in a");
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }
}
