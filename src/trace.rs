//! Run-scoped trace recorder.
//!
//! Both solvers narrate their recursive decisions into a [`Trace`]: an
//! append-only sequence of lines, each indented two spaces per recursion
//! level. The recorder also owns the run's operation counter (pairwise
//! comparisons for closest pair, recursive calls for Karatsuba), so all
//! mutable run state lives in one place and nothing leaks across runs.
//!
//! Lines are never removed or reordered after being appended; consumers
//! read the trace only once the run has completed.

/// Append-only trace of one solver run, plus the run's operation counter.
#[derive(Debug, Default)]
pub struct Trace {
    lines: Vec<String>,
    ops: u64,
}

impl Trace {
    /// Create an empty trace with a zeroed operation counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line indented two spaces per `depth` level.
    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        let mut s = String::with_capacity(2 * depth + text.as_ref().len());
        for _ in 0..depth {
            s.push_str("  ");
        }
        s.push_str(text.as_ref());
        self.lines.push(s);
    }

    /// Append an empty separator line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Increment the operation counter and return its new value.
    pub fn tick(&mut self) -> u64 {
        self.ops += 1;
        self.ops
    }

    /// Operations recorded so far.
    pub fn ops(&self) -> u64 {
        self.ops
    }

    /// The lines appended so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Reset lines and counter for the next run.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.ops = 0;
    }

    /// Consume the recorder, yielding the completed trace.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
