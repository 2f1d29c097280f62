//! Match logs.
//!
//! Combat produces ordered, human-readable lines describing what
//! happened. Rendering them is the caller's job; the engine only
//! appends. Skipped actions and forfeit notices land here too: user
//! visible failures are log lines, never panics.

use serde::{Deserialize, Serialize};

/// An ordered list of human-readable log lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchLog {
    lines: Vec<String>,
}

impl MatchLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append every line of another log.
    pub fn append(&mut self, other: &mut MatchLog) {
        self.lines.append(&mut other.lines);
    }

    /// The lines recorded so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the log, yielding its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of lines recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Is the log empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Extend<String> for MatchLog {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.lines.extend(iter);
    }
}
