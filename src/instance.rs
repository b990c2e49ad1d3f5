//! Test-case input reader.
//!
//! The input is line oriented:
//!
//! ```text
//! 2        <- number of test cases
//! 10       <- case 1: ceiling
//! 4        <- case 1: task count
//! 5        <- case 1: one duration per line
//! 5
//! 5
//! 5
//! 1        <- case 2: ceiling
//! 2
//! 5
//! 5
//! ```
//!
//! Blank lines are skipped and surrounding whitespace is ignored.

use crate::ga::BalanceProblem;
use std::path::{Path, PathBuf};

/// One test case: a ceiling and the task durations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    /// Per-machine time ceiling.
    pub ceiling: u64,
    /// Task durations, in input order.
    pub durations: Vec<u64>,
}

impl Instance {
    /// Builds the problem the GA solves for this test case.
    pub fn problem(&self) -> BalanceProblem {
        BalanceProblem::new(self.durations.clone(), self.ceiling)
    }
}

/// Errors raised while reading test cases.
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input is empty")]
    Empty,
    #[error("line {line}: invalid {what} {text:?}")]
    InvalidNumber {
        line: usize,
        what: &'static str,
        text: String,
    },
    #[error("line {line}: test case count must be at least 1")]
    NoTestCases { line: usize },
    #[error("line {line}: {what} must be positive")]
    NotPositive { line: usize, what: &'static str },
    #[error("unexpected end of input: expected {what} for test case #{case}")]
    UnexpectedEof { case: usize, what: &'static str },
    #[error("test case #{case}: total task duration does not fit in 64 bits")]
    TotalOverflow { case: usize },
}

/// Reads and parses the test cases in `path`.
pub fn read_instances(path: impl AsRef<Path>) -> Result<Vec<Instance>, InstanceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| InstanceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_instances(&text)
}

/// Parses test cases from text.
pub fn parse_instances(input: &str) -> Result<Vec<Instance>, InstanceError> {
    let mut lines = NumberLines::new(input);

    let (line, count) = lines.next_number("test case count")?.ok_or(InstanceError::Empty)?;
    if count == 0 {
        return Err(InstanceError::NoTestCases { line });
    }

    let mut instances = Vec::new();
    for case in 1..=count as usize {
        let ceiling = lines.expect_positive(case, "ceiling")?;
        let task_count = lines.expect_number(case, "task count")?;
        let durations = (0..task_count)
            .map(|_| lines.expect_positive(case, "task duration"))
            .collect::<Result<Vec<_>, _>>()?;
        if durations
            .iter()
            .try_fold(0u64, |acc, &d| acc.checked_add(d))
            .is_none()
        {
            return Err(InstanceError::TotalOverflow { case });
        }
        instances.push(Instance { ceiling, durations });
    }
    Ok(instances)
}

/// Non-blank lines parsed as unsigned integers, with 1-based line numbers.
struct NumberLines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> NumberLines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.lines().enumerate(),
        }
    }

    fn next_number(&mut self, what: &'static str) -> Result<Option<(usize, u64)>, InstanceError> {
        let Some((line, text)) = self
            .inner
            .by_ref()
            .map(|(i, l)| (i + 1, l.trim()))
            .find(|(_, l)| !l.is_empty())
        else {
            return Ok(None);
        };
        text.parse::<u64>()
            .map(|n| Some((line, n)))
            .map_err(|_| InstanceError::InvalidNumber {
                line,
                what,
                text: text.to_string(),
            })
    }

    fn expect_number(&mut self, case: usize, what: &'static str) -> Result<u64, InstanceError> {
        self.next_number(what)?
            .map(|(_, n)| n)
            .ok_or(InstanceError::UnexpectedEof { case, what })
    }

    fn expect_positive(&mut self, case: usize, what: &'static str) -> Result<u64, InstanceError> {
        let (line, n) = self
            .next_number(what)?
            .ok_or(InstanceError::UnexpectedEof { case, what })?;
        if n == 0 {
            return Err(InstanceError::NotPositive { line, what });
        }
        Ok(n)
    }
}
