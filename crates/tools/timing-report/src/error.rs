//! Error types for timing file loading and report rendering.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::model::{Case, Metric, Tool};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimingError>;

/// Errors that can occur while loading, aggregating or rendering timings.
#[derive(Debug)]
pub enum TimingError {
    /// I/O error reading an input file or writing a report.
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The header line of a timing file is missing or unusable.
    InvalidHeader {
        /// Tool whose file is affected.
        tool: Tool,
        /// Description of the problem.
        reason: String,
    },
    /// A tool file declares a different plane count than the baseline file.
    MaxPlanesMismatch {
        /// Tool whose file disagrees.
        tool: Tool,
        /// Plane count declared by the baseline file.
        expected: u32,
        /// Plane count declared by `tool`'s file.
        found: u32,
    },
    /// The file ended before all case blocks were read.
    Truncated {
        /// Tool whose file is affected.
        tool: Tool,
        /// Case whose block is incomplete.
        case: Case,
        /// 1-based line number that was expected.
        line: usize,
    },
    /// A data line does not have exactly five fields.
    MalformedLine {
        /// Tool whose file is affected.
        tool: Tool,
        /// 1-based line number.
        line: usize,
        /// Number of fields found.
        fields: usize,
    },
    /// A data field is not a number.
    InvalidNumber {
        /// Tool whose file is affected.
        tool: Tool,
        /// 1-based line number.
        line: usize,
        /// The offending text.
        token: String,
    },
    /// A data line lists a plane count out of sequence.
    UnexpectedPlane {
        /// Tool whose file is affected.
        tool: Tool,
        /// Case block containing the line.
        case: Case,
        /// 1-based line number.
        line: usize,
        /// Plane count implied by the line's position in its block.
        expected: u32,
        /// Plane count found on the line.
        found: i64,
    },
    /// The baseline time used as a ratio divisor is zero.
    ZeroBaseline {
        /// Case of the zero entry.
        case: Case,
        /// Metric of the zero entry.
        metric: Metric,
        /// Plane count of the zero entry.
        planes: u32,
    },
    /// Aggregated data has no entry for a lookup.
    MissingEntry {
        /// Tool looked up.
        tool: Tool,
        /// Case looked up.
        case: Case,
        /// Metric looked up.
        metric: Metric,
        /// Plane count looked up.
        planes: u32,
    },
}

impl TimingError {
    /// Wrap an I/O error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::InvalidHeader { tool, reason } => {
                write!(f, "invalid header in {tool} timing file: {reason}")
            }
            Self::MaxPlanesMismatch {
                tool,
                expected,
                found,
            } => write!(
                f,
                "Different max planes length provided in the result files \
                 ({tool} declares {found}, irl declares {expected})"
            ),
            Self::Truncated { tool, case, line } => write!(
                f,
                "{tool} timing file ends early: expected line {line} for case '{case}'"
            ),
            Self::MalformedLine { tool, line, fields } => write!(
                f,
                "{tool} timing file line {line}: expected 5 fields, found {fields}"
            ),
            Self::InvalidNumber { tool, line, token } => write!(
                f,
                "{tool} timing file line {line}: '{token}' is not a number"
            ),
            Self::UnexpectedPlane {
                tool,
                case,
                line,
                expected,
                found,
            } => write!(
                f,
                "{tool} timing file line {line}: expected plane count {expected} \
                 for case '{case}', found {found}"
            ),
            Self::ZeroBaseline {
                case,
                metric,
                planes,
            } => write!(
                f,
                "irl {metric} time for '{case}' at {planes} plane(s) is zero; ratio undefined"
            ),
            Self::MissingEntry {
                tool,
                case,
                metric,
                planes,
            } => write!(
                f,
                "no {metric} time for {tool} on '{case}' at {planes} plane(s)"
            ),
        }
    }
}

impl std::error::Error for TimingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
