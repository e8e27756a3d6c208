//! Layout of the whitespace-delimited timing files.
//!
//! Each tool writes one file with the same positional layout:
//!
//! ```text
//! <trials> <max_planes>          header
//!                                separator
//! <planes> <init> <isect> <vol> <total>   \
//! ...                                      } max_planes lines, case 0
//!                                separator
//! <planes> <init> <isect> <vol> <total>   \
//! ...                                      } max_planes lines, case 1
//! ```
//!
//! All offsets are derived here and nowhere else.

use std::ops::Range;

use crate::error::{Result, TimingError};
use crate::model::{Case, Metric, Tool};

/// Parsed header line of a timing file.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Number of trials per measurement, verbatim from the file.
    pub trials: String,
    /// Largest plane count measured.
    pub max_planes: u32,
}

/// One data line: a plane count and the four phase durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Plane count, truncated to an integer.
    pub planes: i64,
    /// Durations indexed by [`Metric::index`], already scaled.
    pub times: [f64; 4],
}

impl Record {
    /// Duration for `metric`.
    #[must_use]
    pub fn time(&self, metric: Metric) -> f64 {
        self.times[metric.index()]
    }
}

/// Positional description of a timing file for a given plane count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingFormat {
    max_planes: u32,
}

impl TimingFormat {
    /// Lines before the first case block (header plus one separator).
    pub const HEADER_LINES: usize = 2;
    /// Fields on every data line.
    pub const FIELDS: usize = 5;
    /// Multiplier applied to every duration. Kept at 1.0 so output stays in
    /// input units.
    pub const SCALING: f64 = 1.0;

    /// Layout for files declaring `max_planes`.
    #[must_use]
    pub const fn new(max_planes: u32) -> Self {
        Self { max_planes }
    }

    /// Plane count shared by every case block.
    #[must_use]
    pub const fn max_planes(&self) -> u32 {
        self.max_planes
    }

    /// Distance in lines between the starts of consecutive case blocks.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.max_planes as usize + 1
    }

    /// Index of the first data line of `case`.
    #[must_use]
    pub const fn block_start(&self, case: Case) -> usize {
        Self::HEADER_LINES + case.index() * self.stride()
    }

    /// Line indices holding the data of `case`.
    #[must_use]
    pub const fn block(&self, case: Case) -> Range<usize> {
        let start = self.block_start(case);
        start..start + self.max_planes as usize
    }
}

/// Parse the header line of `tool`'s file.
///
/// # Errors
///
/// Returns [`TimingError::InvalidHeader`] if the plane count is missing, not a
/// number, or below 1.
pub fn parse_header(tool: Tool, line: Option<&str>) -> Result<Header> {
    let invalid = |reason: String| TimingError::InvalidHeader { tool, reason };

    let line = line.ok_or_else(|| invalid("file is empty".into()))?;
    let mut tokens = line.split_whitespace();
    let trials = tokens
        .next()
        .ok_or_else(|| invalid("header line is blank".into()))?
        .to_string();
    let raw = tokens
        .next()
        .ok_or_else(|| invalid("missing max plane count".into()))?;
    let value: f64 = raw
        .parse()
        .map_err(|_| invalid(format!("max plane count '{raw}' is not a number")))?;

    let truncated = value.trunc();
    if !(1.0..=f64::from(u32::MAX)).contains(&truncated) {
        return Err(invalid(format!("max plane count '{raw}' must be at least 1")));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_planes = truncated as u32;

    Ok(Header { trials, max_planes })
}

/// Parse one data line. `line_no` is 1-based and only used for errors.
///
/// # Errors
///
/// Returns [`TimingError::MalformedLine`] if the line does not hold exactly
/// five fields and [`TimingError::InvalidNumber`] if any field fails to parse.
pub fn parse_record(tool: Tool, line_no: usize, line: &str) -> Result<Record> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != TimingFormat::FIELDS {
        return Err(TimingError::MalformedLine {
            tool,
            line: line_no,
            fields: tokens.len(),
        });
    }

    let number = |token: &str| -> Result<f64> {
        token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| TimingError::InvalidNumber {
                tool,
                line: line_no,
                token: token.to_string(),
            })
    };

    #[allow(clippy::cast_possible_truncation)]
    let planes = number(tokens[0])?.trunc() as i64;

    let mut times = [0.0; 4];
    for (slot, token) in times.iter_mut().zip(&tokens[1..]) {
        *slot = number(*token)? * TimingFormat::SCALING;
    }

    Ok(Record { planes, times })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_offsets_follow_stride() {
        let format = TimingFormat::new(3);
        assert_eq!(format.stride(), 4);
        assert_eq!(format.block(Case::Prism), 2..5);
        assert_eq!(format.block(Case::UnitCube), 6..9);
        assert_eq!(format.block_start(Case::StellatedIcosahedron), 2 + 7 * 4);
    }

    #[test]
    fn header_truncates_float_plane_count() {
        let header = parse_header(Tool::Irl, Some("100000 5.9")).unwrap();
        assert_eq!(header.trials, "100000");
        assert_eq!(header.max_planes, 5);
    }

    #[test]
    fn header_rejects_zero_planes() {
        let err = parse_header(Tool::R3d, Some("1000 0")).unwrap_err();
        assert!(matches!(err, TimingError::InvalidHeader { tool: Tool::R3d, .. }));
    }

    #[test]
    fn header_rejects_missing_and_empty() {
        assert!(parse_header(Tool::Irl, None).is_err());
        assert!(parse_header(Tool::Irl, Some("1000")).is_err());
        assert!(parse_header(Tool::Irl, Some("1000 many")).is_err());
    }

    #[test]
    fn record_parses_scientific_fields() {
        let line = "2.0000000000000e+00 1.5000000000000e-03 2.5000000000000e-03 \
                    3.0000000000000e-04 4.3000000000000e-03";
        let record = parse_record(Tool::Irl, 4, line).unwrap();
        assert_eq!(record.planes, 2);
        assert_eq!(record.time(Metric::Initialization), 1.5e-3);
        assert_eq!(record.time(Metric::Total), 4.3e-3);
    }

    #[test]
    fn record_rejects_wrong_field_count() {
        let err = parse_record(Tool::Voftools, 7, "1 2 3 4").unwrap_err();
        assert!(matches!(
            err,
            TimingError::MalformedLine {
                line: 7,
                fields: 4,
                ..
            }
        ));
    }

    #[test]
    fn record_rejects_non_numeric_field() {
        let err = parse_record(Tool::Irl, 3, "1 0.1 x 0.3 0.4").unwrap_err();
        match err {
            TimingError::InvalidNumber { token, line, .. } => {
                assert_eq!(token, "x");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
