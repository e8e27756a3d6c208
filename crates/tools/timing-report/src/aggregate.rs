//! Aggregation of per-tool timing files into per-metric lookup tables.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::error::{Result, TimingError};
use crate::format::{self, Header, TimingFormat};
use crate::model::{Case, Metric, Tool};
use crate::reader::ToolLines;

/// Duration keyed by plane count.
pub type PlaneTimes = BTreeMap<u32, f64>;
/// Plane timings keyed by case.
pub type CaseTimes = BTreeMap<Case, PlaneTimes>;
/// Case timings keyed by tool. One of these exists per metric.
pub type MetricTimes = BTreeMap<Tool, CaseTimes>;

/// Timings of every tool, case and plane count, one table per metric.
#[derive(Debug, Clone)]
pub struct TimingData {
    max_planes: u32,
    trials: String,
    metrics: [MetricTimes; 4],
}

impl TimingData {
    /// Largest plane count, shared by every tool.
    #[must_use]
    pub fn max_planes(&self) -> u32 {
        self.max_planes
    }

    /// Plane counts present for every tool and case.
    #[must_use]
    pub fn planes(&self) -> RangeInclusive<u32> {
        1..=self.max_planes
    }

    /// Trial count reported in the baseline file header, verbatim.
    #[must_use]
    pub fn trials(&self) -> &str {
        &self.trials
    }

    /// Full table for `metric`.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> &MetricTimes {
        &self.metrics[metric.index()]
    }

    /// Duration of `metric` for one tool, case and plane count.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::MissingEntry`] if no such entry exists.
    pub fn time(&self, metric: Metric, tool: Tool, case: Case, planes: u32) -> Result<f64> {
        self.metric(metric)
            .get(&tool)
            .and_then(|cases| cases.get(&case))
            .and_then(|times| times.get(&planes))
            .copied()
            .ok_or(TimingError::MissingEntry {
                tool,
                case,
                metric,
                planes,
            })
    }

    /// Duration of `metric` for `tool` divided by the baseline tool's.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::ZeroBaseline`] if the baseline duration is zero,
    /// or [`TimingError::MissingEntry`] if either entry is absent.
    pub fn ratio(&self, metric: Metric, tool: Tool, case: Case, planes: u32) -> Result<f64> {
        let base = self.time(metric, Tool::BASELINE, case, planes)?;
        if base == 0.0 {
            return Err(TimingError::ZeroBaseline {
                case,
                metric,
                planes,
            });
        }
        Ok(self.time(metric, tool, case, planes)? / base)
    }
}

/// Parse and cross-check the timing files of all three tools.
///
/// Every header is validated before any data line is read, so a plane count
/// mismatch is reported regardless of the data that follows.
///
/// # Errors
///
/// Returns [`TimingError::MaxPlanesMismatch`] if a file's plane count differs
/// from the baseline file's, and the parse errors of [`format`] for malformed
/// content.
pub fn aggregate(files: &ToolLines) -> Result<TimingData> {
    let headers = read_headers(files)?;
    let baseline = &headers[&Tool::BASELINE];
    let layout = TimingFormat::new(baseline.max_planes);

    let mut metrics: [MetricTimes; 4] = Default::default();

    for (tool, lines) in files {
        for case in Case::ALL {
            for (offset, index) in layout.block(case).enumerate() {
                let line_no = index + 1;
                let line = lines.get(index).ok_or(TimingError::Truncated {
                    tool: *tool,
                    case,
                    line: line_no,
                })?;
                let record = format::parse_record(*tool, line_no, line)?;

                // Offsets are bounded by max_planes, which fits in u32.
                #[allow(clippy::cast_possible_truncation)]
                let expected = offset as u32 + 1;
                if record.planes != i64::from(expected) {
                    return Err(TimingError::UnexpectedPlane {
                        tool: *tool,
                        case,
                        line: line_no,
                        expected,
                        found: record.planes,
                    });
                }

                for metric in Metric::ALL {
                    metrics[metric.index()]
                        .entry(*tool)
                        .or_default()
                        .entry(case)
                        .or_default()
                        .insert(expected, record.time(metric));
                }
            }
        }
    }

    Ok(TimingData {
        max_planes: layout.max_planes(),
        trials: baseline.trials.clone(),
        metrics,
    })
}

fn read_headers(files: &ToolLines) -> Result<BTreeMap<Tool, Header>> {
    let mut headers = BTreeMap::new();
    for tool in Tool::ALL {
        let lines = files.get(&tool).ok_or_else(|| TimingError::InvalidHeader {
            tool,
            reason: "no timing file supplied".into(),
        })?;
        let header = format::parse_header(tool, lines.first().map(String::as_str))?;
        headers.insert(tool, header);
    }

    let expected = headers[&Tool::BASELINE].max_planes;
    for (tool, header) in &headers {
        if header.max_planes != expected {
            return Err(TimingError::MaxPlanesMismatch {
                tool: *tool,
                expected,
                found: header.max_planes,
            });
        }
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{sample_files, sample_time};

    #[test]
    fn key_sets_cover_every_tool_case_and_plane() {
        let data = aggregate(&sample_files(3)).unwrap();
        assert_eq!(data.max_planes(), 3);

        for metric in Metric::ALL {
            let table = data.metric(metric);
            assert_eq!(table.keys().copied().collect::<Vec<_>>(), Tool::ALL.to_vec());
            for cases in table.values() {
                assert_eq!(cases.keys().copied().collect::<Vec<_>>(), Case::ALL.to_vec());
                for times in cases.values() {
                    assert_eq!(times.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
                }
            }
        }
    }

    #[test]
    fn values_land_in_the_right_slot() {
        let data = aggregate(&sample_files(2)).unwrap();
        for tool in Tool::ALL {
            for case in Case::ALL {
                for planes in data.planes() {
                    for metric in Metric::ALL {
                        assert_eq!(
                            data.time(metric, tool, case, planes).unwrap(),
                            sample_time(tool, case, planes, metric),
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn baseline_ratio_is_exactly_one() {
        let data = aggregate(&sample_files(4)).unwrap();
        for case in Case::ALL {
            for planes in data.planes() {
                let ratio = data.ratio(Metric::Total, Tool::Irl, case, planes).unwrap();
                assert_eq!(ratio, 1.0);
            }
        }
    }

    #[test]
    fn trials_come_from_baseline_header() {
        let data = aggregate(&sample_files(1)).unwrap();
        assert_eq!(data.trials(), "100000");
    }

    #[test]
    fn mismatched_max_planes_is_rejected() {
        let mut files = sample_files(2);
        files.get_mut(&Tool::R3d).unwrap()[0] = "100000 3".into();

        let err = aggregate(&files).unwrap_err();
        assert!(matches!(
            err,
            TimingError::MaxPlanesMismatch {
                tool: Tool::R3d,
                expected: 2,
                found: 3,
            }
        ));
    }

    #[test]
    fn truncated_file_is_rejected() {
        let mut files = sample_files(2);
        files.get_mut(&Tool::Voftools).unwrap().truncate(10);

        let err = aggregate(&files).unwrap_err();
        assert!(matches!(
            err,
            TimingError::Truncated {
                tool: Tool::Voftools,
                case: Case::TriangulatedHexahedron,
                line: 12,
            }
        ));
    }

    #[test]
    fn malformed_line_is_fatal() {
        let mut files = sample_files(2);
        files.get_mut(&Tool::Irl).unwrap()[3] = "2 0.1 0.2".into();

        let err = aggregate(&files).unwrap_err();
        assert!(matches!(
            err,
            TimingError::MalformedLine {
                tool: Tool::Irl,
                line: 4,
                fields: 3,
            }
        ));
    }

    #[test]
    fn out_of_sequence_plane_is_rejected() {
        let mut files = sample_files(2);
        files.get_mut(&Tool::Irl).unwrap()[2] = "2 0.1 0.2 0.3 0.6".into();

        let err = aggregate(&files).unwrap_err();
        assert!(matches!(
            err,
            TimingError::UnexpectedPlane {
                case: Case::Prism,
                expected: 1,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn zero_baseline_ratio_is_an_error() {
        let mut files = sample_files(1);
        files.get_mut(&Tool::Irl).unwrap()[2] = "1 0.0 0.0 0.0 0.0".into();

        let data = aggregate(&files).unwrap();
        let err = data.ratio(Metric::Volume, Tool::R3d, Case::Prism, 1).unwrap_err();
        assert!(matches!(
            err,
            TimingError::ZeroBaseline {
                case: Case::Prism,
                metric: Metric::Volume,
                planes: 1,
            }
        ));
    }
}
