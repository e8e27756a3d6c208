//! Synthetic timing files for unit tests.

use crate::model::{Case, Metric, Tool};
use crate::reader::ToolLines;

/// Deterministic, non-zero duration for a table slot.
pub fn sample_time(tool: Tool, case: Case, planes: u32, metric: Metric) -> f64 {
    let tool_factor = [1.0, 2.5, 4.0][tool as usize];
    let base = 1.0e-3 * (case.index() + 1) as f64 + 1.0e-4 * f64::from(planes);
    tool_factor * base * (metric.index() + 1) as f64
}

/// Lines of one tool's file as the benchmark driver writes them.
pub fn sample_lines(tool: Tool, max_planes: u32) -> Vec<String> {
    let mut lines = vec![format!("100000 {max_planes}"), String::new()];
    for case in Case::ALL {
        for planes in 1..=max_planes {
            let mut line = format!("{:.13e}", f64::from(planes));
            for metric in Metric::ALL {
                line.push_str(&format!(" {:e}", sample_time(tool, case, planes, metric)));
            }
            lines.push(line);
        }
        lines.push(String::new());
    }
    lines
}

/// Consistent files for all three tools.
pub fn sample_files(max_planes: u32) -> ToolLines {
    Tool::ALL
        .iter()
        .map(|&tool| (tool, sample_lines(tool, max_planes)))
        .collect()
}
