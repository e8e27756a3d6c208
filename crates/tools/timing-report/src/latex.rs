//! LaTeX table-row fragments for the paper tables.
//!
//! Rows are meant to be pasted into hand-written `tabular` environments, so
//! only the row bodies are produced.

use std::path::Path;

use crate::aggregate::TimingData;
use crate::error::{Result, TimingError};
use crate::model::{Case, Metric, Tool};

/// Default file name of the fragment collection inside the results directory.
pub const LATEX_FILE: &str = "latex_output.txt";

const ROW_END: &str = "\\\\ \\hline";
const LINE_END: &str = "\\\\ \n";
const HLINE: &str = "\\hline\n";

/// The fragments written to [`LATEX_FILE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatexTable {
    /// Single-plane total time.
    Total,
    /// Single-plane total time relative to the baseline tool.
    TotalRel,
    /// Single-plane initialization time.
    Initialization,
    /// Single-plane intersection time.
    Intersection,
    /// Single-plane volume time.
    Volume,
    /// Total time across every plane count for a subset of cases.
    MultiplePlane,
}

impl LatexTable {
    /// Every fragment, in file order.
    pub const ALL: [LatexTable; 6] = [
        LatexTable::Total,
        LatexTable::TotalRel,
        LatexTable::Initialization,
        LatexTable::Intersection,
        LatexTable::Volume,
        LatexTable::MultiplePlane,
    ];

    /// Name printed in the section line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LatexTable::Total => "total",
            LatexTable::TotalRel => "total_rel",
            LatexTable::Initialization => "initialization",
            LatexTable::Intersection => "intersection",
            LatexTable::Volume => "volume",
            LatexTable::MultiplePlane => "multiple_plane",
        }
    }
}

/// Absolute time cell: `%8.3f`.
fn time_cell(value: f64) -> String {
    format!("{value:8.3}")
}

/// Ratio cell: `%10.2f`.
fn ratio_cell(value: f64) -> String {
    format!("{value:10.2}")
}

/// One row per case with each tool's single-plane time for `metric`.
fn single_plane_rows(data: &TimingData, metric: Metric) -> Result<Vec<String>> {
    Case::ALL
        .iter()
        .map(|&case| {
            let cells = Tool::ALL
                .iter()
                .map(|&tool| data.time(metric, tool, case, 1).map(time_cell))
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("{case} & {}{ROW_END}", cells.join(" & ")))
        })
        .collect()
}

/// One row per case with each tool's single-plane total relative to the
/// baseline.
fn relative_total_rows(data: &TimingData) -> Result<Vec<String>> {
    Case::ALL
        .iter()
        .map(|&case| {
            let cells = Tool::ALL
                .iter()
                .map(|&tool| data.ratio(Metric::Total, tool, case, 1).map(ratio_cell))
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("{case} & {}{ROW_END}", cells.join(" & ")))
        })
        .collect()
}

/// A `\multirow` block per case listing the total time at every plane count,
/// closed by `\hline`.
fn multiple_plane_blocks(data: &TimingData) -> Result<Vec<String>> {
    let total = |tool: Tool, case: Case, planes: u32| {
        data.time(Metric::Total, tool, case, planes).map(time_cell)
    };

    Case::MULTI_PLANE
        .iter()
        .map(|&case| {
            let mut block = format!(
                "\\multirow{{{}}}{{*}}{{{case}}} & 1  & {} & {} &  {}{LINE_END}",
                data.max_planes(),
                total(Tool::Irl, case, 1)?,
                total(Tool::R3d, case, 1)?,
                total(Tool::Voftools, case, 1)?,
            );
            for planes in data.planes().skip(1) {
                block.push_str(&format!(
                    " & {planes} & {} & {} & {}{LINE_END}",
                    total(Tool::Irl, case, planes)?,
                    total(Tool::R3d, case, planes)?,
                    total(Tool::Voftools, case, planes)?,
                ));
            }
            block.push_str(HLINE);
            Ok(block)
        })
        .collect()
}

/// Entries of one fragment, without the section line.
///
/// # Errors
///
/// Fails if a required entry is missing or a baseline total is zero.
pub fn render_table(data: &TimingData, table: LatexTable) -> Result<Vec<String>> {
    match table {
        LatexTable::Total => single_plane_rows(data, Metric::Total),
        LatexTable::TotalRel => relative_total_rows(data),
        LatexTable::Initialization => single_plane_rows(data, Metric::Initialization),
        LatexTable::Intersection => single_plane_rows(data, Metric::Intersection),
        LatexTable::Volume => single_plane_rows(data, Metric::Volume),
        LatexTable::MultiplePlane => multiple_plane_blocks(data),
    }
}

/// Full contents of [`LATEX_FILE`]: every fragment preceded by its section
/// line.
///
/// # Errors
///
/// See [`render_table`].
pub fn render(data: &TimingData) -> Result<String> {
    let mut out = String::new();
    for table in LatexTable::ALL {
        out.push_str(&format!("\n\nCreating table for {}\n", table.name()));
        for entry in render_table(data, table)? {
            out.push_str(&entry);
            out.push('\n');
        }
    }
    Ok(out)
}

/// Write rendered fragments to `path`, overwriting it.
///
/// # Errors
///
/// Returns [`TimingError::Io`] if the file cannot be written.
pub fn write(rendered: &str, path: &Path) -> Result<()> {
    std::fs::write(path, rendered).map_err(|e| TimingError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::testutil::sample_files;

    /// Text of one section of the rendered file.
    fn section<'a>(text: &'a str, name: &str) -> &'a str {
        let marker = format!("Creating table for {name}\n");
        let start = text.find(&marker).unwrap() + marker.len();
        let end = text[start..].find("\n\nCreating table for ").map_or(text.len(), |i| start + i);
        &text[start..end]
    }

    #[test]
    fn sections_appear_in_order() {
        let data = aggregate(&sample_files(2)).unwrap();
        let text = render(&data).unwrap();

        let positions: Vec<usize> = LatexTable::ALL
            .iter()
            .map(|t| text.find(&format!("Creating table for {}\n", t.name())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.starts_with("\n\nCreating table for total\n"));
    }

    #[test]
    fn total_row_format() {
        let data = aggregate(&sample_files(1)).unwrap();
        let rows = render_table(&data, LatexTable::Total).unwrap();
        assert_eq!(rows.len(), 8);

        let expected = format!(
            "Prism & {:8.3} & {:8.3} & {:8.3}\\\\ \\hline",
            data.time(Metric::Total, Tool::Irl, Case::Prism, 1).unwrap(),
            data.time(Metric::Total, Tool::R3d, Case::Prism, 1).unwrap(),
            data.time(Metric::Total, Tool::Voftools, Case::Prism, 1).unwrap(),
        );
        assert_eq!(rows[0], expected);
    }

    #[test]
    fn relative_total_starts_with_unit_baseline() {
        let data = aggregate(&sample_files(1)).unwrap();
        let rows = render_table(&data, LatexTable::TotalRel).unwrap();
        assert!(rows[1].starts_with("Unit Cube &       1.00 & "));
        assert!(rows.iter().all(|r| r.ends_with("\\\\ \\hline")));
    }

    #[test]
    fn multiple_plane_block_for_unit_cube() {
        let data = aggregate(&sample_files(3)).unwrap();
        let text = render(&data).unwrap();
        let block = section(&text, "multiple_plane");

        assert!(!block.contains("Prism"));

        let cube: Vec<&str> = block
            .lines()
            .skip_while(|l| !l.contains("{Unit Cube}"))
            .take_while(|l| !l.contains("{Triangulated Hexahedron}"))
            .collect();
        let data_rows = cube.iter().filter(|l| l.ends_with("\\\\ ")).count();
        let rules = cube.iter().filter(|l| **l == "\\hline").count();
        assert_eq!(data_rows, 3);
        assert_eq!(rules, 1);
        assert!(cube[0].starts_with("\\multirow{3}{*}{Unit Cube} & 1  & "));
        assert!(cube[2].starts_with(" & 3 & "));
        assert_eq!(cube[3], "\\hline");
    }

    #[test]
    fn multiple_plane_lists_only_designated_cases() {
        let data = aggregate(&sample_files(2)).unwrap();
        let blocks = render_table(&data, LatexTable::MultiplePlane).unwrap();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].contains("{Unit Cube}"));
        assert!(blocks[1].contains("{Triangulated Hexahedron}"));
        assert!(blocks[2].contains("{Symmetric Hexahedron}"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let data = aggregate(&sample_files(2)).unwrap();
        assert_eq!(render(&data).unwrap(), render(&data).unwrap());
    }
}
