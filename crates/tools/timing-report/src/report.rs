//! Console and results-directory sinks for the rendered tables.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, TimingError};
use crate::model::{Case, Metric};
use crate::table::CaseTables;

const RULE_TOP: usize = 69;
const RULE_BOTTOM: usize = 68;

/// Section banner printed above the tables of `case`.
#[must_use]
pub fn case_banner(case: Case) -> String {
    format!(
        "\n\n{}\nTime comparison for Random Planes Intersecting a {case}\n{}\n",
        "*".repeat(RULE_TOP),
        "*".repeat(RULE_BOTTOM),
    )
}

/// Name of the results file holding `metric` for `case`.
#[must_use]
pub fn result_file_name(case: Case, metric: Metric) -> String {
    format!("{}_{}.txt", case.file_stem(), metric.id())
}

/// Write every case banner and its four tables to `out`.
///
/// Each block is followed by a newline, so tables are separated by a blank
/// line.
///
/// # Errors
///
/// Returns [`TimingError::Io`] if writing to `out` fails.
pub fn write_console<W: Write>(report: &[CaseTables], out: &mut W) -> Result<()> {
    let io_err = |e: std::io::Error| TimingError::io("<stdout>", e);
    for tables in report {
        writeln!(out, "{}", case_banner(tables.case)).map_err(io_err)?;
        for metric in Metric::ALL {
            writeln!(out, "{}", tables.table(metric)).map_err(io_err)?;
        }
    }
    out.flush().map_err(io_err)
}

/// Write each table to its own file under `dir`, creating `dir` if needed.
///
/// Existing files are overwritten. Returns the written paths in case and
/// metric order.
///
/// # Errors
///
/// Returns [`TimingError::Io`] if the directory or a file cannot be written.
pub fn write_results(report: &[CaseTables], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| TimingError::io(dir, e))?;

    let mut written = Vec::with_capacity(report.len() * Metric::ALL.len());
    for tables in report {
        for metric in Metric::ALL {
            let path = dir.join(result_file_name(tables.case, metric));
            std::fs::write(&path, tables.table(metric)).map_err(|e| TimingError::io(&path, e))?;
            written.push(path);
        }
    }
    Ok(written)
}
