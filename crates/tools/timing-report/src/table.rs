//! Fixed-width plain-text comparison tables.
//!
//! One table per case and metric: a plane-count column followed by an
//! absolute time and a ratio-to-baseline column for every tool.

use crate::aggregate::TimingData;
use crate::error::Result;
use crate::model::{Case, Metric, Tool};

/// Width of the plane-count header cell.
pub const PLANE_HEADER_WIDTH: usize = 11;
/// Width of the plane-count cell in data rows.
pub const PLANE_CELL_WIDTH: usize = 9;
/// Width of every time/ratio header cell.
pub const COLUMN_WIDTH: usize = 16;
/// Width of a formatted time/ratio value; one separating space follows it.
pub const VALUE_WIDTH: usize = 15;
/// Fractional digits of every time/ratio value.
pub const VALUE_PRECISION: usize = 4;

/// The rendered tables of one case, indexed by [`Metric::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTables {
    /// Case the tables describe.
    pub case: Case,
    /// Table text per metric.
    pub tables: [String; 4],
}

impl CaseTables {
    /// Table text for `metric`.
    #[must_use]
    pub fn table(&self, metric: Metric) -> &str {
        &self.tables[metric.index()]
    }
}

/// Header row naming every column.
#[must_use]
pub fn header_row() -> String {
    let mut row = center("NPlane", PLANE_HEADER_WIDTH);
    for tool in Tool::ALL {
        row.push_str(&center(tool.label(), COLUMN_WIDTH));
        row.push_str(&center(
            &format!("{}/{}", tool.label(), Tool::BASELINE.label()),
            COLUMN_WIDTH,
        ));
    }
    row
}

/// Data rows for plane counts `1..=max_planes`, each terminated by a newline.
///
/// # Errors
///
/// Fails if a baseline time is zero or an entry is missing.
pub fn data_rows(data: &TimingData, metric: Metric, case: Case) -> Result<String> {
    let mut rows = String::new();
    for planes in data.planes() {
        rows.push_str(&format!("{:<width$}", planes, width = PLANE_CELL_WIDTH));
        for tool in Tool::ALL {
            let time = data.time(metric, tool, case, planes)?;
            let ratio = data.ratio(metric, tool, case, planes)?;
            rows.push_str(&format!("{:>width$} ", scientific(time), width = VALUE_WIDTH));
            rows.push_str(&format!("{:>width$} ", scientific(ratio), width = VALUE_WIDTH));
        }
        rows.push('\n');
    }
    Ok(rows)
}

/// Complete table: title line, header row and data rows.
///
/// # Errors
///
/// See [`data_rows`].
pub fn render_table(data: &TimingData, metric: Metric, case: Case) -> Result<String> {
    Ok(format!(
        "{}\n{}\n{}",
        metric.title(),
        header_row(),
        data_rows(data, metric, case)?
    ))
}

/// Render the tables of every case, in case order.
///
/// # Errors
///
/// See [`data_rows`].
pub fn render_all(data: &TimingData) -> Result<Vec<CaseTables>> {
    Case::ALL
        .iter()
        .map(|&case| {
            let mut tables: [String; 4] = Default::default();
            for metric in Metric::ALL {
                tables[metric.index()] = render_table(data, metric, case)?;
            }
            Ok(CaseTables { case, tables })
        })
        .collect()
}

/// Format `value` like C's `%.4E`: mantissa, `E`, sign, at least two
/// exponent digits.
#[must_use]
pub fn scientific(value: f64) -> String {
    if value.is_nan() {
        return "NAN".into();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-INF".into() } else { "INF".into() };
    }

    let raw = format!("{value:.prec$e}", prec = VALUE_PRECISION);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
}

/// Centre `text` in `width` columns.
///
/// When the padding is odd the extra space goes left if `width` is odd and
/// right otherwise.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}
