//! Reading timing files from disk.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, TimingError};
use crate::model::Tool;

/// Line sequences of every tool's timing file.
pub type ToolLines = BTreeMap<Tool, Vec<String>>;

/// Read `path` into its lines, terminators stripped.
///
/// # Errors
///
/// Returns [`TimingError::Io`] if the file cannot be read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| TimingError::io(path, e))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Read the timing file of every tool from `dir`.
///
/// `file_name` maps a tool to its file name inside `dir`. Files are read in
/// [`Tool::ALL`] order and the first failure aborts.
///
/// # Errors
///
/// Returns [`TimingError::Io`] for the first file that cannot be read.
pub fn read_tool_files<F>(dir: &Path, file_name: F) -> Result<ToolLines>
where
    F: Fn(Tool) -> String,
{
    let mut files = ToolLines::new();
    for tool in Tool::ALL {
        let path = dir.join(file_name(tool));
        files.insert(tool, read_lines(&path)?);
    }
    Ok(files)
}
