//! Run configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! `timing-comp.toml`, and command-line flags.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use timing_report::Tool;
use timing_report::latex::LATEX_FILE;

use crate::cli::Cli;
use crate::verbose::vprintln;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "timing-comp.toml";

/// Default results directory, relative to the working directory.
pub const RESULTS_DIR: &str = "results";

/// Top-level layout of `timing-comp.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[inputs]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputsConfig {
    pub dir: Option<PathBuf>,
    pub irl: Option<String>,
    pub r3d: Option<String>,
    pub voftools: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(rename = "results-dir")]
    pub results_dir: Option<PathBuf>,
    #[serde(rename = "latex-file")]
    pub latex_file: Option<String>,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub input_dir: PathBuf,
    pub file_names: BTreeMap<Tool, String>,
    pub results_dir: PathBuf,
    pub latex_file: String,
}

impl ResolvedConfig {
    /// Timing file name of `tool` inside [`Self::input_dir`].
    pub fn file_name(&self, tool: Tool) -> String {
        self.file_names
            .get(&tool)
            .cloned()
            .unwrap_or_else(|| tool.default_file_name())
    }

    /// Path of the LaTeX fragment file.
    pub fn latex_path(&self) -> PathBuf {
        self.results_dir.join(&self.latex_file)
    }
}

/// Parse a configuration file.
pub fn load_file(path: &Path) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load the configuration file (if any) and apply command-line overrides.
///
/// An explicit `--config` must exist; the implicit [`CONFIG_FILE`] is skipped
/// when absent.
pub fn load(cli: &Cli) -> Result<ResolvedConfig> {
    let file = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            vprintln!("Loading {}...", path.display());
            load_file(path)?
        }
        None if Path::new(CONFIG_FILE).exists() => {
            vprintln!("Loading {CONFIG_FILE}...");
            load_file(Path::new(CONFIG_FILE))?
        }
        None => FileConfig::default(),
    };
    resolve(file, cli)
}

/// Merge a parsed file with command-line overrides and defaults.
pub fn resolve(file: FileConfig, cli: &Cli) -> Result<ResolvedConfig> {
    let InputsConfig {
        dir,
        irl,
        r3d,
        voftools,
    } = file.inputs;

    let mut file_names = BTreeMap::new();
    for (tool, name) in [(Tool::Irl, irl), (Tool::R3d, r3d), (Tool::Voftools, voftools)] {
        let name = name.unwrap_or_else(|| tool.default_file_name());
        if name.trim().is_empty() {
            bail!("timing file name for {tool} is empty");
        }
        file_names.insert(tool, name);
    }

    let latex_file = file
        .output
        .latex_file
        .unwrap_or_else(|| LATEX_FILE.to_string());
    if latex_file.trim().is_empty() {
        bail!("output.latex-file is empty");
    }

    Ok(ResolvedConfig {
        input_dir: cli
            .input_dir
            .clone()
            .or(dir)
            .unwrap_or_else(|| PathBuf::from(".")),
        file_names,
        results_dir: cli
            .results_dir
            .clone()
            .or(file.output.results_dir)
            .unwrap_or_else(|| PathBuf::from(RESULTS_DIR)),
        latex_file,
    })
}

/// Print the resolved configuration (verbose mode).
pub fn print_resolved(config: &ResolvedConfig) {
    vprintln!("Input directory: {}", config.input_dir.display());
    for (tool, name) in &config.file_names {
        vprintln!("  {tool}: {name}");
    }
    vprintln!("Results directory: {}", config.results_dir.display());
    vprintln!("  latex: {}", config.latex_file);
}
