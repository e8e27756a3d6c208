//! Command-line interface definitions for timing-comp.

use std::path::PathBuf;

use clap::Parser;

/// Compare irl, r3d and voftools intersection timings.
///
/// With no arguments, reads `irl_timing.txt`, `r3d_timing.txt` and
/// `voftools_timing.txt` from the working directory and writes tables to
/// `./results`.
#[derive(Parser)]
#[command(name = "timing-comp", version, about)]
pub struct Cli {
    /// TOML configuration file (default: timing-comp.toml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing the three timing files.
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving the per-case tables and LaTeX fragments.
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// Do not print tables; show only errors and the final summary.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print phase timings and every written file.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
