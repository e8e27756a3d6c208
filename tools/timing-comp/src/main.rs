//! Plane intersection timing comparison.
//!
//! Reads the timing files written by the irl, r3d and voftools benchmark
//! drivers and produces comparison tables normalized against irl.
//!
//! Pipeline: read files → aggregate → render tables and LaTeX fragments →
//!           print to console → write results directory.
//!
//! Everything is rendered before anything is written, so a failure at any
//! stage leaves the results directory untouched.

mod cli;
mod config;
mod verbose;

use anyhow::{Context, Result};
use clap::Parser;

use timing_report::{aggregate, latex, reader, report, table};

use crate::config::ResolvedConfig;
use crate::verbose::{PhaseTimer, Verbosity, dprintln, vprintln};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    verbose::init(Verbosity::from_flags(cli.quiet, cli.verbose));

    let config = config::load(&cli)?;
    config::print_resolved(&config);

    run(&config)
}

/// Run the full pipeline once.
fn run(config: &ResolvedConfig) -> Result<()> {
    let files = {
        let _t = PhaseTimer::start("reading timing files");
        reader::read_tool_files(&config.input_dir, |tool| config.file_name(tool))
            .context("failed to read timing files")?
    };

    let data = {
        let _t = PhaseTimer::start("aggregation");
        aggregate(&files).context("failed to aggregate timing files")?
    };

    dprintln!("Number of cases: {}", data.trials());
    vprintln!("Max planes: {}", data.max_planes());

    let (tables, fragments) = {
        let _t = PhaseTimer::start("rendering");
        let tables = table::render_all(&data).context("failed to render tables")?;
        let fragments = latex::render(&data).context("failed to render LaTeX tables")?;
        (tables, fragments)
    };

    if !verbose::is_quiet() {
        let stdout = std::io::stdout();
        report::write_console(&tables, &mut stdout.lock())?;
    }

    let _t = PhaseTimer::start("writing results");
    let written = report::write_results(&tables, &config.results_dir)
        .context("failed to write result tables")?;
    for path in &written {
        vprintln!("  wrote {}", path.display());
    }

    let latex_path = config.latex_path();
    latex::write(&fragments, &latex_path).context("failed to write LaTeX tables")?;
    vprintln!("  wrote {}", latex_path.display());

    println!(
        "Wrote {} tables and {} to {}",
        written.len(),
        config.latex_file,
        config.results_dir.display()
    );
    Ok(())
}
