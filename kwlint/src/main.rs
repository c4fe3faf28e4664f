//! Main binary entry point for the `kwlint` call-site linter.

use anyhow::Result;
use clap::Parser;
use kwlint::analyzer::KwLint;
use kwlint::config::Config;
use kwlint::output::{print_json_report, print_report};
use std::path::PathBuf;

/// Command line interface configuration using `clap`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Paths to analyze (files or directories).
    /// When no paths are provided, defaults to the current directory.
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Skip test files (test_*.py, *_test.py, tests/ directories).
    #[arg(long)]
    skip_tests: bool,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,

    /// Exit non-zero when findings are present.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut total_findings = 0;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for path in &cli.paths {
        let config = Config::load_from_path(path);
        let mut analyzer = KwLint::default().with_config(config);
        if cli.skip_tests {
            analyzer = analyzer.with_tests(false);
        }

        let result = analyzer.analyze(path);
        total_findings += result.findings.len();
        if cli.json {
            print_json_report(&mut out, &result)?;
        } else {
            print_report(&mut out, &result)?;
        }
    }

    if cli.strict && total_findings > 0 {
        std::process::exit(1);
    }
    Ok(())
}
