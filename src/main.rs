//! srcount - count source lines under a directory tree.
//!
//! Usage:
//!   srcount                  Scan the current directory
//!   srcount [PATH]           Scan PATH
//!
//! Prints every recognized source file with its line count, indented by
//! directory depth, then a `total N files, M lines` summary.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use srcount_core::write_report;
use srcount_scan::{LineScanner, ScanConfig};

#[derive(Parser)]
#[command(
    name = "srcount",
    version,
    about = "Count lines of C, C++ and Python sources in a directory tree",
    long_about = "srcount walks a directory (20 levels deep at most), counts the lines of \
                  every .c/.h/.cpp/.cc/.cxx/.hpp/.ii/.ixx/.ipp/.txx/.tpp/.tpl/.py/.pyw/.pyx \
                  file, and prints a tree-shaped report with totals."
)]
struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(
        value_name = "TARGET_SCAN_DIR",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    targets: Vec<PathBuf>,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();

    let target = match cli.targets.as_slice() {
        [] => PathBuf::from("./"),
        [path] => path.clone(),
        _ => {
            eprintln!("usage: {} ${{target_scan_dir}}", program_name());
            return Ok(ExitCode::from(1));
        }
    };

    run_count(target)?;
    Ok(ExitCode::SUCCESS)
}

/// Scan a directory and print the report to stdout.
fn run_count(target: PathBuf) -> Result<()> {
    let config = ScanConfig::new(target);
    tracing::debug!(root = %config.root.display(), max_depth = config.max_depth, "starting scan");

    let scanner = LineScanner::with_warning_handler(|warning| {
        eprintln!("[WARNING] {}", warning.message);
    });
    let tree = scanner
        .scan(&config)
        .wrap_err_with(|| format!("Scan of {} failed", config.root.display()))?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_report(&tree.root, &mut out).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (quiet by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Name the binary was invoked as, for the usage line.
fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "srcount".to_string())
}
