use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use workbench_sample::cli::Cli;
use workbench_sample::formatting::{ColoredFormatter, FormattingConfig};
use workbench_sample::observability::init_logging;
use workbench_sample::{create_writer, load_config, DemoReport, SampleError};

// Main orchestrator function
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())
        .context("Failed to load sample configuration")?
        .with_terms(cli.terms);
    tracing::info!(?config, "running sample");

    // Build everything before writing so a bad argument prints nothing
    let report = DemoReport::build(&config).context("Failed to run sample")?;

    let formatter = ColoredFormatter::new(FormattingConfig::from_env_with(cli.color));
    let stdout = std::io::stdout();
    create_writer(cli.format, stdout.lock(), Box::new(formatter))
        .write_report(&report)
        .context("Failed to write sample output")?;

    Ok(())
}

// Side effect handler: bad input gets a one-line message, anything else the full chain
fn report_failure(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<SampleError>() {
        Some(sample_err) if sample_err.is_user_fixable() => {
            eprintln!("error: {err:#}");
            ExitCode::from(sample_err.exit_code())
        }
        Some(sample_err) => {
            eprintln!("error: {err:?}");
            ExitCode::from(sample_err.exit_code())
        }
        None => {
            eprintln!("error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
