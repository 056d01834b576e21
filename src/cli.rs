use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "workbench-sample")]
#[command(about = "Sample program shipped with the workbench code editor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file overriding the sample parameters
    #[arg(short, long, env = "WORKBENCH_SAMPLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of Fibonacci terms to print (overrides the config file)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub terms: Option<i64>,

    /// When to color the palette swatches
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
