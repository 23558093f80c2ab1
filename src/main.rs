use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use csv2yaml::{pipeline, selftest, ReportConfig};
use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "csv2yaml",
    about = "Validate a CSV of scored records and print the top three",
    disable_version_flag = true
)]
struct Cli {
    /// Displays author and version, then terminates program
    #[arg(short, long)]
    version: bool,

    /// Runs the built-in self-test suite
    #[arg(short, long)]
    tests: bool,

    /// Runs the report on this file
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Field delimiter of the input file
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
}

impl Cli {
    fn config(&self) -> Result<ReportConfig> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter {:?} must be a single ASCII character", self.delimiter);
        }
        Ok(ReportConfig::default().with_delimiter(self.delimiter as u8))
    }
}

fn main() -> Result<ExitCode> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!(
            "Author(s): {}, Version: {}",
            env!("CARGO_PKG_AUTHORS"),
            env!("CARGO_PKG_VERSION")
        );
        return Ok(ExitCode::SUCCESS);
    }

    if !cli.tests && cli.file.is_none() {
        println!("No arguments provided! Try:");
        Cli::command().print_help().context("printing usage")?;
        println!();
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.config()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut ok = true;

    if cli.tests {
        let summary = selftest::run_all(&mut out).context("running self-tests")?;
        ok &= summary.success();
    }

    if let Some(file) = &cli.file {
        info!(file = %file.display(), "running report");
        ok &= pipeline::run_with(file, &config, &mut out);
    }

    out.flush().context("flushing stdout")?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
