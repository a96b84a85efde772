use anyhow::Result;
use clap::Parser;
use primebase_cli::report::Format;
use primebase_cli::run::run_report;

#[derive(Parser, Debug)]
#[command(name = "primebase")]
#[command(about = "Report the largest prime-product radix fitting each fixed-width integer type")]
struct Cli {
    /// Output format: csv, table, or json. Anything unrecognized means table.
    format: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let format = Format::from_arg(cli.format.as_deref());
    log::debug!("rendering report as {:?}", format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_report(&mut out, format)?;

    Ok(())
}
