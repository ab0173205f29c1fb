use anyhow::{Context, Result};
use capitals::{load_dataset, logging, shell, LoadPolicy};
use clap::Parser;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "capitals-menu")]
#[command(about = "Interactive menu over a capitals file.", long_about = None)]
struct Cli {
    /// Path to the capitals file (Country,Capital,Lat,Lon,Code,Continent per line)
    #[arg(short, long, default_value_t = String::from("capitale.txt"))]
    data: String,

    /// Fail on the first malformed line instead of skipping it
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let policy = if cli.strict { LoadPolicy::Strict } else { LoadPolicy::Skip };
    let dataset = load_dataset(&cli.data, policy).with_context(|| format!("loading {}", &cli.data))?;

    let stdin = io::stdin();
    shell::run_menu(&dataset, stdin.lock(), io::stdout())
}
