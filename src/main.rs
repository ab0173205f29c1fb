use anyhow::{Context, Result};
use capitals::error::QueryError;
use capitals::{geo, load_dataset, logging, query, shell, Dataset, LoadPolicy};
use clap::{Parser, Subcommand};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "capitals")]
#[command(about = "Look up world capitals and the great-circle distances between them.", long_about = None)]
struct Cli {
    /// Path to the capitals file (Country,Capital,Lat,Lon,Code,Continent per line)
    #[arg(short, long, global = true, default_value_t = String::from("capitale.txt"))]
    data: String,

    /// Fail on the first malformed line instead of skipping it
    #[arg(long, global = true, default_value_t = false)]
    strict: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Distance between two capitals
    Distance { first: String, second: String },
    /// Closest other capital
    Nearest { capital: String },
    /// Countries and capitals on a continent (case-insensitive)
    Continent { continent: String },
    /// Capital of a country
    Capital { country: String },
    /// Decimal degrees to degrees, minutes, seconds
    #[command(allow_negative_numbers = true)]
    ToDms {
        degrees: f64,
    },
    /// Degrees, minutes, seconds to decimal degrees
    #[command(allow_negative_numbers = true)]
    ToDd {
        degrees: f64,
        minutes: f64,
        seconds: f64,
    },
    /// Interactive menu
    Menu,
}

fn load(cli: &Cli) -> Result<Dataset> {
    let policy = if cli.strict { LoadPolicy::Strict } else { LoadPolicy::Skip };
    load_dataset(&cli.data, policy).with_context(|| format!("loading {}", &cli.data))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match &cli.command {
        Command::ToDms { degrees } => {
            let (d, m, s) = geo::decimal_degrees_to_dms(*degrees);
            println!("{}° {}' {:.4}\"", d, m, s);
        }
        Command::ToDd { degrees, minutes, seconds } => {
            println!("{:.6}", geo::dms_to_decimal_degrees(*degrees, *minutes, *seconds));
        }
        Command::Distance { first, second } => {
            let dataset = load(&cli)?;
            match query::distance_between_capitals(&dataset, first, second) {
                Ok(d) => println!("Distance between {} and {}: {:.2} kilometers", first, second, d),
                Err(e) => println!("One or both of the specified cities are not present in the data ({}).", e),
            }
        }
        Command::Nearest { capital } => {
            let dataset = load(&cli)?;
            match query::nearest_capital(&dataset, capital) {
                Ok(nearest) => println!(
                    "The closest capital to {} is {} at a distance of {} kilometers.",
                    capital,
                    nearest.capital_name(),
                    nearest.distance
                ),
                Err(QueryError::CapitalNotFound(_)) => println!("The specified city is not in the data."),
                Err(e @ QueryError::NoCandidate(_)) => println!("{}", e),
            }
        }
        Command::Continent { continent } => {
            let dataset = load(&cli)?;
            let matches = query::filter_by_continent(&dataset, continent);
            if matches.is_empty() {
                println!("No entries found for {}.", continent);
            } else {
                println!("Matching entries in {}:", continent);
                for r in matches {
                    println!("Country: {}, Capital: {}", r.country_name, r.capital_name);
                }
            }
        }
        Command::Capital { country } => {
            let dataset = load(&cli)?;
            match query::capital_of_country(&dataset, country) {
                Some(capital) => println!("The capital of {} is {}.", country, capital),
                None => println!("Country {} not found in the data.", country),
            }
        }
        Command::Menu => {
            let dataset = load(&cli)?;
            let stdin = io::stdin();
            shell::run_menu(&dataset, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
