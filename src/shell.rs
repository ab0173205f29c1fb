//! Numbered menu over the query functions, driven by any line source.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::error::QueryError;
use crate::query;
use crate::record::Dataset;

const MENU: &str = "\nMenu:
1. Calculate distance between two capitals
2. Find closest capital to another one
3. Search for countries or capitals by continent
4. Find the capital of a country
5. Quit";

/// Runs the menu until the user picks 5 or input runs out.
pub fn run_menu<R: BufRead, W: Write>(dataset: &Dataset, mut input: R, mut output: W) -> Result<()> {
    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, &mut output, "Enter your choice (1/2/3/4/5): ")? else {
            break;
        };
        tracing::debug!(%choice, "menu choice");

        match choice.as_str() {
            "1" => {
                let Some(first) = prompt(&mut input, &mut output, "Enter the name of the first capital: ")? else {
                    break;
                };
                let Some(second) = prompt(&mut input, &mut output, "Enter the name of the second capital: ")? else {
                    break;
                };
                match query::distance_between_capitals(dataset, &first, &second) {
                    Ok(d) => writeln!(output, "Distance between {} and {}: {:.2} kilometers", first, second, d)?,
                    Err(_) => writeln!(output, "One or both of the specified cities are not present in the data.")?,
                }
            }
            "2" => {
                let Some(name) = prompt(&mut input, &mut output, "Enter the name of the capital: ")? else {
                    break;
                };
                match query::nearest_capital(dataset, &name) {
                    Ok(nearest) => writeln!(
                        output,
                        "The closest capital to {} is {} at a distance of {} kilometers.",
                        name,
                        nearest.capital_name(),
                        nearest.distance
                    )?,
                    Err(QueryError::CapitalNotFound(_)) => writeln!(output, "The specified city is not in the data.")?,
                    Err(QueryError::NoCandidate(_)) => writeln!(output, "There is no other capital to compare {} against.", name)?,
                }
            }
            "3" => {
                let Some(continent) = prompt(&mut input, &mut output, "Enter the name of the continent: ")? else {
                    break;
                };
                let matches = query::filter_by_continent(dataset, &continent);
                if matches.is_empty() {
                    writeln!(output, "No entries found for {}.", continent)?;
                } else {
                    writeln!(output, "Matching entries in {}:", continent)?;
                    for r in matches {
                        writeln!(output, "Country: {}, Capital: {}", r.country_name, r.capital_name)?;
                    }
                }
            }
            "4" => {
                let Some(country) = prompt(&mut input, &mut output, "Enter the name of the country: ")? else {
                    break;
                };
                match query::capital_of_country(dataset, &country) {
                    Some(capital) => writeln!(output, "The capital of {} is {}.", country, capital)?,
                    None => writeln!(output, "Country {} not found in the data.", country)?,
                }
            }
            "5" => {
                writeln!(output, "Exiting the program. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please enter a valid option (1/2/3/4/5).")?,
        }
    }
    writeln!(output)?;
    Ok(())
}

/// Prints `message` and reads one line, without its line ending. `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
