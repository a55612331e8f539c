use std::io::{self, Write};

use clap::{Parser, Subcommand};

use crate::client::{ApiClient, Transport};
use crate::dates::parse_date;
use crate::format::{format_currencies, format_rate, format_rates};
use crate::model::{Granularity, HistoricalRangeQuery, RateQuery, currency_code};
use crate::params::DEFAULT_LIMIT;

/// Get exchange rates and currency information from the Wise API.
///
/// Run without a command for an interactive menu. The API token is read from `WISE_API_TOKEN`
/// (a `.env` file is honoured).
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Get exchange rate between two currencies
    Rate {
        /// Source currency code (e.g., USD)
        source: String,
        /// Target currency code (e.g., EUR)
        target: String,
        /// Date for historical rate (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Get multiple exchange rates
    Rates {
        /// Source currency code (e.g., USD)
        #[arg(short, long)]
        source: Option<String>,
        /// Target currency code (e.g., EUR)
        #[arg(short, long)]
        target: Option<String>,
        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// Get historical exchange rates
    History {
        /// Source currency code (e.g., USD)
        source: String,
        /// Target currency code (e.g., EUR)
        target: String,
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,
        /// End date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        end: Option<String>,
        /// Interval between observations
        #[arg(short, long, value_enum, default_value_t)]
        group: Granularity,
    },
    /// List all available currencies
    Currencies,
}

/// Run one command, writing its output to `out`.
///
/// Bad dates and failed requests are reported in the output; only I/O errors on `out` escape.
pub fn run<T: Transport>(
    command: &Command,
    client: &ApiClient<T>,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        Command::Rate {
            source,
            target,
            date,
        } => {
            let at = match parse_date(date.as_deref().unwrap_or_default()) {
                Ok(at) => at,
                Err(e) => return writeln!(out, "Error: {e}"),
            };
            let query = RateQuery {
                source: currency_code(source),
                target: currency_code(target),
                at,
            };
            writeln!(out, "{}", format_rate(client.spot_rate(&query).as_ref()))
        }
        Command::Rates {
            source,
            target,
            limit,
        } => {
            let source = source.as_deref().map(currency_code).filter(|c| !c.is_empty());
            let target = target.as_deref().map(currency_code).filter(|c| !c.is_empty());
            let title = match (&source, &target) {
                (Some(s), _) => format!("Exchange rates from {s}"),
                (None, Some(t)) => format!("Exchange rates to {t}"),
                (None, None) => {
                    return writeln!(
                        out,
                        "Error: Either source or target currency must be specified."
                    );
                }
            };
            let rates = client.rates(source.as_deref(), target.as_deref(), *limit);
            writeln!(out, "{}", format_rates(&rates, Some(&title)))
        }
        Command::History {
            source,
            target,
            start,
            end,
            group,
        } => {
            let dates = parse_date(start).and_then(|from| {
                Ok((from, parse_date(end.as_deref().unwrap_or_default())?))
            });
            let (from, to) = match dates {
                Ok((Some(from), to)) => (from, to),
                Ok((None, _)) => return writeln!(out, "Error: A start date is required."),
                Err(e) => return writeln!(out, "Error: {e}"),
            };
            let query = HistoricalRangeQuery {
                source: currency_code(source),
                target: currency_code(target),
                from,
                to,
                granularity: *group,
            };
            let rates = client.history(&query);
            let title = format!("Historical {}/{} rates", query.source, query.target);
            writeln!(out, "{}", format_rates(&rates, Some(&title)))
        }
        Command::Currencies => writeln!(out, "{}", format_currencies(&client.currencies())),
    }
}
