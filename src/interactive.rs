//! Numbered menu driven from standard input.
//!
//! Each choice is one request. A bad date or failed request prints a message and returns to the
//! menu; end of input behaves like "Exit".

use std::io::{self, BufRead, Write};

use crate::client::{ApiClient, Transport};
use crate::dates::parse_date;
use crate::format::{format_currencies, format_rate, format_rates};
use crate::model::{Granularity, HistoricalRangeQuery, RateQuery, currency_code};
use crate::params::DEFAULT_LIMIT;

const MENU: &str = "\nChoose an option:
1. Get exchange rate between two currencies
2. Get multiple rates for a source currency
3. Get multiple rates for a target currency
4. Get historical rates between dates
5. List all available currencies
6. Exit";

pub struct Session<'a, T, R, W> {
    client: &'a ApiClient<T>,
    input: R,
    out: W,
}

impl<'a, T: Transport, R: BufRead, W: Write> Session<'a, T, R, W> {
    pub fn new(client: &'a ApiClient<T>, input: R, out: W) -> Self {
        Session { client, input, out }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== Wise Currency Tool - Interactive Mode ===")?;

        loop {
            writeln!(self.out, "{MENU}")?;
            let Some(choice) = self.prompt("\nEnter your choice (1-6): ")? else {
                break;
            };
            let keep_going = match choice.as_str() {
                "1" => self.spot_rate()?,
                "2" => self.rates(true)?,
                "3" => self.rates(false)?,
                "4" => self.history()?,
                "5" => {
                    let text = format_currencies(&self.client.currencies());
                    writeln!(self.out, "{text}")?;
                    true
                }
                "6" => break,
                _ => {
                    writeln!(
                        self.out,
                        "\nInvalid choice. Please enter a number between 1 and 6."
                    )?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.out, "\nThank you for using the Wise Currency Tool!")
    }

    /// Print `text` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_currency(&mut self, role: &str, example: &str) -> io::Result<Option<String>> {
        Ok(self
            .prompt(&format!("Enter {role} currency code (e.g., {example}): "))?
            .map(|c| currency_code(&c)))
    }

    fn prompt_limit(&mut self) -> io::Result<Option<usize>> {
        Ok(self
            .prompt("Enter maximum number of results (default: 10): ")?
            .map(|s| s.parse().unwrap_or(DEFAULT_LIMIT)))
    }

    fn spot_rate(&mut self) -> io::Result<bool> {
        let Some(source) = self.prompt_currency("source", "USD")? else {
            return Ok(false);
        };
        let Some(target) = self.prompt_currency("target", "EUR")? else {
            return Ok(false);
        };
        let Some(date) = self.prompt("Enter date (optional, press Enter for current rate): ")?
        else {
            return Ok(false);
        };
        let at = match parse_date(&date) {
            Ok(at) => at,
            Err(e) => {
                writeln!(self.out, "Error: {e}")?;
                return Ok(true);
            }
        };

        let rate = self.client.spot_rate(&RateQuery { source, target, at });
        writeln!(self.out, "{}", format_rate(rate.as_ref()))?;
        Ok(true)
    }

    fn rates(&mut self, from_source: bool) -> io::Result<bool> {
        let currency = match from_source {
            true => self.prompt_currency("source", "USD")?,
            false => self.prompt_currency("target", "EUR")?,
        };
        let Some(currency) = currency else {
            return Ok(false);
        };
        let Some(limit) = self.prompt_limit()? else {
            return Ok(false);
        };

        let (rates, title) = match from_source {
            true => (
                self.client.rates(Some(&currency), None, limit),
                format!("Exchange rates from {currency}"),
            ),
            false => (
                self.client.rates(None, Some(&currency), limit),
                format!("Exchange rates to {currency}"),
            ),
        };
        writeln!(self.out, "{}", format_rates(&rates, Some(&title)))?;
        Ok(true)
    }

    fn history(&mut self) -> io::Result<bool> {
        let Some(source) = self.prompt_currency("source", "USD")? else {
            return Ok(false);
        };
        let Some(target) = self.prompt_currency("target", "EUR")? else {
            return Ok(false);
        };
        let Some(start) = self.prompt("Enter start date (YYYY-MM-DD): ")? else {
            return Ok(false);
        };
        let from = match parse_date(&start) {
            Ok(Some(from)) => from,
            Ok(None) => {
                writeln!(self.out, "Error: A start date is required.")?;
                return Ok(true);
            }
            Err(e) => {
                writeln!(self.out, "Error: {e}")?;
                return Ok(true);
            }
        };
        let Some(end) = self.prompt("Enter end date (optional, press Enter for today): ")? else {
            return Ok(false);
        };
        let to = match parse_date(&end) {
            Ok(to) => to,
            Err(e) => {
                writeln!(self.out, "Error: {e}")?;
                return Ok(true);
            }
        };

        let query = HistoricalRangeQuery {
            source,
            target,
            from,
            to,
            granularity: Granularity::Day,
        };
        let rates = self.client.history(&query);
        let title = format!("Historical {}/{} rates", query.source, query.target);
        writeln!(self.out, "{}", format_rates(&rates, Some(&title)))?;
        Ok(true)
    }
}
