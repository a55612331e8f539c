//! Exchange rates and currency metadata from the Wise API.
//!
//! User input flows through [`dates::parse_date`] and the builders in [`params`], the
//! [`ApiClient`] performs the request, and [`format`] renders the result as text.

pub mod cli;
pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod format;
pub mod interactive;
pub mod model;
pub mod params;

pub use cli::{Cli, Command};
pub use client::{ApiClient, HttpTransport, Transport};
pub use config::Config;
pub use error::{Error, Result};
pub use interactive::Session;
pub use model::{Currency, Granularity, HistoricalRangeQuery, RateQuery, RateRecord};
