//! CLI argument definitions for ratewindow.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `<DAYS>` | required | Number of past days, 1 to 10, today included |
//! | `-t` | `false` | Render the comparison table instead of JSON records |
//! | `-c`, `--curr` | `USD EUR` | Currency codes to keep, added to `USD EUR` |
//! | `--host` | public endpoint | Base URL the date is appended to |
//! | `--timeout-ms` | none | Per-request deadline |
//! | `--verify-tls` | `false` | Verify server certificates |
//! | `--legacy` | `false` | Rebuild-from-scratch aggregation |
//! | `--pretty` | `false` | Pretty-print JSON records |
//!
//! # Examples
//!
//! ```bash
//! ratewindow 3
//! ratewindow 5 -t -c USD, CHF, PLN
//! ratewindow 2 --curr gbp --curr EUR --pretty
//! ```

use clap::{ArgAction, Parser};

use ratewindow_core::{
    normalize_token, AggregationMode, CurrencySelection, RunConfig, DEFAULT_HOST, MAX_DAYS,
    MIN_DAYS,
};

/// Currency exchange rates for the past days (national vs. commercial rate).
#[derive(Debug, Parser)]
#[command(name = "ratewindow", author, version, about)]
pub struct Cli {
    /// Number of past days to show, today included.
    #[arg(value_parser = clap::value_parser!(i64).range(MIN_DAYS..=MAX_DAYS))]
    pub days: i64,

    /// Render the result as a comparison table.
    #[arg(short = 't', default_value_t = false)]
    pub table: bool,

    /// Currency codes to show in addition to USD and EUR.
    ///
    /// Surrounding punctuation is stripped, so `-c USD, EUR` works. Codes are
    /// matched exactly as the source spells them, which is uppercase.
    #[arg(
        short = 'c',
        long = "curr",
        num_args = 1..,
        action = ArgAction::Append,
        value_parser = parse_currency_token
    )]
    pub curr: Vec<String>,

    /// Base URL the `DD.MM.YYYY` date is appended to.
    #[arg(long, env = "RATEWINDOW_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Give up on a request after this many milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Verify TLS certificates (off by default).
    #[arg(long, default_value_t = false)]
    pub verify_tls: bool,

    /// Rebuild records and table from the first day on every fetch.
    ///
    /// Fails on the first day without data instead of skipping it.
    #[arg(long, default_value_t = false)]
    pub legacy: bool,

    /// Pretty-print JSON records.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

fn parse_currency_token(raw: &str) -> Result<String, String> {
    Ok(normalize_token(raw))
}

impl Cli {
    pub fn selection(&self) -> CurrencySelection {
        CurrencySelection::default().with_tokens(&self.curr)
    }

    pub fn to_config(&self) -> RunConfig {
        let mode = if self.legacy {
            AggregationMode::Legacy
        } else {
            AggregationMode::Incremental
        };

        RunConfig::new(self.days)
            .with_table(self.table)
            .with_selection(self.selection())
            .with_host(self.host.clone())
            .with_timeout_ms(self.timeout_ms)
            .with_accept_invalid_certs(!self.verify_tls)
            .with_mode(mode)
    }
}
