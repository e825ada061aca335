//! # Ratewindow Core
//!
//! Daily exchange-rate snapshots for a window of past days, filtered to a set of
//! currencies and returned either as per-day records or as a fixed-width table
//! comparing the national reference rate with the commercial rate.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`sequencer`] | One request URL per day, counting back from today |
//! | [`fetcher`] | Single GET per URL; failures resolve to "no data" |
//! | [`aggregator`] | Currency filtering and record/table accumulation |
//! | [`render`] | Table header, rows and footer |
//! | [`pipeline`] | Runs the above in order |
//! | [`config`] | Run configuration |
//! | [`domain`] | Payload, entry, selection and record types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`error`] | Error types |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use ratewindow_core::{pipeline, CurrencySelection, PipelineOutput, ReqwestHttpClient, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RunConfig::new(3)
//!         .with_table(true)
//!         .with_selection(CurrencySelection::new(["USD", "CHF"]));
//!     let client = ReqwestHttpClient::new(config.accept_invalid_certs)?;
//!
//!     if let PipelineOutput::Table(text) = pipeline::run(&config, Arc::new(client)).await? {
//!         print!("{text}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Policy
//!
//! - Connection failures and non-200 statuses are logged and the day is treated as
//!   having no data; the run continues.
//! - A 200 response that does not match the payload schema aborts the run with
//!   [`PayloadError`].
//! - In [`AggregationMode::Legacy`] a day with no data aborts the run with
//!   [`AggregateError::AbsentPayload`].

pub mod aggregator;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod pipeline;
pub mod render;
pub mod sequencer;

pub use aggregator::{aggregate, aggregate_fetched, Accumulator, Aggregation, AggregationMode, FetchedDay};

pub use config::{RunConfig, DEFAULT_HOST, MAX_DAYS, MIN_DAYS};

pub use domain::{
    is_known_currency, normalize_token, CurrencyRateEntry, CurrencySelection, DayRecord, Rate,
    RawDayPayload, DEFAULT_CURRENCIES, KNOWN_CURRENCIES,
};

pub use error::{AggregateError, PayloadError, PipelineError, ValidationError};

pub use fetcher::Fetcher;

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
    StaticHttpClient,
};

pub use pipeline::PipelineOutput;

pub use sequencer::{format_day, RequestTarget};
