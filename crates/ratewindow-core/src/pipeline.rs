//! Sequencer → fetcher → aggregator, returning the output the caller asked for.

use std::sync::Arc;

use serde::Serialize;
use time::Date;

use crate::aggregator::{self, Aggregation};
use crate::config::RunConfig;
use crate::domain::DayRecord;
use crate::error::PipelineError;
use crate::fetcher::Fetcher;
use crate::http_client::HttpClient;
use crate::sequencer;

/// Rendered table text or structured per-day records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PipelineOutput {
    Table(String),
    Records(Vec<DayRecord>),
}

impl PipelineOutput {
    fn select(aggregation: Aggregation, table: bool) -> Self {
        if table {
            Self::Table(aggregation.table)
        } else {
            Self::Records(aggregation.records)
        }
    }
}

/// Run for the window ending today.
pub async fn run(
    config: &RunConfig,
    client: Arc<dyn HttpClient>,
) -> Result<PipelineOutput, PipelineError> {
    run_at(config, client, sequencer::today()).await
}

/// Run for the window ending at `today`.
pub async fn run_at(
    config: &RunConfig,
    client: Arc<dyn HttpClient>,
    today: Date,
) -> Result<PipelineOutput, PipelineError> {
    let targets = sequencer::generate_from(config.days, &config.host, today);
    let fetcher = Fetcher::new(client).with_timeout_ms(config.timeout_ms);
    let aggregation =
        aggregator::aggregate(&fetcher, &targets, &config.selection, config.mode).await?;
    Ok(PipelineOutput::select(aggregation, config.table))
}
