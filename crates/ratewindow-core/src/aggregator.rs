//! Per-day filtering and accumulation of records and table text.
//!
//! Two accumulation strategies produce the same output for complete data:
//!
//! - [`AggregationMode::Incremental`] appends each day once. A day without a
//!   payload contributes no record and an empty table section (footer only).
//! - [`AggregationMode::Legacy`] rebuilds every record and row from the first
//!   day each time a day is added, and fails with
//!   [`AggregateError::AbsentPayload`] as soon as a day has no payload.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{CurrencySelection, DayRecord, RawDayPayload};
use crate::error::{AggregateError, PipelineError};
use crate::fetcher::Fetcher;
use crate::render;
use crate::sequencer::RequestTarget;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    #[default]
    Incremental,
    Legacy,
}

/// One target together with whatever the fetcher returned for it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedDay {
    pub target: RequestTarget,
    pub payload: Option<RawDayPayload>,
}

impl FetchedDay {
    pub fn new(target: RequestTarget, payload: Option<RawDayPayload>) -> Self {
        Self { target, payload }
    }
}

/// Final result of aggregating a window.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub records: Vec<DayRecord>,
    pub table: String,
}

/// Accumulates fetched days in target order.
#[derive(Debug)]
pub struct Accumulator<'a> {
    selection: &'a CurrencySelection,
    mode: AggregationMode,
    seen: usize,
    fetched: Vec<FetchedDay>,
    records: Vec<DayRecord>,
    rows: String,
}

impl<'a> Accumulator<'a> {
    pub fn new(selection: &'a CurrencySelection, mode: AggregationMode) -> Self {
        Self {
            selection,
            mode,
            seen: 0,
            fetched: Vec::new(),
            records: Vec::new(),
            rows: String::new(),
        }
    }

    pub fn push(&mut self, day: FetchedDay) -> Result<(), AggregateError> {
        self.seen += 1;
        match self.mode {
            AggregationMode::Incremental => {
                self.append(&day);
                Ok(())
            }
            AggregationMode::Legacy => {
                self.fetched.push(day);
                self.rebuild()
            }
        }
    }

    fn append(&mut self, day: &FetchedDay) {
        match &day.payload {
            Some(payload) => {
                let record = DayRecord::filtered(payload, self.selection);
                debug!(
                    "{}: kept {} of {} entries",
                    record.date,
                    record.entries.len(),
                    payload.exchange_rate.len()
                );
                render::push_rows(&mut self.rows, &record);
                self.records.push(record);
            }
            None => warn!("no data for {}, day left out of the records", day.target),
        }
        self.rows.push_str(&render::footer());
    }

    fn rebuild(&mut self) -> Result<(), AggregateError> {
        let mut records = Vec::with_capacity(self.fetched.len());
        let mut rows = String::new();
        for day in &self.fetched {
            let payload = day
                .payload
                .as_ref()
                .ok_or_else(|| AggregateError::AbsentPayload {
                    url: day.target.to_string(),
                })?;
            let record = DayRecord::filtered(payload, self.selection);
            render::push_rows(&mut rows, &record);
            rows.push_str(&render::footer());
            records.push(record);
        }
        self.records = records;
        self.rows = rows;
        Ok(())
    }

    /// Prefix the header to the accumulated rows.
    ///
    /// In legacy mode an empty window yields an empty table, header included.
    pub fn finish(self) -> Aggregation {
        let table = if self.mode == AggregationMode::Legacy && self.seen == 0 {
            String::new()
        } else {
            render::header() + &self.rows
        };
        Aggregation {
            records: self.records,
            table,
        }
    }
}

/// Aggregate days that were already fetched.
pub fn aggregate_fetched<I>(
    days: I,
    selection: &CurrencySelection,
    mode: AggregationMode,
) -> Result<Aggregation, AggregateError>
where
    I: IntoIterator<Item = FetchedDay>,
{
    let mut accumulator = Accumulator::new(selection, mode);
    for day in days {
        accumulator.push(day)?;
    }
    Ok(accumulator.finish())
}

/// Fetch each target in order and accumulate it before the next fetch starts.
pub async fn aggregate(
    fetcher: &Fetcher,
    targets: &[RequestTarget],
    selection: &CurrencySelection,
    mode: AggregationMode,
) -> Result<Aggregation, PipelineError> {
    let mut accumulator = Accumulator::new(selection, mode);
    for target in targets {
        let payload = fetcher.fetch(target).await?;
        accumulator.push(FetchedDay::new(target.clone(), payload))?;
    }
    Ok(accumulator.finish())
}
