use serde::{Deserialize, Serialize};

use crate::aggregator::AggregationMode;
use crate::domain::CurrencySelection;
use crate::error::ValidationError;

pub const DEFAULT_HOST: &str = "https://api.privatbank.ua/p24api/exchange_rates?date=";
pub const MIN_DAYS: i64 = 1;
pub const MAX_DAYS: i64 = 10;

/// Everything a pipeline run needs, built once at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub days: i64,
    pub table: bool,
    pub selection: CurrencySelection,
    /// Prefix the `DD.MM.YYYY` date is appended to.
    pub host: String,
    pub timeout_ms: Option<u64>,
    pub accept_invalid_certs: bool,
    pub mode: AggregationMode,
}

impl RunConfig {
    pub fn new(days: i64) -> Self {
        Self {
            days,
            table: false,
            selection: CurrencySelection::default(),
            host: String::from(DEFAULT_HOST),
            timeout_ms: None,
            accept_invalid_certs: true,
            mode: AggregationMode::Incremental,
        }
    }

    pub fn with_table(mut self, table: bool) -> Self {
        self.table = table;
        self
    }

    pub fn with_selection(mut self, selection: CurrencySelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept_invalid_certs: bool) -> Self {
        self.accept_invalid_certs = accept_invalid_certs;
        self
    }

    pub fn with_mode(mut self, mode: AggregationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Checks the bounds the command line enforces.
    ///
    /// The pipeline itself does not call this: it clamps `days` below 1 and
    /// accepts an empty selection.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(ValidationError::DaysOutOfRange {
                value: self.days,
                min: MIN_DAYS,
                max: MAX_DAYS,
            });
        }
        if self.host.trim().is_empty() {
            return Err(ValidationError::EmptyHost);
        }
        if self.selection.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_endpoint() {
        let config = RunConfig::new(3);

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.selection, CurrencySelection::default());
        assert!(config.accept_invalid_certs);
        assert_eq!(config.timeout_ms, None);
        assert_eq!(config.mode, AggregationMode::Incremental);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_days_outside_window() {
        for days in [0, 11, -1] {
            let err = RunConfig::new(days).validate().expect_err("out of range");
            assert!(matches!(err, ValidationError::DaysOutOfRange { value, .. } if value == days));
        }
    }

    #[test]
    fn rejects_empty_selection_and_host() {
        let empty_selection = RunConfig::new(1).with_selection(CurrencySelection::empty());
        assert_eq!(empty_selection.validate(), Err(ValidationError::EmptySelection));

        let empty_host = RunConfig::new(1).with_host("  ");
        assert_eq!(empty_host.validate(), Err(ValidationError::EmptyHost));
    }

    #[test]
    fn serializes_selection_as_a_list() {
        let value = serde_json::to_value(RunConfig::new(2)).expect("config serializes");
        assert_eq!(value["selection"], serde_json::json!(["EUR", "USD"]));
        assert_eq!(value["mode"], "incremental");
    }
}
