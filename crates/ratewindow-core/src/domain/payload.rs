use serde::{Deserialize, Serialize};

use super::Rate;

/// One currency line of a daily snapshot.
///
/// Field names follow the source's wire format. Commercial rates are absent
/// when the source only published the national reference rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRateEntry {
    #[serde(
        rename = "baseCurrency",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency: Option<String>,
    pub currency: String,
    #[serde(rename = "saleRateNB")]
    pub sale_rate_nb: Rate,
    #[serde(rename = "purchaseRateNB")]
    pub purchase_rate_nb: Rate,
    #[serde(rename = "saleRate", default, skip_serializing_if = "Option::is_none")]
    pub sale_rate: Option<Rate>,
    #[serde(
        rename = "purchaseRate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub purchase_rate: Option<Rate>,
}

impl CurrencyRateEntry {
    /// Entry carrying only national reference rates.
    pub fn reference(
        currency: impl Into<String>,
        sale_rate_nb: impl Into<Rate>,
        purchase_rate_nb: impl Into<Rate>,
    ) -> Self {
        Self {
            base_currency: None,
            currency: currency.into(),
            sale_rate_nb: sale_rate_nb.into(),
            purchase_rate_nb: purchase_rate_nb.into(),
            sale_rate: None,
            purchase_rate: None,
        }
    }

    pub fn with_commercial(mut self, sale_rate: impl Into<Rate>, purchase_rate: impl Into<Rate>) -> Self {
        self.sale_rate = Some(sale_rate.into());
        self.purchase_rate = Some(purchase_rate.into());
        self
    }
}

/// Decoded response for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDayPayload {
    /// `DD.MM.YYYY`, exactly as sent.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(
        rename = "baseCurrency",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency_numeric: Option<u32>,
    #[serde(
        rename = "baseCurrencyLit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency: Option<String>,
    #[serde(rename = "exchangeRate")]
    pub exchange_rate: Vec<CurrencyRateEntry>,
}

impl RawDayPayload {
    pub fn new(date: impl Into<String>, exchange_rate: Vec<CurrencyRateEntry>) -> Self {
        Self {
            date: date.into(),
            bank: None,
            base_currency_numeric: None,
            base_currency: None,
            exchange_rate,
        }
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
