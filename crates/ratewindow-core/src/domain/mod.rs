//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RawDayPayload`] | Decoded response for one day |
//! | [`CurrencyRateEntry`] | National and commercial rates for one currency |
//! | [`Rate`] | A rate kept as the integer or decimal number it was sent as |
//! | [`CurrencySelection`] | Inclusion filter of currency codes |
//! | [`DayRecord`] | A day's filtered entries |

mod currency;
mod payload;
mod rate;
mod record;

pub use currency::{
    is_known_currency, normalize_token, CurrencySelection, DEFAULT_CURRENCIES, KNOWN_CURRENCIES,
};
pub use payload::{CurrencyRateEntry, RawDayPayload};
pub use rate::Rate;
pub use record::DayRecord;
