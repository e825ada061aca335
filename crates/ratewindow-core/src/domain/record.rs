use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{CurrencyRateEntry, CurrencySelection, RawDayPayload};

/// A day's date with the entries that passed the selection filter, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: String,
    pub entries: Vec<CurrencyRateEntry>,
}

impl DayRecord {
    /// Keep the entries whose code is in `selection`, preserving order.
    pub fn filtered(payload: &RawDayPayload, selection: &CurrencySelection) -> Self {
        Self {
            date: payload.date.clone(),
            entries: payload
                .exchange_rate
                .iter()
                .filter(|entry| selection.contains(&entry.currency))
                .cloned()
                .collect(),
        }
    }
}

/// Serializes as a single-key object: `{"<date>": [entries]}`.
impl Serialize for DayRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.entries)?;
        map.end()
    }
}
