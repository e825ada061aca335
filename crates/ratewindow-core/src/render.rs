//! Fixed-width comparison table: national reference rate vs. commercial rate.
//!
//! ```text
//!                              =========================================...
//!                              |              National Bank              |              Private Bank               |
//! ==================================================================================================================
//! |    Date    |   Currency    |     Sale rate     |   Purchase rate     |     Sale rate     |   Purchase rate     |
//! ==================================================================================================================
//! | 17.10.2026 |      USD      |       41.3        |        41.3         |       41.6        |        41.1         |
//! ==================================================================================================================
//! ```

use crate::domain::{CurrencyRateEntry, DayRecord, Rate};

/// Full table width.
pub const TABLE_WIDTH: usize = 114;
/// Shown for an absent commercial rate.
pub const PLACEHOLDER: &str = "-";

const TITLE_INDENT: usize = 29;
const TITLE_RULE: usize = 85;

fn rule(width: usize) -> String {
    "=".repeat(width)
}

fn columns(cells: [&str; 6]) -> String {
    format!(
        "|{:^12}|{:^15}|{:^19}|{:^21}|{:^19}|{:^21}|\n",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    )
}

/// Rates print as the source sent them: `27` stays `27`, `27.0` stays `27.0`.
pub fn format_rate(rate: Rate) -> String {
    rate.to_string()
}

pub fn header() -> String {
    let indent = " ".repeat(TITLE_INDENT);
    let mut out = String::new();
    out.push_str(&indent);
    out.push_str(&rule(TITLE_RULE));
    out.push('\n');
    out.push_str(&indent);
    out.push_str(&format!("|{:^41}|{:^41}|\n", "National Bank", "Private Bank"));
    out.push_str(&rule(TABLE_WIDTH));
    out.push('\n');
    out.push_str(&columns([
        "Date",
        "Currency",
        "Sale rate",
        "Purchase rate",
        "Sale rate",
        "Purchase rate",
    ]));
    out.push_str(&rule(TABLE_WIDTH));
    out.push('\n');
    out
}

pub fn row(date: &str, entry: &CurrencyRateEntry) -> String {
    let sale_nb = format_rate(entry.sale_rate_nb);
    let purchase_nb = format_rate(entry.purchase_rate_nb);
    let sale = entry.sale_rate.map_or_else(|| PLACEHOLDER.to_owned(), format_rate);
    let purchase = entry
        .purchase_rate
        .map_or_else(|| PLACEHOLDER.to_owned(), format_rate);

    columns([date, &entry.currency, &sale_nb, &purchase_nb, &sale, &purchase])
}

pub fn footer() -> String {
    let mut out = rule(TABLE_WIDTH);
    out.push('\n');
    out
}

/// Append one row per entry of `record`, without the closing footer.
pub fn push_rows(buffer: &mut String, record: &DayRecord) {
    for entry in &record.entries {
        buffer.push_str(&row(&record.date, entry));
    }
}
