use std::io::Write;

use ratewindow_core::{PipelineOutput, RunConfig};

use crate::error::CliError;

/// Echo the effective arguments as one JSON line.
pub fn print_arguments<W: Write>(out: &mut W, config: &RunConfig) -> Result<(), CliError> {
    let line = serde_json::to_string(config)?;
    writeln!(out, "{line}")?;
    Ok(())
}

pub fn render<W: Write>(out: &mut W, output: &PipelineOutput, pretty: bool) -> Result<(), CliError> {
    match output {
        PipelineOutput::Table(text) => write!(out, "{text}")?,
        PipelineOutput::Records(records) => {
            let payload = if pretty {
                serde_json::to_string_pretty(records)?
            } else {
                serde_json::to_string(records)?
            };
            writeln!(out, "{payload}")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use ratewindow_core::{render as table, CurrencyRateEntry, CurrencySelection, DayRecord};
    use serde_json::json;

    use super::*;

    fn records() -> Vec<DayRecord> {
        vec![DayRecord {
            date: "17.10.2026".to_owned(),
            entries: vec![CurrencyRateEntry::reference("USD", 41.3, 41.3).with_commercial(41.6, 41.1)],
        }]
    }

    fn written(write: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut out = Vec::new();
        write(&mut out).expect("write should succeed");
        String::from_utf8(out).expect("output should be utf-8")
    }

    // ========================================================================
    // Argument echo
    // ========================================================================

    #[test]
    fn arguments_are_echoed_as_a_single_json_line() {
        // Given
        let config = RunConfig::new(2).with_selection(CurrencySelection::new(["USD", "GBP"]));

        // When
        let text = written(|out| print_arguments(out, &config));

        // Then
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        let echoed: serde_json::Value = serde_json::from_str(text.trim_end()).expect("line is JSON");
        assert_eq!(echoed["days"], json!(2));
        assert_eq!(echoed["selection"], json!(["GBP", "USD"]));
    }

    // ========================================================================
    // Results
    // ========================================================================

    #[test]
    fn table_text_is_written_unchanged() {
        // Given
        let record = &records()[0];
        let text = table::header() + &table::row(&record.date, &record.entries[0]) + &table::footer();

        // When
        let output = written(|out| render(out, &PipelineOutput::Table(text.clone()), false));

        // Then
        assert_eq!(output, text);
    }

    #[test]
    fn records_are_written_as_compact_json() {
        let output = written(|out| render(out, &PipelineOutput::Records(records()), false));

        assert_eq!(
            output,
            "[{\"17.10.2026\":[{\"currency\":\"USD\",\"saleRateNB\":41.3,\"purchaseRateNB\":41.3,\"saleRate\":41.6,\"purchaseRate\":41.1}]}]\n"
        );
    }

    #[test]
    fn pretty_flag_indents_records() {
        let records = records();
        let output = written(|out| render(out, &PipelineOutput::Records(records.clone()), true));

        let expected = serde_json::to_string_pretty(&records).expect("records serialize") + "\n";
        assert_eq!(output, expected);
        assert!(output.lines().count() > 1);
        assert!(output.contains("\n  {\n    \"17.10.2026\": ["));
    }

    #[test]
    fn empty_records_are_an_empty_json_array() {
        let output = written(|out| render(out, &PipelineOutput::Records(Vec::new()), false));
        assert_eq!(output, "[]\n");
    }
}
