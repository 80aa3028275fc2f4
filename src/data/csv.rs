//! MetaTrader history export loading.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::AppError;
use crate::model::candle::{Candle, RawSeries};

/// Datetime layout of MetaTrader M1 exports: dotted date plus HH:MM time.
const DATETIME_FORMAT: &str = "%Y.%m.%d %H:%M";

/// Load a MetaTrader-format OHLCV export:
/// `date,time,open,high,low,close,volume`, no header row.
pub fn load_metatrader_csv<P: AsRef<Path>>(path: P) -> Result<RawSeries, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut candles = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        candles.push(parse_record(&record, row + 1)?);
    }

    Ok(RawSeries::new(candles))
}

fn parse_record(record: &csv::StringRecord, line: usize) -> Result<Candle, AppError> {
    if record.len() < 7 {
        return Err(AppError::CsvRow {
            line,
            msg: format!("expected 7 columns, got {}", record.len()),
        });
    }

    let datetime = format!("{} {}", &record[0], &record[1]);
    let parsed = NaiveDateTime::parse_from_str(&datetime, DATETIME_FORMAT).map_err(|e| {
        AppError::CsvRow {
            line,
            msg: format!("bad datetime '{}': {}", datetime, e),
        }
    })?;
    let open_time = parsed.and_utc().timestamp_millis();
    if open_time < 0 {
        return Err(AppError::CsvRow {
            line,
            msg: format!("datetime '{}' is before the Unix epoch", datetime),
        });
    }

    let field = |index: usize, name: &str| -> Result<f64, AppError> {
        let value: f64 = record[index].parse().map_err(|e| AppError::CsvRow {
            line,
            msg: format!("bad {} '{}': {}", name, &record[index], e),
        })?;
        if !value.is_finite() {
            return Err(AppError::CsvRow {
                line,
                msg: format!("{} is not finite: {}", name, value),
            });
        }
        Ok(value)
    };

    Ok(Candle {
        open_time: open_time as u64,
        open: field(2, "open")?,
        high: field(3, "high")?,
        low: field(4, "low")?,
        close: field(5, "close")?,
        volume: field(6, "volume")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn parses_metatrader_row() {
        let candle = parse_record(
            &record(&["2021.01.03", "17:00", "1898.7", "1899.2", "1898.1", "1898.9", "42"]),
            1,
        )
        .unwrap();
        let expected = NaiveDateTime::parse_from_str("2021.01.03 17:00", DATETIME_FORMAT)
            .unwrap()
            .and_utc()
            .timestamp_millis() as u64;
        assert_eq!(candle.open_time, expected);
        assert!((candle.open - 1898.7).abs() < f64::EPSILON);
        assert!((candle.volume - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_short_rows() {
        let err = parse_record(&record(&["2021.01.03", "17:00", "1.0"]), 7).unwrap_err();
        assert!(matches!(err, AppError::CsvRow { line: 7, .. }));
    }

    #[test]
    fn rejects_bad_datetime() {
        let err = parse_record(
            &record(&["03/01/2021", "17:00", "1", "1", "1", "1", "0"]),
            2,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CsvRow { line: 2, .. }));
    }

    #[test]
    fn rejects_non_finite_fields() {
        let err = parse_record(
            &record(&["2021.01.03", "17:00", "NaN", "1", "1", "1", "0"]),
            3,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CsvRow { line: 3, .. }));
    }
}
