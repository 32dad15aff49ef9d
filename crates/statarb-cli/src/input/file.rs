use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use statarb_core::PriceSeries;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", resolved.display(), e))?;
    Ok(value)
}

/// Read a `date,close` CSV file into a price series. A header row is
/// expected; dates are ISO (YYYY-MM-DD).
pub fn read_price_csv(path: &str, symbol: &str) -> Result<PriceSeries, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let mut reader = csv::Reader::from_path(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e))?;

    let mut dates = Vec::new();
    let mut closes = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            return Err(format!(
                "'{}' row {}: expected date,close columns",
                resolved.display(),
                row + 1
            )
            .into());
        }
        let date = NaiveDate::from_str(record[0].trim())
            .map_err(|e| format!("'{}' row {}: bad date: {}", resolved.display(), row + 1, e))?;
        let close = Decimal::from_str(record[1].trim())
            .map_err(|e| format!("'{}' row {}: bad close: {}", resolved.display(), row + 1, e))?;
        dates.push(date);
        closes.push(close);
    }

    let series = PriceSeries::new(symbol, dates, closes);
    series.validate()?;
    Ok(series)
}

/// Resolve the path relative to the working directory and check it exists.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.exists() {
        return Err(format!("File not found: {}", resolved.display()).into());
    }
    if !resolved.is_file() {
        return Err(format!("Not a file: {}", resolved.display()).into());
    }

    Ok(resolved)
}
