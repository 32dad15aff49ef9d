use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use statarb_core::{bands, PriceSeries};

use crate::input;

/// Arguments for rolling band extraction
#[derive(Args)]
pub struct BandsArgs {
    /// Path to the asset's prices (JSON series or date,close CSV)
    #[arg(long)]
    pub input: Option<String>,

    /// Rolling window length in bars
    #[arg(long, default_value = "30")]
    pub window: u32,
}

/// One bar of charting data: the close with its band values.
#[derive(Debug, Serialize)]
struct BandRow {
    date: NaiveDate,
    close: Decimal,
    mean: Decimal,
    std_dev: Decimal,
}

#[derive(Debug, Serialize)]
struct BandsReport {
    symbol: String,
    window: u32,
    rows: Vec<BandRow>,
}

/// Emit the rolling mean/std-dev series alongside the closes, row per bar.
/// This is the charting collaborator's input; rendering is not done here.
pub fn run_bands(args: BandsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let series: PriceSeries = if let Some(ref path) = args.input {
        input::load_series(path, &super::symbol_from_path(path))?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for bands".into());
    };

    let pair = bands::rolling_bands(&series, args.window)?;
    let rows = series
        .dates
        .iter()
        .zip(&series.closes)
        .zip(pair.mean.iter().zip(&pair.std_dev))
        .map(|((date, close), (mean, std_dev))| BandRow {
            date: *date,
            close: *close,
            mean: *mean,
            std_dev: *std_dev,
        })
        .collect();

    let report = BandsReport {
        symbol: series.symbol.clone(),
        window: args.window,
        rows,
    };
    Ok(serde_json::to_value(report)?)
}
