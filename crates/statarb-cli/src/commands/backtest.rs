use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use statarb_core::{comovement, engine, BacktestParameters, BacktestResult, PriceSeries};

use crate::input;

/// Arguments for a full backtest run
#[derive(Args)]
pub struct BacktestArgs {
    /// Path to a JSON file holding both series and optional parameters
    #[arg(long, conflicts_with_all = ["asset_a", "asset_b"])]
    pub input: Option<String>,

    /// Path to the first asset's prices (JSON series or date,close CSV)
    #[arg(long, requires = "asset_b")]
    pub asset_a: Option<String>,

    /// Path to the second asset's prices (JSON series or date,close CSV)
    #[arg(long, requires = "asset_a")]
    pub asset_b: Option<String>,

    /// Rolling window length in bars
    #[arg(long, default_value = "30")]
    pub window: u32,

    /// Entry band width in standard deviations
    #[arg(long, default_value = "0.5")]
    pub entry: Decimal,

    /// Exit band width in standard deviations
    #[arg(long, default_value = "0.5")]
    pub exit: Decimal,
}

/// Arguments for pair correlation
#[derive(Args)]
pub struct CorrelationArgs {
    /// Path to the first asset's prices (JSON series or date,close CSV)
    #[arg(long)]
    pub asset_a: String,

    /// Path to the second asset's prices (JSON series or date,close CSV)
    #[arg(long)]
    pub asset_b: String,
}

/// A complete backtest request as carried by --input or piped stdin.
#[derive(Debug, Serialize, Deserialize)]
struct BacktestRequest {
    asset_a: PriceSeries,
    asset_b: PriceSeries,
    #[serde(default)]
    parameters: BacktestParameters,
}

#[derive(Debug, Serialize)]
struct BacktestReport {
    pair: String,
    parameters: BacktestParameters,
    #[serde(flatten)]
    result: BacktestResult,
}

#[derive(Debug, Serialize)]
struct CorrelationReport {
    pair: String,
    correlation: Decimal,
    num_bars: usize,
}

pub fn run_backtest(args: BacktestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: BacktestRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let (Some(ref path_a), Some(ref path_b)) = (&args.asset_a, &args.asset_b) {
        BacktestRequest {
            asset_a: input::load_series(path_a, &super::symbol_from_path(path_a))?,
            asset_b: input::load_series(path_b, &super::symbol_from_path(path_b))?,
            parameters: BacktestParameters {
                window: args.window,
                entry_threshold: args.entry,
                exit_threshold: args.exit,
            },
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json>, --asset-a/--asset-b, or stdin required".into());
    };

    let result = engine::run_backtest(&request.asset_a, &request.asset_b, &request.parameters)?;
    let report = BacktestReport {
        pair: pair_label(&request.asset_a, &request.asset_b),
        parameters: request.parameters,
        result,
    };
    Ok(serde_json::to_value(report)?)
}

pub fn run_correlation(args: CorrelationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let a = input::load_series(&args.asset_a, &super::symbol_from_path(&args.asset_a))?;
    let b = input::load_series(&args.asset_b, &super::symbol_from_path(&args.asset_b))?;
    let correlation = comovement::correlation(&a, &b)?;
    let report = CorrelationReport {
        pair: pair_label(&a, &b),
        correlation,
        num_bars: a.len(),
    };
    Ok(serde_json::to_value(report)?)
}

fn pair_label(a: &PriceSeries, b: &PriceSeries) -> String {
    format!("{}:{}", a.symbol.to_uppercase(), b.symbol.to_uppercase())
}
