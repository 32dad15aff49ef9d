mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::backtest::{BacktestArgs, CorrelationArgs};
use commands::bands::BandsArgs;

/// Pairs-trading backtests over two price series
#[derive(Parser)]
#[command(
    name = "statarb",
    version,
    about = "Backtest a mean-reversion pairs-trading strategy",
    long_about = "Backtests a statistical-arbitrage pairs-trading strategy on two \
                  daily price series: rolling Bollinger bands per asset, per-bar \
                  long/short/flat spread positions, and a compounded equity curve. \
                  Series are read from JSON or date,close CSV files."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full backtest on a pair of price series
    Backtest(BacktestArgs),
    /// Pearson correlation between two price series
    Correlation(CorrelationArgs),
    /// Rolling mean and standard-deviation bands for one series
    Bands(BandsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Backtest(args) => commands::backtest::run_backtest(args),
        Commands::Correlation(args) => commands::backtest::run_correlation(args),
        Commands::Bands(args) => commands::bands::run_bands(args),
        Commands::Version => {
            println!("statarb {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
