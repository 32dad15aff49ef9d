use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::StatArbError;
use crate::StatArbResult;

/// A time-indexed series of daily closing prices for one asset.
///
/// Invariants (enforced by [`PriceSeries::validate`]): non-empty, one close
/// per date, strictly increasing dates, strictly positive prices. The series
/// is immutable once built; the engine borrows it for the duration of a
/// single backtest call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker or display name
    pub symbol: String,
    /// Trading dates, strictly increasing
    pub dates: Vec<NaiveDate>,
    /// Closing prices, one per date, all positive
    pub closes: Vec<Decimal>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, dates: Vec<NaiveDate>, closes: Vec<Decimal>) -> Self {
        PriceSeries {
            symbol: symbol.into(),
            dates,
            closes,
        }
    }

    /// Build a series from closes alone, synthesizing consecutive daily
    /// dates starting at `start`.
    pub fn from_closes(
        symbol: impl Into<String>,
        start: NaiveDate,
        closes: Vec<Decimal>,
    ) -> Self {
        let dates = (0..closes.len())
            .map(|i| start + Days::new(i as u64))
            .collect();
        PriceSeries {
            symbol: symbol.into(),
            dates,
            closes,
        }
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn validate(&self) -> StatArbResult<()> {
        if self.closes.is_empty() {
            return Err(StatArbError::EmptySeries(self.symbol.clone()));
        }
        if self.dates.len() != self.closes.len() {
            return Err(StatArbError::InvalidParameter {
                field: "dates".into(),
                reason: format!(
                    "{} has {} dates but {} closes",
                    self.symbol,
                    self.dates.len(),
                    self.closes.len()
                ),
            });
        }
        for w in self.dates.windows(2) {
            if w[1] <= w[0] {
                return Err(StatArbError::InvalidParameter {
                    field: "dates".into(),
                    reason: format!("{} dates must be strictly increasing", self.symbol),
                });
            }
        }
        if self.closes.iter().any(|c| *c <= Decimal::ZERO) {
            return Err(StatArbError::InvalidParameter {
                field: "closes".into(),
                reason: format!("{} contains a non-positive price", self.symbol),
            });
        }
        Ok(())
    }

    /// Check that another series shares this one's date index exactly.
    pub fn check_aligned(&self, other: &PriceSeries) -> StatArbResult<()> {
        if self.len() != other.len() {
            return Err(StatArbError::MisalignedSeries {
                left: self.symbol.clone(),
                right: other.symbol.clone(),
                reason: format!("lengths {} vs {}", self.len(), other.len()),
            });
        }
        if self.dates != other.dates {
            return Err(StatArbError::MisalignedSeries {
                left: self.symbol.clone(),
                right: other.symbol.clone(),
                reason: "date indices differ".into(),
            });
        }
        Ok(())
    }
}

/// Rolling Bollinger statistics for one asset, index-aligned with its
/// source series. At index i only the trailing window ending at i is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandPair {
    /// Rolling mean (expanding until the window fills, then trailing)
    pub mean: Vec<Decimal>,
    /// Rolling sample standard deviation; zero for a single-sample window
    pub std_dev: Vec<Decimal>,
}

impl BandPair {
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

/// Discrete per-bar position in the spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Long asset A, short asset B (+1)
    LongSpread,
    /// Short asset A, long asset B (-1)
    ShortSpread,
    /// No position (0)
    Flat,
}

impl Position {
    /// The +1 / -1 / 0 multiplier applied to the spread return.
    pub fn signum(self) -> Decimal {
        match self {
            Position::LongSpread => Decimal::ONE,
            Position::ShortSpread => -Decimal::ONE,
            Position::Flat => Decimal::ZERO,
        }
    }
}

/// Backtest configuration, supplied fresh on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestParameters {
    /// Rolling window length in bars
    #[serde(default = "default_window")]
    pub window: u32,
    /// Entry band width in standard deviations
    #[serde(default = "default_threshold")]
    pub entry_threshold: Decimal,
    /// Exit band width in standard deviations
    #[serde(default = "default_threshold")]
    pub exit_threshold: Decimal,
}

fn default_window() -> u32 {
    30
}

fn default_threshold() -> Decimal {
    dec!(0.5)
}

impl Default for BacktestParameters {
    fn default() -> Self {
        BacktestParameters {
            window: default_window(),
            entry_threshold: default_threshold(),
            exit_threshold: default_threshold(),
        }
    }
}

impl BacktestParameters {
    pub fn validate(&self) -> StatArbResult<()> {
        if self.window == 0 {
            return Err(StatArbError::InvalidParameter {
                field: "window".into(),
                reason: "Window length must be > 0".into(),
            });
        }
        if self.entry_threshold < Decimal::ZERO {
            return Err(StatArbError::InvalidParameter {
                field: "entry_threshold".into(),
                reason: "Entry threshold must be non-negative".into(),
            });
        }
        if self.exit_threshold < Decimal::ZERO {
            return Err(StatArbError::InvalidParameter {
                field: "exit_threshold".into(),
                reason: "Exit threshold must be non-negative".into(),
            });
        }
        Ok(())
    }
}

/// Output of a full backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    /// Pearson correlation between the two price series, in [-1, 1]
    pub comovement_score: Decimal,
    /// Compounded equity curve, starting from the first realized return
    pub cumulative_curve: Vec<Decimal>,
    /// (final cumulative value - 1) * 100
    pub total_return_pct: Decimal,
    /// Number of bars holding a non-flat position
    pub trade_count: usize,
}
