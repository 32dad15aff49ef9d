use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::StatArbError;
use crate::types::{Position, PriceSeries};
use crate::StatArbResult;

/// Realized spread returns and the compounded equity curve for a position
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadReturns {
    /// Per-bar realized returns. One shorter than the price series: the
    /// position at bar i is realized over the move to bar i + 1, and the
    /// final bar has no following price.
    pub period_returns: Vec<Decimal>,
    /// Running product of (1 + r), same length as `period_returns`
    pub cumulative: Vec<Decimal>,
    /// (final cumulative value - 1) * 100
    pub total_return_pct: Decimal,
    /// Bars holding a non-flat position, counted over the full sequence
    pub trade_count: usize,
}

/// Convert a position sequence plus both price series into realized
/// returns and a compounded curve.
///
/// The period return for each asset is the next-bar fractional change,
/// so the decision at bar i is realized strictly afterwards — no same-bar
/// look-ahead. Long the spread earns asset A's return minus asset B's;
/// short earns the negative.
pub fn accumulate(
    a: &PriceSeries,
    b: &PriceSeries,
    positions: &[Position],
) -> StatArbResult<SpreadReturns> {
    a.validate()?;
    b.validate()?;
    a.check_aligned(b)?;

    let n = a.len();
    if positions.len() != n {
        return Err(StatArbError::MisalignedSeries {
            left: a.symbol.clone(),
            right: b.symbol.clone(),
            reason: format!("{} positions for {} bars", positions.len(), n),
        });
    }

    let mut period_returns = Vec::with_capacity(n.saturating_sub(1));
    for i in 0..n.saturating_sub(1) {
        let ra = (a.closes[i + 1] - a.closes[i]) / a.closes[i];
        let rb = (b.closes[i + 1] - b.closes[i]) / b.closes[i];
        period_returns.push(positions[i].signum() * (ra - rb));
    }

    let mut cumulative = Vec::with_capacity(period_returns.len());
    let mut acc = Decimal::ONE;
    for r in &period_returns {
        acc *= Decimal::ONE + *r;
        cumulative.push(acc);
    }

    let total_return_pct = match cumulative.last() {
        Some(last) => (*last - Decimal::ONE) * dec!(100),
        None => Decimal::ZERO,
    };

    let trade_count = positions.iter().filter(|p| **p != Position::Flat).count();

    Ok(SpreadReturns {
        period_returns,
        cumulative,
        total_return_pct,
        trade_count,
    })
}
