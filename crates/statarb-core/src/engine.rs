use crate::types::{BacktestParameters, BacktestResult, PriceSeries};
use crate::{bands, comovement, returns, signals};
use crate::StatArbResult;

/// Run one full backtest: comovement, bands for each asset, the position
/// sequence, and the compounded returns, assembled into a
/// [`BacktestResult`].
///
/// Stateless between calls — the same cached series pair can be swept over
/// many parameter sets, and identical inputs always produce identical
/// output. The intermediate artifacts remain available through
/// [`bands::rolling_bands`] and [`signals::generate`] for callers that
/// chart or inspect them.
pub fn run_backtest(
    a: &PriceSeries,
    b: &PriceSeries,
    params: &BacktestParameters,
) -> StatArbResult<BacktestResult> {
    params.validate()?;
    a.validate()?;
    b.validate()?;
    a.check_aligned(b)?;

    let comovement_score = comovement::correlation(a, b)?;

    let bands_a = bands::rolling_bands(a, params.window)?;
    let bands_b = bands::rolling_bands(b, params.window)?;

    let positions = signals::generate(
        a,
        b,
        &bands_a,
        &bands_b,
        params.entry_threshold,
        params.exit_threshold,
    )?;

    let accumulated = returns::accumulate(a, b, &positions)?;

    Ok(BacktestResult {
        comovement_score,
        cumulative_curve: accumulated.cumulative,
        total_return_pct: accumulated.total_return_pct,
        trade_count: accumulated.trade_count,
    })
}
