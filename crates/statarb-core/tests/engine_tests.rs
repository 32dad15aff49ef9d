use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use statarb_core::engine::run_backtest;
use statarb_core::error::StatArbError;
use statarb_core::{bands, comovement, returns, signals};
use statarb_core::{BacktestParameters, Position, PriceSeries};

fn series(symbol: &str, closes: Vec<Decimal>) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    PriceSeries::from_closes(symbol, start, closes)
}

fn params(window: u32, entry: Decimal, exit: Decimal) -> BacktestParameters {
    BacktestParameters {
        window,
        entry_threshold: entry,
        exit_threshold: exit,
    }
}

// ---------------------------------------------------------------------------
// Rolling band properties
// ---------------------------------------------------------------------------

#[test]
fn test_band_lengths_equal_series_length() {
    for window in [1, 2, 3, 10] {
        let s = series("S", vec![dec!(3), dec!(1), dec!(4), dec!(1), dec!(5), dec!(9)]);
        let b = bands::rolling_bands(&s, window).unwrap();
        assert_eq!(b.mean.len(), s.len());
        assert_eq!(b.std_dev.len(), s.len());
    }
}

#[test]
fn test_first_band_std_dev_always_zero() {
    let s = series("S", vec![dec!(250), dec!(1), dec!(999)]);
    let b = bands::rolling_bands(&s, 3).unwrap();
    assert_eq!(b.std_dev[0], Decimal::ZERO);
}

#[test]
fn test_window_one_bands_degenerate_to_price() {
    let s = series("S", vec![dec!(10), dec!(20), dec!(15), dec!(25)]);
    let b = bands::rolling_bands(&s, 1).unwrap();
    assert_eq!(b.mean, s.closes);
    assert!(b.std_dev.iter().all(|v| *v == Decimal::ZERO));
}

// ---------------------------------------------------------------------------
// Comovement properties
// ---------------------------------------------------------------------------

#[test]
fn test_constant_series_degenerate_for_any_partner() {
    let flat = series("FLAT", vec![dec!(100); 6]);
    let moving = series("MOVE", vec![dec!(1), dec!(4), dec!(2), dec!(8), dec!(5), dec!(7)]);
    assert!(matches!(
        comovement::correlation(&flat, &moving),
        Err(StatArbError::DegenerateSeries(_))
    ));
}

// ---------------------------------------------------------------------------
// Signal ordering
// ---------------------------------------------------------------------------

#[test]
fn test_exit_wins_when_entry_also_matches() {
    // exit threshold far above entry: every entry-qualifying bar is also
    // inside the exit band, so the whole sequence must come out flat.
    let a = series("A", vec![dec!(100), dec!(90), dec!(80), dec!(70), dec!(60)]);
    let b = series("B", vec![dec!(100), dec!(110), dec!(120), dec!(130), dec!(140)]);
    let ba = bands::rolling_bands(&a, 2).unwrap();
    let bb = bands::rolling_bands(&b, 2).unwrap();
    let positions = signals::generate(&a, &b, &ba, &bb, dec!(0.1), dec!(10)).unwrap();
    assert!(positions.iter().all(|p| *p == Position::Flat));
}

// ---------------------------------------------------------------------------
// Return accumulation properties
// ---------------------------------------------------------------------------

#[test]
fn test_return_series_one_shorter_than_prices() {
    let a = series("A", vec![dec!(10), dec!(11), dec!(12), dec!(13)]);
    let b = series("B", vec![dec!(20), dec!(19), dec!(21), dec!(18)]);
    let positions = vec![Position::LongSpread; 4];
    let out = returns::accumulate(&a, &b, &positions).unwrap();
    assert_eq!(out.period_returns.len(), 3);
}

#[test]
fn test_trade_count_matches_non_flat_positions() {
    let a = series("A", vec![dec!(10), dec!(11), dec!(12), dec!(13), dec!(14)]);
    let b = series("B", vec![dec!(20), dec!(19), dec!(21), dec!(18), dec!(22)]);
    let positions = vec![
        Position::Flat,
        Position::LongSpread,
        Position::Flat,
        Position::ShortSpread,
        Position::LongSpread,
    ];
    let out = returns::accumulate(&a, &b, &positions).unwrap();
    assert_eq!(out.trade_count, 3);
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_constant_pair_fails_degenerate_and_stays_flat() {
    let a = series("A", vec![dec!(100); 5]);
    let b = series("B", vec![dec!(100); 5]);
    let p = params(3, dec!(0.5), dec!(0.5));

    // The engine refuses to produce a result: correlation is undefined.
    assert!(matches!(
        run_backtest(&a, &b, &p),
        Err(StatArbError::DegenerateSeries(_))
    ));

    // The downstream pipeline, driven directly, confirms a dead-flat run.
    let ba = bands::rolling_bands(&a, 3).unwrap();
    let bb = bands::rolling_bands(&b, 3).unwrap();
    let positions = signals::generate(&a, &b, &ba, &bb, dec!(0.5), dec!(0.5)).unwrap();
    assert!(positions.iter().all(|pos| *pos == Position::Flat));
    let out = returns::accumulate(&a, &b, &positions).unwrap();
    assert_eq!(out.total_return_pct, Decimal::ZERO);
    assert_eq!(out.trade_count, 0);
}

#[test]
fn test_sustained_divergence_trades_every_bar_after_warmup() {
    // A falls steadily while B rises: after the first bar both assets sit
    // outside their narrow bands, so the long-spread entry fires on every
    // remaining bar. The mean-reversion bet is against a divergence that
    // never reverts, so each realized return is negative and the curve
    // strictly decreases.
    let a = series("A", vec![dec!(100), dec!(90), dec!(80), dec!(70), dec!(60)]);
    let b = series("B", vec![dec!(100), dec!(110), dec!(120), dec!(130), dec!(140)]);
    let p = params(2, dec!(0.1), dec!(0.1));
    let result = run_backtest(&a, &b, &p).unwrap();

    assert!(result.trade_count > 0);
    assert_eq!(result.cumulative_curve.len(), 4);
    for w in result.cumulative_curve.windows(2) {
        assert!(w[1] < w[0]);
    }
    assert!(result.total_return_pct < Decimal::ZERO);
    // Opposite monotonic trends are perfectly anti-correlated.
    assert!(result.comovement_score < dec!(-0.99));
}

#[test]
fn test_short_spread_loses_symmetrically() {
    // Swapping the assets flips every signal to short-spread. The bet is
    // still against the divergence, so it loses just the same.
    let a = series("A", vec![dec!(100), dec!(110), dec!(120), dec!(130), dec!(140)]);
    let b = series("B", vec![dec!(100), dec!(90), dec!(80), dec!(70), dec!(60)]);
    let p = params(2, dec!(0.1), dec!(0.1));
    let result = run_backtest(&a, &b, &p).unwrap();

    assert!(result.trade_count > 0);
    assert!(result.total_return_pct < Decimal::ZERO);
}

#[test]
fn test_backtest_idempotent() {
    let a = series(
        "A",
        vec![dec!(100), dec!(97), dec!(103), dec!(99), dec!(106), dec!(94), dec!(101)],
    );
    let b = series(
        "B",
        vec![dec!(50), dec!(53), dec!(48), dec!(52), dec!(47), dec!(55), dec!(49)],
    );
    let p = params(3, dec!(0.5), dec!(0.5));
    let first = run_backtest(&a, &b, &p).unwrap();
    let second = run_backtest(&a, &b, &p).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parameter_sweep_on_shared_series() {
    // One cached pair swept over several parameter sets, with no
    // cross-call interference.
    let a = series(
        "A",
        vec![dec!(100), dec!(95), dec!(108), dec!(92), dec!(104), dec!(97)],
    );
    let b = series(
        "B",
        vec![dec!(60), dec!(63), dec!(57), dec!(66), dec!(58), dec!(62)],
    );
    let baseline = run_backtest(&a, &b, &params(3, dec!(0.5), dec!(0.5))).unwrap();
    for window in [2, 3, 4] {
        let result = run_backtest(&a, &b, &params(window, dec!(1.0), dec!(0.25))).unwrap();
        assert_eq!(result.cumulative_curve.len(), a.len() - 1);
    }
    let again = run_backtest(&a, &b, &params(3, dec!(0.5), dec!(0.5))).unwrap();
    assert_eq!(baseline, again);
}

#[test]
fn test_serialization_roundtrip() {
    let a = series("A", vec![dec!(100), dec!(102), dec!(98), dec!(105)]);
    let json = serde_json::to_string(&a).unwrap();
    let back: PriceSeries = serde_json::from_str(&json).unwrap();
    assert_eq!(back.symbol, "A");
    assert_eq!(back.closes, a.closes);
    assert_eq!(back.dates, a.dates);
}
