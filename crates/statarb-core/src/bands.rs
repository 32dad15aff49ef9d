use rust_decimal::Decimal;

use crate::error::StatArbError;
use crate::math;
use crate::types::{BandPair, PriceSeries};
use crate::StatArbResult;

/// Compute rolling Bollinger statistics for one series.
///
/// At index i the trailing `min(i + 1, window)` closes ending at i are used:
/// the window expands until `window` bars have elapsed, then slides. The
/// standard deviation is the sample (n - 1) form, and a one-sample window
/// yields zero rather than an undefined value.
pub fn rolling_bands(series: &PriceSeries, window: u32) -> StatArbResult<BandPair> {
    series.validate()?;
    if window == 0 {
        return Err(StatArbError::InvalidParameter {
            field: "window".into(),
            reason: "Window length must be > 0".into(),
        });
    }

    let n = series.len();
    let w = window as usize;
    let mut mean = Vec::with_capacity(n);
    let mut std_dev = Vec::with_capacity(n);

    for i in 0..n {
        let start = (i + 1).saturating_sub(w);
        let slice = &series.closes[start..=i];
        mean.push(math::mean(slice));
        std_dev.push(math::sample_std_dev(slice));
    }

    Ok(BandPair { mean, std_dev })
}
