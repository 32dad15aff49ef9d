use rust_decimal::Decimal;

use crate::error::StatArbError;
use crate::math;
use crate::types::PriceSeries;
use crate::StatArbResult;

/// Pearson correlation coefficient between two aligned price series over
/// their full history.
///
/// A constant-price series has undefined correlation; that is reported as
/// [`StatArbError::DegenerateSeries`] rather than defaulted to a sentinel.
pub fn correlation(a: &PriceSeries, b: &PriceSeries) -> StatArbResult<Decimal> {
    a.validate()?;
    b.validate()?;
    a.check_aligned(b)?;

    let n = a.len();
    let mean_a = math::mean(&a.closes);
    let mean_b = math::mean(&b.closes);

    let mut cov = Decimal::ZERO;
    let mut var_a = Decimal::ZERO;
    let mut var_b = Decimal::ZERO;

    for i in 0..n {
        let da = a.closes[i] - mean_a;
        let db = b.closes[i] - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    if var_a == Decimal::ZERO {
        return Err(StatArbError::DegenerateSeries(format!(
            "{} has zero variance — correlation undefined",
            a.symbol
        )));
    }
    if var_b == Decimal::ZERO {
        return Err(StatArbError::DegenerateSeries(format!(
            "{} has zero variance — correlation undefined",
            b.symbol
        )));
    }

    Ok(cov / (math::sqrt(var_a) * math::sqrt(var_b)))
}
