use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Newton's method square root (20 iterations).
pub(crate) fn sqrt(val: Decimal) -> Decimal {
    if val <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let mut guess = val / dec!(2);
    if guess == Decimal::ZERO {
        guess = Decimal::ONE;
    }
    for _ in 0..20 {
        guess = (guess + val / guess) / dec!(2);
    }
    guess
}

/// Arithmetic mean of a slice. Zero for an empty slice.
pub(crate) fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = values.iter().copied().sum();
    sum / Decimal::from(values.len() as i64)
}

/// Sample standard deviation (n - 1 denominator). Zero for fewer than
/// two samples.
pub(crate) fn sample_std_dev(values: &[Decimal]) -> Decimal {
    let n = values.len();
    if n < 2 {
        return Decimal::ZERO;
    }
    let m = mean(values);
    let ss: Decimal = values
        .iter()
        .map(|v| {
            let d = *v - m;
            d * d
        })
        .sum();
    sqrt(ss / Decimal::from((n - 1) as i64))
}
