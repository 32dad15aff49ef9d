use rust_decimal::Decimal;

use crate::error::StatArbError;
use crate::types::{BandPair, Position, PriceSeries};
use crate::StatArbResult;

/// Derive the per-bar position sequence from both assets' band relationships.
///
/// Every bar is classified fresh from current conditions only — there is no
/// held position carried between bars. Entry uses strict inequalities
/// against the entry bands; the exit check uses inclusive inequalities
/// against the exit bands and is applied after the entry assignments, so a
/// bar satisfying both an entry and the exit condition ends up flat.
pub fn generate(
    a: &PriceSeries,
    b: &PriceSeries,
    bands_a: &BandPair,
    bands_b: &BandPair,
    entry_threshold: Decimal,
    exit_threshold: Decimal,
) -> StatArbResult<Vec<Position>> {
    if entry_threshold < Decimal::ZERO {
        return Err(StatArbError::InvalidParameter {
            field: "entry_threshold".into(),
            reason: "Entry threshold must be non-negative".into(),
        });
    }
    if exit_threshold < Decimal::ZERO {
        return Err(StatArbError::InvalidParameter {
            field: "exit_threshold".into(),
            reason: "Exit threshold must be non-negative".into(),
        });
    }
    a.validate()?;
    b.validate()?;
    a.check_aligned(b)?;

    let n = a.len();
    if bands_a.len() != n || bands_b.len() != n {
        return Err(StatArbError::MisalignedSeries {
            left: a.symbol.clone(),
            right: b.symbol.clone(),
            reason: format!(
                "bands have lengths {} and {} for series of length {}",
                bands_a.len(),
                bands_b.len(),
                n
            ),
        });
    }

    let mut positions = vec![Position::Flat; n];

    for i in 0..n {
        let pa = a.closes[i];
        let pb = b.closes[i];
        let entry_width_a = entry_threshold * bands_a.std_dev[i];
        let entry_width_b = entry_threshold * bands_b.std_dev[i];

        // A below its lower band while B is above its upper band: long the
        // spread. The mirror image shorts it.
        if pa < bands_a.mean[i] - entry_width_a && pb > bands_b.mean[i] + entry_width_b {
            positions[i] = Position::LongSpread;
        } else if pa > bands_a.mean[i] + entry_width_a && pb < bands_b.mean[i] - entry_width_b {
            positions[i] = Position::ShortSpread;
        }

        // Exit overwrite runs last: both assets back inside their exit
        // bands forces flat, even when an entry condition also matched.
        let exit_width_a = exit_threshold * bands_a.std_dev[i];
        let exit_width_b = exit_threshold * bands_b.std_dev[i];
        let a_inside = pa >= bands_a.mean[i] - exit_width_a && pa <= bands_a.mean[i] + exit_width_a;
        let b_inside = pb >= bands_b.mean[i] - exit_width_b && pb <= bands_b.mean[i] + exit_width_b;
        if a_inside && b_inside {
            positions[i] = Position::Flat;
        }
    }

    Ok(positions)
}
