//! Cent-exact proportional distribution
//!
//! All fractional allocation in the engine funnels through [`distribute`]:
//! percentage slices of a shared item and proportional tax/tip shares alike.
//! Ideal fractional shares are floored to whole cents and the leftover cents
//! are handed out one each by largest fractional remainder, so the results
//! always sum to exactly the amount being distributed. Rounding never creates
//! or destroys a cent.

use crate::models::Money;

/// Distribute `total` across parties in proportion to `weights`.
///
/// Returns one amount per weight, summing to exactly `total`. When the
/// weights sum to zero (including the empty-receipt case) every share is
/// zero: a zero base yields zero proportions, never a division fault.
///
/// Ties in the remainder ranking break toward the earlier index, which keeps
/// the result deterministic and slightly favors the payer (index 0 by
/// convention in every caller).
pub fn distribute(total: Money, weights: &[f64]) -> Vec<Money> {
    if weights.is_empty() {
        return Vec::new();
    }

    let weight_sum: f64 = weights.iter().sum();
    if weight_sum == 0.0 || total.is_zero() {
        return vec![Money::zero(); weights.len()];
    }

    let total_cents = total.cents();
    let mut cents: Vec<i64> = Vec::with_capacity(weights.len());
    let mut remainders: Vec<(usize, f64)> = Vec::with_capacity(weights.len());

    for (i, w) in weights.iter().enumerate() {
        let ideal = total_cents as f64 * w / weight_sum;
        let floor = ideal.floor();
        cents.push(floor as i64);
        remainders.push((i, ideal - floor));
    }

    // Largest remainder first; earlier index wins exact ties.
    remainders.sort_by(|(ia, ra), (ib, rb)| {
        rb.partial_cmp(ra)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(ia.cmp(ib))
    });

    let mut leftover = total_cents - cents.iter().sum::<i64>();
    let n = remainders.len();
    let mut k = 0;
    while leftover > 0 {
        cents[remainders[k % n].0] += 1;
        leftover -= 1;
        k += 1;
    }
    // Floating error can leave the floors a cent over; take it back from the
    // smallest remainders.
    while leftover < 0 {
        cents[remainders[n - 1 - (k % n)].0] -= 1;
        leftover += 1;
        k += 1;
    }

    cents.into_iter().map(Money::from_cents).collect()
}
