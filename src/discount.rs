//! Tiered discount engine.
//!
//! Percentages apply to `amount = totalamount / 100`, the hundreds-scaled
//! figure, and the resulting discount is `amount * percent` — the percent
//! multiplies the scaled amount, not the minor-unit total. That asymmetry is
//! part of the partner-facing contract and must not be "corrected" here.

/// Maximum combined discount percentage after all bonuses.
pub const MAX_DISCOUNT_PERCENT: i64 = 20;

/// Computes the discount for a non-negative minor-unit total.
pub fn discount_for(totalamount: i64) -> i64 {
    let amount = totalamount / 100;

    let mut percent = if amount < 200 {
        0
    } else if amount <= 500 {
        5
    } else if amount <= 800 {
        7
    } else if amount <= 1200 {
        10
    } else {
        15
    };

    // Bonuses are independent of the base tier and of each other.
    // Primality is tested on the un-scaled total.
    if amount > 500 && is_prime(totalamount) {
        percent += 8;
    }
    if amount > 900 && amount % 10 == 5 {
        percent += 10;
    }

    percent = percent.min(MAX_DISCOUNT_PERCENT);

    amount * percent
}

/// Deterministic trial-division primality test, exact for i64 inputs.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // checked_mul keeps the square from overflowing for n near i64::MAX;
    // once it would, every remaining candidate exceeds sqrt(n).
    let mut i: i64 = 3;
    while let Some(square) = i.checked_mul(i) {
        if square > n {
            break;
        }
        if n % i == 0 {
            return false;
        }
        i += 2;
    }

    true
}
