//! Greatest common divisor and least common multiple reductions.

use super::NumericError;

/// Euclidean GCD of two integers. `gcd(a, 0) = |a|`; the result is
/// always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    // i64::MIN has no positive counterpart; saturate rather than panic.
    a.saturating_abs()
}

/// Highest common factor of a sequence, by left fold of pairwise [`gcd`].
///
/// The sequence must be non-empty and contain no zeros.
pub fn hcf(numbers: &[i64]) -> Result<i64, NumericError> {
    validate_set("hcf", numbers)?;

    Ok(numbers.iter().copied().fold(0, gcd))
}

/// Least common multiple of a sequence, by left fold of pairwise
/// `|a*b| / gcd(a, b)`.
///
/// Same input constraints as [`hcf`]. An intermediate product outside the
/// i64 range fails with [`NumericError::Overflow`].
pub fn lcm(numbers: &[i64]) -> Result<i64, NumericError> {
    validate_set("lcm", numbers)?;

    numbers.iter().copied().try_fold(1i64, |acc, n| {
        let divisor = gcd(acc, n);
        // Divide before multiplying to keep intermediates small.
        (acc / divisor)
            .checked_mul(n)
            .and_then(i64::checked_abs)
            .ok_or(NumericError::Overflow("lcm"))
    })
}

fn validate_set(operation: &str, numbers: &[i64]) -> Result<(), NumericError> {
    if numbers.is_empty() {
        return Err(NumericError::invalid_argument(format!(
            "{operation} input must be a non-empty array of integers"
        )));
    }
    if numbers.contains(&0) {
        return Err(NumericError::invalid_argument(format!(
            "{operation} input cannot contain zero"
        )));
    }
    Ok(())
}
