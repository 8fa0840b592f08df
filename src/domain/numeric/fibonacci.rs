//! Fibonacci sequence generation.

use super::NumericError;

/// Returns the first `n` Fibonacci terms, F(0)=0, F(1)=1.
///
/// `n = 0` yields an empty sequence and `n = 1` yields `[0]`. Terms are
/// computed with checked addition; the first term past `i64::MAX` (F(93))
/// fails with [`NumericError::Overflow`] rather than wrapping.
pub fn fibonacci(n: u64) -> Result<Vec<i64>, NumericError> {
    let count = usize::try_from(n).map_err(|_| NumericError::Overflow("fibonacci term count"))?;

    let mut terms = Vec::with_capacity(count.min(94));
    let (mut a, mut b) = (0i64, 1i64);

    while terms.len() < count {
        terms.push(a);
        // Only advance when another term is still needed, so a request for
        // the full representable prefix does not trip on the term after it.
        if terms.len() < count {
            let next = a
                .checked_add(b)
                .ok_or(NumericError::Overflow("fibonacci term"))?;
            a = b;
            b = next;
        }
    }

    Ok(terms)
}
