//! Domain Services
//!
//! Pure classification logic.

/// Whether `n` equals the sum of its decimal digits, each raised to the
/// number of digits (153 = 1³ + 5³ + 3³)
///
/// Zero and negative numbers are never Armstrong numbers.
pub fn is_armstrong(n: i64) -> bool {
    if n <= 0 {
        return false;
    }

    let target = u128::from(n.unsigned_abs());
    let num_digits = n.unsigned_abs().ilog10() + 1;

    // 19 * 9^19 fits comfortably in u128
    let mut sum = 0u128;
    let mut rest = n.unsigned_abs();
    while rest > 0 {
        sum += u128::from(rest % 10).pow(num_digits);
        if sum > target {
            return false;
        }
        rest /= 10;
    }

    sum == target
}
