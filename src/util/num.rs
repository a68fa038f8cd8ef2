/// Floor division: the quotient rounded toward negative infinity.
///
/// This differs from Rust's `/`, which truncates toward zero, whenever the
/// operands have opposite signs and the division is inexact.
///
/// ## Returns
/// - `None` when `divisor` is zero or the quotient overflows
///   (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use minicalc::util::num::checked_floor_div;
///
/// assert_eq!(checked_floor_div(7, 2), Some(3));
/// assert_eq!(checked_floor_div(-7, 2), Some(-4));
/// assert_eq!(checked_floor_div(7, -2), Some(-4));
/// assert_eq!(checked_floor_div(-7, -2), Some(3));
/// assert_eq!(checked_floor_div(1, 0), None);
/// assert_eq!(checked_floor_div(i64::MIN, -1), None);
/// ```
#[must_use]
pub const fn checked_floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let Some(quotient) = dividend.checked_div(divisor) else {
        return None;
    };
    // Cannot overflow: the truncated division above succeeded.
    let remainder = dividend % divisor;
    if remainder != 0 && ((remainder < 0) != (divisor < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
