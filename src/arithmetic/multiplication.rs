//! Multiplication by repeated addition
//!
//! The cost of a product is O(magnitude of the smaller factor)
//! additions, each O(max digit count) -- proportional to the smaller
//! factor's numeric value, not its length. That trade keeps the digit
//! algorithms down to one carry loop; callers multiplying two large
//! factors pay for it.

use crate::*;
use crate::arithmetic::addition::add_assign_digits;
use stdlib::cmp::Ordering;


/// In-place `lhs *= rhs`
///
/// The smaller factor (by `compare`) is cloned as a counter and
/// decremented to zero, adding the larger factor to an accumulator
/// once per unit.
pub(crate) fn mul_assign_digits(lhs: &mut BigDecimal, rhs: &BigDecimal) {
    let (mut counter, addend) = if lhs.compare(rhs) == Ordering::Less {
        (lhs.clone(), rhs)
    } else {
        (rhs.clone(), &*lhs)
    };

    let mut sum = BigDecimal::zero();
    while !counter.is_zero() {
        add_assign_digits(&mut sum, addend);
        let decremented = counter.decr_impl();
        debug_assert!(decremented);
    }
    *lhs = sum;
}
