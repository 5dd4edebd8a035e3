//! Carry-propagating addition
//!

use crate::*;


/// In-place `lhs += rhs`
///
/// Pads `lhs` to the common digit count, orients it
/// least-significant-first, then runs a single digit pass with carry.
/// `rhs` is read through the orientation mapping, so either
/// orientation of the right operand takes the same path -- it is never
/// copied or reoriented.
pub(crate) fn add_assign_digits(lhs: &mut BigDecimal, rhs: &BigDecimal) {
    if lhs.digit_count() < rhs.digit_count() {
        lhs.pad_to(rhs.digit_count());
    }
    lhs.orient_lsf();

    let rhs_len = rhs.digit_count();
    let mut carry = 0u8;
    for i in 0..lhs.digits.len() {
        let a = digit_value(lhs.digits[i]);
        let b = if i < rhs_len { digit_value(rhs.lsf_digit(i)) } else { 0 };
        let sum = a + b + carry;
        lhs.digits[i] = digit_byte(sum % 10);
        carry = (sum >= 10) as u8;
    }
    if carry != 0 {
        // one new most-significant digit
        lhs.digits.push(b'1');
    }
    lhs.trim();
}
