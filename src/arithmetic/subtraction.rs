//! Borrow-propagating subtraction
//!

use crate::*;


/// In-place `lhs -= rhs`, requiring a non-negative result
///
/// A canonically longer subtrahend is strictly larger, so that case
/// underflows without touching `lhs`. Otherwise a single digit pass
/// with borrow runs over `lhs` in least-significant-first orientation,
/// reading `rhs` through the orientation mapping. A borrow surviving
/// the most-significant digit means `rhs > lhs`; `lhs` is left in an
/// unspecified (non-canonical) state in that case.
pub(crate) fn checked_sub_assign_digits(
    lhs: &mut BigDecimal,
    rhs: &BigDecimal,
) -> Result<(), ArithmeticError> {
    if lhs.digit_count() < rhs.digit_count() {
        return Err(ArithmeticError::Underflow);
    }
    lhs.orient_lsf();

    let rhs_len = rhs.digit_count();
    let mut borrow = 0i8;
    for i in 0..lhs.digits.len() {
        let a = digit_value(lhs.digits[i]) as i8;
        let b = if i < rhs_len { digit_value(rhs.lsf_digit(i)) as i8 } else { 0 };
        let diff = a - b - borrow;
        lhs.digits[i] = digit_byte(((diff + 10) % 10) as u8);
        borrow = (diff < 0) as i8;
    }
    if borrow != 0 {
        return Err(ArithmeticError::Underflow);
    }
    lhs.trim();
    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal - $b:literal => $expected:literal ) => {
            #[test]
            fn $name() {
                let mut a: BigDecimal = $a.parse().unwrap();
                let b: BigDecimal = $b.parse().unwrap();

                checked_sub_assign_digits(&mut a, &b).unwrap();
                assert_eq!(a.to_string(), $expected);
            }
        };
        ( $name:ident: $a:literal - $b:literal => underflow ) => {
            #[test]
            fn $name() {
                let mut a: BigDecimal = $a.parse().unwrap();
                let b: BigDecimal = $b.parse().unwrap();

                let result = checked_sub_assign_digits(&mut a, &b);
                assert_eq!(result, Err(ArithmeticError::Underflow));
            }
        };
    }

    impl_case!(case_0_0: "0" - "0" => "0");
    impl_case!(case_30_20: "30" - "20" => "10");
    impl_case!(case_100_1: "100" - "1" => "99");
    impl_case!(case_123_123: "123" - "123" => "0");
    impl_case!(case_1000_999: "1000" - "999" => "1");

    impl_case!(case_0_1: "0" - "1" => underflow);
    impl_case!(case_20_30: "20" - "30" => underflow);
    impl_case!(case_123_1230: "123" - "1230" => underflow);

    #[test]
    fn rhs_orientation_is_transparent() {
        let mut a: BigDecimal = "906".parse().unwrap();
        let b = BigDecimal::from_digit_str("521", true).unwrap(); // 125

        checked_sub_assign_digits(&mut a, &b).unwrap();
        assert_eq!(a.to_string(), "781");
    }
}
