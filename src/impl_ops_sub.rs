//! Subtraction operator trait implementation
//!
//! The type is non-negative, so the operators panic when the result
//! would be negative; `checked_sub` is the non-panicking form.

use crate::*;
use crate::arithmetic::subtraction::checked_sub_assign_digits;
use stdlib::ops::{Sub, SubAssign};


impl Sub<BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn sub(mut self, rhs: BigDecimal) -> BigDecimal {
        self -= &rhs;
        self
    }
}

impl Sub<&BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    fn sub(mut self, rhs: &BigDecimal) -> BigDecimal {
        self -= rhs;
        self
    }
}

impl Sub<BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: BigDecimal) -> BigDecimal {
        self.clone() - &rhs
    }
}

forward_ref_ref_binop!(impl Sub for BigDecimal, sub);


impl SubAssign<BigDecimal> for BigDecimal {
    fn sub_assign(&mut self, rhs: BigDecimal) {
        *self -= &rhs;
    }
}

impl SubAssign<&BigDecimal> for BigDecimal {
    fn sub_assign(&mut self, rhs: &BigDecimal) {
        if checked_sub_assign_digits(self, rhs).is_err() {
            panic!("cannot subtract a larger BigDecimal from a smaller one");
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal - $b:literal => $c:literal ) => {
            #[test]
            fn $name() {
                let a: BigDecimal = $a.parse().unwrap();
                let b: BigDecimal = $b.parse().unwrap();
                let c: BigDecimal = $c.parse().unwrap();

                assert_eq!(c, a.clone() - b.clone());
                assert_eq!(c, a.clone() - &b);
                assert_eq!(c, &a - b.clone());
                assert_eq!(c, &a - &b);

                let mut n = a.clone();
                n -= b.clone();
                assert_eq!(c, n);

                let mut n = a.clone();
                n -= &b;
                assert_eq!(c, n);
            }
        };
    }

    impl_case!(case_3_1: "3" - "1" => "2");
    impl_case!(case_30_20: "30" - "20" => "10");
    impl_case!(case_100_99: "100" - "99" => "1");
    impl_case!(case_776_776: "776" - "776" => "0");
    impl_case!(case_1000000000000000000000_1: "1000000000000000000000" - "1" => "999999999999999999999");

    #[test]
    #[should_panic(expected = "cannot subtract a larger BigDecimal")]
    fn underflow_panics() {
        let a: BigDecimal = "20".parse().unwrap();
        let b: BigDecimal = "30".parse().unwrap();
        let _ = a - b;
    }

    #[test]
    fn checked_sub_reports_underflow() {
        let a: BigDecimal = "20".parse().unwrap();
        let b: BigDecimal = "30".parse().unwrap();

        assert_eq!(b.checked_sub(&a), Some("10".parse().unwrap()));
        assert_eq!(a.checked_sub(&b), None);
    }
}
