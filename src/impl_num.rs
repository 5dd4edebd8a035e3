//! Implementations of num_traits

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, One, ToPrimitive, Zero};

use crate::*;
use crate::arithmetic::subtraction::checked_sub_assign_digits;
use stdlib::convert::TryFrom;


impl Zero for BigDecimal {
    #[inline]
    fn zero() -> BigDecimal {
        BigDecimal::default()
    }

    /// True for the empty buffer and for any all-`'0'` buffer
    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.iter().all(|&b| b == ZERO_BYTE)
    }
}

impl One for BigDecimal {
    #[inline]
    fn one() -> BigDecimal {
        BigDecimal::from(1u8)
    }

    #[inline]
    fn is_one(&self) -> bool {
        // canonical form: exactly one digit, and it is a one
        self.digits == [b'1']
    }
}


impl CheckedAdd for BigDecimal {
    /// Addition cannot overflow an arbitrary-precision type
    #[inline]
    fn checked_add(&self, rhs: &BigDecimal) -> Option<BigDecimal> {
        Some(self + rhs)
    }
}

impl CheckedSub for BigDecimal {
    /// None when `rhs > self` (the result would be negative)
    fn checked_sub(&self, rhs: &BigDecimal) -> Option<BigDecimal> {
        let mut difference = self.clone();
        match checked_sub_assign_digits(&mut difference, rhs) {
            Ok(()) => Some(difference),
            Err(ArithmeticError::Underflow) => None,
        }
    }
}

impl CheckedMul for BigDecimal {
    #[inline]
    fn checked_mul(&self, rhs: &BigDecimal) -> Option<BigDecimal> {
        Some(self * rhs)
    }
}


impl ToPrimitive for BigDecimal {
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|n| i64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|n| i128::try_from(n).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_u128(&self) -> Option<u128> {
        let mut acc: u128 = 0;
        for i in 0..self.digits.len() {
            let digit = digit_value(self.msf_digit(i)) as u128;
            acc = acc.checked_mul(10)?.checked_add(digit)?;
        }
        Some(acc)
    }
}

impl FromPrimitive for BigDecimal {
    #[inline]
    fn from_i64(n: i64) -> Option<BigDecimal> {
        u64::try_from(n).ok().map(BigDecimal::from)
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigDecimal> {
        Some(BigDecimal::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigDecimal> {
        u128::try_from(n).ok().map(BigDecimal::from)
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigDecimal> {
        Some(BigDecimal::from(n))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_and_one() {
        assert!(BigDecimal::zero().is_zero());
        assert!(!BigDecimal::zero().is_one());
        assert!(BigDecimal::one().is_one());
        assert!(!BigDecimal::one().is_zero());

        // reversed single digit
        let one = BigDecimal::from_digit_str("1", true).unwrap();
        assert!(one.is_one());
    }

    #[test]
    fn checked_ops() {
        let a: BigDecimal = "30".parse().unwrap();
        let b: BigDecimal = "20".parse().unwrap();

        assert_eq!(a.checked_add(&b), Some("50".parse().unwrap()));
        assert_eq!(a.checked_sub(&b), Some("10".parse().unwrap()));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!(a.checked_mul(&b), Some("600".parse().unwrap()));
    }

    mod to_primitive {
        use super::*;

        #[test]
        fn round_trips() {
            let n = BigDecimal::from(18446744073709551615u64);
            assert_eq!(n.to_u64(), Some(u64::MAX));
            assert_eq!(n.to_u128(), Some(u64::MAX as u128));
            assert_eq!(n.to_i64(), None);
        }

        #[test]
        fn zero() {
            assert_eq!(BigDecimal::zero().to_u64(), Some(0));
            assert_eq!(BigDecimal::zero().to_i64(), Some(0));
        }

        #[test]
        fn overflow_is_none() {
            let mut too_big = BigDecimal::from(u128::MAX);
            too_big.incr();
            assert_eq!(too_big.to_u128(), None);
            assert_eq!(too_big.to_u64(), None);
        }

        #[test]
        fn reversed_buffer() {
            let n = BigDecimal::from_digit_str("521", true).unwrap();
            assert_eq!(n.to_u64(), Some(125));
        }
    }

    mod from_primitive {
        use super::*;

        #[test]
        fn signed_values() {
            assert_eq!(BigDecimal::from_i64(125), Some(BigDecimal::from(125u8)));
            assert_eq!(BigDecimal::from_i64(-125), None);
            assert_eq!(BigDecimal::from_u64(125), Some(BigDecimal::from(125u8)));
        }
    }
}
