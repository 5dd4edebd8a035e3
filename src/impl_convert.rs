//! From<T> impls for primitive unsigned integers

use crate::*;


macro_rules! impl_from_primitive {
    ($t:ty) => {
        impl From<$t> for BigDecimal {
            #[inline]
            fn from(n: $t) -> BigDecimal {
                BigDecimal::from_uint(n as u128)
            }
        }
    };
}

impl_from_primitive!(u8);
impl_from_primitive!(u16);
impl_from_primitive!(u32);
impl_from_primitive!(u64);
impl_from_primitive!(u128);
impl_from_primitive!(usize);


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_small_values() {
        assert_eq!(BigDecimal::from(0u8).to_string(), "0");
        assert_eq!(BigDecimal::from(7u16).to_string(), "7");
        assert_eq!(BigDecimal::from(42u32).to_string(), "42");
        assert_eq!(BigDecimal::from(1000u64).to_string(), "1000");
        assert_eq!(BigDecimal::from(30usize).to_string(), "30");
    }

    #[test]
    fn from_zero_is_canonical() {
        let zero = BigDecimal::from(0u64);
        assert_eq!(zero.digit_count(), 0);
        assert!(zero.is_zero());
        assert!(!zero.is_reversed());
    }

    #[test]
    fn from_extremes() {
        assert_eq!(
            BigDecimal::from(u64::MAX).to_string(),
            "18446744073709551615"
        );
        assert_eq!(
            BigDecimal::from(u128::MAX).to_string(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn orientation_is_most_significant_first() {
        let n = BigDecimal::from(125u32);
        assert!(!n.is_reversed());
        assert_eq!(n.digit_count(), 3);
    }
}
