// Property tests, enabled with RUSTFLAGS='--cfg property_tests'

use proptest::prelude::*;


proptest! {
    #[test]
    fn addition_matches_native(a in 0u128..=u64::MAX as u128, b in 0u128..=u64::MAX as u128) {
        let sum = BigDecimal::from(a) + BigDecimal::from(b);
        prop_assert_eq!(sum.to_string(), (a + b).to_string());
    }

    #[test]
    fn subtraction_matches_native(a in 0u128..=u64::MAX as u128, b in 0u128..=u64::MAX as u128) {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        let difference = BigDecimal::from(hi) - BigDecimal::from(lo);
        prop_assert_eq!(difference.to_string(), (hi - lo).to_string());
    }

    #[test]
    fn subtraction_underflow_is_detected(a in 0u64..10000, b in 0u64..10000) {
        let x = BigDecimal::from(a);
        let y = BigDecimal::from(b);
        prop_assert_eq!(x.checked_sub(&y).is_some(), a >= b);
    }

    #[test]
    fn multiplication_matches_native(a in 0u64..=u32::MAX as u64, b in 0u64..4096) {
        // repeated addition: keep one factor small
        let product = BigDecimal::from(a) * BigDecimal::from(b);
        prop_assert_eq!(product.to_string(), (a as u128 * b as u128).to_string());
    }

    #[test]
    fn string_round_trip(n in any::<u128>()) {
        let value = BigDecimal::from(n);
        let back: BigDecimal = value.to_string().parse().unwrap();
        prop_assert_eq!(back, value);
        prop_assert_eq!(BigDecimal::from(n).to_string(), n.to_string());
    }

    #[test]
    fn reverse_is_transparent(n in any::<u64>()) {
        let value = BigDecimal::from(n);
        let mut flipped = value.clone();
        flipped.reverse();

        prop_assert_eq!(&flipped, &value);
        prop_assert_eq!(flipped.to_string(), value.to_string());
    }

    #[test]
    fn shift_round_trip(n in 1u64..=u64::MAX, count in 0usize..20) {
        let value = BigDecimal::from(n);
        let back = (value.clone() << count) >> count;
        prop_assert_eq!(back, value);
    }

    #[test]
    fn ordering_matches_native(a in any::<u64>(), b in any::<u64>()) {
        let x = BigDecimal::from(a);
        let y = BigDecimal::from(b);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    #[test]
    fn incr_matches_native(n in 0u64..=u64::MAX - 1) {
        let mut value = BigDecimal::from(n);
        value.incr();
        prop_assert_eq!(value.to_string(), (n + 1).to_string());
    }
}
