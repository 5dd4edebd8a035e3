// Tests for the BigDecimal core methods; included into a module in
// lib.rs


mod from_digit_str {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: ($digits:literal, $rev:literal) => $expected:literal, digit_count = $count:literal) => {
            #[test]
            fn $name() {
                let value = BigDecimal::from_digit_str($digits, $rev).unwrap();
                assert_eq!(value.to_string(), $expected);
                assert_eq!(value.digit_count(), $count);
            }
        };
    }

    impl_case!(case_125_fwd: ("125", false) => "125", digit_count = 3);
    impl_case!(case_125_rev: ("521", true) => "125", digit_count = 3);
    impl_case!(case_high_zeros_fwd: ("000125", false) => "125", digit_count = 3);
    impl_case!(case_high_zeros_rev: ("521000", true) => "125", digit_count = 3);
    impl_case!(case_inner_zeros: ("10005", false) => "10005", digit_count = 5);
    impl_case!(case_zero: ("0", false) => "0", digit_count = 0);
    impl_case!(case_zero_run: ("00000", true) => "0", digit_count = 0);

    #[test]
    fn rejects_empty() {
        assert_eq!(
            BigDecimal::from_digit_str("", false),
            Err(ParseBigDecimalError::Empty)
        );
        assert_eq!(
            BigDecimal::from_digit_str("", true),
            Err(ParseBigDecimalError::Empty)
        );
    }

    #[test]
    fn rejects_invalid_digit() {
        assert_eq!(
            BigDecimal::from_digit_str("12x5", false),
            Err(ParseBigDecimalError::InvalidDigit('x'))
        );
    }

    #[test]
    fn preserves_orientation() {
        let fwd = BigDecimal::from_digit_str("125", false).unwrap();
        let rev = BigDecimal::from_digit_str("521", true).unwrap();
        assert!(!fwd.is_reversed());
        assert!(rev.is_reversed());
        assert_eq!(fwd, rev);
    }

    #[test]
    fn trimming_is_idempotent() {
        // trimmed on construction; a second trim through the public
        // surface (display, compare) must see the same value
        let value = BigDecimal::from_digit_str("000100", false).unwrap();
        assert_eq!(value.digit_count(), 3);
        assert_eq!(value.to_string(), "100");
        assert_eq!(value, BigDecimal::from(100u32));
    }
}

mod clear_and_reverse {
    use super::*;

    #[test]
    fn clear_resets_to_canonical_zero() {
        let mut value = BigDecimal::from_digit_str("521", true).unwrap();
        value.clear();

        assert!(value.is_zero());
        assert_eq!(value.digit_count(), 0);
        assert!(!value.is_reversed());
        assert_eq!(value.to_string(), "0");
    }

    #[test]
    fn reverse_preserves_logical_value() {
        let mut value: BigDecimal = "9087".parse().unwrap();
        let original = value.clone();

        value.reverse();
        assert!(value.is_reversed());
        assert_eq!(value, original);
        assert_eq!(value.to_string(), "9087");

        value.reverse();
        assert!(!value.is_reversed());
        assert_eq!(value, original);
    }

    #[test]
    fn reverse_of_zero() {
        let mut zero = BigDecimal::zero();
        zero.reverse();
        assert!(zero.is_zero());
        assert_eq!(zero.to_string(), "0");
    }
}

mod incr {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let mut value: BigDecimal = $input.parse().unwrap();
                value.incr();
                assert_eq!(value.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => "1");
    impl_case!(case_8: "8" => "9");
    impl_case!(case_9: "9" => "10");
    impl_case!(case_19: "19" => "20");
    impl_case!(case_99: "99" => "100");
    impl_case!(case_909: "909" => "910");
    impl_case!(case_30_nines: "999999999999999999999999999999" => "1000000000000000000000000000000");

    #[test]
    fn incr_leaves_buffer_least_significant_first() {
        let mut value: BigDecimal = "125".parse().unwrap();
        value.incr();
        assert!(value.is_reversed());
        assert_eq!(value.to_string(), "126");
    }
}

mod decr {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal, digit_count = $count:literal) => {
            #[test]
            fn $name() {
                let mut value: BigDecimal = $input.parse().unwrap();
                value.decr();
                assert_eq!(value.to_string(), $expected);
                assert_eq!(value.digit_count(), $count);
            }
        };
    }

    impl_case!(case_1: "1" => "0", digit_count = 0);
    impl_case!(case_9: "9" => "8", digit_count = 1);
    impl_case!(case_10: "10" => "9", digit_count = 1);
    impl_case!(case_100: "100" => "99", digit_count = 2);
    impl_case!(case_1000000: "1000000" => "999999", digit_count = 6);
    impl_case!(case_910: "910" => "909", digit_count = 3);

    #[test]
    fn try_decr_on_zero() {
        let mut zero = BigDecimal::zero();
        assert_eq!(zero.try_decr(), Err(ArithmeticError::Underflow));
        assert!(zero.is_zero());
    }

    #[test]
    #[should_panic(expected = "cannot decrement a zero BigDecimal")]
    fn decr_on_zero_panics() {
        let mut zero = BigDecimal::zero();
        zero.decr();
    }

    #[test]
    fn incr_then_decr_round_trips() {
        let mut value: BigDecimal = "999".parse().unwrap();
        value.incr();
        assert_eq!(value.to_string(), "1000");
        value.decr();
        assert_eq!(value.to_string(), "999");
        assert_eq!(value.digit_count(), 3);
    }
}

mod string_round_trip {
    use super::*;

    #[test]
    fn parse_display_parse() {
        let strings = ["0", "1", "10", "125", "10005", "999999999999999999999999999999"];
        for s in strings.iter() {
            let value: BigDecimal = s.parse().unwrap();
            assert_eq!(value.to_string(), *s);

            let again: BigDecimal = value.to_string().parse().unwrap();
            assert_eq!(again, value);
        }
    }
}

mod arithmetic_scenarios {
    use super::*;

    #[test]
    fn small_sum() {
        let a = BigDecimal::from(1u8);
        let b = BigDecimal::from(2u8);
        assert_eq!((a + b).to_string(), "3");
    }

    #[test]
    fn product_with_trailing_zeros() {
        let product = BigDecimal::from(100u32) * BigDecimal::from(999u32);
        assert_eq!(product.to_string(), "99900");
    }

    #[test]
    fn difference_drops_a_digit() {
        let difference = BigDecimal::from(30u8) - BigDecimal::from(20u8);
        assert_eq!(difference.to_string(), "10");
    }

    #[test]
    fn compound_expression() {
        let result = (BigDecimal::from(30u8) - BigDecimal::from(10u8)) * BigDecimal::from(2u8);
        assert_eq!(result.to_string(), "40");
    }

    #[test]
    fn carry_across_every_digit() {
        let mut n: BigDecimal = "999999999999999999999999999999".parse().unwrap();
        n += BigDecimal::from(1u8);
        assert_eq!(n.to_string(), "1000000000000000000000000000000");
    }

    #[test]
    fn mixed_operator_chain() {
        // ((125 + 875) * 3 - 500) << 2 >> 1
        let mut n: BigDecimal = "125".parse().unwrap();
        n += 875u32;
        n *= 3u32;
        n -= 500u32;
        n <<= 2;
        n >>= 1;
        assert_eq!(n.to_string(), "25000");
    }
}
