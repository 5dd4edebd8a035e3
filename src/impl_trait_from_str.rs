//! Implementation of FromStr trait

use crate::*;
use stdlib::str::FromStr;


impl FromStr for BigDecimal {
    type Err = ParseBigDecimalError;

    /// Parse a most-significant-first decimal digit string
    #[inline]
    fn from_str(s: &str) -> Result<BigDecimal, ParseBigDecimalError> {
        BigDecimal::from_digit_str(s, false)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let value: BigDecimal = $input.parse().unwrap();
                assert_eq!(value.to_string(), $expected);
                assert!(!value.is_reversed());
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_1: "1" => "1");
    impl_case!(case_125: "125" => "125");
    impl_case!(case_leading_zeros: "000125" => "125");
    impl_case!(case_all_zeros: "00000" => "0");
    impl_case!(case_30_digits: "999999999999999999999999999999" => "999999999999999999999999999999");

    #[test]
    fn rejects_empty_string() {
        let result = "".parse::<BigDecimal>();
        assert_eq!(result.unwrap_err(), ParseBigDecimalError::Empty);
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            "12a4".parse::<BigDecimal>().unwrap_err(),
            ParseBigDecimalError::InvalidDigit('a')
        );
        assert_eq!(
            "-125".parse::<BigDecimal>().unwrap_err(),
            ParseBigDecimalError::InvalidDigit('-')
        );
        assert_eq!(
            "1.5".parse::<BigDecimal>().unwrap_err(),
            ParseBigDecimalError::InvalidDigit('.')
        );
        assert_eq!(
            " 125".parse::<BigDecimal>().unwrap_err(),
            ParseBigDecimalError::InvalidDigit(' ')
        );
    }
}
