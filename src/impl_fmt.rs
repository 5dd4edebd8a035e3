//! Implementation of core::fmt traits & stream printing
//!

use crate::*;
use stdlib::string::String;


impl fmt::Display for BigDecimal {
    /// Canonical most-significant-first decimal rendering
    ///
    /// Never mutates the value: a reversed buffer is read back-to-front
    /// through the orientation mapping. The empty buffer renders `"0"`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.digits.is_empty() {
            return f.pad_integral(true, "", "0");
        }

        let buf: String = (0..self.digits.len())
                              .map(|i| char::from(self.msf_digit(i)))
                              .collect();
        f.pad_integral(true, "", &buf)
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigDecimal(\"{}\", reversed={})", self, self.reversed)
    }
}

#[cfg(feature = "std")]
impl BigDecimal {
    /// Write the canonical decimal rendering to a caller-supplied
    /// stream
    ///
    /// ```
    /// use udecimal::BigDecimal;
    ///
    /// let n = BigDecimal::from(125u32);
    /// let mut out = Vec::new();
    /// n.write_to(&mut out).unwrap();
    /// assert_eq!(out, b"125");
    /// ```
    pub fn write_to<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: ($digits:literal, $rev:literal) => $expected:literal) => {
            #[test]
            fn $name() {
                let value = BigDecimal::from_digit_str($digits, $rev).unwrap();
                assert_eq!(value.to_string(), $expected);
            }
        };
    }

    impl_case!(case_123_fwd: ("123", false) => "123");
    impl_case!(case_123_rev: ("321", true) => "123");
    impl_case!(case_trimmed: ("000777", false) => "777");
    impl_case!(case_zero: ("0", false) => "0");
    impl_case!(case_zero_run: ("0000", true) => "0");

    #[test]
    fn display_does_not_mutate() {
        let value = BigDecimal::from_digit_str("521", true).unwrap();
        let _ = value.to_string();
        assert!(value.is_reversed());
        assert_eq!(value.to_string(), "125");
    }

    #[test]
    fn formatter_flags() {
        let value: BigDecimal = "125".parse().unwrap();

        assert_eq!(format!("{:>8}", value), "     125");
        assert_eq!(format!("{:<8}", value), "125     ");
        assert_eq!(format!("{:08}", value), "00000125");
    }

    #[test]
    fn debug_form() {
        let value: BigDecimal = "125".parse().unwrap();
        assert_eq!(format!("{:?}", value), "BigDecimal(\"125\", reversed=false)");
    }

    #[cfg(feature = "std")]
    #[test]
    fn write_to_stream() {
        let value = BigDecimal::from_digit_str("521", true).unwrap();

        let mut out = Vec::new();
        value.write_to(&mut out).unwrap();
        assert_eq!(out, b"125");
    }
}
