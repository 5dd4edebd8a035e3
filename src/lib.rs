// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unsigned Big Decimal Integers
//!
//! `BigDecimal` stores an arbitrary-precision non-negative decimal
//! integer as a buffer of ASCII digit bytes plus an *orientation*
//! flag: when `reversed` is set the buffer is laid out
//! least-significant-digit-first. Mutating operations that walk digits
//! from the least-significant end (increment, carry propagation) flip
//! the value into that orientation once and keep working there, so
//! chains of arithmetic avoid re-reversing the buffer on every call.
//!
//! Two values with different orientations and physical byte orders may
//! be equal; comparison, hashing, and display are defined on the
//! *logical* value only. Read paths never reorient: they go through a
//! single logical-index-to-physical-index mapping instead of branching
//! on the flag throughout the algorithms.
//!
//! The buffer is kept canonical: no leading zero at the logical
//! most-significant end, with the empty buffer denoting zero
//! (displayed `"0"`).
//!
//! Multiplication is implemented by repeated addition, so its cost is
//! proportional to the *numeric magnitude* of the smaller factor, not
//! its digit count. This keeps the digit algorithms simple; it is only
//! appropriate when at least one factor is small.
//!
//! # Example
//!
//! ```
//! use udecimal::BigDecimal;
//!
//! let mut n: BigDecimal = "999999999999999999999999999999".parse().unwrap();
//! n.incr();
//! assert_eq!(n.to_string(), "1000000000000000000000000000000");
//!
//! let product = BigDecimal::from(100u32) * BigDecimal::from(999u32);
//! assert_eq!(product.to_string(), "99900");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]


extern crate num_integer;
pub extern crate num_traits;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::Ordering;
use self::stdlib::fmt;
use self::stdlib::Vec;

pub use num_traits::{CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, One, ToPrimitive, Zero};

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

// digit-level carry/borrow algorithms
mod arithmetic;

// From<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;

// PartialEq, Ord, Hash
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Display, Debug, stream printing
mod impl_fmt;

mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;


pub(crate) const ZERO_BYTE: u8 = b'0';

/// Numeric value of an ascii digit byte
#[inline]
pub(crate) fn digit_value(byte: u8) -> u8 {
    debug_assert!(byte.is_ascii_digit());
    byte - ZERO_BYTE
}

/// Ascii byte for a digit value < 10
#[inline]
pub(crate) fn digit_byte(value: u8) -> u8 {
    debug_assert!(value < 10);
    ZERO_BYTE + value
}


/// An arbitrary-precision unsigned decimal integer.
///
/// Digits are stored as ascii bytes; `reversed` marks the buffer as
/// least-significant-digit-first. The empty buffer is the canonical
/// zero.
#[derive(Clone)]
pub struct BigDecimal {
    digits: Vec<u8>,
    reversed: bool,
}

impl BigDecimal {
    /// Create a value from a string of decimal digits with an explicit
    /// orientation: `reversed = true` means `digits` is given
    /// least-significant-digit-first.
    ///
    /// The input is validated; leading (logical) zeros are trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use udecimal::BigDecimal;
    ///
    /// let a = BigDecimal::from_digit_str("00125", false).unwrap();
    /// let b = BigDecimal::from_digit_str("521", true).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string(), "125");
    /// ```
    pub fn from_digit_str(digits: &str, reversed: bool) -> Result<BigDecimal, ParseBigDecimalError> {
        if digits.is_empty() {
            return Err(ParseBigDecimalError::Empty);
        }
        if let Some(bad_char) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigDecimalError::InvalidDigit(bad_char));
        }

        let mut result = BigDecimal {
            digits: digits.as_bytes().to_vec(),
            reversed: reversed,
        };
        result.trim();
        Ok(result)
    }

    /// Byte-slice convenience around [`BigDecimal::from_digit_str`]
    ///
    /// ```
    /// use udecimal::{BigDecimal, Zero};
    ///
    /// assert_eq!(BigDecimal::parse_bytes(b"0", false).unwrap(), BigDecimal::zero());
    /// assert_eq!(BigDecimal::parse_bytes(b"13", false).unwrap(), BigDecimal::from(13u8));
    /// ```
    pub fn parse_bytes(buf: &[u8], reversed: bool) -> Option<BigDecimal> {
        stdlib::str::from_utf8(buf)
                    .ok()
                    .and_then(|s| BigDecimal::from_digit_str(s, reversed).ok())
    }

    /// Render an unsigned integer into a most-significant-first buffer
    pub(crate) fn from_uint(n: u128) -> BigDecimal {
        let mut digits = Vec::new();
        let mut rest = n;
        while rest != 0 {
            let (quot, rem) = num_integer::div_rem(rest, 10);
            digits.push(digit_byte(rem as u8));
            rest = quot;
        }
        // digits came out least-significant-first; no high zeros, so
        // the value is already canonical
        digits.reverse();
        BigDecimal {
            digits: digits,
            reversed: false,
        }
    }

    /// Number of significant decimal digits (zero has none)
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// True if the buffer is currently least-significant-digit-first
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Reset to zero (empty buffer, forward orientation)
    pub fn clear(&mut self) {
        self.digits.clear();
        self.reversed = false;
    }

    /// Physically reverse the buffer and flip the orientation flag.
    /// The logical value is unchanged. O(digit_count).
    pub fn reverse(&mut self) {
        self.digits.reverse();
        self.reversed = !self.reversed;
    }

    /// Byte of the i-th most-significant digit
    ///
    /// This (with `lsf_digit`) is the only place reads branch on the
    /// orientation flag.
    #[inline]
    fn msf_digit(&self, i: usize) -> u8 {
        if self.reversed {
            self.digits[self.digits.len() - 1 - i]
        } else {
            self.digits[i]
        }
    }

    /// Byte of the i-th least-significant digit
    #[inline]
    fn lsf_digit(&self, i: usize) -> u8 {
        if self.reversed {
            self.digits[i]
        } else {
            self.digits[self.digits.len() - 1 - i]
        }
    }

    /// Put the buffer into least-significant-first orientation
    fn orient_lsf(&mut self) {
        if !self.reversed {
            self.reverse();
        }
    }

    /// Strip `'0'` bytes from the logical most-significant end.
    ///
    /// The current orientation is preserved; trimming never touches
    /// the least-significant end.
    fn trim(&mut self) {
        if self.reversed {
            let keep = self.digits
                           .iter()
                           .rposition(|&b| b != ZERO_BYTE)
                           .map_or(0, |pos| pos + 1);
            self.digits.truncate(keep);
        } else {
            let leading_zeros = self.digits
                                    .iter()
                                    .position(|&b| b != ZERO_BYTE)
                                    .unwrap_or(self.digits.len());
            self.digits.drain(..leading_zeros);
        }
    }

    /// Grow the buffer to `new_len` digits by writing zeros at the
    /// logical most-significant end, reorienting to
    /// least-significant-first so the zeros are a cheap append.
    ///
    /// Used to align operands before digit-wise addition. `new_len`
    /// must not be smaller than the current length; use the
    /// right-shift operation to drop digits.
    pub(crate) fn pad_to(&mut self, new_len: usize) {
        debug_assert!(new_len >= self.digits.len());
        self.orient_lsf();
        self.digits.resize(new_len, ZERO_BYTE);
    }

    /// Compare logical values.
    ///
    /// Canonical form makes digit count the primary key: a longer
    /// buffer always holds the larger value. Equal-length buffers are
    /// compared digit-wise from the most-significant end through the
    /// orientation mapping, so operands of different orientations are
    /// compared without copies or reorientation.
    pub fn compare(&self, other: &BigDecimal) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {}
            length_order => return length_order,
        }

        for i in 0..self.digits.len() {
            match self.msf_digit(i).cmp(&other.msf_digit(i)) {
                Ordering::Equal => continue,
                digit_order => return digit_order,
            }
        }
        Ordering::Equal
    }

    /// Add one in place
    ///
    /// ```
    /// use udecimal::BigDecimal;
    ///
    /// let mut n = BigDecimal::from(999u32);
    /// n.incr();
    /// assert_eq!(n.to_string(), "1000");
    /// ```
    pub fn incr(&mut self) {
        self.orient_lsf();
        for byte in self.digits.iter_mut() {
            if *byte == b'9' {
                *byte = ZERO_BYTE;
            } else {
                *byte += 1;
                return;
            }
        }
        // carry ran off the end: every digit was a nine
        self.digits.push(b'1');
    }

    /// Borrow-scan decrement; false means the value was zero
    pub(crate) fn decr_impl(&mut self) -> bool {
        self.orient_lsf();
        for i in 0..self.digits.len() {
            if self.digits[i] == ZERO_BYTE {
                self.digits[i] = b'9';
            } else {
                self.digits[i] -= 1;
                // 10 - 1 must not leave a high zero behind
                self.trim();
                return true;
            }
        }
        false
    }

    /// Subtract one in place, failing on zero
    ///
    /// ```
    /// use udecimal::{BigDecimal, ArithmeticError, Zero};
    ///
    /// let mut n = BigDecimal::from(10u32);
    /// assert!(n.try_decr().is_ok());
    /// assert_eq!(n.to_string(), "9");
    ///
    /// let mut z = BigDecimal::zero();
    /// assert_eq!(z.try_decr(), Err(ArithmeticError::Underflow));
    /// ```
    pub fn try_decr(&mut self) -> Result<(), ArithmeticError> {
        if self.decr_impl() {
            Ok(())
        } else {
            Err(ArithmeticError::Underflow)
        }
    }

    /// Subtract one in place
    ///
    /// # Panics
    ///
    /// Panics if the value is zero; use [`BigDecimal::try_decr`] to
    /// handle that case.
    pub fn decr(&mut self) {
        if !self.decr_impl() {
            panic!("cannot decrement a zero BigDecimal");
        }
    }

    /// Append `count` zero digits at the logical least-significant
    /// end: multiply by 10^count. Shifting zero is a no-op.
    pub(crate) fn shift_digits_left(&mut self, count: usize) {
        if count == 0 || self.is_zero() {
            // zero must stay the empty buffer
            return;
        }
        if self.reversed {
            self.digits.splice(0..0, stdlib::iter::repeat(ZERO_BYTE).take(count));
        } else {
            self.digits.extend(stdlib::iter::repeat(ZERO_BYTE).take(count));
        }
    }

    /// Drop `count` digits from the logical least-significant end:
    /// integer-divide by 10^count, discarding the removed digits.
    /// Shifting past the last digit leaves zero.
    pub(crate) fn shift_digits_right(&mut self, count: usize) {
        if count >= self.digits.len() {
            self.clear();
            return;
        }
        if self.reversed {
            self.digits.drain(..count);
        } else {
            let new_len = self.digits.len() - count;
            self.digits.truncate(new_len);
        }
    }
}

impl Default for BigDecimal {
    #[inline]
    fn default() -> BigDecimal {
        BigDecimal {
            digits: Vec::new(),
            reversed: false,
        }
    }
}


/// Error parsing a digit string into a [`BigDecimal`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseBigDecimalError {
    /// The input string was empty (zero is spelled `"0"`)
    Empty,
    /// The input contained a byte outside `'0'..='9'`
    InvalidDigit(char),
}

impl fmt::Display for ParseBigDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigDecimalError::*;

        match *self {
            Empty => "Empty digit string".fmt(f),
            InvalidDigit(ch) => write!(f, "InvalidDigit: {:?} is not a decimal digit", ch),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigDecimalError {}


/// Error from arithmetic that would leave the non-negative type
/// unrepresentable
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The result would be negative
    Underflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArithmeticError::Underflow => "Underflow: result would be negative".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {}
