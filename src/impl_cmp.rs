//! Implementation of comparison operations
//!
//! All comparisons (and hashing) are defined on the logical value:
//! two decimals with different orientations or physical byte orders
//! compare equal whenever they denote the same magnitude.
//!

use crate::*;

use stdlib::cmp::Ordering;
use stdlib::hash::{Hash, Hasher};


impl PartialEq for BigDecimal {
    #[inline]
    fn eq(&self, rhs: &BigDecimal) -> bool {
        self.compare(rhs) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    #[inline]
    fn partial_cmp(&self, other: &BigDecimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    /// Complete ordering on logical value
    ///
    /// # Example
    ///
    /// ```
    /// let a: udecimal::BigDecimal = "12".parse().unwrap();
    /// let b: udecimal::BigDecimal = "340".parse().unwrap();
    /// assert!(a < b);
    /// assert!(b > a);
    /// ```
    #[inline]
    fn cmp(&self, other: &BigDecimal) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigDecimal {
    /// Hashes the most-significant-first digit stream, so equal values
    /// hash alike regardless of orientation
    fn hash<H: Hasher>(&self, state: &mut H) {
        for i in 0..self.digits.len() {
            state.write_u8(self.msf_digit(i));
        }
        state.write_usize(self.digits.len());
    }
}
