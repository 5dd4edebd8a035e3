//! Addition operator trait implementation
//!

use crate::*;
use crate::arithmetic::addition::add_assign_digits;
use stdlib::ops::{Add, AddAssign};


impl Add<BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn add(mut self, rhs: BigDecimal) -> BigDecimal {
        add_assign_digits(&mut self, &rhs);
        self
    }
}

impl Add<&BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    fn add(mut self, rhs: &BigDecimal) -> BigDecimal {
        add_assign_digits(&mut self, rhs);
        self
    }
}

impl Add<BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn add(self, rhs: BigDecimal) -> BigDecimal {
        // addition is commutative; reuse the owned buffer
        rhs + self
    }
}

forward_ref_ref_binop!(impl Add for BigDecimal, add);


impl AddAssign<BigDecimal> for BigDecimal {
    fn add_assign(&mut self, rhs: BigDecimal) {
        add_assign_digits(self, &rhs);
    }
}

impl AddAssign<&BigDecimal> for BigDecimal {
    #[inline]
    fn add_assign(&mut self, rhs: &BigDecimal) {
        add_assign_digits(self, rhs);
    }
}
