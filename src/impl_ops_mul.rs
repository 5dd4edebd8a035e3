//! Multiplication operator trait implementation
//!
//! Products are computed by repeated addition (see
//! [`crate::arithmetic::multiplication`]); the cost grows with the
//! magnitude of the smaller factor.

use crate::*;
use crate::arithmetic::multiplication::mul_assign_digits;
use stdlib::ops::{Mul, MulAssign};


impl Mul<BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn mul(mut self, rhs: BigDecimal) -> BigDecimal {
        mul_assign_digits(&mut self, &rhs);
        self
    }
}

impl Mul<&BigDecimal> for BigDecimal {
    type Output = BigDecimal;

    fn mul(mut self, rhs: &BigDecimal) -> BigDecimal {
        mul_assign_digits(&mut self, rhs);
        self
    }
}

impl Mul<BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn mul(self, rhs: BigDecimal) -> BigDecimal {
        rhs * self
    }
}

forward_ref_ref_binop!(impl Mul for BigDecimal, mul);


impl MulAssign<BigDecimal> for BigDecimal {
    fn mul_assign(&mut self, rhs: BigDecimal) {
        mul_assign_digits(self, &rhs);
    }
}

impl MulAssign<&BigDecimal> for BigDecimal {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigDecimal) {
        mul_assign_digits(self, rhs);
    }
}
