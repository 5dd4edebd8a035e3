//! Operations between decimals and primitive unsigned integers, digit
//! shifts, and iterator sums
//!
//! The primitive forms convert the integer operand with the `From`
//! impls in `impl_convert` and defer to the decimal-decimal operators.

use crate::*;
use stdlib::iter::Sum;
use stdlib::ops::{Add, AddAssign, Mul, MulAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign};


macro_rules! impl_add_for_primitive {
    ($t:ty) => {
        impl Add<$t> for BigDecimal {
            type Output = BigDecimal;

            fn add(mut self, rhs: $t) -> BigDecimal {
                self += rhs;
                self
            }
        }

        impl Add<$t> for &BigDecimal {
            type Output = BigDecimal;

            fn add(self, rhs: $t) -> BigDecimal {
                self.clone() + rhs
            }
        }

        impl Add<BigDecimal> for $t {
            type Output = BigDecimal;

            fn add(self, rhs: BigDecimal) -> BigDecimal {
                rhs + self
            }
        }

        impl Add<&BigDecimal> for $t {
            type Output = BigDecimal;

            fn add(self, rhs: &BigDecimal) -> BigDecimal {
                rhs + self
            }
        }

        impl AddAssign<$t> for BigDecimal {
            fn add_assign(&mut self, rhs: $t) {
                if rhs != 0 {
                    *self += BigDecimal::from(rhs);
                }
            }
        }
    };
}

impl_add_for_primitive!(u8);
impl_add_for_primitive!(u16);
impl_add_for_primitive!(u32);
impl_add_for_primitive!(u64);
impl_add_for_primitive!(u128);
impl_add_for_primitive!(usize);


macro_rules! impl_sub_for_primitive {
    ($t:ty) => {
        impl Sub<$t> for BigDecimal {
            type Output = BigDecimal;

            fn sub(mut self, rhs: $t) -> BigDecimal {
                self -= rhs;
                self
            }
        }

        impl Sub<$t> for &BigDecimal {
            type Output = BigDecimal;

            fn sub(self, rhs: $t) -> BigDecimal {
                self.clone() - rhs
            }
        }

        impl Sub<BigDecimal> for $t {
            type Output = BigDecimal;

            fn sub(self, rhs: BigDecimal) -> BigDecimal {
                BigDecimal::from(self) - rhs
            }
        }

        impl Sub<&BigDecimal> for $t {
            type Output = BigDecimal;

            fn sub(self, rhs: &BigDecimal) -> BigDecimal {
                BigDecimal::from(self) - rhs
            }
        }

        impl SubAssign<$t> for BigDecimal {
            fn sub_assign(&mut self, rhs: $t) {
                if rhs != 0 {
                    *self -= BigDecimal::from(rhs);
                }
            }
        }
    };
}

impl_sub_for_primitive!(u8);
impl_sub_for_primitive!(u16);
impl_sub_for_primitive!(u32);
impl_sub_for_primitive!(u64);
impl_sub_for_primitive!(u128);
impl_sub_for_primitive!(usize);


macro_rules! impl_mul_for_primitive {
    ($t:ty) => {
        impl Mul<$t> for BigDecimal {
            type Output = BigDecimal;

            fn mul(mut self, rhs: $t) -> BigDecimal {
                self *= rhs;
                self
            }
        }

        impl Mul<$t> for &BigDecimal {
            type Output = BigDecimal;

            fn mul(self, rhs: $t) -> BigDecimal {
                self.clone() * rhs
            }
        }

        impl Mul<BigDecimal> for $t {
            type Output = BigDecimal;

            fn mul(self, rhs: BigDecimal) -> BigDecimal {
                rhs * self
            }
        }

        impl Mul<&BigDecimal> for $t {
            type Output = BigDecimal;

            fn mul(self, rhs: &BigDecimal) -> BigDecimal {
                rhs.clone() * self
            }
        }

        impl MulAssign<$t> for BigDecimal {
            fn mul_assign(&mut self, rhs: $t) {
                if rhs == 0 {
                    self.clear();
                } else if rhs == 1 {
                    // no-op
                } else {
                    *self *= BigDecimal::from(rhs);
                }
            }
        }
    };
}

impl_mul_for_primitive!(u8);
impl_mul_for_primitive!(u16);
impl_mul_for_primitive!(u32);
impl_mul_for_primitive!(u64);
impl_mul_for_primitive!(u128);
impl_mul_for_primitive!(usize);


impl ShlAssign<usize> for BigDecimal {
    /// Append `count` zero digits at the least-significant end
    /// (multiply by 10^count)
    fn shl_assign(&mut self, count: usize) {
        self.shift_digits_left(count);
    }
}

impl Shl<usize> for BigDecimal {
    type Output = BigDecimal;

    fn shl(mut self, count: usize) -> BigDecimal {
        self <<= count;
        self
    }
}

impl Shl<usize> for &BigDecimal {
    type Output = BigDecimal;

    fn shl(self, count: usize) -> BigDecimal {
        self.clone() << count
    }
}

impl ShrAssign<usize> for BigDecimal {
    /// Drop `count` digits from the least-significant end
    /// (integer-divide by 10^count, truncating)
    fn shr_assign(&mut self, count: usize) {
        self.shift_digits_right(count);
    }
}

impl Shr<usize> for BigDecimal {
    type Output = BigDecimal;

    fn shr(mut self, count: usize) -> BigDecimal {
        self >>= count;
        self
    }
}

impl Shr<usize> for &BigDecimal {
    type Output = BigDecimal;

    fn shr(self, count: usize) -> BigDecimal {
        self.clone() >> count
    }
}


impl Sum for BigDecimal {
    fn sum<I: Iterator<Item = BigDecimal>>(iter: I) -> BigDecimal {
        iter.fold(BigDecimal::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a BigDecimal> for BigDecimal {
    fn sum<I: Iterator<Item = &'a BigDecimal>>(iter: I) -> BigDecimal {
        iter.fold(BigDecimal::zero(), |acc, n| acc + n)
    }
}
