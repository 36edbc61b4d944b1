//! Implement math operations: Add, Mul, etc
//!
//! Operators panic when the result is not a valid BCD, like primitive
//! integers do on overflow in debug builds. Use [`Bcd::checked_add`],
//! [`Bcd::try_add`], or [`bcd_add`](crate::bcd_add) to handle errors.

use crate::stdlib::iter::{Product, Sum};
use crate::stdlib::ops::{Add, AddAssign, Mul, MulAssign};
use crate::word::BcdWord;
use crate::{bcd_add, bcd_multiply, Bcd, BcdError};


#[track_caller]
fn unwrap_result<W: BcdWord>(result: Result<Bcd<W>, BcdError>, op: &str) -> Bcd<W> {
    match result {
        Ok(value) => value,
        Err(BcdError::Overflow) => panic!("attempt to {} with overflow", op),
        Err(BcdError::InvalidDigit) => panic!("attempt to {} invalid BCD digits", op),
    }
}


impl<W: BcdWord> Add<Bcd<W>> for Bcd<W> {
    type Output = Bcd<W>;

    #[inline]
    #[track_caller]
    fn add(self, rhs: Bcd<W>) -> Bcd<W> {
        unwrap_result(bcd_add(self, rhs), "add")
    }
}

impl<W: BcdWord> Mul<Bcd<W>> for Bcd<W> {
    type Output = Bcd<W>;

    #[inline]
    #[track_caller]
    fn mul(self, rhs: Bcd<W>) -> Bcd<W> {
        unwrap_result(bcd_multiply(self, rhs), "multiply")
    }
}

forward_ref_binop!(impl Add, add for Bcd);
forward_ref_binop!(impl Mul, mul for Bcd);

forward_op_assign!(impl AddAssign, add_assign => Add, add for Bcd);
forward_op_assign!(impl MulAssign, mul_assign => Mul, mul for Bcd);


impl<W: BcdWord> Sum for Bcd<W> {
    fn sum<I: Iterator<Item = Bcd<W>>>(iter: I) -> Bcd<W> {
        iter.fold(Bcd::ZERO, |a, b| a + b)
    }
}

impl<'a, W: BcdWord> Sum<&'a Bcd<W>> for Bcd<W> {
    fn sum<I: Iterator<Item = &'a Bcd<W>>>(iter: I) -> Bcd<W> {
        iter.fold(Bcd::ZERO, |a, b| a + b)
    }
}

impl<W: BcdWord> Product for Bcd<W> {
    fn product<I: Iterator<Item = Bcd<W>>>(iter: I) -> Bcd<W> {
        iter.fold(Bcd::ONE, |a, b| a * b)
    }
}

impl<'a, W: BcdWord> Product<&'a Bcd<W>> for Bcd<W> {
    fn product<I: Iterator<Item = &'a Bcd<W>>>(iter: I) -> Bcd<W> {
        iter.fold(Bcd::ONE, |a, b| a * b)
    }
}
