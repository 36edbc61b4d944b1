//! arithmetic routines
//!
//! Decimal addition and multiplication performed digit-by-digit on the
//! packed representation.

use crate::digit;
use crate::word::BcdWord;
use crate::{Bcd, BcdError};

pub(crate) mod addition;
pub(crate) mod multiplication;

pub use self::addition::bcd_add;
pub use self::multiplication::bcd_multiply;


/// Fail with InvalidDigit unless both operands hold only decimal digits
///
/// Operands are validated before any arithmetic, so an invalid digit is
/// reported even when the result would also overflow.
///
#[inline]
pub(crate) fn validate_operands<W: BcdWord>(x: Bcd<W>, y: Bcd<W>) -> Result<(), BcdError> {
    if digit::validate_digits(x.to_bits()) && digit::validate_digits(y.to_bits()) {
        Ok(())
    } else {
        Err(BcdError::InvalidDigit)
    }
}


/// Add carry to given number, returning trimmed value and storing overflow back in carry
///
pub(crate) fn add_carry(n: u8, carry: &mut u8) -> u8 {
    let s = n + *carry;
    if s < 10 {
        *carry = 0;
        s
    } else {
        debug_assert!(s < 20);
        *carry = 1;
        s - 10
    }
}
