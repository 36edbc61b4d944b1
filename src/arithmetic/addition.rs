//!
//! Addition algorithm on packed decimal digits
//!

use crate::arithmetic::{add_carry, validate_operands};
use crate::digit::{get_digit, set_digit};
use crate::word::BcdWord;
use crate::{Bcd, BcdError};


/// Return the BCD sum of `x` and `y`
///
/// Digits are added from least to most significant, carrying one into
/// the next digit whenever a digit sum reaches ten. Fails with
/// InvalidDigit if either operand contains a nibble above nine, or
/// with Overflow if a carry leaves the most significant digit.
///
/// ```
/// # use bcdint::{bcd_add, Bcd, BcdError};
/// let sum = bcd_add(Bcd::from_bits(0x0099u16), Bcd::from_bits(0x0001)).unwrap();
/// assert_eq!(sum.to_bits(), 0x0100);
///
/// let overflow = bcd_add(Bcd::from_bits(0x9999u16), Bcd::from_bits(0x0001));
/// assert_eq!(overflow, Err(BcdError::Overflow));
/// ```
///
pub fn bcd_add<W: BcdWord>(x: Bcd<W>, y: Bcd<W>) -> Result<Bcd<W>, BcdError> {
    validate_operands(x, y)?;

    let (carry, sum) = add_digits_with_carry(x.to_bits(), y.to_bits());
    if carry != 0 {
        return Err(BcdError::Overflow);
    }
    Ok(Bcd::from_bits(sum))
}

/// Digit-wise decimal sum of two words, returning (carry-out, sum)
///
/// Operands must hold only decimal digits.
///
pub(crate) fn add_digits_with_carry<W: BcdWord>(a: W, b: W) -> (u8, W) {
    let mut carry = 0;
    let mut sum = W::ZERO;
    for index in 0..W::DIGITS {
        let digit_sum = get_digit(a, index) + get_digit(b, index);
        let d = add_carry(digit_sum, &mut carry);
        sum = set_digit(sum, index, d);
    }
    (carry, sum)
}
