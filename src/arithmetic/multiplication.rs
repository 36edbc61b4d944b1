//!
//! Schoolbook multiplication on packed decimal digits
//!

use crate::arithmetic::validate_operands;
use crate::digit::{self, set_digit};
use crate::word::BcdWord;
use crate::{Bcd, BcdError};

use num_integer::div_rem;


/// Accumulator slot count sufficient for the product of two of the widest words
const MAX_PRODUCT_DIGITS: usize = 2 * <u64 as BcdWord>::DIGITS;

/// Type of a single accumulator slot
///
/// Before carries are normalized a slot holds at most 9 * 9 * 16 = 1296.
///
type DigitAccumulator = u16;


/// Return the BCD product of `x` and `y`
///
/// Long multiplication in base ten: every pair of digits is multiplied
/// and accumulated into the slot matching its decimal position, then
/// carries are propagated from least to most significant slot.
///
/// Fails with InvalidDigit if either operand contains a nibble above
/// nine, or with Overflow if the product needs more than `W::DIGITS`
/// digits.
///
/// ```
/// # use bcdint::{bcd_multiply, Bcd, BcdError};
/// let x = Bcd::from_bits(0x0099u16);
/// assert_eq!(bcd_multiply(x, x).unwrap().to_bits(), 0x9801);
///
/// let overflow = bcd_multiply(Bcd::from_bits(0x9999u16), Bcd::from_bits(0x0002));
/// assert_eq!(overflow, Err(BcdError::Overflow));
/// ```
///
pub fn bcd_multiply<W: BcdWord>(x: Bcd<W>, y: Bcd<W>) -> Result<Bcd<W>, BcdError> {
    validate_operands(x, y)?;

    let mut slots = [0 as DigitAccumulator; MAX_PRODUCT_DIGITS];
    let product_digits = &mut slots[..2 * W::DIGITS];

    multiply_digits_into(x.to_bits(), y.to_bits(), product_digits);
    normalize_carries(product_digits);

    let (low, high) = product_digits.split_at(W::DIGITS);
    if high.iter().any(|&d| d != 0) {
        return Err(BcdError::Overflow);
    }

    let product = low
        .iter()
        .enumerate()
        .fold(W::ZERO, |word, (index, &d)| set_digit(word, index, d as u8));

    Ok(Bcd::from_bits(product))
}

/// Accumulate digit products of a and b into result, without carrying
///
/// result[i + j] += a[i] * b[j] where index 0 is the least significant
/// digit. Result must hold at least 2 * W::DIGITS slots.
///
pub(crate) fn multiply_digits_into<W: BcdWord>(a: W, b: W, result: &mut [DigitAccumulator]) {
    debug_assert!(result.len() >= 2 * W::DIGITS);

    for (ia, digit_a) in digit::digits(a).rev().enumerate() {
        if digit_a == 0 {
            continue;
        }

        for (ib, digit_b) in digit::digits(b).rev().enumerate() {
            if digit_b == 0 {
                continue;
            }
            let prod = DigitAccumulator::from(digit_a) * DigitAccumulator::from(digit_b);
            result[ia + ib] += prod;
        }
    }
}

/// Propagate decimal carries so every slot holds a single digit
///
/// Any carry out of the last slot is dropped; slices sized
/// 2 * W::DIGITS never produce one.
///
pub(crate) fn normalize_carries(digits: &mut [DigitAccumulator]) {
    let mut carry = 0;
    for slot in digits.iter_mut() {
        let (hi, lo) = div_rem(*slot + carry, 10);
        *slot = lo;
        carry = hi;
    }
    debug_assert_eq!(carry, 0);
}
