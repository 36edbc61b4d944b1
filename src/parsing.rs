//! Routines for parsing decimal text into BCD values

use crate::digit::get_digit;
use crate::word::{BcdWord, NIBBLE_BITS};
use crate::{Bcd, BcdError};


/// Parse the leading decimal digits of `s`
///
/// Consumes the longest run of ASCII digits at the start of `s` and
/// returns the value with the rest of the string, which begins at the
/// first non-digit character. If `s` does not start with a digit the
/// value is zero and the rest is all of `s`.
///
/// Leading zeros are insignificant. Fails with Overflow as soon as the
/// value needs more than `W::DIGITS` digits.
///
/// ```
/// # use bcdint::{str_to_bcd, BcdError};
/// let (value, rest) = str_to_bcd::<u16>("042x").unwrap();
/// assert_eq!(value.to_bits(), 0x42);
/// assert_eq!(rest, "x");
///
/// assert_eq!(str_to_bcd::<u8>("123"), Err(BcdError::Overflow));
/// ```
///
pub fn str_to_bcd<W: BcdWord>(s: &str) -> Result<(Bcd<W>, &str), BcdError> {
    let digit_count = s.bytes().take_while(u8::is_ascii_digit).count();
    // ASCII digits are single bytes, so this is a char boundary
    let (digits, rest) = s.split_at(digit_count);

    let packed = shift_in_digits::<W>(digits.as_bytes())?;
    Ok((Bcd::from_bits(packed), rest))
}

/// Decimal shift-and-add of ASCII digits into a packed word
///
/// Each new digit shifts the existing digits one nibble toward the
/// most significant end.
///
pub(crate) fn shift_in_digits<W: BcdWord>(ascii_digits: &[u8]) -> Result<W, BcdError> {
    let top = W::DIGITS - 1;
    let mut packed = W::ZERO;
    for &c in ascii_digits {
        debug_assert!(c.is_ascii_digit());
        if get_digit(packed, top) != 0 {
            return Err(BcdError::Overflow);
        }
        packed = (packed << NIBBLE_BITS) | <W as From<u8>>::from(c - b'0');
    }
    Ok(packed)
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $t:ty; $input:literal => overflow) => {
            #[test]
            fn $name() {
                assert_eq!(str_to_bcd::<$t>($input), Err(BcdError::Overflow));
            }
        };
        ($name:ident: $t:ty; $input:literal => $bits:literal, $rest:literal) => {
            #[test]
            fn $name() {
                let (value, rest) = str_to_bcd::<$t>($input).unwrap();
                assert_eq!(value.to_bits(), $bits);
                assert_eq!(rest, $rest);
            }
        };
    }

    impl_case!(case_042x: u16; "042x" => 0x42, "x");
    impl_case!(case_0: u16; "0" => 0x0, "");
    impl_case!(case_empty: u16; "" => 0x0, "");
    impl_case!(case_no_digits: u16; "abc" => 0x0, "abc");
    impl_case!(case_leading_space: u16; " 12" => 0x0, " 12");
    impl_case!(case_sign: u16; "-12" => 0x0, "-12");
    impl_case!(case_9999: u16; "9999" => 0x9999, "");
    impl_case!(case_10000: u16; "10000" => overflow);
    impl_case!(case_leading_zeros: u16; "000000001234 end" => 0x1234, " end");
    impl_case!(case_all_zeros: u8; "0000000000" => 0x00, "");
    impl_case!(case_u8_99: u8; "99" => 0x99, "");
    impl_case!(case_u8_100: u8; "100" => overflow);
    impl_case!(case_u32_digits: u32; "12345678.9" => 0x12345678, ".9");
    impl_case!(case_u32_overflow: u32; "123456789" => overflow);
    impl_case!(case_u64_max: u64; "9999999999999999" => 0x9999999999999999, "");
    impl_case!(case_u64_overflow: u64; "10000000000000000" => overflow);
    impl_case!(case_unicode_rest: u16; "12€" => 0x12, "€");
    impl_case!(case_fullwidth_digit: u16; "1２" => 0x1, "２");

    #[test]
    fn shift_in_no_digits() {
        assert_eq!(shift_in_digits::<u32>(b""), Ok(0));
    }

    #[test]
    fn shift_in_overflow_after_leading_zeros() {
        assert_eq!(shift_in_digits::<u8>(b"00099"), Ok(0x99));
        assert_eq!(shift_in_digits::<u8>(b"00199"), Err(BcdError::Overflow));
    }
}
