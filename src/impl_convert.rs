//! Conversion between binary integers and packed BCD

use crate::digit::{self, get_digit, set_digit};
use crate::word::BcdWord;
use crate::{Bcd, BcdError};

use num_integer::div_rem;


/// Return BCD encoding of an ordinary binary integer
///
/// Fails with Overflow if `value` needs more decimal digits than the
/// word holds (`value >= 10^W::DIGITS`).
///
/// ```
/// # use bcdint::{binary_to_bcd, BcdError};
/// assert_eq!(binary_to_bcd(0xCu16).unwrap().to_bits(), 0x12);
/// assert_eq!(binary_to_bcd(0xFFu16).unwrap().to_bits(), 0x255);
/// assert_eq!(binary_to_bcd(100u8), Err(BcdError::Overflow));
/// ```
///
pub fn binary_to_bcd<W: BcdWord>(value: W) -> Result<Bcd<W>, BcdError> {
    if value > W::MAX_DECIMAL {
        return Err(BcdError::Overflow);
    }

    let ten = <W as From<u8>>::from(10u8);
    let mut remaining = value;
    let mut packed = W::ZERO;
    let mut index = 0;
    while remaining != W::ZERO {
        let (quotient, rem) = div_rem(remaining, ten);
        let d: u8 = rem.as_();
        packed = set_digit(packed, index, d);
        remaining = quotient;
        index += 1;
    }

    Ok(Bcd::from_bits(packed))
}

/// Return binary value of a BCD
///
/// Fails with InvalidDigit if any nibble is greater than nine. The
/// decoded value always fits, as `10^DIGITS - 1 < 2^BITS`.
///
/// ```
/// # use bcdint::{bcd_to_binary, Bcd, BcdError};
/// assert_eq!(bcd_to_binary(Bcd::from_bits(0x12u16)), Ok(0xC));
/// assert_eq!(bcd_to_binary(Bcd::from_bits(0x255u16)), Ok(0xFF));
/// assert_eq!(bcd_to_binary(Bcd::from_bits(0x1Au8)), Err(BcdError::InvalidDigit));
/// ```
///
pub fn bcd_to_binary<W: BcdWord>(bcd: Bcd<W>) -> Result<W, BcdError> {
    let bits = bcd.to_bits();
    if !digit::validate_digits(bits) {
        return Err(BcdError::InvalidDigit);
    }
    Ok(accumulate_digits(bits))
}

/// acc = acc * 10 + digit, most significant nibble first
///
/// Cannot overflow even when every nibble is 15: the sum is at most
/// 15 * (10^DIGITS - 1) / 9, which is less than 2^BITS.
///
pub(crate) fn accumulate_digits<W: BcdWord>(bits: W) -> W {
    let ten = <W as From<u8>>::from(10u8);
    digit::digits(bits).fold(W::ZERO, |acc, d| acc * ten + <W as From<u8>>::from(d))
}

/// Copy nibbles from one word type into another
pub(crate) fn cast_digits<W: BcdWord, V: BcdWord>(bits: W) -> Result<V, BcdError> {
    let mut result = V::ZERO;
    for index in 0..W::DIGITS {
        let d = get_digit(bits, index);
        if index < V::DIGITS {
            result = set_digit(result, index, d);
        } else if d != 0 {
            return Err(BcdError::Overflow);
        }
    }
    Ok(result)
}


macro_rules! impl_from_narrower_bcd {
    ($narrow:ty => $($wide:ty),*) => {
        $(
            impl From<Bcd<$narrow>> for Bcd<$wide> {
                fn from(bcd: Bcd<$narrow>) -> Self {
                    // nibble positions are unchanged when zero-extending
                    Bcd::from_bits(bcd.to_bits().into())
                }
            }
        )*
    };
}

impl_from_narrower_bcd!(u8 => u16, u32, u64);
impl_from_narrower_bcd!(u16 => u32, u64);
impl_from_narrower_bcd!(u32 => u64);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    mod binary_to_bcd {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $t:ty; $input:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let bcd = binary_to_bcd::<$t>($input).unwrap();
                    assert_eq!(bcd.to_bits(), $expected);
                }
            };
            ($name:ident: $t:ty; $input:literal => overflow) => {
                #[test]
                fn $name() {
                    assert_eq!(binary_to_bcd::<$t>($input), Err(BcdError::Overflow));
                }
            };
        }

        impl_case!(case_0: u16; 0 => 0x0);
        impl_case!(case_12: u16; 0xC => 0x12);
        impl_case!(case_255: u16; 0xFF => 0x255);
        impl_case!(case_9999: u16; 9999 => 0x9999);
        impl_case!(case_10000: u16; 10000 => overflow);
        impl_case!(case_u16_max: u16; 65535 => overflow);

        impl_case!(case_u8_99: u8; 99 => 0x99);
        impl_case!(case_u8_100: u8; 100 => overflow);
        impl_case!(case_u8_255: u8; 255 => overflow);

        impl_case!(case_u32_12345678: u32; 12345678 => 0x12345678);
        impl_case!(case_u32_99999999: u32; 99999999 => 0x99999999);
        impl_case!(case_u32_100000000: u32; 100000000 => overflow);

        impl_case!(case_u64_1234567890123456: u64; 1234567890123456 => 0x1234567890123456);
        impl_case!(case_u64_9999999999999999: u64; 9999999999999999 => 0x9999999999999999);
        impl_case!(case_u64_10000000000000000: u64; 10000000000000000 => overflow);
        impl_case!(case_u64_max: u64; 18446744073709551615 => overflow);
    }

    mod bcd_to_binary {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $t:ty; $input:literal => invalid) => {
                #[test]
                fn $name() {
                    let bcd = Bcd::<$t>::from_bits($input);
                    assert_eq!(bcd_to_binary(bcd), Err(BcdError::InvalidDigit));
                }
            };
            ($name:ident: $t:ty; $input:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let bcd = Bcd::<$t>::from_bits($input);
                    assert_eq!(bcd_to_binary(bcd), Ok($expected));
                }
            };
        }

        impl_case!(case_0x0: u16; 0x0 => 0);
        impl_case!(case_0x12: u16; 0x12 => 0xC);
        impl_case!(case_0x255: u16; 0x255 => 0xFF);
        impl_case!(case_0x9999: u16; 0x9999 => 9999);
        impl_case!(case_0x99: u8; 0x99 => 99);
        impl_case!(case_0x0a: u8; 0x0A => invalid);
        impl_case!(case_0xa0: u8; 0xA0 => invalid);
        impl_case!(case_0xff: u8; 0xFF => invalid);
        impl_case!(case_0x1f00: u16; 0x1F00 => invalid);
        impl_case!(case_0x87654321: u32; 0x87654321 => 87654321);
        impl_case!(case_0xb0000000: u32; 0xB0000000 => invalid);
        impl_case!(case_0x9999999999999999: u64; 0x9999999999999999 => 9999999999999999);
        impl_case!(case_0x999999999999999f: u64; 0x999999999999999F => invalid);
    }

    #[test]
    fn lossy_decode_matches_for_valid() {
        let bcd = Bcd::from_bits(0x4096u16);
        assert_eq!(bcd.to_binary_lossy(), 4096);
    }

    #[test]
    fn lossy_decode_accumulates_invalid_nibbles() {
        // 1 * 10 + 15
        let bcd = Bcd::from_bits(0x1Fu8);
        assert_eq!(bcd.to_binary_lossy(), 25);
    }

    #[test]
    fn lossy_decode_all_fifteens() {
        // ((15 * 10 + 15) * 10 + 15) * 10 + 15
        let bcd = Bcd::from_bits(0xFFFFu16);
        assert_eq!(bcd.to_binary_lossy(), 16665);
    }

    #[test]
    fn lossy_decode_u64_all_fifteens() {
        let bcd = Bcd::from_bits(u64::MAX);
        let expected = (0..16).fold(0u64, |acc, _| acc * 10 + 15);
        assert_eq!(bcd.to_binary_lossy(), expected);
    }

    macro_rules! impl_widen_case {
        ($narrow:ty => $wide:ty; $bits:literal) => {
            paste! {
                #[test]
                fn [< widen_ $narrow _ $wide _ $bits >]() {
                    let narrow = Bcd::<$narrow>::from_bits($bits);
                    let wide: Bcd<$wide> = narrow.into();
                    assert_eq!(wide.to_bits(), $bits);
                    assert_eq!(narrow.to_binary().unwrap() as u64, wide.to_binary().unwrap() as u64);
                }
            }
        };
    }

    impl_widen_case!(u8 => u16; 0x42);
    impl_widen_case!(u8 => u64; 0x99);
    impl_widen_case!(u16 => u32; 0x1234);
    impl_widen_case!(u32 => u64; 0x87654321);

    #[test]
    fn cast_narrow_fits() {
        let wide = Bcd::from_bits(0x0000_0042u32);
        assert_eq!(wide.try_cast::<u8>(), Ok(Bcd::from_bits(0x42u8)));
    }

    #[test]
    fn cast_narrow_overflow() {
        let wide = Bcd::from_bits(0x0000_0142u32);
        assert_eq!(wide.try_cast::<u8>(), Err(BcdError::Overflow));
    }

    #[test]
    fn cast_keeps_invalid_digits() {
        let wide = Bcd::from_bits(0x00EEu16);
        let narrow = wide.try_cast::<u8>().unwrap();
        assert_eq!(narrow.to_bits(), 0xEE);
        assert!(!narrow.is_valid());
    }

    #[test]
    fn cast_widen() {
        let narrow = Bcd::from_bits(0x9876u16);
        assert_eq!(narrow.try_cast::<u64>().unwrap().to_bits(), 0x9876);
    }
}
