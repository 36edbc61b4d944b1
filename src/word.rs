//! Storage word definitions
//!
//! The unsigned primitive integers which may hold a packed BCD value,
//! and the constants derived from their width.
//!

use crate::stdlib::fmt;
use crate::stdlib::hash::Hash;


/// Number of bits used by a single BCD digit
pub const NIBBLE_BITS: usize = 4;


/// All the information needed about the integer storing a packed BCD value
///
/// Implemented for `u8`, `u16`, `u32`, and `u64`, holding 2, 4, 8, and 16
/// decimal digits respectively.
///
pub trait BcdWord
    : 'static
    + Copy
    + Default
    + Hash
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + fmt::UpperHex
    + num_integer::Integer
    + num_traits::PrimInt
    + num_traits::Unsigned
    + num_traits::AsPrimitive<u8>
    + From<u8>
{
    /// Width of the word in bits
    const BITS: u32;

    /// Number of decimal digits the word holds
    const DIGITS: usize = Self::BITS as usize / NIBBLE_BITS;

    /// Size of a buffer able to hold any formatted value plus terminator
    const BUF_SIZE: usize = Self::DIGITS + 1;

    /// Largest binary value which has a BCD encoding (10^DIGITS - 1)
    const MAX_DECIMAL: Self;

    /// Packed encoding of `MAX_DECIMAL`: every nibble is nine
    const ALL_NINES: Self;

    const ZERO: Self;
    const ONE: Self;
}


macro_rules! impl_bcd_word {
    ($t:ty) => {
        impl BcdWord for $t {
            const BITS: u32 = <$t>::BITS;

            const MAX_DECIMAL: Self = (10u64.pow(<$t>::BITS / NIBBLE_BITS as u32) - 1) as $t;

            // 0x1111.. * 9
            const ALL_NINES: Self = <$t>::MAX / 0xF * 9;

            const ZERO: Self = 0;
            const ONE: Self = 1;
        }
    };
}

impl_bcd_word!(u8);
impl_bcd_word!(u16);
impl_bcd_word!(u32);
impl_bcd_word!(u64);
