// Copyright 2026 The bcdint Developers
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-width Binary-Coded-Decimal integers
//!
//! A [`Bcd`] packs one decimal digit into each 4-bit nibble of an unsigned
//! storage word, most significant digit first, so the value 1234 is stored
//! in a `u16` as the bit pattern `0x1234`.
//!
//! Addition and multiplication work digit-by-digit directly on the packed
//! form, so results and overflow boundaries are those of a fixed-width
//! decimal calculator: a `Bcd<u16>` holds 0 through 9999, and 9999 + 1
//! overflows.
//!
//! The storage word is a type parameter ([`BcdWord`] is implemented for
//! `u8`, `u16`, `u32`, and `u64`). The default, [`DefaultWord`], is `u32`
//! unless the environment variable `RUST_BCDINT_DEFAULT_WIDTH` is set to
//! 8, 16, 32, or 64 when the crate is built.
//!
//! Every fallible operation returns a `Result` with a [`BcdError`]:
//! either a nibble of an operand was not a decimal digit, or the result
//! needs more decimal digits than the word holds. When both apply, the
//! invalid digit is reported.
//!
//! # Example
//!
//! ```
//! use bcdint::{Bcd, BcdError, binary_to_bcd, bcd_add, bcd_multiply, str_to_bcd};
//!
//! let twelve = binary_to_bcd(12u16).unwrap();
//! assert_eq!(twelve.to_bits(), 0x12);
//!
//! let sum = bcd_add(Bcd::from_bits(0x0099u16), Bcd::from_bits(0x0001)).unwrap();
//! assert_eq!(sum.to_bits(), 0x0100);
//!
//! let overflow = bcd_multiply(Bcd::from_bits(0x9999u16), Bcd::from_bits(0x0002));
//! assert_eq!(overflow, Err(BcdError::Overflow));
//!
//! let (value, rest) = str_to_bcd::<u16>("042x").unwrap();
//! assert_eq!(value.to_bits(), 0x42);
//! assert_eq!(rest, "x");
//! assert_eq!(value.to_string(), "42");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde_crate;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;

// pub type DefaultWord = ${RUST_BCDINT_DEFAULT_WIDTH} or u32;
include!(concat!(env!("OUT_DIR"), "/default_word.rs"));

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

pub mod word;
pub use word::BcdWord;

pub mod digit;
pub use digit::Digits;

// binary_to_bcd, bcd_to_binary, From<Bcd<_>> widening
mod impl_convert;
pub use impl_convert::{binary_to_bcd, bcd_to_binary};

// str_to_bcd
mod parsing;
pub use parsing::str_to_bcd;

// bcd_to_str, Display, LowerHex, ...
mod impl_fmt;
pub use impl_fmt::bcd_to_str;

mod impl_trait_from_str;

mod arithmetic;
pub use arithmetic::{bcd_add, bcd_multiply};

// Add<T>, Mul<T>, etc...
mod impl_ops;

// Implementations of num_traits
mod impl_num;

#[cfg(feature = "serde")]
mod impl_serde;


/// A BCD value stored in the default word
pub type DefaultBcd = Bcd<DefaultWord>;


/// A packed Binary-Coded-Decimal integer
///
/// Each nibble of the storage word `W` holds one decimal digit, most
/// significant digit in the highest nibble; a `Bcd<W>` holds
/// `W::DIGITS` digits.
///
/// Any bit pattern may be stored: a word with a nibble in 10-15 is an
/// *invalid* BCD value, which every checked operation reports as
/// [`BcdError::InvalidDigit`]. See [`Bcd::is_valid`].
///
/// Comparison and hashing use the packed word. For valid values the
/// packed order is the numeric order.
///
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Bcd<W: BcdWord = DefaultWord>(W);


impl<W: BcdWord> Bcd<W> {
    /// The value 0
    pub const ZERO: Self = Bcd(W::ZERO);

    /// The value 1
    pub const ONE: Self = Bcd(W::ONE);

    /// Largest representable value (every digit is nine)
    pub const MAX: Self = Bcd(W::ALL_NINES);

    /// Number of decimal digits held by this type
    pub const DIGITS: usize = W::DIGITS;

    /// Wrap packed bits; no validation is performed
    #[inline]
    pub const fn from_bits(bits: W) -> Self {
        Bcd(bits)
    }

    /// Return the packed bits
    #[inline]
    pub fn to_bits(self) -> W {
        self.0
    }

    /// True if every nibble is a decimal digit
    #[inline]
    pub fn is_valid(self) -> bool {
        digit::validate_digits(self.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == W::ZERO
    }

    /// Raw nibble at position `index` (0 is the least significant digit)
    ///
    /// # Panics
    ///
    /// If `index >= Self::DIGITS`.
    ///
    pub fn digit(self, index: usize) -> u8 {
        assert!(index < W::DIGITS, "digit index {} out of range", index);
        digit::get_digit(self.0, index)
    }

    /// Copy of self with nibble `index` replaced by `value`
    ///
    /// Only the low four bits of `value` are used; values above nine
    /// produce an invalid BCD.
    ///
    /// # Panics
    ///
    /// If `index >= Self::DIGITS`.
    ///
    pub fn with_digit(self, index: usize, value: u8) -> Self {
        assert!(index < W::DIGITS, "digit index {} out of range", index);
        Bcd(digit::set_digit(self.0, index, value))
    }

    /// Iterate over all nibbles, most significant first
    pub fn digits(self) -> Digits<W> {
        digit::digits(self.0)
    }

    /// Number of digits without leading zeros ("0" has one digit)
    pub fn significant_digits(self) -> usize {
        digit::count_significant_digits(self.0)
    }

    /// Encode binary value, see [`binary_to_bcd`]
    #[inline]
    pub fn from_binary(value: W) -> Result<Self, BcdError> {
        binary_to_bcd(value)
    }

    /// Decode to binary value, see [`bcd_to_binary`]
    #[inline]
    pub fn to_binary(self) -> Result<W, BcdError> {
        bcd_to_binary(self)
    }

    /// Decode to binary without checking digits
    ///
    /// Nibbles above nine are accumulated as if they were digits.
    /// Equal to [`Bcd::to_binary`] for valid values.
    ///
    pub fn to_binary_lossy(self) -> W {
        impl_convert::accumulate_digits(self.0)
    }

    /// Sum of self and rhs, see [`bcd_add`]
    #[inline]
    pub fn try_add(self, rhs: Self) -> Result<Self, BcdError> {
        bcd_add(self, rhs)
    }

    /// Product of self and rhs, see [`bcd_multiply`]
    #[inline]
    pub fn try_mul(self, rhs: Self) -> Result<Self, BcdError> {
        bcd_multiply(self, rhs)
    }

    /// Sum, or None on invalid digit or overflow
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        bcd_add(self, rhs).ok()
    }

    /// Product, or None on invalid digit or overflow
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        bcd_multiply(self, rhs).ok()
    }

    /// Re-pack digits into a different storage word
    ///
    /// Fails with Overflow if a nonzero nibble does not fit in the
    /// target word. Digits are copied unchecked, so an invalid value
    /// stays invalid.
    ///
    pub fn try_cast<V: BcdWord>(self) -> Result<Bcd<V>, BcdError> {
        impl_convert::cast_digits(self.0).map(Bcd)
    }

    /// Write decimal text into buf, see [`bcd_to_str`]
    #[inline]
    pub fn to_str_buf(self, buf: &mut [u8]) -> Result<usize, BcdError> {
        bcd_to_str(self, buf)
    }
}


/// Failure of a BCD conversion or arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BcdError {
    /// A nibble of an operand is greater than nine
    InvalidDigit,
    /// The result needs more decimal digits than the word holds
    /// (or an output buffer is too small to hold any value)
    Overflow,
}

impl fmt::Display for BcdError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use BcdError::*;

        match *self {
            InvalidDigit => f.write_str("invalid BCD digit"),
            Overflow => f.write_str("BCD overflow"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BcdError {}


/// Failure to parse a whole string as a BCD value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBcdError {
    /// No digits in string
    Empty,
    /// Character which is not an ASCII decimal digit
    InvalidCharacter(char),
    /// Value needs more decimal digits than the word holds
    Overflow,
}

impl fmt::Display for ParseBcdError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBcdError::*;

        match *self {
            Empty => f.write_str("cannot parse BCD from empty string"),
            InvalidCharacter(c) => write!(f, "invalid character {:?} in BCD string", c),
            Overflow => f.write_str("number too large to fit in BCD"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBcdError {}




#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use crate::stdlib::ToString;
    use paste::paste;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
