//! Implementation of std::fmt traits & other stringification functions
//!

use crate::digit::{self, count_significant_digits, is_valid_digit};
use crate::stdlib::fmt;
use crate::stdlib::str;
use crate::word::BcdWord;
use crate::{Bcd, BcdError};


// size of stack buffer able to hold the digits of the widest word
const MAX_BUF_SIZE: usize = <u64 as BcdWord>::BUF_SIZE;


/// Write `bcd` as NUL-terminated decimal text into `buf`
///
/// Leading zero digits are not written; zero is written as "0". Returns
/// the number of digits written, not counting the terminating NUL.
///
/// Fails with InvalidDigit if any nibble is greater than nine, or with
/// Overflow if `buf` is shorter than `W::BUF_SIZE` (which fits every
/// value). Both checks happen before anything is written to `buf`.
///
/// ```
/// # use bcdint::{bcd_to_str, Bcd, BcdWord};
/// let mut buf = [0u8; <u16 as BcdWord>::BUF_SIZE];
/// let n = bcd_to_str(Bcd::from_bits(0x0420u16), &mut buf).unwrap();
/// assert_eq!(&buf[..n + 1], b"420\0");
/// ```
///
pub fn bcd_to_str<W: BcdWord>(bcd: Bcd<W>, buf: &mut [u8]) -> Result<usize, BcdError> {
    let bits = bcd.to_bits();
    if !digit::validate_digits(bits) {
        return Err(BcdError::InvalidDigit);
    }
    if buf.len() < W::BUF_SIZE {
        return Err(BcdError::Overflow);
    }

    let count = write_ascii_digits(bits, buf);
    buf[count] = b'\0';
    Ok(count)
}

/// Write significant digits of word into buf, returning count
///
/// Nibbles which are not decimal digits are written as '?'.
/// Buffer must hold at least `count_significant_digits(bits)` bytes.
///
fn write_ascii_digits<W: BcdWord>(bits: W, buf: &mut [u8]) -> usize {
    let count = count_significant_digits(bits);
    debug_assert!(buf.len() >= count);

    let significant = digit::digits(bits).skip(W::DIGITS - count);
    for (dst, d) in buf.iter_mut().zip(significant) {
        *dst = if is_valid_digit(d) { b'0' + d } else { b'?' };
    }
    count
}


impl<W: BcdWord> fmt::Display for Bcd<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; MAX_BUF_SIZE];
        let count = write_ascii_digits(self.to_bits(), &mut buf);
        let text = str::from_utf8(&buf[..count]).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "", text)
    }
}

impl<W: BcdWord> fmt::Debug for Bcd<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bcd({:#0width$x})", self.to_bits(), width = W::DIGITS + 2)
    }
}

impl<W: BcdWord> fmt::LowerHex for Bcd<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_bits(), f)
    }
}

impl<W: BcdWord> fmt::UpperHex for Bcd<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_bits(), f)
    }
}
