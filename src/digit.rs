//! Digit codec
//!
//! Reads and writes single decimal digits, four bits apiece, in a
//! storage word. Digit 0 is the least significant nibble.
//!
//! Nothing here decides whether a nibble is a *valid* digit; callers
//! receive the raw nibble (0-15) and apply their own error policy.
//!

use crate::stdlib::iter::FusedIterator;
use crate::word::{BcdWord, NIBBLE_BITS};


pub(crate) const NIBBLE_MASK: u8 = 0x0F;

/// Largest nibble value which is a valid decimal digit
pub const MAX_DIGIT: u8 = 9;


/// Return raw nibble at position `index` (0 = least significant)
#[inline]
pub fn get_digit<W: BcdWord>(word: W, index: usize) -> u8 {
    debug_assert!(index < W::DIGITS);
    let low_byte: u8 = (word >> (index * NIBBLE_BITS)).as_();
    low_byte & NIBBLE_MASK
}

/// Return copy of `word` with nibble `index` replaced by the low four bits of `digit`
#[inline]
pub fn set_digit<W: BcdWord>(word: W, index: usize, digit: u8) -> W {
    debug_assert!(index < W::DIGITS);
    let shift = index * NIBBLE_BITS;
    let mask = <W as From<u8>>::from(NIBBLE_MASK) << shift;
    (word & !mask) | (<W as From<u8>>::from(digit & NIBBLE_MASK) << shift)
}

/// True if nibble is a decimal digit
#[inline]
pub fn is_valid_digit(nibble: u8) -> bool {
    nibble <= MAX_DIGIT
}

/// True if every nibble in word is a decimal digit
pub fn validate_digits<W: BcdWord>(word: W) -> bool {
    digits(word).all(is_valid_digit)
}

/// Number of digits remaining after stripping leading zero nibbles
///
/// Zero has one significant digit.
///
pub(crate) fn count_significant_digits<W: BcdWord>(word: W) -> usize {
    let used_bits = (W::BITS - word.leading_zeros()) as usize;
    let count = (used_bits + NIBBLE_BITS - 1) / NIBBLE_BITS;
    count.max(1)
}

/// Iterate over the nibbles of word, most significant first
pub fn digits<W: BcdWord>(word: W) -> Digits<W> {
    Digits {
        word: word,
        lo: 0,
        hi: W::DIGITS,
    }
}


/// Iterator over the raw nibbles of a word, most significant first
///
/// Created by [`digits`] and [`Bcd::digits`](crate::Bcd::digits).
///
#[derive(Clone, Debug)]
pub struct Digits<W: BcdWord> {
    word: W,
    // remaining positions are lo..hi
    lo: usize,
    hi: usize,
}

impl<W: BcdWord> Iterator for Digits<W> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.lo == self.hi {
            return None;
        }
        self.hi -= 1;
        Some(get_digit(self.word, self.hi))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.hi - self.lo;
        (n, Some(n))
    }
}

impl<W: BcdWord> DoubleEndedIterator for Digits<W> {
    fn next_back(&mut self) -> Option<u8> {
        if self.lo == self.hi {
            return None;
        }
        let digit = get_digit(self.word, self.lo);
        self.lo += 1;
        Some(digit)
    }
}

impl<W: BcdWord> ExactSizeIterator for Digits<W> {}

impl<W: BcdWord> FusedIterator for Digits<W> {}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::Vec;

    #[test]
    fn get_each_digit() {
        let word: u16 = 0x1A09;
        assert_eq!(get_digit(word, 0), 9);
        assert_eq!(get_digit(word, 1), 0);
        assert_eq!(get_digit(word, 2), 0xA);
        assert_eq!(get_digit(word, 3), 1);
    }

    #[test]
    fn get_top_digit_u64() {
        let word: u64 = 0x7000_0000_0000_0000;
        assert_eq!(get_digit(word, 15), 7);
        assert_eq!(get_digit(word, 14), 0);
    }

    #[test]
    fn set_digit_preserves_neighbours() {
        let word: u32 = 0x1234_5678;
        assert_eq!(set_digit(word, 0, 9), 0x1234_5679);
        assert_eq!(set_digit(word, 4, 0), 0x1230_5678);
        assert_eq!(set_digit(word, 7, 9), 0x9234_5678);
    }

    #[test]
    fn set_digit_masks_high_bits() {
        let word: u8 = 0x00;
        assert_eq!(set_digit(word, 1, 0xF3), 0x30);
    }

    #[test]
    fn set_then_get() {
        let mut word: u64 = 0;
        for i in 0..16 {
            word = set_digit(word, i, (i % 10) as u8);
        }
        for i in 0..16 {
            assert_eq!(get_digit(word, i), (i % 10) as u8);
        }
    }

    #[test]
    fn valid_digits() {
        for n in 0..=9 {
            assert!(is_valid_digit(n));
        }
        for n in 10..=15 {
            assert!(!is_valid_digit(n));
        }
    }

    #[test]
    fn validate_words() {
        assert!(validate_digits(0x9999u16));
        assert!(validate_digits(0u64));
        assert!(!validate_digits(0x09A9u16));
        assert!(!validate_digits(0xF000_0000u32));
    }

    #[test]
    fn significant_digits() {
        assert_eq!(count_significant_digits(0u32), 1);
        assert_eq!(count_significant_digits(0x7u32), 1);
        assert_eq!(count_significant_digits(0x10u32), 2);
        assert_eq!(count_significant_digits(0x0100u16), 3);
        assert_eq!(count_significant_digits(0x9999_9999u32), 8);
    }

    #[test]
    fn iterate_digits() {
        let word: u16 = 0x0425;
        let forward: Vec<u8> = digits(word).collect();
        assert_eq!(forward, vec![0, 4, 2, 5]);

        let backward: Vec<u8> = digits(word).rev().collect();
        assert_eq!(backward, vec![5, 2, 4, 0]);
    }

    #[test]
    fn iterate_digits_from_both_ends() {
        let mut it = digits(0x1234u16);
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }
}
