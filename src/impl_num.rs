//! Code for num_traits

use num_traits::{Bounded, CheckedAdd, CheckedMul, One, Zero};

use crate::word::BcdWord;
use crate::Bcd;


impl<W: BcdWord> Zero for Bcd<W> {
    #[inline]
    fn zero() -> Self {
        Bcd::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.to_bits() == W::ZERO
    }
}

impl<W: BcdWord> One for Bcd<W> {
    #[inline]
    fn one() -> Self {
        Bcd::ONE
    }
}

impl<W: BcdWord> Bounded for Bcd<W> {
    #[inline]
    fn min_value() -> Self {
        Bcd::ZERO
    }

    #[inline]
    fn max_value() -> Self {
        Bcd::MAX
    }
}

impl<W: BcdWord> CheckedAdd for Bcd<W> {
    #[inline]
    fn checked_add(&self, v: &Self) -> Option<Self> {
        crate::bcd_add(*self, *v).ok()
    }
}

impl<W: BcdWord> CheckedMul for Bcd<W> {
    #[inline]
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        crate::bcd_multiply(*self, *v).ok()
    }
}
