//! common routines to be included by benches

use bcdint::{Bcd, BcdWord, binary_to_bcd};
use num_traits::{FromPrimitive, ToPrimitive};


/// Random binary values in the decimal range of word W
pub fn random_binaries<W: BcdWord>(count: usize, seed: u64) -> Vec<W>
where
    W: FromPrimitive,
{
    let mut rng = oorandom::Rand64::new(seed as u128);
    let max = W::MAX_DECIMAL.to_u64().unwrap();

    (0..count)
        .map(|_| rng.rand_range(0..max + 1))
        .map(|n| W::from_u64(n).unwrap())
        .collect()
}

/// Random valid BCD values of word W
pub fn random_bcds<W: BcdWord>(count: usize, seed: u64) -> Vec<Bcd<W>>
where
    W: FromPrimitive,
{
    random_binaries::<W>(count, seed)
        .into_iter()
        .map(|n| binary_to_bcd(n).unwrap())
        .collect()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T: Copy> RandomIterator<'a, T> {
    pub fn new(v: &'a Vec<T>) -> Self {
        let seed = v.as_ptr() as u64;
        Self::new_with_seed(v, seed)
    }

    pub fn new_with_seed(v: &'a Vec<T>, seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        self.v[idx]
    }
}
