//! MT19937 seeded the way CPython's `random.seed(int)` seeds it.
//!
//! Question assignments made by earlier deployments were drawn with
//! `random.seed(seed); random.randint(0, n - 1)`. Reproducing that sequence
//! exactly keeps every learner on the question they already had.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// 32-bit Mersenne Twister.
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Seed from a non-negative integer, matching `random.seed(seed)`.
    ///
    /// CPython splits the integer into little-endian 32-bit words and feeds
    /// them to `init_by_array`; zero becomes the single key `[0]`.
    pub fn from_seed_u64(seed: u64) -> Self {
        let lo = seed as u32;
        let hi = (seed >> 32) as u32;
        if hi == 0 {
            Self::from_key(&[lo])
        } else {
            Self::from_key(&[lo, hi])
        }
    }

    /// Reference `init_by_array`.
    pub fn from_key(key: &[u32]) -> Self {
        let mut mt = Self::from_u32(19_650_218);
        let key: &[u32] = if key.is_empty() { &[0] } else { key };

        let state = &mut mt.state;
        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..N.max(key.len()) {
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            state[i] = (state[i] ^ prev.wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            state[i] = (state[i] ^ prev.wrapping_mul(1_566_083_941)).wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
        }
        state[0] = UPPER_MASK;
        mt
    }

    /// Reference `init_genrand`.
    fn from_u32(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            state[i] = 1_812_433_253u32.wrapping_mul(prev).wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    fn twist(&mut self) {
        for k in 0..N {
            let y = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            self.state[k] = self.state[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }

    fn genrand_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// `random.getrandbits(k)` for `1 <= k <= 64`.
    ///
    /// Words are filled least significant first and only the last word is
    /// truncated, as CPython does.
    pub fn getrandbits(&mut self, k: u32) -> u64 {
        debug_assert!((1..=64).contains(&k));
        if k <= 32 {
            return u64::from(self.genrand_u32() >> (32 - k));
        }
        let lo = u64::from(self.genrand_u32());
        let hi = u64::from(self.genrand_u32() >> (64 - k));
        (hi << 32) | lo
    }

    /// Uniform draw from `[0, n)`, matching `random.randrange(n)`.
    ///
    /// Rejection sampling on `bit_length(n)` random bits. `n` must be
    /// positive.
    pub fn below(&mut self, n: u64) -> u64 {
        debug_assert!(n > 0);
        let k = u64::BITS - n.leading_zeros();
        loop {
            let r = self.getrandbits(k);
            if r < n {
                return r;
            }
        }
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference values from CPython 3.11 `random`.

    #[test]
    fn seed_zero_first_word() {
        // random.seed(0); random.getrandbits(32)
        let mut mt = Mt19937::from_seed_u64(0);
        assert_eq!(mt.getrandbits(32), 3_626_764_237);
    }

    #[test]
    fn below_matches_randint() {
        // random.seed(19723113); [random.randint(0, n - 1) for n in (1, 5, 10, 37)]
        let draws: Vec<u64> = [1u64, 5, 10, 37]
            .iter()
            .map(|&n| Mt19937::from_seed_u64(19_723_113).below(n))
            .collect();
        assert_eq!(draws, vec![0, 3, 6, 25]);
    }

    #[test]
    fn below_stays_in_range() {
        let mut mt = Mt19937::from_seed_u64(42);
        for n in 1..200u64 {
            assert!(mt.below(n) < n);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Mt19937::from_seed_u64(77_472_050);
        let mut b = Mt19937::from_seed_u64(77_472_050);
        for _ in 0..1500 {
            assert_eq!(a.genrand_u32(), b.genrand_u32());
        }
    }

    #[test]
    fn wide_draws_fill_low_word_first() {
        // random.seed(0); random.getrandbits(64)
        assert_eq!(
            Mt19937::from_seed_u64(0).getrandbits(64),
            7_106_521_602_475_165_645
        );
        // random.seed(19723113); random.getrandbits(40)
        assert_eq!(
            Mt19937::from_seed_u64(19_723_113).getrandbits(40),
            555_764_322_438
        );
    }
}
