//! PCG32 random number generator
//!
//! PCG-XSH-RR: 64-bit LCG state, 32-bit output. Seeded and unseeded streams
//! are bit-exact with the reference `pcg32_random_r` / `pcg32_boundedrand_r`
//! routines, which the combat tests depend on.

use rand::{RngCore, SeedableRng};
use serde::Serialize;

/// LCG multiplier
pub const PCG_MULTIPLIER: u64 = 6364136223846793005;

/// Default state (`PCG32_INITIALIZER`)
pub const PCG_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;

/// Default increment (`PCG32_INITIALIZER`)
pub const PCG_DEFAULT_INC: u64 = 0xda3e39cb94b95bdb;

/// PCG32 generator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pcg32 {
    state: u64,
    /// Stream selector, always odd
    inc: u64,
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self {
            state: PCG_DEFAULT_STATE,
            inc: PCG_DEFAULT_INC,
        }
    }
}

impl Pcg32 {
    /// Seed a generator from an initial state and a stream id.
    ///
    /// Starts from state 0, selects the stream, advances once, mixes in the
    /// seed and advances again.
    pub fn new(initstate: u64, initseq: u64) -> Self {
        let mut rng = Self {
            state: 0,
            inc: (initseq << 1) | 1,
        };
        rng.step();
        rng.state = rng.state.wrapping_add(initstate);
        rng.step();
        rng
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    pub fn inc(&self) -> u64 {
        self.inc
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let old = self.state;
        self.state = old.wrapping_mul(PCG_MULTIPLIER).wrapping_add(self.inc);
        old
    }

    /// XSH-RR output permutation of the pre-update state
    #[inline]
    fn output(old: u64) -> u32 {
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Next uniformly distributed 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        Self::output(self.step())
    }

    /// Uniform value in `[0, bound)`. A zero bound yields 0 without drawing.
    pub fn bounded(&mut self, bound: u32) -> u32 {
        bounded_u32(self, bound)
    }
}

/// Unbiased draw in `[0, bound)` by rejection.
///
/// Values below `2^32 mod bound` are discarded so the accepted range is a
/// multiple of `bound`.
pub fn bounded_u32<R: RngCore + ?Sized>(rng: &mut R, bound: u32) -> u32 {
    if bound == 0 {
        return 0;
    }
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let r = rng.next_u32();
        if r >= threshold {
            return r % bound;
        }
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        Pcg32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(Pcg32::next_u32(self));
        let lo = u64::from(Pcg32::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = Pcg32::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    /// `initstate` little-endian followed by `initseq` little-endian
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u8; 8];
        let mut seq = [0u8; 8];
        state.copy_from_slice(&seed[..8]);
        seq.copy_from_slice(&seed[8..]);
        Self::new(u64::from_le_bytes(state), u64::from_le_bytes(seq))
    }
}

/// Process-wide default generator.
///
/// Starts at `PCG32_INITIALIZER`. Callers that need determinism seed it
/// before anything draws from it, or hold their own [`Pcg32`].
pub mod global {
    use super::Pcg32;
    use std::sync::Mutex;

    static GLOBAL_RNG: Mutex<Pcg32> = Mutex::new(Pcg32 {
        state: super::PCG_DEFAULT_STATE,
        inc: super::PCG_DEFAULT_INC,
    });

    /// Run `f` with exclusive access to the shared generator
    pub fn with<T>(f: impl FnOnce(&mut Pcg32) -> T) -> T {
        // A panic while holding the lock leaves the state valid; keep using it.
        let mut guard = GLOBAL_RNG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    pub fn seed(initstate: u64, initseq: u64) {
        with(|rng| *rng = Pcg32::new(initstate, initseq));
    }

    /// Restore the `PCG32_INITIALIZER` state
    pub fn reset() {
        with(|rng| *rng = Pcg32::default());
    }

    pub fn next_u32() -> u32 {
        with(|rng| rng.next_u32())
    }

    pub fn bounded(bound: u32) -> u32 {
        with(|rng| rng.bounded(bound))
    }
}
