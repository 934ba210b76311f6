//! The pinned pseudo-random generator behind every cast.
//!
//! [`Lcg48`] is the 48-bit linear congruential generator specified for
//! `java.util.Random`:
//!
//! ```text
//! state  = (seed ^ 0x5DEECE66D) mod 2^48            // seeding
//! state  = (state * 0x5DEECE66D + 0xB) mod 2^48     // one step
//! output = state >> (48 - bits)
//! ```
//!
//! Each coin toss consumes exactly one step and reads the top state bit.

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// A seeded 48-bit linear congruential generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg48 {
    state: u64,
}

impl Lcg48 {
    /// Create a generator from a 64-bit seed. Only the low 48 bits matter.
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance one step and return the top `bits` bits of the state.
    ///
    /// `bits` is clamped to 1..=32. A 32-bit draw reinterprets the result
    /// as signed, matching the reference generator's `int` output.
    pub fn next_bits(&mut self, bits: u32) -> i32 {
        let bits = bits.clamp(1, 32);
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.state >> (48 - bits)) as u32 as i32
    }

    /// A uniformly distributed signed 32-bit value.
    pub fn next_i32(&mut self) -> i32 {
        self.next_bits(32)
    }

    /// One unbiased binary draw: 0 or 1.
    ///
    /// Identical to the reference generator's `nextInt(2)` and
    /// `nextBoolean()`, both of which read the top bit of a single step.
    pub fn next_coin(&mut self) -> u8 {
        (self.next_bits(1) & 1) as u8
    }
}
