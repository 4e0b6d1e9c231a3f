//! Password driven pixel order.
//!
//! The password selects WHERE data is hidden, it never transforms the data.
//! The generator reproduces the classic 48-bit linear congruential generator
//! of `java.util.Random` bit for bit, the resulting order is part of the
//! image format.

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// 32-bit string hash over the UTF-16 code units of the password,
/// `h = 31 * h + unit` with wrap-around.
pub fn password_seed(password: &str) -> i32 {
    password
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// 48-bit linear congruential generator
#[derive(Debug, Clone)]
pub struct Lcg48 {
    state: u64,
}

impl Lcg48 {
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
        }
    }

    /// advances the state and returns its top `bits` bits
    pub fn next(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = (self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND)) & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// uniformly distributed value in `0..bound`, `bound` must be positive
    pub fn next_int(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0);
        if bound & bound.wrapping_neg() == bound {
            return ((bound as i64 * self.next(31) as i64) >> 31) as i32;
        }
        loop {
            let bits = self.next(31);
            let val = bits % bound;
            // reject the last incomplete range to avoid modulo bias
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }
}

/// Bijection from sequence position to pixel index (`y * width + x`).
///
/// The permutation is deterministic for a given password and pixel count,
/// which lets the decoder retrace the encoder's steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<u32>,
}

impl Permutation {
    /// Fisher-Yates shuffle of `0..length`, driven by the password seed
    pub fn from_password(password: &str, length: usize) -> Self {
        let mut rng = Lcg48::new(password_seed(password) as i64);
        let mut indices: Vec<u32> = (0..length as u32).collect();

        for i in (1..length).rev() {
            let j = rng.next_int(i as i32 + 1) as usize;
            indices.swap(i, j);
        }

        Self { indices }
    }

    /// Create an identity permutation (no shuffling).
    pub fn identity(length: usize) -> Self {
        Self {
            indices: (0..length as u32).collect(),
        }
    }

    /// pixel index visited at sequence position `position`
    #[inline]
    pub fn pixel_index(&self, position: usize) -> usize {
        self.indices[position] as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }
}
