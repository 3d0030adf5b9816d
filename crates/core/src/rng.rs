//! RNG module - next-piece selection
//!
//! The placement engine never picks kinds itself; it pulls them from a
//! [`KindSource`]. Three policies ship here:
//!
//! - [`UniformKinds`]: each draw is uniform over the seven kinds (default)
//! - [`PieceQueue`]: the "7-bag" randomizer, one of each kind per shuffled bag
//! - [`KindSequence`]: a scripted, repeating sequence for replays and tests
//!
//! All randomness comes from [`SimpleRng`], a seeded LCG, so every policy is
//! deterministic for a given seed.

use crate::error::FieldError;
use crate::types::{PieceKind, PIECE_KIND_COUNT};

/// Supplies the kind of the next piece to spawn
///
/// Returning a [`PieceKind`] means a source can never hand out a kind
/// outside the seven defined ones.
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<F> KindSource for F
where
    F: FnMut() -> PieceKind,
{
    fn next_kind(&mut self) -> PieceKind {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random selection over the seven kinds
#[derive(Debug, Clone)]
pub struct UniformKinds {
    rng: SimpleRng,
}

impl UniformKinds {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformKinds {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindSource for UniformKinds {
    fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.next_range(PIECE_KIND_COUNT as u32) as usize;
        PieceKind::ALL[index]
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Current bag of pieces
    bag: [PieceKind; PIECE_KIND_COUNT],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        queue.refill_bag();
        queue
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> PieceKind {
        if self.bag_index < PIECE_KIND_COUNT {
            return self.bag[self.bag_index];
        }

        // Preview the next bag on a copy of the RNG so the following draw()
        // shuffles the same bag.
        let mut preview_rng = self.rng.clone();
        let mut next_bag = PieceKind::ALL;
        preview_rng.shuffle(&mut next_bag);
        next_bag[0]
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= PIECE_KIND_COUNT {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Pieces left in the current bag
    pub fn remaining_in_bag(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindSource for PieceQueue {
    fn next_kind(&mut self) -> PieceKind {
        self.draw()
    }
}

/// Scripted kinds, repeated from the start once exhausted
#[derive(Debug, Clone)]
pub struct KindSequence {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl KindSequence {
    pub fn new(kinds: Vec<PieceKind>) -> Result<Self, FieldError> {
        if kinds.is_empty() {
            return Err(FieldError::EmptyKindSequence);
        }
        Ok(Self { kinds, next: 0 })
    }

    /// Build from catalog indices; any index outside 0..7 is rejected
    pub fn from_indices(indices: &[usize]) -> Result<Self, FieldError> {
        let kinds = indices
            .iter()
            .map(|&i| {
                PieceKind::from_index(i).ok_or_else(|| FieldError::UnknownPieceKind(i.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(kinds)
    }

    /// Build from piece letters, e.g. `"IOTSZLJ"`; whitespace is ignored
    pub fn from_symbols(symbols: &str) -> Result<Self, FieldError> {
        let kinds = symbols
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                PieceKind::from_symbol(c).ok_or_else(|| FieldError::UnknownPieceKind(c.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(kinds)
    }
}

impl KindSource for KindSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_coerced() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_kinds_cover_all_seven() {
        let mut source = UniformKinds::new(42);
        let mut seen = [0usize; PIECE_KIND_COUNT];
        for _ in 0..7000 {
            seen[source.next_kind().index()] += 1;
        }
        // Loose bound: each kind should land near 1000.
        for (i, count) in seen.iter().enumerate() {
            assert!(*count > 700 && *count < 1300, "kind {i} drawn {count} times");
        }
    }

    #[test]
    fn test_uniform_kinds_reproducible() {
        let a: Vec<_> = {
            let mut s = UniformKinds::new(7);
            (0..50).map(|_| s.next_kind()).collect()
        };
        let b: Vec<_> = {
            let mut s = UniformKinds::new(7);
            (0..50).map(|_| s.next_kind()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_piece_queue_draws_all_seven() {
        let mut queue = PieceQueue::new(1);

        let mut drawn = Vec::new();
        for _ in 0..7 {
            drawn.push(queue.draw());
        }

        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
        assert!(queue.remaining_in_bag().is_empty());
    }

    #[test]
    fn test_piece_queue_peek_matches_draw_across_bags() {
        let mut queue = PieceQueue::new(3);
        for _ in 0..20 {
            let peeked = queue.peek();
            assert_eq!(peeked, queue.next_kind());
        }
    }

    #[test]
    fn test_kind_sequence_cycles() {
        let mut seq = KindSequence::from_symbols("I o T").unwrap();
        let drawn: Vec<_> = (0..5).map(|_| seq.next_kind()).collect();
        assert_eq!(
            drawn,
            vec![
                PieceKind::I,
                PieceKind::O,
                PieceKind::T,
                PieceKind::I,
                PieceKind::O
            ]
        );
    }

    #[test]
    fn test_kind_sequence_rejects_bad_input() {
        assert_eq!(
            KindSequence::new(Vec::new()).unwrap_err(),
            FieldError::EmptyKindSequence
        );
        assert_eq!(
            KindSequence::from_indices(&[0, 7]).unwrap_err(),
            FieldError::UnknownPieceKind("7".into())
        );
        assert_eq!(
            KindSequence::from_symbols("IX").unwrap_err(),
            FieldError::UnknownPieceKind("X".into())
        );
    }

    #[test]
    fn test_closure_is_a_kind_source() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            PieceKind::Z
        };
        assert_eq!(source.next_kind(), PieceKind::Z);
        assert_eq!(source.next_kind(), PieceKind::Z);
        drop(source);
        assert_eq!(calls, 2);
    }
}
