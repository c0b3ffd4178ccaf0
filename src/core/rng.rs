//! RNG module - piece selection sources
//!
//! Piece selection is uniform over the 7-entry catalog with no bag-style
//! anti-repetition guarantee: a kind may repeat arbitrarily often. The
//! source is injected into the game state so tests can substitute a fixed
//! sequence instead of relying on ambient randomness.

use crate::types::PieceKind;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Where the next piece comes from
pub trait PieceSource {
    /// Select the kind of the next piece to spawn
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform random selection over all seven kinds
#[derive(Debug, Clone)]
pub struct UniformPieceSource {
    rng: SimpleRng,
}

impl UniformPieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformPieceSource {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Cycles through a fixed sequence of kinds. Test support.
#[derive(Debug, Clone)]
pub struct ScriptedPieceSource {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPieceSource {
    /// Panics if `kinds` is empty.
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "scripted sequence must not be empty");
        Self { kinds, next: 0 }
    }
}

impl PieceSource for ScriptedPieceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
