//! Persisted scanner state.
//!
//! A [`LexerState`] captures exactly enough information for a scanner to
//! resume at the next input position with results identical to an
//! uninterrupted scan. Hosts treat it as an opaque integer; the layout below
//! is private to the scanners.
//!
//! Layered scanners (the preprocessor scanner wrapping the C/C++ scanner)
//! pack two automata into one value: the outer scanner's local state is
//! shifted left by [`INNER_BITS`] and ORed with the inner scanner's state.
//! [`compose`] and [`decompose`] are exact inverses for every reachable
//! state pair, which keeps suspension mid-directive and mid-literal
//! simultaneously representable.

/// Opaque, persistable scanner state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LexerState(u32);

impl LexerState {
    /// The fresh-start state every scanner begins in.
    pub const INITIAL: LexerState = LexerState(0);

    /// Reconstruct a state from its persisted bits.
    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        LexerState(bits)
    }

    /// The persisted representation.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }
}

/// Bit width reserved for the inner (wrapped) scanner's state.
pub const INNER_BITS: u32 = 8;

/// Mask covering the inner scanner's state bits.
pub const INNER_MASK: u32 = (1 << INNER_BITS) - 1;

/// Pack an outer scanner state together with the wrapped scanner's state.
///
/// # Contract
///
/// The inner state must fit in [`INNER_BITS`] bits; every inner scanner
/// keeps its local state enum small enough for this to hold.
#[inline]
pub fn compose(outer: u8, inner: LexerState) -> LexerState {
    debug_assert!(
        inner.0 <= INNER_MASK,
        "inner state {} exceeds {INNER_BITS} bits",
        inner.0
    );
    LexerState((u32::from(outer) << INNER_BITS) | (inner.0 & INNER_MASK))
}

/// Unpack a composite state into `(outer, inner)`.
///
/// Exact inverse of [`compose`] for all reachable state pairs.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "outer state occupies exactly the 8 bits above INNER_BITS"
)]
pub fn decompose(state: LexerState) -> (u8, LexerState) {
    (
        ((state.0 >> INNER_BITS) & 0xFF) as u8,
        LexerState(state.0 & INNER_MASK),
    )
}

#[cfg(test)]
mod tests;
