use super::{compose, decompose, LexerState, INNER_MASK};
use pretty_assertions::assert_eq;

#[test]
fn initial_state_is_all_zero() {
    assert_eq!(LexerState::INITIAL.bits(), 0);
    assert_eq!(decompose(LexerState::INITIAL), (0, LexerState::INITIAL));
}

#[test]
fn compose_then_decompose_round_trips() {
    for outer in [0u8, 1, 2, 6, 13, 255] {
        for inner in [0u32, 1, 7, 14, INNER_MASK] {
            let inner = LexerState::from_bits(inner);
            let packed = compose(outer, inner);
            assert_eq!(decompose(packed), (outer, inner), "outer={outer}");
        }
    }
}

#[test]
fn bits_round_trip_through_persistence() {
    let packed = compose(3, LexerState::from_bits(9));
    let restored = LexerState::from_bits(packed.bits());
    assert_eq!(restored, packed);
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod props {
    use super::{compose, decompose, LexerState, INNER_MASK};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decompose_inverts_compose(outer in any::<u8>(), inner in 0u32..=INNER_MASK) {
            let inner = LexerState::from_bits(inner);
            prop_assert_eq!(decompose(compose(outer, inner)), (outer, inner));
        }
    }
}
