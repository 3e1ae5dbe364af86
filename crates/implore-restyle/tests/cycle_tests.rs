//! Cyclic assigner integration tests
//! Enhanced with property-based testing

mod common;

use std::num::NonZeroUsize;

use common::fixtures::nz;
use implore_restyle::{cyclic_index, pick, Cycle, DashPattern, Palette, Rgb, StylePattern};
use proptest::prelude::*;

fn gray_palette(n: usize) -> Palette {
    Palette::new((0..n).map(|i| Rgb::new(i as f64 / 256.0, 0.0, 0.0)).collect()).unwrap()
}

// === Fixed points ===

#[test]
fn test_seven_color_wrap() {
    let palette = gray_palette(7);
    assert_eq!(palette.pick(nz(8)), palette.colors()[0]);
    assert_eq!(palette.pick(nz(9)), palette.colors()[1]);
}

#[test]
fn test_four_style_wrap() {
    let styles = StylePattern::default();
    assert_eq!(styles.pick(nz(4)), DashPattern::DashDot);
    assert_eq!(styles.pick(nz(8)), DashPattern::DashDot);
    assert_eq!(styles.pick(nz(9)), DashPattern::Solid);
}

#[test]
fn test_large_ordinal() {
    assert_eq!(cyclic_index(nz(usize::MAX), nz(1)), 1);
    let index = cyclic_index(nz(usize::MAX), nz(7));
    assert!((1..=7).contains(&index));
}

proptest! {
    #[test]
    fn test_pick_matches_zero_based_modulo(
        items in prop::collection::vec(any::<u32>(), 1..40),
        ordinal in 1usize..10_000,
    ) {
        let o = NonZeroUsize::new(ordinal).unwrap();
        let expected = &items[(ordinal - 1) % items.len()];
        prop_assert_eq!(pick(o, &items), Some(expected));
    }

    #[test]
    fn test_index_always_in_range(ordinal in 1usize.., len in 1usize..1_000) {
        let index = cyclic_index(
            NonZeroUsize::new(ordinal).unwrap(),
            NonZeroUsize::new(len).unwrap(),
        );
        prop_assert!(index >= 1 && index <= len);
    }

    #[test]
    fn test_wraps_exactly_at_period(
        items in prop::collection::vec(any::<u8>(), 1..40),
        ordinal in 1usize..1_000,
    ) {
        let cycle = Cycle::new(items.clone()).unwrap();
        let n = items.len();
        let o = NonZeroUsize::new(ordinal).unwrap();
        let shifted = NonZeroUsize::new(ordinal + n).unwrap();
        prop_assert_eq!(cycle.pick(o), cycle.pick(shifted));
        prop_assert_eq!(
            cycle.pick(NonZeroUsize::new(n + 1).unwrap()),
            cycle.pick(NonZeroUsize::MIN)
        );
    }
}
