//! Tile dealing tests.
//!
//! These tests verify dealt rounds respect the pools for every legal
//! large-tile count and every seed.

use numbers_round::core::{RoundConfig, RoundError, RoundRng, LARGE_POOL};
use numbers_round::pool::TilePoolGenerator;
use proptest::prelude::*;

fn count_of(values: &[i64], v: i64) -> usize {
    values.iter().filter(|&&x| x == v).count()
}

proptest! {
    /// Every deal has six tiles drawn without replacement and a target in range.
    #[test]
    fn prop_deal_respects_pools(seed in any::<u64>(), large_count in 0usize..=4) {
        let generator = TilePoolGenerator::default();
        let setup = generator.generate(large_count, &mut RoundRng::new(seed)).unwrap();
        let values: Vec<i64> = setup.values().collect();

        prop_assert_eq!(values.len(), 6);
        prop_assert_eq!(values.iter().filter(|v| LARGE_POOL.contains(*v)).count(), large_count);
        for large in LARGE_POOL {
            prop_assert!(count_of(&values, large) <= 1);
        }
        for small in 1..=10 {
            prop_assert!(count_of(&values, small) <= 2);
        }
        prop_assert!(values.iter().all(|v| LARGE_POOL.contains(v) || (1..=10).contains(v)));
        prop_assert!((100..=999).contains(&setup.target()));
    }

    /// Tile IDs are unique slot indices.
    #[test]
    fn prop_tile_ids_are_slots(seed in any::<u64>(), large_count in 0usize..=4) {
        let generator = TilePoolGenerator::default();
        let setup = generator.generate(large_count, &mut RoundRng::new(seed)).unwrap();

        for (slot, tile) in setup.tiles().iter().enumerate() {
            prop_assert_eq!(tile.id.index(), slot);
        }
    }
}

/// Test that targets cover the whole range over many deals.
#[test]
fn test_target_spread() {
    let generator = TilePoolGenerator::default();
    let mut rng = RoundRng::new(2024);

    let targets: Vec<i64> = (0..2000)
        .map(|_| generator.generate(0, &mut rng).unwrap().target())
        .collect();

    assert!(targets.iter().all(|t| (100..=999).contains(t)));
    assert!(targets.iter().any(|&t| t < 200));
    assert!(targets.iter().any(|&t| t > 900));
}

/// Test that a small value can be dealt twice but never three times.
#[test]
fn test_small_pool_double_multiplicity() {
    let config = RoundConfig::new().with_small_pool(vec![1, 1, 2, 2]).with_tile_count(4);
    let generator = TilePoolGenerator::new(config).unwrap();

    let setup = generator.generate(0, &mut RoundRng::new(8)).unwrap();
    let mut values: Vec<i64> = setup.values().collect();
    values.sort();

    assert_eq!(values, vec![1, 1, 2, 2]);
}

/// Test that impossible deals are rejected up front.
#[test]
fn test_invalid_counts() {
    let generator = TilePoolGenerator::default();
    let mut rng = RoundRng::new(1);

    assert!(matches!(
        generator.generate(6, &mut rng),
        Err(RoundError::InvalidLargeCount { requested: 6, max: 4 })
    ));
}
