//! Random level construction
//!
//! Produces override records compatible with the resolver's on-disk layout.
//! Generation is seedable so a level can be reproduced from its seed alone.

use std::io;
use std::path::Path;

use rand::Rng;

use crate::sim::grid::PegGrid;
use crate::sim::level::{LevelDescriptor, LevelRecord, Rect, encode_record};

/// Pick a random goal, enemy anchor, and wall for the given grid.
///
/// The goal avoids the starting peg at index 0; the enemy avoids both the
/// starting peg and the goal. The wall lands in the middle band of the
/// screen.
pub fn random_level(grid: &PegGrid, rng: &mut impl Rng) -> LevelDescriptor {
    let peg_count = grid.len();
    let goal_idx = rng.random_range(1..peg_count);
    let enemy_idx = loop {
        let idx = rng.random_range(1..peg_count);
        if idx != goal_idx {
            break idx;
        }
    };
    let wall = Rect::new(
        rng.random_range(30..=90),
        rng.random_range(5..=20),
        rng.random_range(4..=12),
        rng.random_range(15..=35),
    );
    LevelDescriptor {
        goal_idx,
        enemy_idx,
        wall,
    }
}

/// Write a level descriptor to disk in the binary override layout
pub fn write_level(path: impl AsRef<Path>, level: &LevelDescriptor) -> io::Result<()> {
    let record = LevelRecord {
        goal_idx: level.goal_idx as i32,
        enemy_idx: level.enemy_idx as i32,
        wall: level.wall,
    };
    std::fs::write(path, encode_record(&record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn generated_levels_are_always_valid() {
        let grid = PegGrid::standard();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let level = random_level(&grid, &mut rng);
            assert!(level.goal_idx >= 1 && grid.contains_index(level.goal_idx));
            assert!(level.enemy_idx >= 1 && grid.contains_index(level.enemy_idx));
            assert_ne!(level.goal_idx, level.enemy_idx);
            assert!((4..=12).contains(&level.wall.w));
            assert!((15..=35).contains(&level.wall.h));
        }
    }

    #[test]
    fn same_seed_same_level() {
        let grid = PegGrid::standard();
        let a = random_level(&grid, &mut Pcg32::seed_from_u64(42));
        let b = random_level(&grid, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn written_level_round_trips_through_the_resolver() {
        use crate::sim::level::LevelResolver;

        let grid = PegGrid::standard();
        let level = random_level(&grid, &mut Pcg32::seed_from_u64(3));

        let dir = std::env::temp_dir().join(format!("peg-snap-gen-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("level.bin");
        write_level(&path, &level).unwrap();

        let resolved = LevelResolver::new(&path).resolve(&grid);
        assert_eq!(resolved, level);

        std::fs::remove_dir_all(&dir).ok();
    }
}
