//! Level descriptor and binary override resolver
//!
//! A level override is a fixed 28-byte little-endian record on disk. The
//! layout is a compatibility contract with existing level files (and the
//! generator scripts that produce them): field order and width must not
//! change.
//!
//! The resolver makes a single load attempt per reset. Every failure mode -
//! missing file, short read, magic mismatch, out-of-range peg index - falls
//! back to the hardcoded defaults, logged but never surfaced to the
//! simulation, which always receives a valid descriptor.

use std::fs;
use std::path::PathBuf;

use glam::Vec2;

use super::grid::PegGrid;
use crate::consts::{LEVEL_FILE, LEVEL_MAGIC};

/// Axis-aligned wall rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True if the point lies strictly inside the rectangle. Points exactly
    /// on the boundary are outside; the wall bounce test depends on this.
    #[inline]
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.x as f32
            && p.x < (self.x + self.w) as f32
            && p.y > self.y as f32
            && p.y < (self.y + self.h) as f32
    }
}

/// The overridable per-session level parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDescriptor {
    pub goal_idx: usize,
    pub enemy_idx: usize,
    pub wall: Rect,
}

impl LevelDescriptor {
    /// Hardcoded defaults: goal on the last peg, enemy on the middle one.
    pub fn default_for(grid: &PegGrid) -> Self {
        Self {
            goal_idx: grid.len() - 1,
            enemy_idx: grid.len() / 2,
            wall: Rect::new(80, 10, 4, 30),
        }
    }
}

/// On-disk record size: magic + six i32 fields
pub const RECORD_SIZE: usize = 28;

/// Raw record as stored on disk, before index validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRecord {
    pub goal_idx: i32,
    pub enemy_idx: i32,
    pub wall: Rect,
}

/// Decode a record from exactly [`RECORD_SIZE`] bytes.
///
/// Returns `None` on a short (or long) buffer or a magic mismatch. Field
/// order: magic, goal, enemy, wall x/y/w/h, all little-endian 32-bit.
pub fn decode_record(bytes: &[u8]) -> Option<LevelRecord> {
    if bytes.len() != RECORD_SIZE {
        return None;
    }
    let mut fields = bytes
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]));
    let magic = fields.next()? as u32;
    if magic != LEVEL_MAGIC {
        return None;
    }
    let goal_idx = fields.next()?;
    let enemy_idx = fields.next()?;
    let x = fields.next()?;
    let y = fields.next()?;
    let w = fields.next()?;
    let h = fields.next()?;
    Some(LevelRecord {
        goal_idx,
        enemy_idx,
        wall: Rect::new(x, y, w, h),
    })
}

/// Encode a record into the on-disk layout
pub fn encode_record(record: &LevelRecord) -> [u8; RECORD_SIZE] {
    let mut out = [0u8; RECORD_SIZE];
    let fields = [
        LEVEL_MAGIC as i32,
        record.goal_idx,
        record.enemy_idx,
        record.wall.x,
        record.wall.y,
        record.wall.w,
        record.wall.h,
    ];
    for (chunk, field) in out.chunks_exact_mut(4).zip(fields) {
        chunk.copy_from_slice(&field.to_le_bytes());
    }
    out
}

/// Resolves the level descriptor for a session, falling back to defaults
#[derive(Debug, Clone)]
pub struct LevelResolver {
    path: PathBuf,
}

impl LevelResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve against the default level file path
    pub fn standard() -> Self {
        Self::new(LEVEL_FILE)
    }

    /// Produce a valid descriptor: the loaded override if it passes
    /// validation, the hardcoded defaults otherwise. One attempt, no retries.
    pub fn resolve(&self, grid: &PegGrid) -> LevelDescriptor {
        match self.try_load(grid) {
            Some(level) => {
                log::info!("level override loaded from {}", self.path.display());
                level
            }
            None => LevelDescriptor::default_for(grid),
        }
    }

    fn try_load(&self, grid: &PegGrid) -> Option<LevelDescriptor> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!(
                    "no level file at {}, using defaults: {err}",
                    self.path.display()
                );
                return None;
            }
        };
        let Some(record) = decode_record(&bytes) else {
            log::error!(
                "level file {} magic mismatch or size error",
                self.path.display()
            );
            return None;
        };
        self.validate(record, grid)
    }

    /// Bounds-check the loaded indices against the live peg count. An
    /// out-of-range index is corruption, same as a bad magic.
    fn validate(&self, record: LevelRecord, grid: &PegGrid) -> Option<LevelDescriptor> {
        let in_range = |idx: i32| idx >= 0 && grid.contains_index(idx as usize);
        if !in_range(record.goal_idx) || !in_range(record.enemy_idx) {
            log::error!(
                "level file {} peg index out of range (goal {}, enemy {}, pegs {})",
                self.path.display(),
                record.goal_idx,
                record.enemy_idx,
                grid.len()
            );
            return None;
        }
        Some(LevelDescriptor {
            goal_idx: record.goal_idx as usize,
            enemy_idx: record.enemy_idx as usize,
            wall: record.wall,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LevelRecord {
        LevelRecord {
            goal_idx: 42,
            enemy_idx: 15,
            wall: Rect::new(50, 20, 10, 40),
        }
    }

    #[test]
    fn decode_valid_record() {
        let bytes = encode_record(&sample_record());
        assert_eq!(decode_record(&bytes), Some(sample_record()));
    }

    #[test]
    fn decode_rejects_short_read() {
        let bytes = encode_record(&sample_record());
        assert_eq!(decode_record(&bytes[..RECORD_SIZE - 1]), None);
        assert_eq!(decode_record(&[]), None);
    }

    #[test]
    fn decode_rejects_bad_magic() {
        let mut bytes = encode_record(&sample_record());
        bytes[0] ^= 0xFF;
        assert_eq!(decode_record(&bytes), None);
    }

    #[test]
    fn encode_layout_is_little_endian() {
        let bytes = encode_record(&sample_record());
        assert_eq!(&bytes[0..4], &0xDEAD_C0DEu32.to_le_bytes());
        assert_eq!(&bytes[4..8], &42i32.to_le_bytes());
        assert_eq!(&bytes[8..12], &15i32.to_le_bytes());
    }

    #[test]
    fn resolver_falls_back_when_file_missing() {
        let grid = PegGrid::standard();
        let resolver = LevelResolver::new("/nonexistent/level.bin");
        let level = resolver.resolve(&grid);
        assert_eq!(level, LevelDescriptor::default_for(&grid));
    }

    #[test]
    fn resolver_rejects_out_of_range_index() {
        let grid = PegGrid::standard();
        let resolver = LevelResolver::standard();
        let record = LevelRecord {
            goal_idx: grid.len() as i32, // one past the end
            ..sample_record()
        };
        assert_eq!(resolver.validate(record, &grid), None);

        let record = LevelRecord {
            enemy_idx: -1,
            ..sample_record()
        };
        assert_eq!(resolver.validate(record, &grid), None);
    }

    #[test]
    fn default_descriptor_positions() {
        let grid = PegGrid::standard();
        let level = LevelDescriptor::default_for(&grid);
        assert_eq!(level.goal_idx, 49);
        assert_eq!(level.enemy_idx, 25);
        assert_eq!(level.wall, Rect::new(80, 10, 4, 30));
    }

    #[test]
    fn rect_boundary_is_exclusive() {
        let rect = Rect::new(80, 10, 4, 30);
        assert!(rect.contains_strict(Vec2::new(82.0, 20.0)));
        // Every edge pixel is outside
        assert!(!rect.contains_strict(Vec2::new(80.0, 20.0)));
        assert!(!rect.contains_strict(Vec2::new(84.0, 20.0)));
        assert!(!rect.contains_strict(Vec2::new(82.0, 10.0)));
        assert!(!rect.contains_strict(Vec2::new(82.0, 40.0)));
    }
}
