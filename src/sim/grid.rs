//! Peg lattice generation
//!
//! The grid is built once at startup and never mutated. Everything else in
//! the simulation refers to pegs by index, so the row-major ordering here is
//! load-bearing: the default goal is the last index and the default enemy
//! anchor is the middle one.

use glam::{IVec2, Vec2};

use crate::consts::*;

/// Immutable set of anchor points on the playfield
#[derive(Debug, Clone)]
pub struct PegGrid {
    pegs: Vec<IVec2>,
    cols: usize,
    rows: usize,
}

impl PegGrid {
    /// Generate a row-major lattice: `(r, c)` maps to
    /// `(margin + c*spacing, margin + r*spacing)`.
    pub fn generate(width: i32, margin: i32, spacing: i32, rows: usize) -> Self {
        let cols = ((width - margin * 2) / spacing + 1) as usize;
        let mut pegs = Vec::with_capacity(cols * rows);
        for r in 0..rows {
            for c in 0..cols {
                pegs.push(IVec2::new(
                    margin + c as i32 * spacing,
                    margin + r as i32 * spacing,
                ));
            }
        }
        Self { pegs, cols, rows }
    }

    /// The standard playfield lattice (10 columns x 5 rows on a 128x64 screen)
    pub fn standard() -> Self {
        Self::generate(SCREEN_W, PEG_MARGIN, PEG_SPACING, PEG_ROWS)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Integer lattice point of a peg
    #[inline]
    pub fn peg(&self, idx: usize) -> IVec2 {
        self.pegs[idx]
    }

    /// Peg position as float coordinates for trajectory math
    #[inline]
    pub fn pos(&self, idx: usize) -> Vec2 {
        self.pegs[idx].as_vec2()
    }

    #[inline]
    pub fn contains_index(&self, idx: usize) -> bool {
        idx < self.pegs.len()
    }

    /// Iterate pegs in index order (row-major)
    pub fn iter(&self) -> impl Iterator<Item = (usize, IVec2)> + '_ {
        self.pegs.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grid_is_10_by_5() {
        let grid = PegGrid::standard();
        assert_eq!(grid.cols(), 10);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.len(), 50);
    }

    #[test]
    fn row_major_ordering() {
        let grid = PegGrid::standard();
        // First peg sits at the margin corner
        assert_eq!(grid.peg(0), IVec2::new(4, 4));
        // Second peg is one spacing to the right, same row
        assert_eq!(grid.peg(1), IVec2::new(17, 4));
        // First peg of the second row drops one spacing down
        assert_eq!(grid.peg(10), IVec2::new(4, 17));
        // Last peg of the lattice
        assert_eq!(grid.peg(49), IVec2::new(4 + 9 * 13, 4 + 4 * 13));
    }

    #[test]
    fn generate_is_deterministic() {
        let a = PegGrid::generate(128, 4, 13, 5);
        let b = PegGrid::generate(128, 4, 13, 5);
        assert!(a.iter().zip(b.iter()).all(|(x, y)| x == y));
    }

    #[test]
    fn index_bounds() {
        let grid = PegGrid::standard();
        assert!(grid.contains_index(0));
        assert!(grid.contains_index(49));
        assert!(!grid.contains_index(50));
    }
}
