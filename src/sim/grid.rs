//! Uniform-bucket broad phase
//!
//! The arena is cut into `ceil(width / cell) x ceil(height / cell)` buckets.
//! Each bucket lists indices into the population, in insertion order. The
//! grid is cleared and refilled every tick and never updated incrementally,
//! so an index is only meaningful for the tick that inserted it.
//!
//! Only bodies sharing a bucket are ever compared. Two overlapping balls on
//! either side of a cell edge are not detected.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::GRID_CELL_SIZE;

/// Upper bound on buckets per grid
pub const MAX_BUCKETS: usize = 1 << 20;

/// Grid shape `(columns, rows)` for an arena, or `None` when the cell size is
/// unusable or the bucket count would exceed `MAX_BUCKETS`
pub fn grid_dims(width: f32, height: f32, cell_size: f32) -> Option<(usize, usize)> {
    let usable = cell_size.is_finite() && cell_size > 0.0;
    if !usable || !width.is_finite() || !height.is_finite() {
        return None;
    }
    let cols = (width / cell_size).ceil().max(0.0);
    let rows = (height / cell_size).ceil().max(0.0);
    if cols > MAX_BUCKETS as f32 || rows > MAX_BUCKETS as f32 {
        return None;
    }
    let (cols, rows) = (cols as usize, rows as usize);
    cols.checked_mul(rows)
        .filter(|&n| n <= MAX_BUCKETS)
        .map(|_| (cols, rows))
}

/// Which bodies receive a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridInsert {
    /// Every body inside the grid gets a bucket
    #[default]
    Every,
    /// Legacy behaviour: bodies in column 0 or row 0 (including cell (0, 0))
    /// are left out of the grid and never collide
    SkipOriginEdges,
}

impl GridInsert {
    #[inline]
    fn admits(self, col: usize, row: usize) -> bool {
        match self {
            GridInsert::Every => true,
            GridInsert::SkipOriginEdges => col != 0 && row != 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    /// Column-major: bucket (col, row) lives at `col * rows + row`
    buckets: Vec<Vec<usize>>,
}

impl Default for SpatialGrid {
    fn default() -> Self {
        Self {
            cell_size: GRID_CELL_SIZE,
            cols: 0,
            rows: 0,
            buckets: Vec::new(),
        }
    }
}

impl SpatialGrid {
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        let mut grid = Self::default();
        grid.rebuild(width, height, cell_size);
        grid
    }

    /// Resize to the arena and empty every bucket
    ///
    /// Bucket allocations are kept across rebuilds when the shape is unchanged.
    /// A shape `grid_dims` rejects yields an empty grid: nothing is filed and
    /// no pairs are compared.
    pub fn rebuild(&mut self, width: f32, height: f32, cell_size: f32) {
        let (cols, rows) = grid_dims(width, height, cell_size).unwrap_or_else(|| {
            log::warn!("Unusable grid: {width}x{height} arena with cell size {cell_size}");
            (0, 0)
        });

        self.cell_size = cell_size;
        self.cols = cols;
        self.rows = rows;
        self.buckets.resize_with(cols * rows, Vec::new);
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// (columns, rows)
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Bucket coordinates `(floor(x / cell), floor(y / cell))`, or `None` when
    /// the position falls outside the grid
    pub fn cell_of(&self, pos: Vec2) -> Option<(usize, usize)> {
        let col = (pos.x / self.cell_size).floor();
        let row = (pos.y / self.cell_size).floor();
        // NaN fails both comparisons
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    /// File `index` under the bucket containing `pos`
    ///
    /// Returns the bucket used, or `None` when the body was left out.
    pub fn insert(
        &mut self,
        index: usize,
        pos: Vec2,
        policy: GridInsert,
    ) -> Option<(usize, usize)> {
        let (col, row) = self.cell_of(pos)?;
        if !policy.admits(col, row) {
            return None;
        }
        self.buckets[col * self.rows + row].push(index);
        Some((col, row))
    }

    /// Contents of bucket (col, row); empty when out of range
    pub fn bucket(&self, col: usize, row: usize) -> &[usize] {
        if col < self.cols && row < self.rows {
            &self.buckets[col * self.rows + row]
        } else {
            &[]
        }
    }

    /// All buckets, column by column
    pub fn buckets(&self) -> impl Iterator<Item = &[usize]> {
        self.buckets.iter().map(Vec::as_slice)
    }

    /// Number of indices filed this tick
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
