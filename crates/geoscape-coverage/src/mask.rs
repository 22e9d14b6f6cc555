//! CoverageMask: equirectangular raster of radar coverage levels.

use serde::{Deserialize, Serialize};

use geoscape_core::geo;
use geoscape_core::types::GeoPosition;

/// How well a cell is covered. Ordered so that stronger coverage compares greater.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CoverageLevel {
    #[default]
    None,
    /// Inside some radar's tracking range only.
    Tracking,
    /// Inside some radar's detection range.
    Detection,
}

/// Coverage raster, row-major (north-to-south, west-to-east).
///
/// Row 0 starts at latitude 90, column 0 at longitude -180.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageMask {
    width: u32,
    height: u32,
    cells: Vec<CoverageLevel>,
}

impl CoverageMask {
    /// An empty (uncovered) raster. Zero dimensions are bumped to 1.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![CoverageLevel::None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[CoverageLevel] {
        &self.cells
    }

    /// Reset every cell to `None`.
    pub fn clear(&mut self) {
        self.cells.fill(CoverageLevel::None);
    }

    /// Overwrite this raster with `other`. Sizes must match, otherwise this
    /// raster takes `other`'s size too.
    pub fn copy_from(&mut self, other: &CoverageMask) {
        if self.width == other.width && self.height == other.height {
            self.cells.copy_from_slice(&other.cells);
        } else {
            *self = other.clone();
        }
    }

    /// Degrees of longitude per column.
    fn cell_width(&self) -> f64 {
        360.0 / self.width as f64
    }

    /// Degrees of latitude per row.
    fn cell_height(&self) -> f64 {
        180.0 / self.height as f64
    }

    /// Geographic center of a cell.
    pub fn cell_center(&self, row: u32, col: u32) -> GeoPosition {
        GeoPosition {
            lon: -180.0 + (col as f64 + 0.5) * self.cell_width(),
            lat: 90.0 - (row as f64 + 0.5) * self.cell_height(),
        }
    }

    /// Cell containing a position. Positions on the far edges fall into the last cell.
    pub fn cell_of(&self, pos: &GeoPosition) -> (u32, u32) {
        let col = ((pos.lon + 180.0) / self.cell_width()).floor();
        let row = ((90.0 - pos.lat) / self.cell_height()).floor();
        let col = col.clamp(0.0, (self.width - 1) as f64) as u32;
        let row = row.clamp(0.0, (self.height - 1) as f64) as u32;
        (row, col)
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Coverage at a position.
    pub fn level_at(&self, pos: &GeoPosition) -> CoverageLevel {
        let (row, col) = self.cell_of(pos);
        self.cells[self.index(row, col)]
    }

    /// Paint one radar: cells whose center lies within `tracking_range` become
    /// `Tracking`, within `range` become `Detection`. Never lowers a cell.
    pub fn add_radar(&mut self, center: GeoPosition, range: f64, tracking_range: f64) {
        let outer = tracking_range.max(range);
        if outer <= 0.0 {
            return;
        }

        // Only rows whose latitude band can intersect the outer circle.
        let north = (center.lat + outer).min(90.0);
        let south = (center.lat - outer).max(-90.0);
        let first_row = ((90.0 - north) / self.cell_height()).floor().max(0.0) as u32;
        let last_row = (((90.0 - south) / self.cell_height()).ceil() as u32).min(self.height);

        let center_vec = geo::polar_to_vector(center);
        for row in first_row..last_row {
            for col in 0..self.width {
                let cell_vec = geo::polar_to_vector(self.cell_center(row, col));
                let dist = geo::angle_between(center_vec, cell_vec);
                let level = if dist <= range {
                    CoverageLevel::Detection
                } else if dist <= outer {
                    CoverageLevel::Tracking
                } else {
                    continue;
                };
                let idx = self.index(row, col);
                if level > self.cells[idx] {
                    self.cells[idx] = level;
                }
            }
        }
    }

    /// Number of cells at or above `level`.
    pub fn count_at_least(&self, level: CoverageLevel) -> usize {
        self.cells.iter().filter(|&&c| c >= level).count()
    }
}
