//! Axis-aligned collision primitives
//!
//! Screen space: x grows to the right, y grows downward. All comparisons are
//! exact; there is no epsilon handling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its min (top-left) and max (bottom-right) corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square of side `size` centered on `center`
    pub fn centered_square(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Horizontal extents touch or overlap (edges count as overlapping)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        !(self.max.x < other.min.x || self.min.x > other.max.x)
    }

    /// Whether the rectangle sticks out above `top` or below `bottom`
    #[inline]
    pub fn exceeds_vertical(&self, top: f32, bottom: f32) -> bool {
        self.min.y < top || self.max.y > bottom
    }
}

/// An open vertical band `[top, bottom]` that a rectangle may pass through
///
/// Everything above `top` and below `bottom` is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapBand {
    pub top: f32,
    pub bottom: f32,
}

impl GapBand {
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// True if the rectangle touches the blocked region above or below the band
    #[inline]
    pub fn blocks(&self, rect: &Rect) -> bool {
        rect.exceeds_vertical(self.top, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_square() {
        let r = Rect::centered_square(Vec2::new(100.0, 50.0), 30.0);
        assert_eq!(r.min, Vec2::new(85.0, 35.0));
        assert_eq!(r.max, Vec2::new(115.0, 65.0));
    }

    #[test]
    fn test_overlap_edges_touching_count() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        assert!(a.overlaps_x(&b));
        assert!(b.overlaps_x(&a));
    }

    #[test]
    fn test_disjoint_rects() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Rect::new(Vec2::new(10.5, 0.0), Vec2::new(20.0, 10.0));
        let below = Rect::new(Vec2::new(0.0, 10.5), Vec2::new(10.0, 20.0));
        assert!(!a.overlaps_x(&right));
        assert!(!right.overlaps_x(&a));
        assert!(a.overlaps_x(&below));
    }

    #[test]
    fn test_gap_band_pass_through() {
        let band = GapBand::new(100.0, 150.0);
        let inside = Rect::centered_square(Vec2::new(0.0, 175.0), 30.0);
        assert!(!band.blocks(&inside));

        // Exactly flush with both edges is still inside
        let flush = Rect::new(Vec2::new(0.0, 100.0), Vec2::new(10.0, 250.0));
        assert!(!band.blocks(&flush));
    }

    #[test]
    fn test_gap_band_blocks_above_and_below() {
        let band = GapBand::new(100.0, 150.0);
        let above = Rect::centered_square(Vec2::new(0.0, 99.0), 30.0);
        let below = Rect::centered_square(Vec2::new(0.0, 240.0), 30.0);
        assert!(band.blocks(&above));
        assert!(band.blocks(&below));
    }
}
