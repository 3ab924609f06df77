//! Axis-aligned rectangle tests
//!
//! World space has y growing downward. Every spatial entity exposes its
//! collision box through [`Bounds`].

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Anything with a collision box
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Half-open overlap test: rectangles that only share an edge do not overlap
#[inline]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Point containment, inclusive on all four edges
#[inline]
pub fn point_in_rect(px: f32, py: f32, r: &Rect) -> bool {
    px >= r.x && px <= r.right() && py >= r.y && py <= r.bottom()
}

/// Overlap test between any two bounded entities
#[inline]
pub fn overlaps(a: &impl Bounds, b: &impl Bounds) -> bool {
    rect_overlap(&a.bounds(), &b.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_touching_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!rect_overlap(&a, &b));
        assert!(!rect_overlap(&b, &a));

        // Vertical edge contact
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rect_overlap(&a, &below));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 0.0, 10.0, 10.0);
        assert!(rect_overlap(&a, &b));
        assert!(rect_overlap(&b, &a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(rect_overlap(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!rect_overlap(&a, &b));
    }

    #[test]
    fn test_point_in_rect_inclusive() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(point_in_rect(10.0, 20.0, &r));
        assert!(point_in_rect(40.0, 60.0, &r));
        assert!(point_in_rect(25.0, 30.0, &r));
        assert!(!point_in_rect(9.99, 30.0, &r));
        assert!(!point_in_rect(25.0, 60.01, &r));
    }
}
