use glam::Vec2;

use crate::node::Quadrant;

/// Axis-aligned rectangle stored as a min/max corner pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// Build a rectangle from any two opposite corners.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a rectangle from its center and half extents.
    #[inline]
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if two rectangles overlap. Touching edges count.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        other.min.x <= self.max.x
            && other.max.x >= self.min.x
            && other.min.y <= self.max.y
            && other.max.y >= self.min.y
    }

    /// Check if `inner` lies strictly inside this rectangle on all four sides.
    #[inline]
    pub fn fits(&self, inner: &Rect) -> bool {
        inner.min.x > self.min.x
            && inner.max.x < self.max.x
            && inner.min.y > self.min.y
            && inner.max.y < self.max.y
    }

    /// The same rectangle moved by `offset`.
    #[inline]
    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Bounds of one of the four equal quadrants, split at the midpoints.
    pub fn quadrant(&self, quadrant: Quadrant) -> Rect {
        let c = self.center();
        match quadrant {
            Quadrant::TopLeft => Rect::from_corners(self.min, c),
            Quadrant::TopRight => Rect::new(c.x, self.min.y, self.max.x, c.y),
            Quadrant::BottomLeft => Rect::new(self.min.x, c.y, c.x, self.max.y),
            Quadrant::BottomRight => Rect::from_corners(c, self.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_is_inclusive() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        let touching = Rect::new(10.0, 0.0, 20.0, 10.0);
        let apart = Rect::new(20.0, 20.0, 30.0, 30.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart));
        assert!(!apart.intersects(&a));
    }

    #[test]
    fn test_fits_is_strict() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!(outer.fits(&Rect::new(1.0, 1.0, 9.0, 9.0)));
        assert!(!outer.fits(&Rect::new(0.0, 1.0, 9.0, 9.0)));
        assert!(!outer.fits(&Rect::new(1.0, 1.0, 9.0, 10.0)));
        assert!(!outer.fits(&outer));
        assert!(!outer.fits(&Rect::new(5.0, 5.0, 15.0, 9.0)));
    }

    #[test]
    fn test_quadrants_partition_bounds() {
        let r = Rect::new(-200.0, -200.0, 200.0, 200.0);

        assert_eq!(r.quadrant(Quadrant::TopLeft), Rect::new(-200.0, -200.0, 0.0, 0.0));
        assert_eq!(r.quadrant(Quadrant::TopRight), Rect::new(0.0, -200.0, 200.0, 0.0));
        assert_eq!(r.quadrant(Quadrant::BottomLeft), Rect::new(-200.0, 0.0, 0.0, 200.0));
        assert_eq!(r.quadrant(Quadrant::BottomRight), Rect::new(0.0, 0.0, 200.0, 200.0));

        let area: f32 = Quadrant::ALL
            .iter()
            .map(|q| {
                let sub = r.quadrant(*q);
                sub.width() * sub.height()
            })
            .sum();
        assert_eq!(area, r.width() * r.height());
    }

    #[test]
    fn test_corners_and_translate() {
        let r = Rect::from_corners(Vec2::new(5.0, -1.0), Vec2::new(-5.0, 1.0));
        assert_eq!(r, Rect::new(-5.0, -1.0, 5.0, 1.0));
        assert_eq!(r.center(), Vec2::ZERO);

        let moved = r.translate(Vec2::new(10.0, 2.0));
        assert_eq!(moved, Rect::new(5.0, 1.0, 15.0, 3.0));
        assert_eq!(
            Rect::from_center(Vec2::new(10.0, 2.0), Vec2::new(5.0, 1.0)),
            moved
        );
    }
}
