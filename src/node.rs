use std::rc::Rc;

use crate::rect::Rect;

/// One of the four equal subdivisions of a node. "Top" is the `min.y` half.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    /// Child order inside the node arena.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Find the single quadrant of `bounds` that strictly contains `rect`.
    ///
    /// Returns `None` when `rect` does not fit `bounds` or straddles either
    /// midpoint, in which case the shape belongs to the node itself.
    pub fn locate(bounds: &Rect, rect: &Rect) -> Option<Quadrant> {
        if !bounds.fits(rect) {
            return None;
        }
        let mid = bounds.center();
        let left = rect.max.x < mid.x;
        let right = rect.min.x > mid.x;
        let top = rect.max.y < mid.y;
        let bottom = rect.min.y > mid.y;

        match (left, right, top, bottom) {
            (true, _, true, _) => Some(Quadrant::TopLeft),
            (_, true, true, _) => Some(Quadrant::TopRight),
            (true, _, _, true) => Some(Quadrant::BottomLeft),
            (_, true, _, true) => Some(Quadrant::BottomRight),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn offset(self) -> usize {
        self as usize
    }
}

/// A single region of the tree. Children and parent are arena indices.
pub(crate) struct Node<S: ?Sized> {
    pub bounds: Rect,
    pub level: u8,
    pub shapes: Vec<Rc<S>>,
    /// Index of the top-left child; the other three follow in `Quadrant::ALL` order.
    pub first_child: Option<usize>,
    pub parent: Option<usize>,
}

impl<S: ?Sized> Node<S> {
    pub fn new(bounds: Rect, level: u8, parent: Option<usize>) -> Self {
        Self {
            bounds,
            level,
            shapes: Vec::new(),
            first_child: None,
            parent,
        }
    }

    #[inline]
    pub fn is_split(&self) -> bool {
        self.first_child.is_some()
    }

    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<usize> {
        self.first_child.map(|fc| fc + quadrant.offset())
    }
}
