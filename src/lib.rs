//! Broad-phase collision quadtree over axis-aligned rectangles.
//!
//! Shapes are shared with the tree as `Rc` handles and compared by identity.
//! The tree is single-threaded; `Rc` keeps it `!Send`, so callers that share it
//! across threads must wrap access themselves.

mod config;
mod error;
mod node;
mod quadtree;
mod rect;

use std::cell::Cell;
use std::rc::Rc;

/// Anything that can report its current bounding rectangle.
pub trait Collidable {
    fn bounds(&self) -> Rect;
}

impl Collidable for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// A shape the caller can move in place between `Quadtree::update` calls.
impl Collidable for Cell<Rect> {
    fn bounds(&self) -> Rect {
        self.get()
    }
}

pub trait QuadtreeVisitor<S: ?Sized> {
    fn shape(&mut self, level: u8, shape: &Rc<S>);
    fn leaf(&mut self, level: u8, bounds: &Rect);
    fn branch(&mut self, level: u8, bounds: &Rect);
}

pub use config::QuadtreeConfig;
pub use error::QuadtreeError;
pub use node::Quadrant;
pub use quadtree::Quadtree;
pub use rect::Rect;
