use std::fmt;
use std::mem;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::config::QuadtreeConfig;
use crate::error::QuadtreeError;
use crate::node::{Node, Quadrant};
use crate::rect::Rect;
use crate::{Collidable, QuadtreeVisitor};

/// Quadtree for broad-phase collision queries.
///
/// Nodes live in a flat arena; the root is slot 0 and every split appends its
/// four children as consecutive slots. A node's own shapes have no ordering
/// guarantee, since removal swaps with the last element.
pub struct Quadtree<S: ?Sized = dyn Collidable> {
    nodes: Vec<Node<S>>,
    max_depth: u8,
    capacity: usize,
}

impl<S> Quadtree<S>
    where
        S: Collidable + ?Sized,
{
    const ROOT: usize = 0;

    /// Create an empty tree. Shapes inserted later are expected to lie inside `bounds`.
    pub fn new(bounds: Rect, max_depth: u8, capacity: usize) -> Self {
        Self {
            nodes: vec![Node::new(bounds, 0, None)],
            max_depth,
            capacity,
        }
    }

    pub fn with_config(bounds: Rect, config: QuadtreeConfig) -> Self {
        Self::new(bounds, config.max_depth, config.capacity)
    }

    pub fn bounds(&self) -> Rect {
        self.nodes[Self::ROOT].bounds
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn config(&self) -> QuadtreeConfig {
        QuadtreeConfig::new(self.max_depth, self.capacity)
    }

    /// Whether the root has been subdivided.
    pub fn is_split(&self) -> bool {
        self.nodes[Self::ROOT].is_split()
    }

    /// Number of shapes stored across all nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().map(|node| node.shapes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|node| node.shapes.is_empty())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn insert(&mut self, shape: Rc<S>) {
        self.insert_at(Self::ROOT, shape);
    }

    /// Collect every stored shape whose rectangle intersects `query`.
    ///
    /// A shape is reported for its own rectangle too; use
    /// [`Quadtree::colliding_except`] to leave it out.
    pub fn colliding(&self, query: &Rect) -> Vec<Rc<S>> {
        let mut out = Vec::new();
        self.collect(Self::ROOT, query, None, &mut out);
        out
    }

    pub fn colliding_except(&self, query: &Rect, omit: &Rc<S>) -> Vec<Rc<S>> {
        let mut out = Vec::new();
        self.collect(Self::ROOT, query, Some(omit), &mut out);
        out
    }

    /// Move shapes whose rectangles changed to the node that now holds them.
    ///
    /// A shape that leaves its node is handed to the parent's own list, not to a
    /// sibling. The parent re-examines its list after its children, so it can push
    /// the shape back down the right branch in the same pass.
    pub fn update(&mut self) {
        self.update_at(Self::ROOT);
    }

    /// Remove `shape` from the node its current rectangle resolves to.
    ///
    /// Call [`Quadtree::update`] first if the shape may have moved since it was
    /// inserted, otherwise it will not be found.
    pub fn remove(&mut self, shape: &Rc<S>) -> Result<(), QuadtreeError> {
        let rect = shape.bounds();
        let mut idx = Self::ROOT;
        while let Some(child) = self.sub_node(idx, &rect) {
            idx = child;
        }

        let shapes = &mut self.nodes[idx].shapes;
        match shapes.iter().position(|s| Rc::ptr_eq(s, shape)) {
            Some(pos) => {
                shapes.swap_remove(pos);
                Ok(())
            }
            None => {
                debug!(node = idx, ?rect, "shape not found for removal");
                Err(QuadtreeError::NotFound(rect))
            }
        }
    }

    /// Drop every shape and subdivision, leaving a fresh unsplit root.
    pub fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), "clearing quadtree");
        self.nodes.truncate(1);
        let root = &mut self.nodes[Self::ROOT];
        root.shapes.clear();
        root.first_child = None;
    }

    pub fn traverse<V>(&self, visitor: &mut V)
        where
            V: QuadtreeVisitor<S>,
    {
        let mut to_process = vec![Self::ROOT];

        while let Some(idx) = to_process.pop() {
            let node = &self.nodes[idx];
            match node.first_child {
                Some(fc) => {
                    // Pushed in reverse so the top-left child is visited first.
                    to_process.extend((fc..fc + 4).rev());
                    visitor.branch(node.level, &node.bounds);
                }
                None => visitor.leaf(node.level, &node.bounds),
            }
            for shape in &node.shapes {
                visitor.shape(node.level, shape);
            }
        }
    }

    fn sub_node(&self, idx: usize, rect: &Rect) -> Option<usize> {
        let node = &self.nodes[idx];
        node.child(Quadrant::locate(&node.bounds, rect)?)
    }

    fn insert_at(&mut self, idx: usize, shape: Rc<S>) {
        if self.nodes[idx].is_split() {
            match self.sub_node(idx, &shape.bounds()) {
                Some(child) => self.insert_at(child, shape),
                None => self.nodes[idx].shapes.push(shape),
            }
            return;
        }

        let node = &mut self.nodes[idx];
        node.shapes.push(shape);
        if node.shapes.len() > self.capacity && node.level < self.max_depth {
            self.split(idx);
        }
    }

    fn split(&mut self, idx: usize) {
        let bounds = self.nodes[idx].bounds;
        let level = self.nodes[idx].level;
        let first_child = self.nodes.len();
        for quadrant in Quadrant::ALL {
            self.nodes
                .push(Node::new(bounds.quadrant(quadrant), level + 1, Some(idx)));
        }
        self.nodes[idx].first_child = Some(first_child);
        debug!(node = idx, level, shapes = self.nodes[idx].shapes.len(), "splitting node");

        // Shapes that straddle a midpoint stay here.
        let shapes = mem::take(&mut self.nodes[idx].shapes);
        for shape in shapes {
            match self.sub_node(idx, &shape.bounds()) {
                Some(child) => self.insert_at(child, shape),
                None => self.nodes[idx].shapes.push(shape),
            }
        }
    }

    fn update_at(&mut self, idx: usize) {
        let node = &self.nodes[idx];
        if !node.is_split() && node.shapes.len() > self.capacity && node.level < self.max_depth {
            self.split(idx);
        }

        if let Some(fc) = self.nodes[idx].first_child {
            for child in fc..fc + 4 {
                self.update_at(child);
            }
        }

        let bounds = self.nodes[idx].bounds;
        let parent = self.nodes[idx].parent;
        let shapes = mem::take(&mut self.nodes[idx].shapes);
        for shape in shapes {
            let rect = shape.bounds();
            if let Some(child) = self.sub_node(idx, &rect) {
                self.insert_at(child, shape);
                continue;
            }
            match parent {
                Some(parent) if !bounds.fits(&rect) => {
                    trace!(node = idx, parent, ?rect, "handing shape up");
                    self.nodes[parent].shapes.push(shape);
                }
                // The root keeps everything, in bounds or not.
                _ => self.nodes[idx].shapes.push(shape),
            }
        }
    }

    fn collect(&self, idx: usize, query: &Rect, omit: Option<&Rc<S>>, out: &mut Vec<Rc<S>>) {
        let node = &self.nodes[idx];
        if !node.bounds.intersects(query) {
            return;
        }

        if let Some(fc) = node.first_child {
            for child in fc..fc + 4 {
                self.collect(child, query, omit, out);
            }
        }

        for shape in &node.shapes {
            if omit.is_some_and(|omit| Rc::ptr_eq(shape, omit)) {
                continue;
            }
            if shape.bounds().intersects(query) {
                out.push(Rc::clone(shape));
            }
        }
    }
}

impl<S: ?Sized> fmt::Debug for Quadtree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quadtree")
            .field("bounds", &self.nodes[0].bounds)
            .field("nodes", &self.nodes.len())
            .field("max_depth", &self.max_depth)
            .field("capacity", &self.capacity)
            .finish()
    }
}
