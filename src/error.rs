//! Quadtree error types.

use thiserror::Error;

use crate::rect::Rect;

/// Errors returned by the quadtree and its configuration layer.
#[derive(Debug, Error)]
pub enum QuadtreeError {
    /// The shape is not stored in the node its current rectangle resolves to.
    /// Usually the shape moved without an `update` in between.
    #[error("shape not found in the node covering {0:?}")]
    NotFound(Rect),

    #[error("invalid quadtree config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize quadtree config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}
