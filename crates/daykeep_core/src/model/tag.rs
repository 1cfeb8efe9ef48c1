//! Tag entity: a named, colored label shared across items.
//!
//! # Invariants
//! - Tags live independently of items; attaching or detaching a tag never
//!   changes the tag row itself, and deleting an item never deletes tags.
//! - `color` is free text; rendering resolves it with a gray fallback, so
//!   malformed persisted values never fail.

use crate::color::{palette::resolve_tag_color, Color};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a tag.
pub type TagId = Uuid;

/// A label that can be associated with any number of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Stable tag id.
    pub id: TagId,
    /// Display name, unique per store.
    pub name: String,
    /// Named color (`red`, `blue`, ...) or `#RRGGBB` hex.
    pub color: String,
}

impl Tag {
    /// Creates a tag with a generated stable id.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Resolves the stored color string to a renderable color.
    ///
    /// Unrecognized values degrade to gray rather than failing.
    pub fn display_color(&self) -> Color {
        resolve_tag_color(&self.color)
    }
}
