//! Sub-task entity owned exclusively by a parent item.
//!
//! # Invariants
//! - `item_id` always points at the owning item; repositories reject
//!   tasks whose back-reference disagrees with the aggregate being saved.
//! - Task rows are deleted together with their parent item (cascade).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a sub-task.
pub type ItemTaskId = Uuid;

/// A checklist entry belonging to exactly one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTask {
    /// Stable task id.
    pub id: ItemTaskId,
    /// Owning back-reference to the parent item.
    pub item_id: Uuid,
    /// Short checklist label.
    pub name: String,
    /// Manual completion flag toggled by the host UI.
    pub is_completed: bool,
    /// Optional due day in epoch milliseconds.
    pub due_date: Option<i64>,
    /// Optional due time-of-day anchor in epoch milliseconds.
    pub due_time: Option<i64>,
}

impl ItemTask {
    /// Creates an incomplete task attached to the given parent item.
    pub fn new(item_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id,
            name: name.into(),
            is_completed: false,
            due_date: None,
            due_time: None,
        }
    }
}
