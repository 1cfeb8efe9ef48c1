//! Item domain model.
//!
//! # Responsibility
//! - Define the central tracked entry with its defaults and validation.
//! - Provide derived accessors (completion flag, days-until-due) as pure
//!   snapshot-time computations.
//!
//! # Invariants
//! - `id` is stable and never nil.
//! - Category and status are always set; there is no "unset" state.
//! - The four date fields are independent; no ordering between them is
//!   enforced (free-form dates are a product decision, not an oversight).

use crate::model::category::{Category, ItemStatus};
use crate::model::item_task::ItemTask;
use crate::model::tag::TagId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for an item.
pub type ItemId = Uuid;

const MS_PER_DAY: i64 = 86_400_000;

/// Validation error for item aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Item id must not be the nil UUID.
    NilId,
    /// A task id must not be the nil UUID.
    NilTaskId,
    /// A task's back-reference does not point at the owning item.
    TaskParentMismatch { task: Uuid, expected: ItemId },
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be nil"),
            Self::NilTaskId => write!(f, "item task id must not be nil"),
            Self::TaskParentMismatch { task, expected } => write!(
                f,
                "task {task} does not belong to item {expected}"
            ),
        }
    }
}

impl Error for ItemValidationError {}

/// The central tracked entry: title, dates, category, status, tint, tags
/// and exclusively-owned sub-tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable global id.
    pub id: ItemId,
    /// Free text title; may be empty.
    pub title: String,
    /// Free text remarks; may be empty.
    pub remarks: String,
    /// Creation timestamp, epoch milliseconds.
    pub date_added: i64,
    /// Due timestamp, epoch milliseconds.
    pub date_due: i64,
    /// Start timestamp, epoch milliseconds.
    pub date_started: i64,
    /// Completion timestamp, epoch milliseconds.
    pub date_completed: i64,
    /// Grouping/tab classification.
    pub category: Category,
    /// Picker status.
    pub status: ItemStatus,
    /// Palette tint identifier; resolved with a fallback default.
    pub tint: String,
    /// Shared tag association by id; no cascade in either direction.
    pub tags: Vec<TagId>,
    /// Sub-tasks owned exclusively by this item.
    pub tasks: Vec<ItemTask>,
}

impl Item {
    /// Creates an item with form defaults: empty text, all four dates set
    /// to now, default category/status/tint, no tags or tasks.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates a default item with a caller-provided stable id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: ItemId) -> Self {
        let now = now_ms();
        Self {
            id,
            title: String::new(),
            remarks: String::new(),
            date_added: now,
            date_due: now,
            date_started: now,
            date_completed: now,
            category: Category::default(),
            status: ItemStatus::default(),
            tint: crate::color::palette::DEFAULT_TINT.to_string(),
            tags: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Checks aggregate consistency before persistence.
    ///
    /// Date fields are deliberately not compared against each other.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        for task in &self.tasks {
            if task.id.is_nil() {
                return Err(ItemValidationError::NilTaskId);
            }
            if task.item_id != self.id {
                return Err(ItemValidationError::TaskParentMismatch {
                    task: task.id,
                    expected: self.id,
                });
            }
        }
        Ok(())
    }

    /// Appends a new owned sub-task and returns its id.
    pub fn add_task(&mut self, name: impl Into<String>) -> Uuid {
        let task = ItemTask::new(self.id, name);
        let task_id = task.id;
        self.tasks.push(task);
        task_id
    }

    /// Returns whether the item counts as completed at `now_ms`.
    ///
    /// Snapshot-time check against `date_completed`, never cached.
    pub fn is_completed_at(&self, now_ms: i64) -> bool {
        self.date_completed <= now_ms
    }

    /// Returns whether the item counts as completed right now.
    pub fn is_completed(&self) -> bool {
        self.is_completed_at(now_ms())
    }

    /// Whole calendar-day difference from `now_ms` to `date_due`.
    ///
    /// Negative values mean the due day has passed. Returns `None` when the
    /// day count cannot be computed from the stored timestamps.
    pub fn days_until_due_at(&self, now_ms: i64) -> Option<i64> {
        let due_day = self.date_due.div_euclid(MS_PER_DAY);
        let today = now_ms.div_euclid(MS_PER_DAY);
        due_day.checked_sub(today)
    }

    /// Whole calendar-day difference from now to `date_due`.
    pub fn days_until_due(&self) -> Option<i64> {
        self.days_until_due_at(now_ms())
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        // Pre-epoch clocks only occur on misconfigured hosts; derived
        // accessors still need a usable snapshot value.
        Err(err) => -(err.duration().as_millis() as i64),
    }
}
