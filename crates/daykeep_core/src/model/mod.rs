//! Domain model for the daykeep item tracker.
//!
//! # Responsibility
//! - Define the canonical `Item` aggregate and its associated entities.
//! - Keep derived fields as pure accessors, recomputed on every call.
//!
//! # Invariants
//! - Every item carries exactly one category and one status at all times.
//! - Item tasks are exclusively owned by their parent item (cascade delete).
//! - Tags are a shared association by ID; neither side owns the other.

pub mod category;
pub mod item;
pub mod item_task;
pub mod tag;
