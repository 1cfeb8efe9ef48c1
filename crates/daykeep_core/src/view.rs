//! Tab view derivation: filter by category, order by a per-category key.
//!
//! # Responsibility
//! - Derive the ordered item subsequence for the active tab.
//! - Expose the per-category sort key table as data for host rendering.
//!
//! # Invariants
//! - `filter_and_sort` is a pure function of `(items, active_tab)`; it
//!   performs no mutation and is safely recomputable on every UI refresh.
//! - Sorting is stable: equal keys keep their input order.
//! - A tab that matches no items yields an empty sequence, never an error.

use crate::model::category::Category;
use crate::model::item::Item;

/// Sort key applied to the active tab's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending `date_due`.
    DateDue,
    /// Ascending `date_added`.
    DateAdded,
    /// Lexicographic ascending `title`.
    Title,
    /// Ascending `date_completed`.
    DateCompleted,
}

/// The per-category sort key table.
///
/// This mapping is a load-bearing product decision: scheduled work orders
/// by deadline, the backlog by age, ideas alphabetically and the done list
/// by when things finished. Categories without a dedicated key order by age.
pub fn sort_key(active_tab: Category) -> SortKey {
    match active_tab {
        Category::Scheduled => SortKey::DateDue,
        Category::Upcoming => SortKey::DateAdded,
        Category::Ideas => SortKey::Title,
        Category::Completed => SortKey::DateCompleted,
        _ => SortKey::DateAdded,
    }
}

/// Returns the items belonging to `active_tab`, ordered by its sort key.
///
/// Stable with respect to the input collection: items comparing equal under
/// the active key keep their original relative order.
pub fn filter_and_sort<'a>(items: &'a [Item], active_tab: Category) -> Vec<&'a Item> {
    let mut selected: Vec<&Item> = items
        .iter()
        .filter(|item| item.category == active_tab)
        .collect();

    match sort_key(active_tab) {
        SortKey::DateDue => selected.sort_by_key(|item| item.date_due),
        SortKey::DateAdded => selected.sort_by_key(|item| item.date_added),
        SortKey::Title => selected.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::DateCompleted => selected.sort_by_key(|item| item.date_completed),
    }

    selected
}
