//! Category and status enumerations with display metadata.
//!
//! # Responsibility
//! - Define the closed category/status sets used for grouping and tabs.
//! - Carry per-variant display metadata as data, not as dispatch.
//!
//! # Invariants
//! - Metadata lookup is total: every variant has a tint and a symbol.
//! - The variant set is the union observed across the product's revisions;
//!   callers treat the metadata table as configuration.

use serde::{Deserialize, Serialize};

/// Fixed classification for items, used both for grouping and tab filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Today,
    Family,
    Health,
    Work,
    Scheduled,
    Upcoming,
    Ideas,
    Completed,
}

/// Lifecycle state shown by the status picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Upcoming,
    Active,
    Hold,
}

/// Static display metadata attached to a category variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    /// Palette tint identifier, resolved through `color::Palette`.
    pub tint: &'static str,
    /// Symbol/icon identifier for the host UI.
    pub symbol: &'static str,
}

impl Category {
    /// All variants in tab-bar order.
    pub const ALL: [Category; 8] = [
        Category::Today,
        Category::Family,
        Category::Health,
        Category::Work,
        Category::Scheduled,
        Category::Upcoming,
        Category::Ideas,
        Category::Completed,
    ];

    /// Returns the display metadata record for this variant.
    pub fn meta(self) -> CategoryMeta {
        match self {
            Category::Today => CategoryMeta {
                tint: "yellow",
                symbol: "sun.max",
            },
            Category::Family => CategoryMeta {
                tint: "orange",
                symbol: "person.2",
            },
            Category::Health => CategoryMeta {
                tint: "red",
                symbol: "heart",
            },
            Category::Work => CategoryMeta {
                tint: "blue",
                symbol: "briefcase",
            },
            Category::Scheduled => CategoryMeta {
                tint: "purple",
                symbol: "calendar",
            },
            Category::Upcoming => CategoryMeta {
                tint: "teal",
                symbol: "clock",
            },
            Category::Ideas => CategoryMeta {
                tint: "green",
                symbol: "lightbulb",
            },
            Category::Completed => CategoryMeta {
                tint: "gray",
                symbol: "checkmark.circle",
            },
        }
    }

    /// Stable storage key for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Today => "today",
            Category::Family => "family",
            Category::Health => "health",
            Category::Work => "work",
            Category::Scheduled => "scheduled",
            Category::Upcoming => "upcoming",
            Category::Ideas => "ideas",
            Category::Completed => "completed",
        }
    }

    /// Parses a storage key back into a variant.
    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "today" => Some(Category::Today),
            "family" => Some(Category::Family),
            "health" => Some(Category::Health),
            "work" => Some(Category::Work),
            "scheduled" => Some(Category::Scheduled),
            "upcoming" => Some(Category::Upcoming),
            "ideas" => Some(Category::Ideas),
            "completed" => Some(Category::Completed),
            _ => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Today
    }
}

impl ItemStatus {
    /// All variants in segmented-picker order.
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Upcoming, ItemStatus::Active, ItemStatus::Hold];

    /// Symbol/icon identifier for the host UI.
    pub fn symbol(self) -> &'static str {
        match self {
            ItemStatus::Upcoming => "calendar.badge.clock",
            ItemStatus::Active => "play.circle",
            ItemStatus::Hold => "pause.circle",
        }
    }

    /// Stable storage key for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Upcoming => "upcoming",
            ItemStatus::Active => "active",
            ItemStatus::Hold => "hold",
        }
    }

    /// Parses a storage key back into a variant.
    pub fn parse(value: &str) -> Option<ItemStatus> {
        match value {
            "upcoming" => Some(ItemStatus::Upcoming),
            "active" => Some(ItemStatus::Active),
            "hold" => Some(ItemStatus::Hold),
            _ => None,
        }
    }
}

impl Default for ItemStatus {
    fn default() -> Self {
        ItemStatus::Active
    }
}
