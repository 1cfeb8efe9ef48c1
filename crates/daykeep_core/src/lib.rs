//! Core domain logic for Daykeep, a single-user item tracker.
//! This crate is the single source of truth for business invariants.

pub mod color;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use color::contrast::{
    contrast_ratio, contrasting_text_color, relative_luminance, Foreground, WCAG_AA, WCAG_AAA,
};
pub use color::palette::{resolve_color, resolve_tag_color, Palette, PaletteEntry, DEFAULT_TINT};
pub use color::Color;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryMeta, ItemStatus};
pub use model::item::{now_ms, Item, ItemId, ItemValidationError};
pub use model::item_task::{ItemTask, ItemTaskId};
pub use model::tag::{Tag, TagId};
pub use repo::item_repo::{ItemListQuery, ItemRepository, RepoError, RepoResult, SqliteStore};
pub use repo::tag_repo::TagRepository;
pub use service::item_service::{ItemService, ItemServiceError};
pub use view::{filter_and_sort, sort_key, SortKey};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
