//! FFI use-case API for the mobile host.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Resolve display colors and contrast foregrounds on the Rust side so
//!   the host renders exactly what the core computed.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Persistence failures come back as descriptive `message` strings,
//!   unchanged from the core error text.

use daykeep_core::db::open_db;
use daykeep_core::{
    contrasting_text_color, core_version as core_version_inner, init_logging as init_logging_inner,
    resolve_color, Category, Item, ItemService, ItemStatus, SqliteStore, WCAG_AA,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const STORE_DB_FILE_NAME: &str = "daykeep.sqlite3";
static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Pins the store database directory for this process.
///
/// # FFI contract
/// - Sync call; must run before any item/tag operation.
/// - Repeat calls with the same directory are idempotent; a different
///   directory is rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn init_store(db_dir: String) -> String {
    let path = PathBuf::from(db_dir).join(STORE_DB_FILE_NAME);
    let pinned = STORE_DB_PATH.get_or_init(|| path.clone());
    if *pinned != path {
        return format!(
            "store already initialized at `{}`; refusing to switch to `{}`",
            pinned.display(),
            path.display()
        );
    }
    String::new()
}

/// One row of the active tab, with display colors resolved core-side.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    /// Stable item id in string form.
    pub item_id: String,
    pub title: String,
    pub remarks: String,
    /// Category storage key (`today`, `scheduled`, ...).
    pub category: String,
    /// Status storage key (`upcoming|active|hold`).
    pub status: String,
    /// Whole calendar days from now to the due date, when computable.
    pub days_until_due: Option<i64>,
    /// Snapshot-time completion flag.
    pub is_completed: bool,
    /// Resolved tint as `#RRGGBB`.
    pub tint_hex: String,
    /// Legible foreground for the tint as `#RRGGBB` (black or white).
    pub text_color_hex: String,
    /// Attached tag names, in attachment order.
    pub tags: Vec<String>,
}

/// Response envelope for tab listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TabListResponse {
    /// Ordered rows for the requested tab (empty on failure).
    pub items: Vec<ItemCard>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for item commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected item id, when known.
    pub item_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ItemActionResponse {
    fn success(message: impl Into<String>, item_id: String) -> Self {
        Self {
            ok: true,
            item_id: Some(item_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            message: message.into(),
        }
    }
}

/// Lists the ordered items for one category tab.
///
/// # FFI contract
/// - Sync call; opens the store database on demand.
/// - Unknown tab keys fail with a message rather than throwing.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tab(tab: String) -> TabListResponse {
    let Some(category) = Category::parse(tab.as_str()) else {
        return TabListResponse {
            items: Vec::new(),
            message: format!("unknown tab `{tab}`"),
        };
    };

    let result = (|| {
        let mut conn = open_store_db()?;
        let store = SqliteStore::try_new(&mut conn).map_err(|err| err.to_string())?;
        let service = ItemService::new(store);

        let items = service.list_tab(category).map_err(|err| err.to_string())?;
        items
            .iter()
            .map(|item| {
                let tags = service
                    .tags_for_item(item.id)
                    .map_err(|err| err.to_string())?
                    .into_iter()
                    .map(|tag| tag.name)
                    .collect();
                Ok(item_card(item, tags))
            })
            .collect::<Result<Vec<_>, String>>()
    })();

    match result {
        Ok(items) => TabListResponse {
            items,
            message: String::new(),
        },
        Err(message) => {
            log::error!("event=list_tab module=ffi status=error tab={tab} error={message}");
            TabListResponse {
                items: Vec::new(),
                message,
            }
        }
    }
}

/// Creates an item with form defaults plus the given title and tab.
#[flutter_rust_bridge::frb(sync)]
pub fn create_item(title: String, tab: String) -> ItemActionResponse {
    let Some(category) = Category::parse(tab.as_str()) else {
        return ItemActionResponse::failure(format!("unknown tab `{tab}`"));
    };

    let result = (|| {
        let mut conn = open_store_db()?;
        let store = SqliteStore::try_new(&mut conn).map_err(|err| err.to_string())?;
        let mut service = ItemService::new(store);

        let mut item = Item::new();
        item.title = title;
        item.category = category;
        item.tint = category.meta().tint.to_string();
        service.create_item(&item).map_err(|err| err.to_string())?;
        Ok::<_, String>(item.id.to_string())
    })();

    match result {
        Ok(item_id) => ItemActionResponse::success("item created", item_id),
        Err(message) => ItemActionResponse::failure(message),
    }
}

/// Saves field edits to an existing item.
///
/// # FFI contract
/// - Sync call; loads the stored item, applies the edited fields, and writes
///   the whole aggregate back. Sub-tasks and tag links are untouched.
/// - `date_added` and `date_completed` stay as stored; completion goes
///   through `complete_item`.
#[flutter_rust_bridge::frb(sync)]
pub fn update_item(
    item_id: String,
    title: String,
    remarks: String,
    tab: String,
    status: String,
    tint: String,
    date_due: i64,
    date_started: i64,
) -> ItemActionResponse {
    let Ok(id) = uuid::Uuid::parse_str(item_id.as_str()) else {
        return ItemActionResponse::failure(format!("invalid item id `{item_id}`"));
    };
    let Some(category) = Category::parse(tab.as_str()) else {
        return ItemActionResponse::failure(format!("unknown tab `{tab}`"));
    };
    let Some(status) = ItemStatus::parse(status.as_str()) else {
        return ItemActionResponse::failure(format!("unknown status `{status}`"));
    };

    let result = (|| {
        let mut conn = open_store_db()?;
        let store = SqliteStore::try_new(&mut conn).map_err(|err| err.to_string())?;
        let mut service = ItemService::new(store);

        let mut item = service.get_item(id).map_err(|err| err.to_string())?;
        item.title = title;
        item.remarks = remarks;
        item.category = category;
        item.status = status;
        item.tint = tint;
        item.date_due = date_due;
        item.date_started = date_started;
        service.update_item(&item).map_err(|err| err.to_string())?;
        Ok::<_, String>(())
    })();

    match result {
        Ok(()) => ItemActionResponse::success("item updated", item_id),
        Err(message) => ItemActionResponse::failure(message),
    }
}

/// Marks an item completed as of now and moves it to the Completed tab.
#[flutter_rust_bridge::frb(sync)]
pub fn complete_item(item_id: String) -> ItemActionResponse {
    let Ok(id) = uuid::Uuid::parse_str(item_id.as_str()) else {
        return ItemActionResponse::failure(format!("invalid item id `{item_id}`"));
    };

    let result = (|| {
        let mut conn = open_store_db()?;
        let store = SqliteStore::try_new(&mut conn).map_err(|err| err.to_string())?;
        let mut service = ItemService::new(store);

        let mut item = service.get_item(id).map_err(|err| err.to_string())?;
        item.date_completed = daykeep_core::now_ms();
        item.category = Category::Completed;
        service.update_item(&item).map_err(|err| err.to_string())?;
        Ok::<_, String>(())
    })();

    match result {
        Ok(()) => ItemActionResponse::success("item completed", item_id),
        Err(message) => ItemActionResponse::failure(message),
    }
}

/// Deletes an item; its sub-tasks cascade, attached tags survive.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_item(item_id: String) -> ItemActionResponse {
    let Ok(id) = uuid::Uuid::parse_str(item_id.as_str()) else {
        return ItemActionResponse::failure(format!("invalid item id `{item_id}`"));
    };

    let result = (|| {
        let mut conn = open_store_db()?;
        let store = SqliteStore::try_new(&mut conn).map_err(|err| err.to_string())?;
        let mut service = ItemService::new(store);
        service.delete_item(id).map_err(|err| err.to_string())
    })();

    match result {
        Ok(()) => ItemActionResponse::success("item deleted", item_id),
        Err(message) => ItemActionResponse::failure(message),
    }
}

fn item_card(item: &Item, tags: Vec<String>) -> ItemCard {
    let tint = resolve_color(item.tint.as_str());
    ItemCard {
        item_id: item.id.to_string(),
        title: item.title.clone(),
        remarks: item.remarks.clone(),
        category: item.category.as_str().to_string(),
        status: item.status.as_str().to_string(),
        days_until_due: item.days_until_due(),
        is_completed: item.is_completed(),
        tint_hex: tint.to_hex(),
        text_color_hex: contrasting_text_color(tint, WCAG_AA).color().to_hex(),
        tags,
    }
}

fn open_store_db() -> Result<rusqlite::Connection, String> {
    let path = STORE_DB_PATH
        .get()
        .ok_or_else(|| "store not initialized; call init_store first".to_string())?;
    open_db(path).map_err(|err| err.to_string())
}
