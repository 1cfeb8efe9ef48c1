//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `items` aggregate (item row plus
//!   owned tasks plus tag links).
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Item::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Deleting an item cascades its tasks and tag links; tag rows survive.

use crate::db::DbError;
use crate::model::category::{Category, ItemStatus};
use crate::model::item::{Item, ItemId, ItemValidationError};
use crate::model::item_task::ItemTask;
use crate::model::tag::TagId;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ITEM_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    remarks,
    date_added,
    date_due,
    date_started,
    date_completed,
    category,
    status,
    tint
FROM items";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for item persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    Db(DbError),
    NotFound(ItemId),
    TagNotFound(TagId),
    InvalidData(String),
    /// Connection has not been migrated to the schema this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::TagNotFound(id) => write!(f, "tag not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted item data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing items.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemListQuery {
    pub category: Option<Category>,
    pub status: Option<ItemStatus>,
}

/// Repository interface for item CRUD operations.
///
/// This is the store capability the surrounding application injects; it is
/// never reachable through a process-wide singleton.
pub trait ItemRepository {
    /// Persists a new item aggregate and returns its stable id.
    fn create_item(&mut self, item: &Item) -> RepoResult<ItemId>;
    /// Replaces an item row and its owned tasks and tag links.
    fn update_item(&mut self, item: &Item) -> RepoResult<()>;
    /// Loads one item aggregate by id.
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    /// Lists item aggregates, oldest first by `date_added`.
    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<Item>>;
    /// Hard-deletes an item, cascading its tasks and tag links.
    fn delete_item(&mut self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed store implementing the item and tag repositories.
pub struct SqliteStore<'conn> {
    pub(crate) conn: &'conn mut Connection,
}

impl<'conn> SqliteStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    ///
    /// Rejects connections whose schema version or tables do not match what
    /// this binary expects, instead of failing later mid-operation.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteStore<'_> {
    fn create_item(&mut self, item: &Item) -> RepoResult<ItemId> {
        item.validate()?;

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO items (
                uuid,
                title,
                remarks,
                date_added,
                date_due,
                date_started,
                date_completed,
                category,
                status,
                tint
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                item.id.to_string(),
                item.title.as_str(),
                item.remarks.as_str(),
                item.date_added,
                item.date_due,
                item.date_started,
                item.date_completed,
                item.category.as_str(),
                item.status.as_str(),
                item.tint.as_str(),
            ],
        )?;
        insert_tasks(&tx, item)?;
        insert_tag_links(&tx, item)?;
        tx.commit()?;

        Ok(item.id)
    }

    fn update_item(&mut self, item: &Item) -> RepoResult<()> {
        item.validate()?;

        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE items
             SET
                title = ?1,
                remarks = ?2,
                date_added = ?3,
                date_due = ?4,
                date_started = ?5,
                date_completed = ?6,
                category = ?7,
                status = ?8,
                tint = ?9,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?10;",
            params![
                item.title.as_str(),
                item.remarks.as_str(),
                item.date_added,
                item.date_due,
                item.date_started,
                item.date_completed,
                item.category.as_str(),
                item.status.as_str(),
                item.tint.as_str(),
                item.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(item.id));
        }

        // Owned tasks and tag links use whole-set replacement semantics.
        tx.execute(
            "DELETE FROM item_tasks WHERE item_uuid = ?1;",
            [item.id.to_string()],
        )?;
        tx.execute(
            "DELETE FROM item_tags WHERE item_uuid = ?1;",
            [item.id.to_string()],
        )?;
        insert_tasks(&tx, item)?;
        insert_tag_links(&tx, item)?;
        tx.commit()?;

        Ok(())
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            let mut item = parse_item_row(row)?;
            load_children(self.conn, &mut item)?;
            return Ok(Some(item));
        }

        Ok(None)
    }

    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<Item>> {
        let mut sql = format!("{ITEM_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category) = query.category {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Text(category.as_str().to_string()));
        }

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(status.as_str().to_string()));
        }

        sql.push_str(" ORDER BY date_added ASC, uuid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        drop(rows);
        drop(stmt);

        for item in &mut items {
            load_children(self.conn, item)?;
        }

        Ok(items)
    }

    fn delete_item(&mut self, id: ItemId) -> RepoResult<()> {
        // Cascade of item_tasks and item_tags rows is delegated to the
        // foreign keys configured at connection bootstrap.
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn insert_tasks(tx: &Transaction<'_>, item: &Item) -> RepoResult<()> {
    for task in &item.tasks {
        tx.execute(
            "INSERT INTO item_tasks (uuid, item_uuid, name, is_completed, due_date, due_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                task.id.to_string(),
                task.item_id.to_string(),
                task.name.as_str(),
                i64::from(task.is_completed),
                task.due_date,
                task.due_time,
            ],
        )?;
    }
    Ok(())
}

fn insert_tag_links(tx: &Transaction<'_>, item: &Item) -> RepoResult<()> {
    for tag_id in &item.tags {
        let inserted = tx.execute(
            "INSERT OR IGNORE INTO item_tags (item_uuid, tag_uuid)
             SELECT ?1, uuid FROM tags WHERE uuid = ?2;",
            params![item.id.to_string(), tag_id.to_string()],
        );
        match inserted {
            Ok(0) => {
                // Either the link already exists or the tag row is gone;
                // distinguish so dangling references do not vanish silently.
                let exists: i64 = tx.query_row(
                    "SELECT EXISTS(SELECT 1 FROM tags WHERE uuid = ?1);",
                    [tag_id.to_string()],
                    |row| row.get(0),
                )?;
                if exists == 0 {
                    return Err(RepoError::TagNotFound(*tag_id));
                }
            }
            Ok(_) => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn load_children(conn: &Connection, item: &mut Item) -> RepoResult<()> {
    let mut task_stmt = conn.prepare(
        "SELECT uuid, item_uuid, name, is_completed, due_date, due_time
         FROM item_tasks
         WHERE item_uuid = ?1
         ORDER BY rowid ASC;",
    )?;
    let mut rows = task_stmt.query([item.id.to_string()])?;
    let mut tasks = Vec::new();
    while let Some(row) = rows.next()? {
        tasks.push(parse_task_row(row)?);
    }
    item.tasks = tasks;

    let mut tag_stmt = conn.prepare(
        "SELECT tag_uuid FROM item_tags WHERE item_uuid = ?1 ORDER BY rowid ASC;",
    )?;
    let mut rows = tag_stmt.query([item.id.to_string()])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        let tag_text: String = row.get("tag_uuid")?;
        tags.push(parse_uuid(&tag_text, "item_tags.tag_uuid")?);
    }
    item.tags = tags;

    Ok(())
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text, "items.uuid")?;

    let category_text: String = row.get("category")?;
    let category = Category::parse(&category_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid category `{category_text}` in items.category"
        ))
    })?;

    let status_text: String = row.get("status")?;
    let status = ItemStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in items.status"))
    })?;

    Ok(Item {
        id,
        title: row.get("title")?,
        remarks: row.get("remarks")?,
        date_added: row.get("date_added")?,
        date_due: row.get("date_due")?,
        date_started: row.get("date_started")?,
        date_completed: row.get("date_completed")?,
        category,
        status,
        tint: row.get("tint")?,
        tags: Vec::new(),
        tasks: Vec::new(),
    })
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<ItemTask> {
    let uuid_text: String = row.get("uuid")?;
    let item_text: String = row.get("item_uuid")?;
    let is_completed = match row.get::<_, i64>("is_completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_completed value `{other}` in item_tasks.is_completed"
            )));
        }
    };

    Ok(ItemTask {
        id: parse_uuid(&uuid_text, "item_tasks.uuid")?,
        item_id: parse_uuid(&item_text, "item_tasks.item_uuid")?,
        name: row.get("name")?,
        is_completed,
        due_date: row.get("due_date")?,
        due_time: row.get("due_time")?,
    })
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in ["items", "item_tasks", "tags", "item_tags"] {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}
