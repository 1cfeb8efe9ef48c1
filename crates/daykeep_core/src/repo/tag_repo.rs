//! Tag repository contract layered on the SQLite store.
//!
//! # Responsibility
//! - Manage independent tag rows and the shared item/tag association.
//!
//! # Invariants
//! - Attaching an already-attached tag is a no-op (idempotent).
//! - Detaching or deleting never touches the other side of the association:
//!   deleting a tag removes its links, deleting an item leaves tags intact.

use crate::model::item::ItemId;
use crate::model::tag::{Tag, TagId};
use crate::repo::item_repo::{parse_uuid, RepoError, RepoResult, SqliteStore};
use rusqlite::params;

/// Repository interface for tag lifecycle and association operations.
pub trait TagRepository {
    /// Persists a new tag row.
    fn create_tag(&self, tag: &Tag) -> RepoResult<TagId>;
    /// Returns all tags sorted by name.
    fn list_tags(&self) -> RepoResult<Vec<Tag>>;
    /// Deletes a tag and all of its item links.
    fn delete_tag(&mut self, id: TagId) -> RepoResult<()>;
    /// Associates a tag with an item; idempotent.
    fn attach_tag(&self, item_id: ItemId, tag_id: TagId) -> RepoResult<()>;
    /// Removes an item/tag association if present.
    fn detach_tag(&self, item_id: ItemId, tag_id: TagId) -> RepoResult<()>;
    /// Returns the tags attached to one item, in attachment order.
    fn tags_for_item(&self, item_id: ItemId) -> RepoResult<Vec<Tag>>;
}

impl TagRepository for SqliteStore<'_> {
    fn create_tag(&self, tag: &Tag) -> RepoResult<TagId> {
        if tag.id.is_nil() {
            return Err(RepoError::InvalidData("tag id must not be nil".to_string()));
        }

        self.conn.execute(
            "INSERT INTO tags (uuid, name, color) VALUES (?1, ?2, ?3);",
            params![tag.id.to_string(), tag.name.as_str(), tag.color.as_str()],
        )?;

        Ok(tag.id)
    }

    fn list_tags(&self) -> RepoResult<Vec<Tag>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, name, color FROM tags ORDER BY name ASC;")?;
        let mut rows = stmt.query([])?;
        let mut tags = Vec::new();

        while let Some(row) = rows.next()? {
            let uuid_text: String = row.get("uuid")?;
            tags.push(Tag {
                id: parse_uuid(&uuid_text, "tags.uuid")?,
                name: row.get("name")?,
                color: row.get("color")?,
            });
        }

        Ok(tags)
    }

    fn delete_tag(&mut self, id: TagId) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM item_tags WHERE tag_uuid = ?1;",
            [id.to_string()],
        )?;
        let changed = tx.execute("DELETE FROM tags WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::TagNotFound(id));
        }
        tx.commit()?;

        Ok(())
    }

    fn attach_tag(&self, item_id: ItemId, tag_id: TagId) -> RepoResult<()> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO item_tags (item_uuid, tag_uuid)
             SELECT i.uuid, t.uuid
             FROM items i, tags t
             WHERE i.uuid = ?1 AND t.uuid = ?2;",
            params![item_id.to_string(), tag_id.to_string()],
        )?;

        if inserted == 0 {
            // Idempotent when the link already exists; an error otherwise.
            let linked: i64 = self.conn.query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM item_tags WHERE item_uuid = ?1 AND tag_uuid = ?2
                );",
                params![item_id.to_string(), tag_id.to_string()],
                |row| row.get(0),
            )?;
            if linked == 0 {
                let item_exists: i64 = self.conn.query_row(
                    "SELECT EXISTS(SELECT 1 FROM items WHERE uuid = ?1);",
                    [item_id.to_string()],
                    |row| row.get(0),
                )?;
                if item_exists == 0 {
                    return Err(RepoError::NotFound(item_id));
                }
                return Err(RepoError::TagNotFound(tag_id));
            }
        }

        Ok(())
    }

    fn detach_tag(&self, item_id: ItemId, tag_id: TagId) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM item_tags WHERE item_uuid = ?1 AND tag_uuid = ?2;",
            params![item_id.to_string(), tag_id.to_string()],
        )?;
        Ok(())
    }

    fn tags_for_item(&self, item_id: ItemId) -> RepoResult<Vec<Tag>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.uuid, t.name, t.color
             FROM item_tags l
             JOIN tags t ON t.uuid = l.tag_uuid
             WHERE l.item_uuid = ?1
             ORDER BY l.rowid ASC;",
        )?;
        let mut rows = stmt.query([item_id.to_string()])?;
        let mut tags = Vec::new();

        while let Some(row) = rows.next()? {
            let uuid_text: String = row.get("uuid")?;
            tags.push(Tag {
                id: parse_uuid(&uuid_text, "tags.uuid")?,
                name: row.get("name")?,
                color: row.get("color")?,
            });
        }

        Ok(tags)
    }
}
