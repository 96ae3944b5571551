use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub author: String,
    pub img_url: String,
}

/// The mutable fields of a post. `id` is assigned by the store and `date`
/// is stamped once at creation, so neither appears here.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub author: String,
    pub img_url: String,
}

impl Post {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Post {
            id: row.get("id")?,
            title: row.get("title")?,
            subtitle: row.get("subtitle")?,
            date: row.get("date")?,
            body: row.get("body")?,
            author: row.get("author")?,
            img_url: row.get("img_url")?,
        })
    }

    /// All posts in persisted (rowid) order.
    pub fn list(pool: &DbPool) -> Vec<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };

        let mut stmt = match conn.prepare("SELECT * FROM posts ORDER BY id") {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        stmt.query_map([], Self::from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row("SELECT * FROM posts WHERE id = ?1", params![id], Self::from_row)
            .ok()
    }

    pub fn count(pool: &DbPool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };

        conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
            .unwrap_or(0)
    }

    /// Insert a new post, stamping the creation date server-side.
    /// A duplicate title violates the UNIQUE constraint and surfaces as Err.
    pub fn create(pool: &DbPool, form: &NewPost) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        let date = chrono::Local::now().format("%m %d, %Y").to_string();

        conn.execute(
            "INSERT INTO posts (title, subtitle, date, body, author, img_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![form.title, form.subtitle, date, form.body, form.author, form.img_url],
        )
        .map_err(|e| e.to_string())?;

        let id = conn.last_insert_rowid();
        Ok(id)
    }

    /// Overwrite the mutable fields. `date` is never touched on edit.
    pub fn update(pool: &DbPool, id: i64, form: &NewPost) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        let changed = conn
            .execute(
                "UPDATE posts SET title=?1, subtitle=?2, body=?3, author=?4, img_url=?5
                 WHERE id=?6",
                params![form.title, form.subtitle, form.body, form.author, form.img_url, id],
            )
            .map_err(|e| e.to_string())?;

        if changed == 0 {
            return Err("post not found".to_string());
        }
        Ok(())
    }

    /// Hard delete. There is no soft-delete or recovery.
    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        let changed = conn
            .execute("DELETE FROM posts WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;

        if changed == 0 {
            return Err("post not found".to_string());
        }
        Ok(())
    }
}
