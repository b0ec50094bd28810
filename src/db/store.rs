use crate::db::models::{ContactRow, LinkRow, ProjectRow};
use crate::error::FolioError;
use chrono::Utc;
use folio_schema::{NewContact, NewLink, NewProject};
use sqlx::SqlitePool;

/// Relational adapter over the `projects`, `links` and `contacts` tables.
///
/// Every statement binds its parameters positionally; nothing is ever
/// concatenated into SQL text. Each call issues exactly one statement and
/// relies on SQLite for its atomicity; there are no multi-statement
/// transactions.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectRow>, FolioError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
        SELECT id, title, description, image_url, github_url, demo_url, created_at
        FROM projects
        ORDER BY created_at DESC
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn insert_project(&self, project: &NewProject) -> Result<i64, FolioError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO projects (title, description, image_url, github_url, demo_url, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.demo_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn list_links(&self) -> Result<Vec<LinkRow>, FolioError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
        SELECT id, title, url, icon, sort_order, created_at
        FROM links
        ORDER BY sort_order ASC, created_at ASC
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts a link and returns the adapter-assigned id. The caller is
    /// expected to have normalized `link.url` already.
    pub async fn insert_link(&self, link: &NewLink) -> Result<i64, FolioError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO links (title, url, icon, sort_order, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
        )
        .bind(&link.title)
        .bind(&link.url)
        .bind(&link.icon)
        .bind(link.sort_order)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Overwrites every mutable field of a link row.
    pub async fn update_link(&self, id: i64, link: &NewLink) -> Result<(), FolioError> {
        sqlx::query(
            r#"
        UPDATE links
        SET title = ?, url = ?, icon = ?, sort_order = ?
        WHERE id = ?
        "#,
        )
        .bind(&link.title)
        .bind(&link.url)
        .bind(&link.icon)
        .bind(link.sort_order)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_link(&self, id: i64) -> Result<(), FolioError> {
        sqlx::query(
            r#"
        DELETE FROM links WHERE id = ?
        "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists only entries flagged public; private rows stay in the table but
    /// are reachable through no read path.
    pub async fn list_public_contacts(&self) -> Result<Vec<ContactRow>, FolioError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
        SELECT id, type, value, icon, is_public, sort_order, created_at
        FROM contacts
        WHERE is_public = ?
        ORDER BY sort_order ASC, created_at ASC
        "#,
        )
        .bind(true)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn insert_contact(&self, contact: &NewContact) -> Result<i64, FolioError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO contacts (type, value, icon, is_public, sort_order, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
        )
        .bind(&contact.kind)
        .bind(&contact.value)
        .bind(&contact.icon)
        .bind(contact.is_public)
        .bind(contact.sort_order)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn delete_contact(&self, id: i64) -> Result<(), FolioError> {
        sqlx::query(
            r#"
        DELETE FROM contacts WHERE id = ?
        "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
