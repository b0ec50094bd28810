//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `kv` table (schemaless documents, currently only the profile singleton)
/// - `projects` table (append-only project cards)
/// - `links` table (social links, ordered by sort_order then creation)
/// - `contacts` table (contact entries, public ones listed on the site)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Schemaless key-value documents
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL -- JSON document
);

-- ---------------------------------------------------------------------------
-- Project cards (append-only, newest shown first)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    image_url TEXT NULL,
    github_url TEXT NULL,
    demo_url TEXT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

-- ---------------------------------------------------------------------------
-- Social links
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS links (
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    url TEXT NOT NULL, -- always absolute, scheme-qualified
    icon TEXT NULL,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_links_sort ON links(sort_order);

-- ---------------------------------------------------------------------------
-- Contact entries (is_public gates the public listing)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY NOT NULL,
    type TEXT NOT NULL,
    value TEXT NOT NULL,
    icon TEXT NULL,
    is_public INTEGER NOT NULL DEFAULT 0,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_contacts_public ON contacts(is_public);
"#;
