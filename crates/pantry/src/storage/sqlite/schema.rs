//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the `entries` table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity TEXT NOT NULL,
    expiration_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_entries_name ON entries(name);
"#;

pub const INSERT_ENTRY: &str = r#"
INSERT INTO entries (name, quantity, expiration_date)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ENTRIES: &str = r#"
SELECT id, name, quantity, expiration_date
FROM entries
ORDER BY id ASC
"#;

pub const SELECT_ENTRY_ID_BY_NAME: &str = r#"
SELECT id
FROM entries
WHERE name = ?1
ORDER BY id ASC
LIMIT 1
"#;

pub const UPDATE_ENTRY_QUANTITY: &str = r#"
UPDATE entries
SET quantity = ?2
WHERE id = ?1
"#;

pub const DELETE_ENTRY: &str = r#"
DELETE FROM entries
WHERE id = ?1
"#;

/// Cheapest statement that proves the connection works.
pub const PING: &str = "SELECT 1";
