//! SQLite row conversion functions.
//!
//! Rows are read by column name, so the column order of a query does not
//! matter to these functions.

use chrono::NaiveDate;
use rusqlite::Row;

use pantry_core::inventory::{Entry, DATE_FORMAT};

/// Convert a SQLite row to an Entry.
///
/// Expected columns: id, name, quantity, expiration_date
pub fn row_to_entry(row: &Row) -> rusqlite::Result<Entry> {
    let id: i64 = row.get("id")?;
    let name: String = row.get("name")?;
    let quantity: String = row.get("quantity")?;
    let expiration_date: Option<String> = row.get("expiration_date")?;

    Ok(Entry {
        id,
        name,
        quantity,
        expiration_date: expiration_date.as_deref().map(parse_date).transpose()?,
    })
}

/// Format a date for storage.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored date.
pub fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_conn() -> rusqlite::Connection {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE entries (id INTEGER PRIMARY KEY, name TEXT, quantity TEXT, expiration_date TEXT);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_date(&date), "2025-01-01");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2025-01-01").is_ok());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_row_to_entry_by_column_name() {
        let conn = memory_conn();
        conn.execute(
            "INSERT INTO entries (name, quantity, expiration_date) VALUES ('Milk', '2', '2025-01-01')",
            [],
        )
        .unwrap();

        // Columns deliberately out of table order.
        let entry = conn
            .query_row(
                "SELECT expiration_date, quantity, name, id FROM entries",
                [],
                row_to_entry,
            )
            .unwrap();

        assert_eq!(entry.id, 1);
        assert_eq!(entry.name, "Milk");
        assert_eq!(entry.quantity, "2");
        assert_eq!(entry.expiration_date, NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[test]
    fn test_row_to_entry_null_date() {
        let conn = memory_conn();
        conn.execute(
            "INSERT INTO entries (name, quantity) VALUES ('Rice', '1kg')",
            [],
        )
        .unwrap();

        let entry = conn
            .query_row("SELECT * FROM entries", [], row_to_entry)
            .unwrap();

        assert_eq!(entry.expiration_date, None);
    }

    #[test]
    fn test_row_to_entry_bad_stored_date_fails() {
        let conn = memory_conn();
        conn.execute(
            "INSERT INTO entries (name, quantity, expiration_date) VALUES ('Rice', '1', 'soon')",
            [],
        )
        .unwrap();

        let result = conn.query_row("SELECT * FROM entries", [], row_to_entry);

        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(..))
        ));
    }
}
