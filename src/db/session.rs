// src/db/session.rs
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

/// Storage key for the single local session record. The app never uses a
/// second key, so at most one record exists at a time.
pub const STORAGE_KEY: &str = "DoorVue";

#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub email: String,
    pub username: String,
    pub password_hash: Vec<u8>,
    pub saved_at: NaiveDateTime,
}

/// Overwrite the session record under the fixed storage key.
/// Sign-in, sign-up and guest all land here.
pub fn save_session(conn: &Connection, record: &SessionRecord) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into session_record (storage_key, email, username, password_hash, saved_at)
        values (?, ?, ?, ?, ?)
        on conflict(storage_key) do update set
            email = excluded.email,
            username = excluded.username,
            password_hash = excluded.password_hash,
            saved_at = excluded.saved_at
        "#,
        params![
            STORAGE_KEY,
            record.email,
            record.username,
            record.password_hash,
            record.saved_at
        ],
    )
    .map_err(|e| ServerError::DbError(format!("save session failed: {e}")))?;

    Ok(())
}

/// Load the session record, if someone is signed in.
pub fn load_session(conn: &Connection) -> Result<Option<SessionRecord>, ServerError> {
    conn.query_row(
        r#"
        select email, username, password_hash, saved_at
        from session_record
        where storage_key = ?
        "#,
        params![STORAGE_KEY],
        |row| {
            Ok(SessionRecord {
                email: row.get(0)?,
                username: row.get(1)?,
                password_hash: row.get(2)?,
                saved_at: row.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

/// Delete the session record. Logout.
pub fn clear_session(conn: &Connection) -> Result<(), ServerError> {
    conn.execute(
        "delete from session_record where storage_key = ?",
        params![STORAGE_KEY],
    )
    .map_err(|e| ServerError::DbError(format!("clear session failed: {e}")))?;

    Ok(())
}
