// src/auth/service.rs
use chrono::NaiveDateTime;
use rusqlite::Connection;

use crate::auth::credentials::{hash_password, normalize_email, verify_password};
use crate::db::session::{self, SessionRecord};
use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The demo account baked into the app; signing in with it always works.
    pub demo_email: String,
    pub demo_password: String,
    pub demo_username: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_email: "test@example.com".to_string(),
            demo_password: "password".to_string(),
            demo_username: "John Doe".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct AuthService {
    cfg: AuthConfig,
}

impl AuthService {
    pub fn new(cfg: AuthConfig) -> Self {
        Self { cfg }
    }

    /// Sign in:
    /// - both fields required
    /// - the demo account always succeeds and overwrites the record
    /// - otherwise the credentials must match the stored record
    ///
    /// A failed attempt changes no state.
    pub fn sign_in(
        &self,
        conn: &Connection,
        email: &str,
        password: &str,
        now: NaiveDateTime,
    ) -> Result<SessionRecord, ServerError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ServerError::BadRequest("Please fill in all fields".into()));
        }

        let email = normalize_email(email)?;

        if email == self.cfg.demo_email && password == self.cfg.demo_password {
            let record = SessionRecord {
                email,
                username: self.cfg.demo_username.clone(),
                password_hash: hash_password(password).to_vec(),
                saved_at: now,
            };
            session::save_session(conn, &record)?;
            return Ok(record);
        }

        let stored = session::load_session(conn)?;
        match stored {
            Some(record)
                if record.email == email && verify_password(password, &record.password_hash) =>
            {
                Ok(record)
            }
            _ => Err(ServerError::Unauthorized("Invalid credentials".into())),
        }
    }

    /// Sign up: all fields required, passwords must match. Overwrites the
    /// session record, so the new account is signed in immediately.
    pub fn sign_up(
        &self,
        conn: &Connection,
        form: &SignUpForm,
        now: NaiveDateTime,
    ) -> Result<SessionRecord, ServerError> {
        if form.username.trim().is_empty()
            || form.email.trim().is_empty()
            || form.password.is_empty()
            || form.confirm_password.is_empty()
        {
            return Err(ServerError::BadRequest("Please fill in all fields".into()));
        }

        if form.password != form.confirm_password {
            return Err(ServerError::BadRequest("Passwords do not match".into()));
        }

        let record = SessionRecord {
            email: normalize_email(&form.email)?,
            username: form.username.trim().to_string(),
            password_hash: hash_password(&form.password).to_vec(),
            saved_at: now,
        };
        session::save_session(conn, &record)?;

        Ok(record)
    }

    /// Browse without an account. Overwrites whatever record exists.
    pub fn continue_as_guest(
        &self,
        conn: &Connection,
        now: NaiveDateTime,
    ) -> Result<SessionRecord, ServerError> {
        let record = SessionRecord {
            email: String::new(),
            username: "Guest".to_string(),
            password_hash: hash_password("").to_vec(),
            saved_at: now,
        };
        session::save_session(conn, &record)?;

        Ok(record)
    }

    pub fn current_user(&self, conn: &Connection) -> Result<Option<SessionRecord>, ServerError> {
        session::load_session(conn)
    }

    pub fn logout(&self, conn: &Connection) -> Result<(), ServerError> {
        session::clear_session(conn)
    }
}
