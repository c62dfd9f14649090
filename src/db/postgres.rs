use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::info;

use super::{new_id, Account, ContactSubmission, LocalizedText, NewLocalizedText, Storage};
use crate::error::StoreError;
use crate::i18n::{seed_entries, Language};
use crate::schema::{NewAccount, NewContact};

/// PostgreSQL-backed store with the same contract as `MemStorage`.
///
/// Unlike the in-memory store, usernames are enforced unique by an index.
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, create tables if needed and seed translations on first run
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        let storage = Self { pool };
        storage.create_tables().await?;
        storage.seed_translations().await?;
        Ok(storage)
    }

    async fn create_tables(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS accounts (
                id VARCHAR(36) PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create accounts table")?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS translations (
                seq BIGSERIAL PRIMARY KEY,
                id VARCHAR(36) NOT NULL UNIQUE,
                lang VARCHAR(5) NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create translations table")?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS translations_lang_key_idx ON translations (lang, key)",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create translations index")?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS contacts (
                seq BIGSERIAL PRIMARY KEY,
                id VARCHAR(36) NOT NULL UNIQUE,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                company TEXT,
                service TEXT,
                message TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create contacts table")?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS contacts_created_at_idx ON contacts (created_at DESC)",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create contacts index")?;

        Ok(())
    }

    async fn seed_translations(&self) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM translations")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count translations")?;

        if count > 0 {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for entry in seed_entries() {
            sqlx::query("INSERT INTO translations (id, lang, key, value) VALUES ($1, $2, $3, $4)")
                .bind(new_id())
                .bind(entry.lang.code())
                .bind(entry.key)
                .bind(entry.value)
                .execute(&mut *tx)
                .await
                .context("Failed to seed translations")?;
        }
        tx.commit().await?;

        info!("Seeded {} translations", seed_entries().len());
        Ok(())
    }
}

fn map_insert_error(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Constraint(db.message().to_string())
        }
        _ => StoreError::Database(e),
    }
}

fn account_from_row(row: &PgRow) -> Result<Account, StoreError> {
    Ok(Account {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password: row.try_get("password")?,
    })
}

fn text_from_row(row: &PgRow) -> Result<LocalizedText, StoreError> {
    let code: String = row.try_get("lang")?;
    let lang = Language::from_code(&code)
        .map_err(|e| StoreError::Constraint(format!("Stored translation has {}", e)))?;

    Ok(LocalizedText {
        id: row.try_get("id")?,
        lang,
        key: row.try_get("key")?,
        value: row.try_get("value")?,
    })
}

fn contact_from_row(row: &PgRow) -> Result<ContactSubmission, StoreError> {
    Ok(ContactSubmission {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        company: row.try_get("company")?,
        service: row.try_get("service")?,
        message: row.try_get("message")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

#[async_trait]
impl Storage for PgStorage {
    async fn get_account(&self, id: &str) -> Result<Option<Account>, StoreError> {
        sqlx::query("SELECT id, username, password FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .as_ref()
            .map(account_from_row)
            .transpose()
    }

    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, StoreError> {
        sqlx::query("SELECT id, username, password FROM accounts WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .as_ref()
            .map(account_from_row)
            .transpose()
    }

    async fn create_account(&self, input: NewAccount) -> Result<Account, StoreError> {
        let row = sqlx::query(
            "INSERT INTO accounts (id, username, password) VALUES ($1, $2, $3)
             RETURNING id, username, password",
        )
        .bind(new_id())
        .bind(&input.username)
        .bind(&input.password)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        account_from_row(&row)
    }

    async fn get_localized_text(&self, lang: Language) -> Result<Vec<LocalizedText>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, lang, key, value FROM translations WHERE lang = $1 ORDER BY seq",
        )
        .bind(lang.code())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(text_from_row).collect()
    }

    async fn create_localized_text(
        &self,
        input: NewLocalizedText,
    ) -> Result<LocalizedText, StoreError> {
        let row = sqlx::query(
            "INSERT INTO translations (id, lang, key, value) VALUES ($1, $2, $3, $4)
             RETURNING id, lang, key, value",
        )
        .bind(new_id())
        .bind(input.lang.code())
        .bind(&input.key)
        .bind(&input.value)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        text_from_row(&row)
    }

    async fn create_contact_submission(
        &self,
        input: NewContact,
    ) -> Result<ContactSubmission, StoreError> {
        let row = sqlx::query(
            "INSERT INTO contacts (id, name, email, company, service, message, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, name, email, company, service, message, created_at",
        )
        .bind(new_id())
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.company)
        .bind(&input.service)
        .bind(&input.message)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        contact_from_row(&row)
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, email, company, service, message, created_at
             FROM contacts
             ORDER BY created_at DESC, seq DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(contact_from_row).collect()
    }
}
