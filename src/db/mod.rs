//! Record store for accounts, localized UI copy and contact submissions.
//!
//! Handlers only ever see the `Storage` trait. `MemStorage` is the default
//! process-local backend; `PgStorage` keeps the same contract on PostgreSQL.

mod memory;
mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::i18n::Language;
use crate::schema::{NewAccount, NewContact};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub id: String,
    pub lang: Language,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocalizedText {
    pub lang: Language,
    pub key: String,
    pub value: String,
}

impl NewLocalizedText {
    pub fn new(lang: Language, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            lang,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A stored contact-form submission. `company` and `service` serialize as
/// `null` when the visitor left them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    fn from_new(input: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            name: input.name,
            email: input.email,
            company: input.company,
            service: input.service,
            message: input.message,
            created_at,
        }
    }
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_account(&self, id: &str) -> Result<Option<Account>, StoreError>;

    /// First account with this username. Uniqueness is the caller's concern
    /// for the in-memory backend.
    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, StoreError>;

    async fn create_account(&self, input: NewAccount) -> Result<Account, StoreError>;

    /// All entries for `lang` in insertion order.
    async fn get_localized_text(&self, lang: Language) -> Result<Vec<LocalizedText>, StoreError>;

    async fn create_localized_text(
        &self,
        input: NewLocalizedText,
    ) -> Result<LocalizedText, StoreError>;

    async fn create_contact_submission(
        &self,
        input: NewContact,
    ) -> Result<ContactSubmission, StoreError>;

    /// Newest first; equal timestamps list the later insert first.
    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError>;
}

/// Fresh opaque record identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
