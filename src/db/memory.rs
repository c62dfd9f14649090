use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

use super::{new_id, Account, ContactSubmission, LocalizedText, NewLocalizedText, Storage};
use crate::error::StoreError;
use crate::i18n::{seed_entries, Language};
use crate::schema::{NewAccount, NewContact};

/// Process-local store. Each collection has its own lock; no lock is held
/// across an `.await`.
pub struct MemStorage {
    accounts: Mutex<Vec<Account>>,
    translations: Mutex<Vec<LocalizedText>>,
    contacts: Mutex<Vec<ContactSubmission>>,
}

impl MemStorage {
    /// Store preloaded with the built-in translation table
    pub fn new() -> Self {
        let translations = seed_entries()
            .iter()
            .map(|entry| LocalizedText {
                id: new_id(),
                lang: entry.lang,
                key: entry.key.to_string(),
                value: entry.value.to_string(),
            })
            .collect();

        Self {
            accounts: Mutex::new(Vec::new()),
            translations: Mutex::new(translations),
            contacts: Mutex::new(Vec::new()),
        }
    }

    /// Store with all three collections empty
    pub fn empty() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            translations: Mutex::new(Vec::new()),
            contacts: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<'a, T>(
    mutex: &'a Mutex<T>,
    collection: &'static str,
) -> Result<MutexGuard<'a, T>, StoreError> {
    mutex.lock().map_err(|_| StoreError::Poisoned(collection))
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_account(&self, id: &str) -> Result<Option<Account>, StoreError> {
        let accounts = lock(&self.accounts, "accounts")?;
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, StoreError> {
        let accounts = lock(&self.accounts, "accounts")?;
        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }

    async fn create_account(&self, input: NewAccount) -> Result<Account, StoreError> {
        let account = Account {
            id: new_id(),
            username: input.username,
            password: input.password,
        };
        lock(&self.accounts, "accounts")?.push(account.clone());
        Ok(account)
    }

    async fn get_localized_text(&self, lang: Language) -> Result<Vec<LocalizedText>, StoreError> {
        let translations = lock(&self.translations, "translations")?;
        Ok(translations
            .iter()
            .filter(|t| t.lang == lang)
            .cloned()
            .collect())
    }

    async fn create_localized_text(
        &self,
        input: NewLocalizedText,
    ) -> Result<LocalizedText, StoreError> {
        let text = LocalizedText {
            id: new_id(),
            lang: input.lang,
            key: input.key,
            value: input.value,
        };
        lock(&self.translations, "translations")?.push(text.clone());
        Ok(text)
    }

    async fn create_contact_submission(
        &self,
        input: NewContact,
    ) -> Result<ContactSubmission, StoreError> {
        let contact = ContactSubmission::from_new(input, Utc::now());
        lock(&self.contacts, "contacts")?.push(contact.clone());
        Ok(contact)
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let contacts = lock(&self.contacts, "contacts")?;
        // Reverse first so the stable sort keeps later inserts ahead on ties
        let mut listed: Vec<ContactSubmission> = contacts.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }
}
