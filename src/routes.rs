//! HTTP endpoints consumed by the landing page.
//!
//! Each request is independent. Input problems are rejected before the store
//! is touched; store failures become a generic 500.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{debug, info, Level};

use crate::config::Config;
use crate::db::{ContactSubmission, Storage};
use crate::error::ApiError;
use crate::i18n::Language;
use crate::schema::{FieldError, NewContact, ValidationErrors};
use crate::security;

/// Shared handler state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub message: &'static str,
    pub id: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/translations/:lang", get(get_translations))
        .route("/api/contact", post(create_contact))
        .route("/api/contacts", get(list_contacts))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/translations/:lang` - flat `key -> value` map for one language
pub async fn get_translations(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<HashMap<String, String>>, ApiError> {
    let language = Language::from_code(&lang).map_err(|e| {
        debug!("Rejected translations request: {}", e);
        ApiError::UnsupportedLanguage(lang.clone())
    })?;

    let entries = state.store.get_localized_text(language).await?;

    // Later entries overwrite earlier ones for the same key
    let map: HashMap<String, String> = entries
        .into_iter()
        .map(|entry| (entry.key, entry.value))
        .collect();

    Ok(Json(map))
}

/// `POST /api/contact` - validate and store a contact-form submission
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("body", rejection.body_text()));
        ApiError::Validation(errors)
    })?;

    let input = NewContact::validate(&body)?;
    let contact = state.store.create_contact_submission(input).await?;

    info!(id = %contact.id, "New contact submission");

    Ok((
        StatusCode::CREATED,
        Json(ContactCreated {
            message: "Contact form submitted successfully",
            id: contact.id,
        }),
    ))
}

/// `GET /api/contacts` - every submission, newest first
pub async fn list_contacts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ContactSubmission>>, ApiError> {
    if !security::is_authorized(state.config.admin_api_key.as_deref(), &headers) {
        return Err(ApiError::Unauthorized);
    }

    let contacts = state.store.list_contact_submissions().await?;
    Ok(Json(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Account, LocalizedText, MemStorage, NewLocalizedText};
    use crate::error::StoreError;
    use crate::schema::NewAccount;
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use axum::http::HeaderValue;
    use axum::response::Response;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Helper Functions ====================

    /// Store that counts calls and fails every one of them
    #[derive(Default)]
    struct FailingStorage {
        calls: AtomicUsize,
    }

    impl FailingStorage {
        fn fail<T>(&self) -> Result<T, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Poisoned("test"))
        }
    }

    #[async_trait]
    impl Storage for FailingStorage {
        async fn get_account(&self, _id: &str) -> Result<Option<Account>, StoreError> {
            self.fail()
        }
        async fn get_account_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<Account>, StoreError> {
            self.fail()
        }
        async fn create_account(&self, _input: NewAccount) -> Result<Account, StoreError> {
            self.fail()
        }
        async fn get_localized_text(
            &self,
            _lang: Language,
        ) -> Result<Vec<LocalizedText>, StoreError> {
            self.fail()
        }
        async fn create_localized_text(
            &self,
            _input: NewLocalizedText,
        ) -> Result<LocalizedText, StoreError> {
            self.fail()
        }
        async fn create_contact_submission(
            &self,
            _input: NewContact,
        ) -> Result<ContactSubmission, StoreError> {
            self.fail()
        }
        async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
            self.fail()
        }
    }

    fn mem_state() -> AppState {
        AppState::new(Arc::new(MemStorage::new()), Config::default())
    }

    fn failing_state() -> (AppState, Arc<FailingStorage>) {
        let store = Arc::new(FailingStorage::default());
        (AppState::new(store.clone(), Config::default()), store)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    async fn post_contact(state: &AppState, body: Value) -> Response {
        create_contact(State(state.clone()), Ok(Json(body)))
            .await
            .into_response()
    }

    // ==================== Translations Tests ====================

    #[tokio::test]
    async fn test_translations_english() {
        let Json(map) = get_translations(State(mem_state()), Path("en".to_string()))
            .await
            .expect("Should succeed");

        assert_eq!(map.get("nav.contact").map(String::as_str), Some("Contact"));
        assert_eq!(map.get("brand.name").map(String::as_str), Some("TikTok Ads Pro"));
    }

    #[tokio::test]
    async fn test_translations_vietnamese() {
        let Json(map) = get_translations(State(mem_state()), Path("vi".to_string()))
            .await
            .expect("Should succeed");

        assert_eq!(map.get("nav.contact").map(String::as_str), Some("Liên Hệ"));
    }

    #[tokio::test]
    async fn test_translations_contain_only_requested_language() {
        let store = Arc::new(MemStorage::empty());
        store
            .create_localized_text(NewLocalizedText::new(
                Language::ENGLISH,
                "only.en",
                "English",
            ))
            .await
            .expect("create");
        store
            .create_localized_text(NewLocalizedText::new(
                Language::VIETNAMESE,
                "only.vi",
                "Tiếng Việt",
            ))
            .await
            .expect("create");
        let state = AppState::new(store, Config::default());

        let Json(map) = get_translations(State(state), Path("vi".to_string()))
            .await
            .expect("Should succeed");

        assert_eq!(map.len(), 1);
        assert!(map.contains_key("only.vi"));
    }

    #[tokio::test]
    async fn test_translations_last_write_wins() {
        let store = Arc::new(MemStorage::empty());
        for value in ["First", "Second"] {
            store
                .create_localized_text(NewLocalizedText::new(
                    Language::ENGLISH,
                    "dup.key",
                    value,
                ))
                .await
                .expect("create");
        }
        let state = AppState::new(store, Config::default());

        let Json(map) = get_translations(State(state), Path("en".to_string()))
            .await
            .expect("Should succeed");

        assert_eq!(map.get("dup.key").map(String::as_str), Some("Second"));
    }

    #[tokio::test]
    async fn test_unsupported_language_never_touches_store() {
        let (state, store) = failing_state();

        let response = get_translations(State(state), Path("fr".to_string()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("en, vi"));
    }

    #[tokio::test]
    async fn test_translations_store_failure_is_500() {
        let (state, store) = failing_state();

        let response = get_translations(State(state), Path("en".to_string()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    // ==================== Contact Tests ====================

    #[tokio::test]
    async fn test_create_contact_returns_201_and_id() {
        let state = mem_state();

        let response = post_contact(
            &state,
            json!({"name": "Ann", "email": "a@x.com", "message": "Hi"}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Contact form submitted successfully");
        let id = body["id"].as_str().expect("id");
        assert!(!id.is_empty());

        let listed = state.store.list_contact_submissions().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].name, "Ann");
    }

    #[tokio::test]
    async fn test_create_contact_validation_failure_stores_nothing() {
        let state = mem_state();

        let response = post_contact(&state, json!({"name": "Ann", "message": "Hi"})).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation error");
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["errors"][0]["field"], "email");

        let listed = state.store.list_contact_submissions().await.expect("list");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_create_contact_validation_never_touches_store() {
        let (state, store) = failing_state();

        let response = post_contact(&state, json!({})).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_contact_store_failure_is_generic_500() {
        let (state, _store) = failing_state();

        let response = post_contact(
            &state,
            json!({"name": "Ann", "email": "a@x.com", "message": "Hi"}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({"message": "Internal server error"}));
    }

    // ==================== List Tests ====================

    #[tokio::test]
    async fn test_list_contacts_open_without_key() {
        let state = mem_state();
        post_contact(&state, json!({"name": "Ann", "email": "a@x.com", "message": "Hi"})).await;

        let Json(contacts) = list_contacts(State(state), HeaderMap::new())
            .await
            .expect("Should list");

        assert_eq!(contacts.len(), 1);
        assert!(contacts[0].company.is_none());
    }

    #[tokio::test]
    async fn test_list_contacts_requires_configured_key() {
        let config = Config {
            admin_api_key: Some("s3cret".to_string()),
            ..Config::default()
        };
        let state = AppState::new(Arc::new(MemStorage::new()), config);

        let denied = list_contacts(State(state.clone()), HeaderMap::new())
            .await
            .into_response();
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

        let mut headers = HeaderMap::new();
        headers.insert(security::API_KEY_HEADER, HeaderValue::from_static("s3cret"));
        let allowed = list_contacts(State(state), headers).await.into_response();
        assert_eq!(allowed.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_contacts_store_failure_is_500() {
        let (state, _store) = failing_state();

        let response = list_contacts(State(state), HeaderMap::new())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
