//! Internationalization (i18n) support for the landing page copy.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type used by the store and the HTTP layer
//! - `seed`: Built-in bilingual UI copy loaded into the store at startup
//! - `validator`: Completeness checks for translation tables
//!
//! # Example
//!
//! ```rust,ignore
//! use landing_api::i18n::{Language, LanguageRegistry};
//!
//! let vietnamese = Language::from_code("vi")?;
//! let languages = LanguageRegistry::get().list();
//! ```

mod language;
mod registry;
mod seed;
mod validator;

pub use language::{Language, LanguageError};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use seed::{seed_entries, SeedEntry};
pub use validator::{SeedValidator, ValidationReport};
