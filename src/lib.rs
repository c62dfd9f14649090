pub mod config;
pub mod db;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod schema;
pub mod security;
