//! Storage infrastructure: file persistence for PromoGen.
//!
//! - `json_store` – the settings and history documents (the production
//!   [`PersistenceStore`](crate::application::persistence::PersistenceStore)).
//! - `memory`     – an in-memory store with the same behavior, for tests.
//! - `config`     – the optional TOML application config (data directory and
//!   log level).
//!
//! Keeping storage concerns here means the document format can change without
//! touching the session logic.

pub mod config;
pub mod json_store;
pub mod memory;
