//! Application layer for the PromoGen CLI.
//!
//! Sits between the domain (`promogen_core`: templates and rendering) and the
//! infrastructure (JSON files, TOML config, console).  Code here:
//!
//! - **Orchestrates** domain objects to fulfil a user goal (e.g., "generate
//!   ten codes and remember them").
//! - **Depends on abstractions** ([`persistence::PersistenceStore`],
//!   [`session::TemplateAuthor`]) rather than on files or stdin.
//! - **Contains no file system access and no console I/O**.
//!
//! # Sub-modules
//!
//! - **`persistence`** – The storage port and its error type.
//! - **`session`**     – `SessionController`: first-run setup, reuse of the
//!   saved template, reconfiguration, and batch generation.

pub mod persistence;
pub mod session;
