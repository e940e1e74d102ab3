//! Infrastructure layer for the PromoGen CLI.
//!
//! Contains OS-facing adapters: JSON file storage, the TOML app config, and
//! the interactive console.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `promogen_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod console;
pub mod storage;
