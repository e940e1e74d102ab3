//! Domain entities for PromoGen.
//!
//! Pure business logic with no file-system or console dependencies.  The
//! random source is always passed in by the caller, so every operation here
//! can be made deterministic in tests with a seeded generator.
//!
//! - **`part`**     – [`part::PartSpec`] and the part renderer.
//! - **`template`** – [`template::TemplateConfig`]: ordered parts plus a
//!   separator, validation, and code rendering.
//! - **`record`**   – the settings and history records that outlive a run.

pub mod part;
pub mod record;
pub mod template;
