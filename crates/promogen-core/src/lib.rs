//! # promogen-core
//!
//! Shared library for PromoGen containing the promo-code template model, the
//! part renderer, and the record types persisted between runs.
//!
//! It has no dependencies on the file system or the console; the
//! `promogen-cli` crate supplies storage and the interactive shell.
//!
//! # How a code is built (for beginners)
//!
//! A *template* ([`TemplateConfig`]) lists the *parts* of a code in order and
//! the *separator* that joins them.  Each part ([`PartSpec`]) says how many
//! random characters to draw, whether they come from letters, digits or both,
//! and which literal prefix/suffix surrounds them.
//!
//! ```
//! use promogen_core::{PartSpec, TemplateConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let template = TemplateConfig::new(
//!     vec![PartSpec::new(4).with_prefix("SALE"), PartSpec::new(3)],
//!     "-",
//! )
//! .expect("valid template");
//!
//! let code = template.render_code(&mut StdRng::seed_from_u64(1));
//! assert!(code.starts_with("SALE"));
//! assert_eq!(code.len(), "SALE".len() + 4 + 1 + 3);
//! ```

pub mod domain;

pub use domain::part::{CharClass, PartSpec, ALPHANUMERIC, DIGITS, LETTERS};
pub use domain::record::{timestamp_now, HistoryEntry, SettingsRecord, Timestamp};
pub use domain::template::{
    TemplateConfig, TemplateError, DEFAULT_SEPARATOR, PART_COUNT_RANGE, PART_LENGTH_RANGE,
};
