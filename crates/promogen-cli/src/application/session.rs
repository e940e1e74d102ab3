//! SessionController: template setup, reconfiguration, and batch generation.
//!
//! The controller owns the persistence store and the random source for one
//! run.  It never talks to the console directly; template authoring is
//! reached through the [`TemplateAuthor`] trait, which the console shell
//! implements.
//!
//! # Run lifecycle
//!
//! ```text
//! obtain_config ──► saved settings?  yes ──► reuse stored language + template
//!                                    no  ──► author.choose_language()
//!                                            author.author_template()
//!                                            store.save_settings()
//!
//! request_generation ──► template.render_batch() ──► store.append_history()
//! reconfigure        ──► author.author_template() ──► store.save_settings()
//! ```

use std::num::NonZeroUsize;

use promogen_core::{TemplateConfig, TemplateError};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use super::persistence::{PersistenceStore, StoreError};

/// Error type for template authoring.
#[derive(Debug, Error)]
pub enum AuthorError {
    /// Input ended (end of stream) before authoring finished.
    #[error("input ended before the template was complete")]
    Aborted,

    /// The console could not be read or written.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The authored answers do not form a valid template.
    #[error("invalid template: {0}")]
    Invalid(#[from] TemplateError),
}

/// Error type for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Author(#[from] AuthorError),
}

/// Source of freshly authored templates.
///
/// Implementations only ever return templates that pass
/// [`TemplateConfig::validate`].
pub trait TemplateAuthor {
    /// Asks for the interface language and returns its tag.
    fn choose_language(&mut self) -> Result<String, AuthorError>;

    /// Builds a new template, prompting in `language`.
    fn author_template(&mut self, language: &str) -> Result<TemplateConfig, AuthorError>;
}

/// Language and template in effect for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSettings {
    pub language: String,
    pub config: TemplateConfig,
    /// `true` when the template was authored (and saved) during this call.
    pub first_run: bool,
}

/// Orchestrates one interactive run against a [`PersistenceStore`].
pub struct SessionController<S, R> {
    store: S,
    rng: R,
}

impl<S: PersistenceStore, R: Rng> SessionController<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        Self { store, rng }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ends the run and hands back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the saved settings, or authors and saves new ones when none
    /// exist.  A corrupt settings record counts as none.
    ///
    /// # Errors
    ///
    /// Propagates store I/O failures and authoring errors.  Nothing is saved
    /// if authoring fails.
    pub fn obtain_config<A>(&mut self, author: &mut A) -> Result<ActiveSettings, SessionError>
    where
        A: TemplateAuthor + ?Sized,
    {
        if let Some(record) = self.store.load_settings()? {
            debug!(language = %record.language, last_used = %record.last_used, "reusing saved template");
            return Ok(ActiveSettings {
                language: record.language,
                config: record.promo_config,
                first_run: false,
            });
        }

        let language = author.choose_language()?;
        let config = author.author_template(&language)?;
        self.store.save_settings(&language, &config)?;
        info!(%language, parts = config.parts.len(), "initial template saved");

        Ok(ActiveSettings {
            language,
            config,
            first_run: true,
        })
    }

    /// Authors a replacement template and overwrites the saved settings.
    ///
    /// # Errors
    ///
    /// Propagates authoring errors and store I/O failures.
    pub fn reconfigure<A>(
        &mut self,
        language: &str,
        author: &mut A,
    ) -> Result<TemplateConfig, SessionError>
    where
        A: TemplateAuthor + ?Sized,
    {
        let config = author.author_template(language)?;
        self.store.save_settings(language, &config)?;
        info!(parts = config.parts.len(), "template replaced");
        Ok(config)
    }

    /// Renders `count` codes and appends them to the history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the history cannot be written; the
    /// rendered codes are discarded in that case.
    pub fn request_generation(
        &mut self,
        config: &TemplateConfig,
        count: NonZeroUsize,
    ) -> Result<Vec<String>, SessionError> {
        let codes = config.render_batch(count.get(), &mut self.rng);
        self.store.append_history(&codes)?;
        info!(count = codes.len(), "promo codes generated");
        Ok(codes)
    }

    /// Number of codes ever generated, according to the history.
    pub fn total_generated(&self) -> Result<usize, SessionError> {
        Ok(self.store.load_history()?.len())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
