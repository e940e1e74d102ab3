//! Template engine: the full promo-code recipe and its rendering.
//!
//! A [`TemplateConfig`] is an ordered list of [`PartSpec`]s plus a separator.
//! Rendering draws every part in order and joins the segments with the
//! separator.  The join is literal: a separator that also appears inside a
//! prefix or suffix is not escaped, so such codes cannot be split back into
//! their parts unambiguously.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use super::part::PartSpec;

/// Allowed number of random characters per part.
pub const PART_LENGTH_RANGE: RangeInclusive<usize> = 1..=20;

/// Allowed number of parts per template.
pub const PART_COUNT_RANGE: RangeInclusive<usize> = 1..=10;

/// Separator used when the user enters none while authoring a template.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Reasons a template is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A template needs at least one part.
    #[error("template has no parts")]
    NoParts,

    /// More parts than [`PART_COUNT_RANGE`] allows.
    #[error("template has {0} parts; at most 10 are allowed")]
    TooManyParts(usize),

    /// A part length outside [`PART_LENGTH_RANGE`].
    #[error("part {} has length {length}; lengths must be between 1 and 20", .index + 1)]
    PartLengthOutOfRange { index: usize, length: usize },
}

/// The promo-code recipe: ordered parts joined by a separator.
///
/// Both fields are required in stored data.  An empty `separator` read from
/// storage is kept as-is; only interactive authoring substitutes
/// [`DEFAULT_SEPARATOR`] for empty input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Render and display order is the order of this list.
    pub parts: Vec<PartSpec>,
    /// Literal text inserted between adjacent rendered parts.
    pub separator: String,
}

impl TemplateConfig {
    /// Builds a validated template.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the part count or any part length is out
    /// of range.
    pub fn new(parts: Vec<PartSpec>, separator: impl Into<String>) -> Result<Self, TemplateError> {
        let config = Self {
            parts,
            separator: separator.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the part count and every part length.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking the part count before the
    /// individual lengths.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.parts.is_empty() {
            return Err(TemplateError::NoParts);
        }
        if !PART_COUNT_RANGE.contains(&self.parts.len()) {
            return Err(TemplateError::TooManyParts(self.parts.len()));
        }
        for (index, part) in self.parts.iter().enumerate() {
            if !PART_LENGTH_RANGE.contains(&part.length) {
                return Err(TemplateError::PartLengthOutOfRange {
                    index,
                    length: part.length,
                });
            }
        }
        Ok(())
    }

    /// Renders one code.  Each call is an independent draw.
    pub fn render_code<R: Rng>(&self, rng: &mut R) -> String {
        let segments: Vec<String> = self.parts.iter().map(|part| part.render(rng)).collect();
        segments.join(&self.separator)
    }

    /// Renders `count` independent codes.  Duplicates are possible and are
    /// not filtered.
    pub fn render_batch<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<String> {
        trace!(count, parts = self.parts.len(), "rendering batch");
        (0..count).map(|_| self.render_code(rng)).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
