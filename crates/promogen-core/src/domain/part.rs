//! Part specification and the part renderer.
//!
//! A promo code such as `SALE-7KQ2-X9` is made of independently configured
//! *parts*.  Each [`PartSpec`] describes one of them: how many random
//! characters to draw, which character classes they come from, and an
//! optional literal prefix and suffix wrapped around the random portion.
//!
//! # Character classes (for beginners)
//!
//! The random portion is drawn from an *alphabet*:
//!
//! | `use_letters` | `use_digits` | Alphabet                |
//! |---------------|--------------|-------------------------|
//! | `true`        | `true`       | `A`–`Z` then `0`–`9`    |
//! | `true`        | `false`      | `A`–`Z`                 |
//! | `false`       | `true`       | `0`–`9`                 |
//! | `false`       | `false`      | `A`–`Z` then `0`–`9`    |
//!
//! With neither class selected the part still draws from letters and digits,
//! so the alphabet is never empty and rendering cannot fail.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Uppercase ASCII letters.
pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII decimal digits.
pub const DIGITS: &[u8] = b"0123456789";

/// Letters followed by digits; used when both classes are selected and as the
/// fallback when neither is.
pub const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A character class a part may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letters,
    Digits,
}

/// Descriptor for one segment of a promo code.
///
/// Missing `use_letters` / `use_digits` fields resolve to `true` and missing
/// `prefix` / `suffix` fields resolve to the empty string when a stored
/// template is deserialized.  `length` has no default.
///
/// `length` is validated when a template is built (see
/// [`TemplateConfig::validate`](super::template::TemplateConfig::validate));
/// rendering trusts the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSpec {
    /// Number of random characters in this part.
    pub length: usize,
    /// Draw from `A`–`Z`.
    #[serde(default = "default_true")]
    pub use_letters: bool,
    /// Draw from `0`–`9`.
    #[serde(default = "default_true")]
    pub use_digits: bool,
    /// Literal text placed before the random portion.
    #[serde(default)]
    pub prefix: String,
    /// Literal text placed after the random portion.
    #[serde(default)]
    pub suffix: String,
}

fn default_true() -> bool {
    true
}

impl PartSpec {
    /// Creates a part of `length` random characters using both classes and no
    /// prefix or suffix.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            use_letters: true,
            use_digits: true,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Sets which character classes are selected.
    pub fn with_classes(mut self, use_letters: bool, use_digits: bool) -> Self {
        self.use_letters = use_letters;
        self.use_digits = use_digits;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// The classes as configured.  Empty when both flags are off, even though
    /// [`alphabet`](Self::alphabet) falls back to letters and digits.
    pub fn char_classes(&self) -> Vec<CharClass> {
        let mut classes = Vec::with_capacity(2);
        if self.use_letters {
            classes.push(CharClass::Letters);
        }
        if self.use_digits {
            classes.push(CharClass::Digits);
        }
        classes
    }

    /// The alphabet the random portion is drawn from.  Never empty.
    pub fn alphabet(&self) -> &'static [u8] {
        match (self.use_letters, self.use_digits) {
            (true, false) => LETTERS,
            (false, true) => DIGITS,
            (true, true) | (false, false) => ALPHANUMERIC,
        }
    }

    /// Length in characters of every string [`render`](Self::render) produces.
    pub fn rendered_len(&self) -> usize {
        self.prefix.chars().count() + self.length + self.suffix.chars().count()
    }

    /// Renders this part: `prefix`, then `length` characters drawn uniformly
    /// with replacement from [`alphabet`](Self::alphabet), then `suffix`.
    pub fn render<R: Rng>(&self, rng: &mut R) -> String {
        let alphabet = self.alphabet();
        let mut out = String::with_capacity(self.prefix.len() + self.length + self.suffix.len());
        out.push_str(&self.prefix);
        for _ in 0..self.length {
            out.push(char::from(alphabet[rng.gen_range(0..alphabet.len())]));
        }
        out.push_str(&self.suffix);
        out
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
