//! Interactive console: prompts, template authoring, and the session loop.
//!
//! [`Console`] wraps any `BufRead` input and `Write` output, so the same code
//! drives the real terminal (`stdin().lock()` / `stdout()`) and scripted
//! tests (`Cursor` / `Vec<u8>`).
//!
//! Input rules shared by every prompt:
//!
//! - Answers are trimmed.  Bytes that are not UTF-8 become `U+FFFD`, so such
//!   an answer is just another invalid answer.
//! - Numeric prompts repeat until the answer is a number inside the allowed
//!   range.
//! - Yes/no prompts accept `yes`, `y`, `да`, `д` in any case.  For the
//!   letters/digits questions an empty answer also means yes.
//! - End of input at any prompt yields [`AuthorError::Aborted`].

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use promogen_core::{
    PartSpec, TemplateConfig, DEFAULT_SEPARATOR, PART_COUNT_RANGE, PART_LENGTH_RANGE,
};

use crate::application::session::{AuthorError, TemplateAuthor};

pub mod shell;
pub mod texts;

use texts::{Language, Texts, LANGUAGE_INVALID, LANGUAGE_MENU, LANGUAGE_PROMPT, RULE, YES_ANSWERS};

/// Line-oriented console over arbitrary input and output streams.
pub struct Console<I, O> {
    input: I,
    output: O,
    language: Language,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Creates a console that speaks English until a language is chosen.
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            language: Language::English,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn texts(&self) -> &'static Texts {
        self.language.texts()
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), AuthorError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes `prompt` without a newline and reads one trimmed answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String, AuthorError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(AuthorError::Aborted);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Asks until the answer is an integer inside `range`.
    pub fn ask_number_in(
        &mut self,
        prompt: &str,
        range: RangeInclusive<usize>,
        out_of_range: &str,
    ) -> Result<usize, AuthorError> {
        let not_a_number = self.texts().enter_number;
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<i64>() {
                Ok(n) => match usize::try_from(n) {
                    Ok(n) if range.contains(&n) => return Ok(n),
                    _ => self.say(out_of_range)?,
                },
                Err(_) => self.say(not_a_number)?,
            }
        }
    }

    /// Asks a yes/no question.
    pub fn ask_yes_no(&mut self, prompt: &str, empty_means_yes: bool) -> Result<bool, AuthorError> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok((answer.is_empty() && empty_means_yes) || YES_ANSWERS.contains(&answer.as_str()))
    }

    fn author_part(&mut self, number: usize) -> Result<PartSpec, AuthorError> {
        let t = self.texts();
        self.say(format_args!("\n--- {} {number} ---", t.part_setup))?;

        let length = self.ask_number_in(
            &format!("{} {number}: ", t.part_length_prompt),
            PART_LENGTH_RANGE,
            t.part_length_range,
        )?;
        let use_letters = self.ask_yes_no(t.use_letters_prompt, true)?;
        let use_digits = self.ask_yes_no(t.use_digits_prompt, true)?;
        let prefix = self.ask(t.prefix_prompt)?;
        let suffix = self.ask(t.suffix_prompt)?;

        Ok(PartSpec::new(length)
            .with_classes(use_letters, use_digits)
            .with_prefix(prefix)
            .with_suffix(suffix))
    }
}

impl<I: BufRead, O: Write> TemplateAuthor for Console<I, O> {
    fn choose_language(&mut self) -> Result<String, AuthorError> {
        self.say(RULE)?;
        for line in LANGUAGE_MENU {
            self.say(line)?;
        }
        self.say(RULE)?;

        let language = loop {
            match self.ask(LANGUAGE_PROMPT)?.as_str() {
                "1" => break Language::Russian,
                "2" => break Language::English,
                _ => self.say(LANGUAGE_INVALID)?,
            }
        };
        self.set_language(language);
        Ok(language.tag().to_string())
    }

    fn author_template(&mut self, language: &str) -> Result<TemplateConfig, AuthorError> {
        self.set_language(Language::from_tag(language));
        let t = self.texts();

        self.say(format_args!("\n{RULE}"))?;
        self.say(t.format_title)?;
        self.say(RULE)?;

        let count = self.ask_number_in(t.parts_count_prompt, PART_COUNT_RANGE, t.parts_count_range)?;

        let mut separator = self.ask(t.separator_prompt)?;
        if separator.is_empty() {
            separator = DEFAULT_SEPARATOR.to_string();
        }

        let parts = (1..=count)
            .map(|number| self.author_part(number))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TemplateConfig::new(parts, separator)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
