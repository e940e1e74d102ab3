//! The interactive session loop.
//!
//! ```text
//! obtain settings (first run: language + template, "settings saved")
//! banner: welcome, total generated, current configuration
//! loop:
//!   change settings? ── yes ──► author + save, show configuration
//!   how many codes?  ── bad ──► "enter a positive integer", restart loop
//!   generate, append to history, print numbered codes
//!   generate more?   ── no ───► goodbye
//! ```
//!
//! Store failures inside the loop are printed and the loop carries on.  End
//! of input anywhere ends the session with the goodbye line.

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

use promogen_core::{CharClass, TemplateConfig};
use rand::Rng;
use tracing::{error, info};

use super::texts::{Language, Texts};
use super::Console;
use crate::application::persistence::PersistenceStore;
use crate::application::session::{AuthorError, SessionController, SessionError};

enum Flow {
    Continue,
    Stop,
}

/// Runs one interactive session until the user stops or input ends.
///
/// # Errors
///
/// Returns store I/O failures that happen before the loop starts and console
/// I/O failures anywhere.  End of input is not an error.
pub fn run<S, R, I, O>(
    controller: &mut SessionController<S, R>,
    console: &mut Console<I, O>,
) -> Result<(), SessionError>
where
    S: PersistenceStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    match drive(controller, console) {
        Err(SessionError::Author(AuthorError::Aborted)) => {
            info!("input closed; ending session");
            let goodbye = console.texts().goodbye;
            console.say(format_args!("\n{goodbye}"))?;
            Ok(())
        }
        other => other,
    }
}

fn drive<S, R, I, O>(
    controller: &mut SessionController<S, R>,
    console: &mut Console<I, O>,
) -> Result<(), SessionError>
where
    S: PersistenceStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    let active = controller.obtain_config(console)?;
    console.set_language(Language::from_tag(&active.language));
    let t = console.texts();

    if active.first_run {
        console.say(format_args!("✓ {}", t.settings_saved))?;
    }

    let language = active.language;
    let mut config = active.config;

    console.say(format_args!("\n{}", t.welcome))?;
    console.say(format_args!("{} {}", t.total_generated, controller.total_generated()?))?;
    show_config(console, &config)?;

    loop {
        match step(controller, console, &language, &mut config) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => return Ok(()),
            Err(SessionError::Store(e)) => {
                error!(error = %e, "store operation failed");
                console.say(format_args!("{} {e}", t.error))?;
            }
            Err(e) => return Err(e),
        }
    }
}

fn step<S, R, I, O>(
    controller: &mut SessionController<S, R>,
    console: &mut Console<I, O>,
    language: &str,
    config: &mut TemplateConfig,
) -> Result<Flow, SessionError>
where
    S: PersistenceStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    let t = console.texts();

    if console.ask_yes_no(&format!("\n{}", t.reconfigure), false)? {
        console.say(t.regenerating)?;
        *config = controller.reconfigure(language, console)?;
        show_config(console, config)?;
    }

    let answer = console.ask(&format!("\n{}", t.enter_count))?;
    let Some(count) = parse_count(&answer) else {
        console.say(t.invalid_number)?;
        return Ok(Flow::Continue);
    };

    let codes = controller.request_generation(config, count)?;

    console.say(format_args!("\n{}", t.generated))?;
    for (i, code) in codes.iter().enumerate() {
        console.say(format_args!("{}. {code}", i + 1))?;
    }
    console.say(format_args!("✓ {}", t.history_saved))?;

    if console.ask_yes_no(&format!("\n{}", t.continue_prompt), false)? {
        Ok(Flow::Continue)
    } else {
        console.say(t.goodbye)?;
        Ok(Flow::Stop)
    }
}

/// A strictly positive integer, or `None`.
fn parse_count(answer: &str) -> Option<NonZeroUsize> {
    answer.parse::<NonZeroUsize>().ok()
}

fn show_config<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    config: &TemplateConfig,
) -> Result<(), AuthorError> {
    console.say("")?;
    for line in describe_config(config, console.texts()) {
        console.say(line)?;
    }
    Ok(())
}

/// Human-readable summary of a template, one line per entry.
///
/// ```text
/// --- Current Configuration ---
/// Separator: '-'
/// Promo code parts:
///   Part 1: length 4 (letters, digits) prefix: 'SALE'
///   Part 2: length 3 (digits)
/// ```
pub fn describe_config(config: &TemplateConfig, t: &Texts) -> Vec<String> {
    let mut lines = vec![
        t.config_title.to_string(),
        format!("{} '{}'", t.separator_label, config.separator),
        t.parts_label.to_string(),
    ];

    for (i, part) in config.parts.iter().enumerate() {
        let classes: Vec<&str> = part
            .char_classes()
            .into_iter()
            .map(|class| match class {
                CharClass::Letters => t.letters,
                CharClass::Digits => t.digits,
            })
            .collect();

        let mut extras = Vec::new();
        if !part.prefix.is_empty() {
            extras.push(format!("{} '{}'", t.prefix_label, part.prefix));
        }
        if !part.suffix.is_empty() {
            extras.push(format!("{} '{}'", t.suffix_label, part.suffix));
        }

        let line = format!(
            "  {} {}: {} {} ({}) {}",
            t.part_label,
            i + 1,
            t.length_label,
            part.length,
            classes.join(", "),
            extras.join(", ")
        );
        lines.push(line.trim_end().to_string());
    }

    lines
}

// ── Tests ─────────────────────────────────────────────────────────────────────
