//! Console rendering for speakers, listings and the menu.
//!
//! Everything writes to a caller-supplied [`Write`] so the same output can go
//! to stdout or be captured in tests.

use std::io::{self, Write};

use podium_core::{Catalog, Speaker};

pub const RULE_WIDTH: usize = 70;
pub const TITLE: &str = "TED-Style Presentation Chatbot";

fn rule(fill: char) -> String {
    fill.to_string().repeat(RULE_WIDTH)
}

pub fn header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "{:=^width$}", format!(" {TITLE} "), width = RULE_WIDTH)?;
    writeln!(out, "{}", rule('='))?;
    writeln!(
        out,
        "Ask about student speakers, themes, or get a motivational summary.\n"
    )
}

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nPlease choose an option:")?;
    writeln!(out, "  1. List all speakers")?;
    writeln!(out, "  2. List all themes/tags")?;
    writeln!(out, "  3. Get information about a specific speaker")?;
    writeln!(out, "  4. Find speakers by theme or tag")?;
    writeln!(out, "  5. Get a random motivational summary")?;
    writeln!(out, "  6. Exit")
}

/// Farewell shown when input ends or the user interrupts the menu.
pub fn interrupted(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n\nExiting. Goodbye!")
}

/// Full detail card for one speaker, summary wrapped at `wrap_width`.
pub fn speaker(out: &mut impl Write, speaker: &Speaker, wrap_width: usize) -> io::Result<()> {
    let separator = rule('-');
    writeln!(out, "\n{separator}")?;
    writeln!(out, "Speaker : {}", speaker.display_name())?;
    writeln!(out, "Title   : {}", speaker.display_title())?;
    writeln!(out, "Theme   : {}", speaker.display_theme())?;
    if !speaker.tags.is_empty() {
        writeln!(out, "Tags    : {}", speaker.tags.join(", "))?;
    }
    writeln!(out, "{separator}")?;
    writeln!(
        out,
        "{}",
        textwrap::fill(speaker.display_summary(), wrap_width.max(1))
    )?;
    writeln!(out, "{separator}\n")
}

/// One `  - name — "title"` line per speaker.
pub fn speaker_lines<'a>(
    out: &mut impl Write,
    speakers: impl IntoIterator<Item = &'a Speaker>,
) -> io::Result<()> {
    for speaker in speakers {
        writeln!(
            out,
            "  - {} — \"{}\"",
            speaker.listing_name(),
            speaker.display_title()
        )?;
    }
    Ok(())
}

pub fn speaker_list(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    if catalog.is_empty() {
        return writeln!(out, "No speakers found.");
    }
    writeln!(out, "\nAvailable speakers:")?;
    speaker_lines(out, catalog.speakers())
}

pub fn theme_list(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    let themes = catalog.sorted_themes();
    if themes.is_empty() {
        return writeln!(out, "No themes/tags found.");
    }
    writeln!(out, "\nAvailable themes/tags:")?;
    for theme in themes {
        writeln!(out, "  - {theme}")?;
    }
    Ok(())
}

/// Numbered candidate list shown when a name query is ambiguous.
pub fn candidates<'a>(
    out: &mut impl Write,
    speakers: impl IntoIterator<Item = &'a Speaker>,
) -> io::Result<()> {
    writeln!(out, "Multiple matches found:")?;
    for (number, speaker) in speakers.into_iter().enumerate() {
        writeln!(out, "  {}. {}", number + 1, speaker.listing_name())?;
    }
    Ok(())
}
