//! One-shot, non-interactive lookups sharing the menu's search and rendering.

use std::io::Write;

use anyhow::Result;
use podium_core::model::normalize_key;
use podium_core::Catalog;
use podium_search::{find_by_name, find_by_theme, pick, random_speaker, NameLookup, ThemeLookup};
use rand::Rng;

use crate::render;

pub fn list_speakers(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    render::speaker_list(out, catalog)?;
    Ok(())
}

pub fn list_themes(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    render::theme_list(out, catalog)?;
    Ok(())
}

/// Show a speaker by name. Ambiguous names list the candidates instead of
/// prompting.
pub fn show_speaker(
    catalog: &Catalog,
    query: &str,
    wrap_width: usize,
    out: &mut impl Write,
) -> Result<()> {
    match find_by_name(catalog, query) {
        NameLookup::NoInput => writeln!(out, "No name entered.")?,
        NameLookup::NotFound => writeln!(out, "No matching speaker found.")?,
        NameLookup::Found(speaker) => render::speaker(out, speaker, wrap_width)?,
        NameLookup::Ambiguous(candidates) => {
            render::candidates(out, candidates.iter())?;
            writeln!(out, "Re-run with one of the names above.")?;
        }
    }
    Ok(())
}

/// List speakers for a theme or tag, optionally revealing one at random.
pub fn show_theme<R>(
    catalog: &Catalog,
    query: &str,
    reveal: bool,
    wrap_width: usize,
    rng: &mut R,
    out: &mut impl Write,
) -> Result<()>
where
    R: Rng + ?Sized,
{
    let speakers = match find_by_theme(catalog, query) {
        ThemeLookup::NoInput => {
            writeln!(out, "No theme entered.")?;
            return Ok(());
        }
        ThemeLookup::NotFound => {
            writeln!(out, "No speakers found for that theme/tag.")?;
            return Ok(());
        }
        ThemeLookup::Found(speakers) => speakers,
    };

    writeln!(out, "\nSpeakers related to '{}':", normalize_key(query))?;
    render::speaker_lines(out, speakers.iter().copied())?;

    if reveal {
        if let Some(&speaker) = pick(&speakers, rng) {
            render::speaker(out, speaker, wrap_width)?;
        }
    }
    Ok(())
}

pub fn random_summary<R>(
    catalog: &Catalog,
    wrap_width: usize,
    rng: &mut R,
    out: &mut impl Write,
) -> Result<()>
where
    R: Rng + ?Sized,
{
    match random_speaker(catalog, rng) {
        Some(speaker) => {
            writeln!(out, "\nHere's a random motivational insight for you:")?;
            render::speaker(out, speaker, wrap_width)?;
        }
        None => writeln!(out, "No speakers available.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_core::Speaker;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Speaker::new("Ada").with_theme("AI"),
            Speaker::new("Amy").with_tag("ai"),
        ])
    }

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_speaker_ambiguous_does_not_prompt() {
        let catalog = catalog();
        let text = capture(|out| show_speaker(&catalog, "a", 80, out));
        assert!(text.contains("  1. Ada\n  2. Amy\n"));
        assert!(text.contains("Re-run with one of the names above."));
    }

    #[test]
    fn test_show_speaker_found() {
        let catalog = catalog();
        let text = capture(|out| show_speaker(&catalog, "AMY", 80, out));
        assert!(text.contains("Speaker : Amy\n"));
    }

    #[test]
    fn test_show_theme_reveal() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(5);
        let text = capture(|out| show_theme(&catalog, "AI", true, 80, &mut rng, out));
        assert!(text.contains("Speakers related to 'ai':\n  - Ada"));
        assert!(text.contains("Speaker : "));
    }

    #[test]
    fn test_random_summary_empty() {
        let catalog = Catalog::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(5);
        let text = capture(|out| random_summary(&catalog, 80, &mut rng, out));
        assert_eq!(text, "No speakers available.\n");
    }
}
