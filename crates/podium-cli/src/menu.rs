//! The interactive menu loop.
//!
//! A [`Session`] reads choices from any [`BufRead`] and writes to any
//! [`Write`], so the loop is driven by stdin/stdout in the binary and by
//! scripted buffers in tests. End of input at any prompt ends the session
//! with a farewell.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use podium_core::model::normalize_key;
use podium_core::Catalog;
use podium_search::{
    find_by_name, find_by_theme, pick, random_speaker, NameLookup, Selection, ThemeLookup,
};
use rand::Rng;

use crate::config::DEFAULT_WRAP_WIDTH;
use crate::render::{self, TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
    EndOfInput,
}

/// One interactive session over a loaded catalog.
#[derive(Debug)]
pub struct Session<'a, R, W, G> {
    catalog: &'a Catalog,
    input: R,
    output: W,
    rng: G,
    wrap_width: usize,
}

impl<'a, R, W, G> Session<'a, R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(catalog: &'a Catalog, input: R, output: W, rng: G) -> Self {
        Self {
            catalog,
            input,
            output,
            rng,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }

    #[must_use]
    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the banner and serve menu choices until exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        render::header(&mut self.output)?;

        loop {
            render::menu(&mut self.output)?;
            let flow = match self.prompt("\nEnter your choice (1–6): ")? {
                Some(choice) => self.dispatch(&choice)?,
                None => Flow::EndOfInput,
            };

            match flow {
                Flow::Continue => {}
                Flow::Quit => {
                    writeln!(self.output, "\nThank you for using the {TITLE}. Goodbye!")?;
                    break;
                }
                Flow::EndOfInput => {
                    log::debug!("Input closed, leaving menu");
                    render::interrupted(&mut self.output)?;
                    break;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => render::speaker_list(&mut self.output, self.catalog)?,
            "2" => render::theme_list(&mut self.output, self.catalog)?,
            "3" => return self.search_speaker(),
            "4" => return self.search_theme(),
            "5" => self.random_motivation()?,
            "6" => return Ok(Flow::Quit),
            _ => writeln!(
                self.output,
                "Invalid choice. Please enter a number from 1 to 6."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn search_speaker(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("\nEnter the speaker's name: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let speaker = match find_by_name(self.catalog, &query) {
            NameLookup::NoInput => {
                writeln!(self.output, "No name entered.")?;
                return Ok(Flow::Continue);
            }
            NameLookup::NotFound => {
                writeln!(self.output, "No matching speaker found.")?;
                return Ok(Flow::Continue);
            }
            NameLookup::Found(speaker) => speaker,
            NameLookup::Ambiguous(candidates) => {
                render::candidates(&mut self.output, candidates.iter())?;
                let Some(choice) = self.prompt("Select a number (or press Enter to cancel): ")?
                else {
                    return Ok(Flow::EndOfInput);
                };

                match candidates.select(&choice) {
                    Selection::Chosen(speaker) => speaker,
                    Selection::Cancelled => {
                        writeln!(self.output, "Cancelled.")?;
                        return Ok(Flow::Continue);
                    }
                    Selection::Invalid => {
                        writeln!(self.output, "Invalid choice.")?;
                        return Ok(Flow::Continue);
                    }
                }
            }
        };

        render::speaker(&mut self.output, speaker, self.wrap_width)?;
        Ok(Flow::Continue)
    }

    fn search_theme(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("\nEnter a theme or tag (e.g., growth, courage, AI): ")?
        else {
            return Ok(Flow::EndOfInput);
        };

        let speakers = match find_by_theme(self.catalog, &query) {
            ThemeLookup::NoInput => {
                writeln!(self.output, "No theme entered.")?;
                return Ok(Flow::Continue);
            }
            ThemeLookup::NotFound => {
                writeln!(self.output, "No speakers found for that theme/tag.")?;
                return Ok(Flow::Continue);
            }
            ThemeLookup::Found(speakers) => speakers,
        };

        writeln!(
            self.output,
            "\nSpeakers related to '{}':",
            normalize_key(&query)
        )?;
        render::speaker_lines(&mut self.output, speakers.iter().copied())?;

        let Some(answer) = self.prompt("\nWould you like to see one speaker's summary? (y/n): ")?
        else {
            return Ok(Flow::EndOfInput);
        };

        if answer.eq_ignore_ascii_case("y") {
            if let Some(&speaker) = pick(&speakers, &mut self.rng) {
                render::speaker(&mut self.output, speaker, self.wrap_width)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn random_motivation(&mut self) -> Result<()> {
        let Some(speaker) = random_speaker(self.catalog, &mut self.rng) else {
            writeln!(self.output, "No speakers available.")?;
            return Ok(());
        };

        writeln!(
            self.output,
            "\nHere's a random motivational insight for you:"
        )?;
        render::speaker(&mut self.output, speaker, self.wrap_width)?;
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self
            .input
            .read_line(&mut line)
            .context("Failed to read from standard input")?
        {
            0 => Ok(None),
            _ => Ok(Some(line.trim().to_string())),
        }
    }
}
