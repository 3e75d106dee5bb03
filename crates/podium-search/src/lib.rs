//! Speaker lookup for podium.
//!
//! Both searches run in two phases against a [`podium_core::Catalog`]:
//! an exact match on the normalised key first, then a substring match over
//! every key. Outcomes are plain enums; nothing here fails.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod name;
pub mod sample;
pub mod theme;

pub use name::{find_by_name, Candidates, NameLookup, Selection};
pub use sample::{pick, random_speaker};
pub use theme::{find_by_theme, ThemeLookup};
