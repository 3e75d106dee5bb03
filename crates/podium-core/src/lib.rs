//! Core domain model for podium.
//!
//! This crate defines the speaker record, the JSON record store, and the
//! name and theme/tag indexes that every lookup runs against. A loaded
//! collection and its indexes are bundled into a [`Catalog`], which is
//! built once and then only read.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod index;
pub mod model;
pub mod store;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::Speaker;
