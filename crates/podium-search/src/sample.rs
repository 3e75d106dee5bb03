//! Uniform random selection.
//!
//! Callers pass the random source in, so tests can use a seeded generator.

use podium_core::{Catalog, Speaker};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one item uniformly at random, `None` when `items` is empty.
pub fn pick<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// Pick one speaker from the whole catalog.
pub fn random_speaker<'a, R>(catalog: &'a Catalog, rng: &mut R) -> Option<&'a Speaker>
where
    R: Rng + ?Sized,
{
    pick(catalog.speakers(), rng)
}
