//! Headline selections derived from the canonical sequence.
//!
//! "Today's tip" is the most recently posted tip. There is no calendar-day
//! filter: a collection whose newest tip is a week old still has a today's tip.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::Tip;

/// The head of the canonical sequence, or `None` for an empty collection.
pub fn today(tips: &[Tip]) -> Option<&Tip> {
    tips.first()
}

/// A uniform draw over the whole collection. Repeats are allowed.
pub fn random<'a, R>(tips: &'a [Tip], rng: &mut R) -> Option<&'a Tip>
where
    R: Rng + ?Sized,
{
    tips.choose(rng)
}
