//! Section renderers for the shoe card.

mod card;

pub use card::*;
