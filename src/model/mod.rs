//! Core data types: moods and quotes.
//!
//! Both types are plain values. [`Mood`] is a closed enum so that every
//! lookup keyed by it can be checked for exhaustiveness at compile time.

mod mood;
mod quote;

pub use mood::*;
pub use quote::*;
