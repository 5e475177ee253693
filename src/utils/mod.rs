//! Utility modules for the site generator.

pub mod date;
pub mod path;
mod plural;

pub use plural::{plural_count, plural_s};
