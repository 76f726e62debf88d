//! Shared helpers: HTML escaping, pluralization, URL joining.

pub mod html;
pub mod plural;
pub mod url;

pub use plural::{plural_count, plural_s};
