//! Infrastructure services for fuzzmenu.
//!
//! This module contains:
//! - ItemSource: loading menu items from files or stdin

mod items;

pub use items::{parse_json, parse_lines, ItemSource};
