//! UI components for fuzzmenu.
//!
//! This module contains:
//! - layout: Picker layout rendering
//! - input: Key bindings for menu navigation
//! - theme: Menu styles
//! - widgets: The menu widgets

pub mod input;
pub mod layout;
pub mod theme;
pub mod widgets;
