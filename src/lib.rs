//! fuzzmenu: vertical menu and fuzzy-filtering menu widgets for ratatui
//!
//! This crate provides a selectable vertical menu that keeps its current
//! item consistent as the item list changes, and a variant that narrows the
//! list with a regex typed into a filter prompt.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod ui;

pub use app::App;
pub use config::MenuConfig;
pub use domain::MenuItem;
pub use error::{AppError, Result};
pub use ui::widgets::{FuzzMenu, MenuAction, VMenu};
