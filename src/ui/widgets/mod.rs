//! Menu widgets for fuzzmenu.

pub mod fuzzmenu;
pub mod vmenu;

pub use fuzzmenu::FuzzMenu;
pub use vmenu::{ItemCallback, MenuAction, VMenu};
