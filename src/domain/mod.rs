//! Domain entities for fuzzmenu.

mod item;

pub use item::MenuItem;
