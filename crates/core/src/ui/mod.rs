//! Shared egui components.

mod item_table;

pub use item_table::*;
