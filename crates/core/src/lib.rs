//! Shared library for the dropped-item finder: item records, the table
//! model, row sorting, and the egui table component (behind the `ui`
//! feature).

pub mod format;
pub mod item;
pub mod model;
pub mod natural;
pub mod sort;
pub mod source;

#[cfg(feature = "ui")]
pub mod ui;

pub use item::{DroppedItem, Position};
pub use model::{CellValue, ColumnKind, ItemTableModel, SubscriberId};
pub use sort::{default_sort_keys, SortKey, SortOrder};
pub use source::{items_from_json, load_items, SourceError};
