//! Row data adapter for the dropped-item table.

use std::fmt;

use crate::format::{age_seconds, format_duration, format_relative_time};
use crate::item::DroppedItem;

/// Fixed column labels, indexed by the `COL_*` constants.
pub const COLUMNS: [&str; 5] = ["Item Name", "Stack Size", "Location", "Age", "Chunk Update"];

pub const COL_NAME: usize = 0;
pub const COL_COUNT: usize = 1;
pub const COL_LOCATION: usize = 2;
pub const COL_AGE: usize = 3;
pub const COL_CHUNK_UPDATE: usize = 4;

/// Semantic column type, used to pick renderers and default comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Duration,
    RelativeTime,
}

/// A cell value derived from an item record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Placeholder for out-of-range reads.
    Empty,
    Text(String),
    Integer(u32),
    /// Whole seconds; [`crate::format::UNKNOWN_SECONDS`] renders as "--".
    Duration(u32),
    /// Tick offset relative to now; negative offsets lie in the past.
    RelativeTime(i64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(text) => f.write_str(text),
            CellValue::Integer(count) => write!(f, "{}", count),
            CellValue::Duration(secs) => f.write_str(&format_duration(*secs)),
            CellValue::RelativeTime(ticks) => f.write_str(&format_relative_time(*ticks)),
        }
    }
}

pub type SubscriberId = usize;

/// Table model over the current item list.
///
/// Views register a change callback instead of inheriting from a framework
/// base class; `set_items` replaces the list wholesale and fires every
/// subscriber.
#[derive(Default)]
pub struct ItemTableModel {
    items: Vec<DroppedItem>,
    subscribers: Vec<(SubscriberId, Box<dyn Fn()>)>,
    next_id: SubscriberId,
}

impl ItemTableModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change callback, fired after every `set_items`.
    pub fn subscribe(&mut self, callback: impl Fn() + 'static) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(subscriber, _)| *subscriber != id);
    }

    /// Replace the item list and notify subscribers. Item contents are not
    /// validated; the save reader owns that.
    pub fn set_items(&mut self, items: Vec<DroppedItem>) {
        self.items = items;
        for (_, callback) in &self.subscribers {
            callback();
        }
    }

    pub fn items(&self) -> &[DroppedItem] {
        &self.items
    }

    pub fn row_count(&self) -> usize {
        self.items.len()
    }

    pub fn column_count(&self) -> usize {
        COLUMNS.len()
    }

    /// Label for a column; indices come from the fixed `COL_*` set, anything
    /// else is a programming error.
    pub fn column_name(&self, column: usize) -> &'static str {
        COLUMNS[column]
    }

    pub fn column_kind(&self, column: usize) -> ColumnKind {
        match column {
            COL_COUNT => ColumnKind::Integer,
            COL_AGE => ColumnKind::Duration,
            COL_CHUNK_UPDATE => ColumnKind::RelativeTime,
            _ => ColumnKind::Text,
        }
    }

    /// Value of one cell. Stale row indices can arrive from a view while a
    /// shrink is being re-rendered, so out-of-range reads return the empty
    /// placeholder instead of failing.
    pub fn value_at(&self, row: usize, column: usize) -> CellValue {
        let Some(item) = self.items.get(row) else {
            return CellValue::Empty;
        };
        match column {
            COL_NAME => CellValue::Text(item.name.clone()),
            COL_COUNT => CellValue::Integer(item.count),
            COL_LOCATION => CellValue::Text(item.position.to_rounded_string()),
            COL_AGE => CellValue::Duration(age_seconds(item.age)),
            // The save stores ticks since the last chunk update; the table
            // shows it as a relative time, hence the negation.
            COL_CHUNK_UPDATE => CellValue::RelativeTime(-item.relative_chunk_update_time),
            _ => CellValue::Empty,
        }
    }
}
