//! Row ordering for the item table.

use std::cmp::Ordering;

use crate::model::{CellValue, ItemTableModel, COL_AGE, COL_CHUNK_UPDATE, COL_NAME};
use crate::natural::natural_cmp;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One level of the sort chain.
#[derive(Clone, Copy, PartialEq)]
pub struct SortKey {
    pub column: usize,
    pub order: SortOrder,
}

/// Initial sort: chunks that have gone longest without an update first,
/// youngest items breaking ties (unknown ages at the bottom).
pub fn default_sort_keys() -> Vec<SortKey> {
    vec![
        SortKey {
            column: COL_CHUNK_UPDATE,
            order: SortOrder::Descending,
        },
        SortKey {
            column: COL_AGE,
            order: SortOrder::Ascending,
        },
    ]
}

/// Ascending comparison between two cells of the same column.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
        // Stale placeholders sort after everything.
        (CellValue::Empty, _) => Ordering::Greater,
        (_, CellValue::Empty) => Ordering::Less,
        (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
        (CellValue::Integer(x), CellValue::Integer(y)) => x.cmp(y),
        (CellValue::Duration(x), CellValue::Duration(y)) => x.cmp(y),
        // Relative times order by elapsed time since the update (the offset
        // negated), so a descending sort puts the stalest chunks first.
        (CellValue::RelativeTime(x), CellValue::RelativeTime(y)) => y.cmp(x),
        // Mixed kinds cannot come out of a single column.
        _ => Ordering::Equal,
    }
}

fn compare_rows_by_column(model: &ItemTableModel, column: usize, a: usize, b: usize) -> Ordering {
    let value_a = model.value_at(a, column);
    let value_b = model.value_at(b, column);
    if column == COL_NAME {
        if let (CellValue::Text(x), CellValue::Text(y)) = (&value_a, &value_b) {
            return natural_cmp(x, y);
        }
    }
    compare_cells(&value_a, &value_b)
}

/// Stable-sort row indices by the sort-key chain.
pub fn sort_rows(model: &ItemTableModel, keys: &[SortKey], rows: &mut [usize]) {
    rows.sort_by(|&a, &b| {
        for key in keys {
            let cmp = compare_rows_by_column(model, key.column, a, b);
            let cmp = if key.order == SortOrder::Descending {
                cmp.reverse()
            } else {
                cmp
            };
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        Ordering::Equal
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{DroppedItem, Position};

    fn item(name: &str, chunk_update: i64, age: u32) -> DroppedItem {
        DroppedItem {
            name: name.to_string(),
            count: 1,
            position: Position::new(0.0, 64.0, 0.0),
            age,
            relative_chunk_update_time: chunk_update,
        }
    }

    fn names_in_order(model: &ItemTableModel, rows: &[usize]) -> Vec<String> {
        rows.iter()
            .map(|&row| model.value_at(row, COL_NAME).to_string())
            .collect()
    }

    #[test]
    fn default_sort_groups_by_chunk_update_then_age() {
        let mut model = ItemTableModel::new();
        model.set_items(vec![
            item("aged", 5, 100),
            item("fresh-chunk", -3, 20),
            item("ageless", 5, 0),
        ]);
        let mut rows = vec![0, 1, 2];
        sort_rows(&model, &default_sort_keys(), &mut rows);
        // Both chunk-update-5 items first; the known age beats the unknown
        // sentinel, the -3 chunk comes last.
        assert_eq!(
            names_in_order(&model, &rows),
            vec!["aged", "ageless", "fresh-chunk"]
        );
    }

    #[test]
    fn name_column_uses_natural_order() {
        let mut model = ItemTableModel::new();
        model.set_items(vec![item("Item10", 0, 1), item("Item2", 0, 1)]);
        let mut rows = vec![0, 1];
        let keys = [SortKey {
            column: COL_NAME,
            order: SortOrder::Ascending,
        }];
        sort_rows(&model, &keys, &mut rows);
        assert_eq!(names_in_order(&model, &rows), vec!["Item2", "Item10"]);
    }

    #[test]
    fn descending_reverses_a_column() {
        let mut model = ItemTableModel::new();
        let mut small = item("small", 0, 1);
        small.count = 1;
        let mut big = item("big", 0, 1);
        big.count = 64;
        model.set_items(vec![small, big]);
        let mut rows = vec![0, 1];
        let keys = [SortKey {
            column: crate::model::COL_COUNT,
            order: SortOrder::Descending,
        }];
        sort_rows(&model, &keys, &mut rows);
        assert_eq!(names_in_order(&model, &rows), vec!["big", "small"]);
    }

    #[test]
    fn empty_cells_sort_last() {
        let mut model = ItemTableModel::new();
        model.set_items(vec![item("only", 0, 1)]);
        // Row 7 is stale and resolves to the empty placeholder.
        let mut rows = vec![7, 0];
        let keys = [SortKey {
            column: COL_NAME,
            order: SortOrder::Ascending,
        }];
        sort_rows(&model, &keys, &mut rows);
        assert_eq!(rows, vec![0, 7]);
    }
}
