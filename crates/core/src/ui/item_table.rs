//! Item table panel - filterable, sortable dropped-item list with a
//! right-click copy menu.

use std::cell::Cell;
use std::rc::Rc;

use egui::{self, Label, Sense, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular;

use crate::item::DroppedItem;
use crate::model::{CellValue, ItemTableModel, COLUMNS};
use crate::sort::{default_sort_keys, sort_rows, SortKey, SortOrder};

/// Sortable, filterable table over an [`ItemTableModel`].
///
/// The view subscribes to its own model, so `set_items` flows through the
/// change notification: the next frame re-sorts the display order, drops the
/// stale selection, and re-fits column widths to the new content.
pub struct ItemTableView {
    model: ItemTableModel,
    sort_keys: Vec<SortKey>,
    filter_name: String,
    /// Model row indices in display order (filtered + sorted).
    display_rows: Vec<usize>,
    /// Selected cell as (model row, column).
    selected: Option<(usize, usize)>,
    /// Set by the model subscription when the item list was replaced.
    data_changed: Rc<Cell<bool>>,
    /// Salts the table id; bumping it drops stored column widths so the
    /// columns re-fit their content.
    width_generation: u64,
}

impl Default for ItemTableView {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemTableView {
    pub fn new() -> Self {
        let data_changed = Rc::new(Cell::new(false));
        let mut model = ItemTableModel::new();
        let flag = Rc::clone(&data_changed);
        model.subscribe(move || flag.set(true));
        Self {
            model,
            sort_keys: default_sort_keys(),
            filter_name: String::new(),
            display_rows: Vec::new(),
            selected: None,
            data_changed,
            width_generation: 0,
        }
    }

    /// Replace the listed items.
    pub fn set_items(&mut self, items: Vec<DroppedItem>) {
        self.model.set_items(items);
    }

    pub fn model(&self) -> &ItemTableModel {
        &self.model
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.refresh_if_changed();
        self.render_filter_bar(ui);
        ui.add_space(4.0);
        self.render_table(ui);
    }

    fn refresh_if_changed(&mut self) {
        if self.data_changed.take() {
            self.selected = None;
            self.width_generation += 1;
            self.rebuild_display_rows();
        }
    }

    fn rebuild_display_rows(&mut self) {
        let filter = self.filter_name.to_lowercase();
        let mut rows: Vec<usize> = self
            .model
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.is_empty() || item.name.to_lowercase().contains(&filter))
            .map(|(row, _)| row)
            .collect();
        sort_rows(&self.model, &self.sort_keys, &mut rows);
        self.display_rows = rows;
    }

    /// Header click: the clicked column becomes the primary key (toggling
    /// its order when it already is), the previous primary stays as the
    /// tiebreak.
    fn set_sort(&mut self, column: usize) {
        match self.sort_keys.first().copied() {
            Some(primary) if primary.column == column => {
                self.sort_keys[0].order = primary.order.toggle();
            }
            _ => {
                self.sort_keys.retain(|key| key.column != column);
                self.sort_keys.insert(
                    0,
                    SortKey {
                        column,
                        order: SortOrder::Ascending,
                    },
                );
                self.sort_keys.truncate(2);
            }
        }
        self.rebuild_display_rows();
    }

    fn sort_indicator(&self, column: usize) -> &'static str {
        match self.sort_keys.first() {
            Some(key) if key.column == column => match key.order {
                SortOrder::Ascending => regular::CARET_UP,
                SortOrder::Descending => regular::CARET_DOWN,
            },
            _ => "",
        }
    }

    fn render_filter_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Filter:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.filter_name)
                    .hint_text("Search by name...")
                    .desired_width(150.0),
            );
            if response.changed() {
                self.rebuild_display_rows();
            }
            ui.add_space(10.0);
            if self.filter_name.is_empty() {
                ui.add_enabled(false, egui::Button::new("Clear"));
            } else if ui.button("Clear").clicked() {
                self.filter_name.clear();
                self.rebuild_display_rows();
            }
        });
        let total = self.model.row_count();
        if self.display_rows.len() != total {
            ui.label(format!("Showing {} of {} items", self.display_rows.len(), total));
        }
    }

    fn render_table(&mut self, ui: &mut Ui) {
        let text_height = egui::TextStyle::Body
            .resolve(ui.style())
            .size
            .max(ui.spacing().interact_size.y);
        let available_height = ui.available_height();
        let row_count = self.display_rows.len();
        let generation = self.width_generation;

        ui.push_id(generation, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(200.0).clip(true).resizable(true)) // Item Name
                .column(Column::auto().at_least(70.0)) // Stack Size
                .column(Column::auto().at_least(120.0)) // Location
                .column(Column::auto().at_least(70.0)) // Age
                .column(Column::remainder().at_least(90.0)) // Chunk Update
                .min_scrolled_height(0.0)
                .max_scroll_height(available_height)
                .header(20.0, |mut header| {
                    for column in 0..COLUMNS.len() {
                        header.col(|ui| {
                            let indicator = self.sort_indicator(column);
                            let name = self.model.column_name(column);
                            let label = if indicator.is_empty() {
                                name.to_string()
                            } else {
                                format!("{} {}", name, indicator)
                            };
                            let is_primary = self
                                .sort_keys
                                .first()
                                .is_some_and(|key| key.column == column);
                            if ui.selectable_label(is_primary, label).clicked() {
                                self.set_sort(column);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(text_height, row_count, |mut row| {
                        let model_row = self.display_rows[row.index()];
                        for column in 0..COLUMNS.len() {
                            row.col(|ui| {
                                self.render_cell(ui, model_row, column);
                            });
                        }
                    });
                });
        });
    }

    fn render_cell(&mut self, ui: &mut Ui, row: usize, column: usize) {
        let text = self.model.value_at(row, column).to_string();
        if self.selected == Some((row, column)) {
            ui.painter().rect_filled(
                ui.available_rect_before_wrap(),
                0.0,
                ui.visuals().selection.bg_fill,
            );
        }
        let response = ui.add(Label::new(text).sense(Sense::click()));
        // A right click selects the cell under the pointer before the
        // context menu opens, so Copy always targets that cell.
        if response.clicked() || response.secondary_clicked() {
            self.selected = Some((row, column));
        }
        response.context_menu(|ui| {
            if ui.button(format!("{} Copy", regular::COPY)).clicked() {
                self.copy_selected_cell(ui);
                ui.close();
            }
        });
    }

    /// Text of the selected cell, or None when nothing is selected or the
    /// selection resolves to the stale-row placeholder.
    fn selected_cell_text(&self) -> Option<String> {
        let (row, column) = self.selected?;
        let value = self.model.value_at(row, column);
        if value == CellValue::Empty {
            return None;
        }
        Some(value.to_string())
    }

    /// Place the selected cell's text on the system clipboard; no-op without
    /// a selection.
    fn copy_selected_cell(&self, ui: &Ui) {
        if let Some(text) = self.selected_cell_text() {
            ui.ctx().copy_text(text);
        }
    }

    #[cfg(test)]
    fn display_names(&self) -> Vec<String> {
        self.display_rows
            .iter()
            .map(|&row| self.model.value_at(row, crate::model::COL_NAME).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Position;
    use crate::model::{COL_CHUNK_UPDATE, COL_LOCATION, COL_NAME};

    fn item(name: &str, chunk_update: i64, age: u32) -> DroppedItem {
        DroppedItem {
            name: name.to_string(),
            count: 1,
            position: Position::new(0.0, 64.0, 0.0),
            age,
            relative_chunk_update_time: chunk_update,
        }
    }

    #[test]
    fn initial_load_applies_the_default_sort() {
        let mut view = ItemTableView::new();
        view.set_items(vec![
            item("aged", 5, 100),
            item("fresh-chunk", -3, 20),
            item("ageless", 5, 0),
        ]);
        view.refresh_if_changed();
        assert_eq!(view.display_names(), vec!["aged", "ageless", "fresh-chunk"]);
    }

    #[test]
    fn replacing_items_drops_the_selection() {
        let mut view = ItemTableView::new();
        view.set_items(vec![item("one", 0, 1)]);
        view.refresh_if_changed();
        view.selected = Some((0, COL_NAME));
        view.set_items(Vec::new());
        view.refresh_if_changed();
        assert_eq!(view.selected, None);
        assert!(view.display_names().is_empty());
    }

    #[test]
    fn header_click_promotes_and_toggles_a_column() {
        let mut view = ItemTableView::new();
        view.set_items(vec![item("Item10", 0, 1), item("Item2", 0, 1)]);
        view.refresh_if_changed();

        view.set_sort(COL_NAME);
        assert_eq!(view.sort_keys[0].column, COL_NAME);
        assert!(view.sort_keys[0].order == SortOrder::Ascending);
        // The previous primary stays as the tiebreak.
        assert_eq!(view.sort_keys[1].column, COL_CHUNK_UPDATE);
        assert_eq!(view.display_names(), vec!["Item2", "Item10"]);

        view.set_sort(COL_NAME);
        assert!(view.sort_keys[0].order == SortOrder::Descending);
        assert_eq!(view.display_names(), vec!["Item10", "Item2"]);
    }

    #[test]
    fn copy_reads_the_selected_location_cell() {
        let mut view = ItemTableView::new();
        let mut third = item("Diamond", 0, 1);
        third.position = Position::new(12.3, 63.7, -8.4);
        view.set_items(vec![item("Stick", 0, 1), item("Torch", 0, 1), third]);
        view.refresh_if_changed();
        view.selected = Some((2, COL_LOCATION));
        assert_eq!(view.selected_cell_text().as_deref(), Some("(12, 64, -8)"));
    }

    #[test]
    fn copy_without_selection_yields_nothing() {
        let mut view = ItemTableView::new();
        view.set_items(vec![item("one", 0, 1)]);
        view.refresh_if_changed();
        assert_eq!(view.selected_cell_text(), None);
        // A selection gone stale resolves to the placeholder, not a panic.
        view.selected = Some((9, COL_LOCATION));
        assert_eq!(view.selected_cell_text(), None);
    }

    #[test]
    fn name_filter_narrows_the_rows() {
        let mut view = ItemTableView::new();
        view.set_items(vec![
            item("Diamond", 0, 1),
            item("Diamond Sword", 0, 1),
            item("Stick", 0, 1),
        ]);
        view.refresh_if_changed();
        view.filter_name = "diamond".to_string();
        view.rebuild_display_rows();
        assert_eq!(view.display_names().len(), 2);
        view.filter_name.clear();
        view.rebuild_display_rows();
        assert_eq!(view.display_names().len(), 3);
    }
}
