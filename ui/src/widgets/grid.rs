//! The shared data grid: selection column, sortable headers, page body.
//!
//! Cell rendering stays with the owning page; this widget only knows the
//! column layout and how header and checkbox interactions feed back into
//! the [`GridState`].

use egui::{Button, RichText, Ui};
use egui_extras::TableBuilder;
use manage_business::{GridState, SortDirection};

use super::columns::{CHECKBOX_WIDTH, ColumnSpec, HEADER_HEIGHT, ROW_HEIGHT};

fn sort_marker(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " \u{25b2}",
        Some(SortDirection::Descending) => " \u{25bc}",
        None => "",
    }
}

/// Renders the grid for `rows` and applies header clicks and checkbox
/// changes to `grid`.
pub fn data_grid<T>(
    ui: &mut Ui,
    id: &str,
    columns: &[ColumnSpec],
    grid: &mut GridState,
    rows: &[T],
    row_seq: impl Fn(&T) -> Option<i64>,
    mut cell: impl FnMut(&mut Ui, &T, &ColumnSpec),
) {
    let page_seqs: Vec<i64> = rows.iter().filter_map(&row_seq).collect();

    let mut sort_clicked: Option<String> = None;
    let mut select_all: Option<bool> = None;
    let mut toggled: Vec<(i64, bool)> = Vec::new();

    {
        let grid_view: &GridState = grid;
        let mut builder = TableBuilder::new(ui)
            .id_salt(id)
            .striped(true)
            .column(egui_extras::Column::exact(CHECKBOX_WIDTH));
        for spec in columns {
            builder = builder.column(spec.layout());
        }
        builder
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    let mut all = grid_view.selection.covers(&page_seqs);
                    if ui.checkbox(&mut all, "").changed() {
                        select_all = Some(all);
                    }
                });
                for spec in columns {
                    header.col(|ui| {
                        if spec.sortable {
                            let marker = sort_marker(grid_view.sort_direction(&spec.key));
                            let label =
                                RichText::new(format!("{}{marker}", spec.title)).strong();
                            if ui.add(Button::new(label).frame(false)).clicked() {
                                sort_clicked = Some(spec.key.clone());
                            }
                        } else {
                            ui.strong(&spec.title);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let item = &rows[row.index()];
                    row.col(|ui| {
                        if let Some(seq) = row_seq(item) {
                            let mut selected = grid_view.selection.contains(seq);
                            if ui.checkbox(&mut selected, "").changed() {
                                toggled.push((seq, selected));
                            }
                        }
                    });
                    for spec in columns {
                        row.col(|ui| cell(ui, item, spec));
                    }
                });
            });
    }

    if let Some(key) = sort_clicked {
        grid.toggle_sort(&key);
    }
    if let Some(all) = select_all {
        grid.selection.set_all(page_seqs.iter().copied(), all);
    }
    for (seq, selected) in toggled {
        grid.selection.set(seq, selected);
    }
}

#[cfg(test)]
mod data_grid_tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use manage_business::FilterForm;

    struct Row {
        seq: i64,
        name: &'static str,
    }

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::builder()
                .key("name")
                .title("Name")
                .sortable(true)
                .build(),
            ColumnSpec::builder().key("tel").title("Tel").build(),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { seq: 1, name: "Acme" },
            Row { seq: 2, name: "Globex" },
        ]
    }

    #[test]
    fn headers_and_rows_are_rendered() {
        let mut grid = GridState::with_filter(FilterForm::new());
        let columns = columns();
        let rows = rows();

        let harness = Harness::new_ui_state(
            |ui, grid| {
                data_grid(ui, "test_grid", &columns, grid, &rows, |r| Some(r.seq), |ui, row, spec| {
                    if spec.key == "name" {
                        ui.label(row.name);
                    }
                });
            },
            &mut grid,
        );

        assert!(harness.query_by_label_contains("Name").is_some());
        assert!(harness.query_by_label_contains("Tel").is_some());
        assert!(harness.query_by_label_contains("Acme").is_some());
        assert!(harness.query_by_label_contains("Globex").is_some());
    }

    #[test]
    fn clicking_a_sortable_header_cycles_the_sort() {
        let mut grid = GridState::with_filter(FilterForm::new());
        let columns = columns();
        let rows = rows();

        let mut harness = Harness::new_ui_state(
            |ui, grid| {
                data_grid(ui, "test_grid", &columns, grid, &rows, |r| Some(r.seq), |ui, row, spec| {
                    if spec.key == "name" {
                        ui.label(row.name);
                    }
                });
            },
            &mut grid,
        );

        harness.get_by_label_contains("Name").click();
        harness.run();
        drop(harness);

        assert_eq!(
            grid.sort_direction("name"),
            Some(SortDirection::Ascending)
        );
    }
}
