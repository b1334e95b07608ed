use egui::{ComboBox, Ui};
use manage_business::{FetchStatus, GridState, PAGE_SIZE_OPTIONS};

/// Bottom bar of every grid: fetch status, total count, page size
/// selector and page navigation.
pub fn pagination_bar(ui: &mut Ui, id: &str, grid: &mut GridState) {
    let mut new_page: Option<usize> = None;
    let mut new_page_size: Option<usize> = None;

    ui.horizontal(|ui| {
        match grid.status {
            FetchStatus::Fetching => {
                ui.spinner();
            }
            FetchStatus::Error => {
                ui.colored_label(ui.visuals().error_fg_color, "Load failed");
            }
            FetchStatus::Success => {}
        }

        ui.label(format!("{} rows", grid.total));
        ui.separator();

        let mut page_size = grid.query.page_size;
        ComboBox::from_id_salt((id, "page_size"))
            .selected_text(format!("{page_size} / page"))
            .show_ui(ui, |ui| {
                for option in PAGE_SIZE_OPTIONS {
                    ui.selectable_value(&mut page_size, option, option.to_string());
                }
            });
        if page_size != grid.query.page_size {
            new_page_size = Some(page_size);
        }

        ui.separator();

        let page_count = grid.page_count().max(1);
        let page = grid.query.page;
        if ui.add_enabled(page > 0, egui::Button::new("<")).clicked() {
            new_page = Some(page - 1);
        }
        ui.label(format!("Page {} of {page_count}", page + 1));
        if ui
            .add_enabled(page + 1 < page_count, egui::Button::new(">"))
            .clicked()
        {
            new_page = Some(page + 1);
        }
    });

    if let Some(size) = new_page_size {
        grid.set_page_size(size);
    }
    if let Some(page) = new_page {
        grid.set_page(page);
    }
}

#[cfg(test)]
mod pagination_tests {
    use super::*;
    use chrono::Utc;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use manage_business::FilterForm;

    fn grid_with_rows(total: usize) -> GridState {
        let mut grid = GridState::with_filter(FilterForm::new());
        grid.fetch_succeeded(total);
        grid
    }

    #[test]
    fn shows_total_and_current_page() {
        let mut grid = grid_with_rows(45);
        let harness = Harness::new_ui_state(
            |ui, grid| pagination_bar(ui, "p", grid),
            &mut grid,
        );
        assert!(harness.query_by_label_contains("45 rows").is_some());
        assert!(harness.query_by_label_contains("Page 1 of 3").is_some());
    }

    #[test]
    fn next_button_advances_and_queues_refetch() {
        let mut grid = grid_with_rows(45);
        grid.selection.set(7, true);

        let mut harness = Harness::new_ui_state(
            |ui, grid| pagination_bar(ui, "p", grid),
            &mut grid,
        );
        harness.get_by_label(">").click();
        harness.run();
        drop(harness);

        assert_eq!(grid.query.page, 1);
        assert!(grid.selection.is_empty());
        assert!(grid.take_refetch(Utc::now()));
    }

    #[test]
    fn back_button_is_disabled_on_first_page() {
        let mut grid = grid_with_rows(45);
        let mut harness = Harness::new_ui_state(
            |ui, grid| pagination_bar(ui, "p", grid),
            &mut grid,
        );
        harness.get_by_label("<").click();
        harness.run();
        drop(harness);
        assert_eq!(grid.query.page, 0);
    }
}
