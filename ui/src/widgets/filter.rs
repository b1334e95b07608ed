use chrono::{DateTime, Utc};
use egui::{ComboBox, TextEdit, Ui};
use manage_business::{GridState, OptionItem};

/// How one filter field is presented. Fields with `options` render as a
/// dropdown whose first entry is the "all" sentinel; the rest as text
/// inputs.
pub struct FilterField<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub options: Option<&'a [OptionItem]>,
}

impl<'a> FilterField<'a> {
    pub fn text(key: &'a str, label: &'a str) -> Self {
        Self {
            key,
            label,
            options: None,
        }
    }

    pub fn dropdown(key: &'a str, label: &'a str, options: &'a [OptionItem]) -> Self {
        Self {
            key,
            label,
            options: Some(options),
        }
    }
}

/// The filter strip above a grid. Text edits go through the debouncer;
/// dropdown changes refetch immediately.
pub fn filter_panel(
    ui: &mut Ui,
    id: &str,
    grid: &mut GridState,
    fields: &[FilterField<'_>],
    now: DateTime<Utc>,
) {
    ui.horizontal(|ui| {
        let mut enabled = grid.filter.enabled;
        if ui.toggle_value(&mut enabled, "Filter").changed() {
            grid.set_filter_enabled(enabled);
        }
        if grid.filter.enabled && ui.button("Reset").clicked() {
            grid.reset_filter();
        }
    });

    if !grid.filter.enabled {
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for field in fields {
            ui.label(field.label);
            match field.options {
                Some(options) => {
                    let current = grid.filter.code(field.key).unwrap_or(0);
                    let selected_label = options
                        .iter()
                        .find(|option| option.value == current)
                        .map(|option| option.label.clone())
                        .unwrap_or_default();
                    let mut chosen = current;
                    ComboBox::from_id_salt((id, field.key))
                        .selected_text(selected_label)
                        .show_ui(ui, |ui| {
                            for option in options {
                                ui.selectable_value(
                                    &mut chosen,
                                    option.value,
                                    &option.label,
                                );
                            }
                        });
                    if chosen != current {
                        grid.set_code_filter(field.key, chosen);
                    }
                }
                None => {
                    let mut text = grid.filter.text(field.key).unwrap_or("").to_owned();
                    let response = ui.add(
                        TextEdit::singleline(&mut text)
                            .id_salt((id, field.key))
                            .desired_width(140.0),
                    );
                    if response.changed() {
                        grid.set_text_filter(field.key, &text, now);
                    }
                }
            }
        }
    });
}

#[cfg(test)]
mod filter_panel_tests {
    use super::*;
    use chrono::Utc;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use manage_business::FilterForm;

    fn grid() -> GridState {
        GridState::with_filter(
            FilterForm::new()
                .text_field("companyName")
                .code_field("custStatus"),
        )
    }

    #[test]
    fn fields_hidden_until_enabled() {
        let mut grid = grid();
        let now = Utc::now();
        let options = vec![OptionItem {
            value: 0,
            label: "All".to_owned(),
        }];
        let fields = [
            FilterField::text("companyName", "Company"),
            FilterField::dropdown("custStatus", "Status", &options),
        ];

        let harness = Harness::new_ui_state(
            |ui, grid| filter_panel(ui, "f", grid, &fields, now),
            &mut grid,
        );
        assert!(harness.query_by_label_contains("Company").is_none());
        assert!(harness.query_by_label_contains("Filter").is_some());
    }

    #[test]
    fn toggle_enables_fields_and_queues_refetch() {
        let mut grid = grid();
        let now = Utc::now();
        let fields = [FilterField::text("companyName", "Company")];

        let mut harness = Harness::new_ui_state(
            |ui, grid| filter_panel(ui, "f", grid, &fields, now),
            &mut grid,
        );
        harness.get_by_label("Filter").click();
        harness.run();
        assert!(harness.query_by_label_contains("Company").is_some());
        drop(harness);

        assert!(grid.filter.enabled);
        assert!(grid.take_refetch(now));
    }

    #[test]
    fn disabling_keeps_typed_values() {
        let mut grid = grid();
        grid.set_filter_enabled(true);
        grid.filter.set_text("companyName", "acme");
        grid.set_filter_enabled(false);
        assert_eq!(grid.filter.text("companyName"), Some("acme"));
    }
}
