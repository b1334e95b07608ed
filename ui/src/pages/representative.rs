//! Representative screen: one contact person per customer company.
//! Rows are keyed by the company and can only be edited, not created or
//! deleted here.

use std::any::Any;

use egui::{Grid, TextEdit, Ui, Window};
use manage_business::entities::Representative;
use manage_business::{FetchStatus, FilterForm, GridState, ManageConfig, WriteOutcome, rest};
use manage_states::{State, StateCtx, Time};

use crate::api::{PagePayload, fetch_page, send_write, take_response};
use crate::widgets::toast::ToastLevel;
use crate::widgets::{ColumnSpec, FilterField, ToastSender, data_grid, filter_panel, pagination_bar};

const PAGE_KEY: &str = "representative_page_response";
const WRITE_KEY: &str = "representative_write_outcome";

pub struct RepresentativePageState {
    pub grid: GridState,
    pub rows: Vec<Representative>,
    pub edit_dialog: Option<Representative>,
    pub started: bool,
}

impl Default for RepresentativePageState {
    fn default() -> Self {
        Self {
            grid: GridState::with_filter(
                FilterForm::new()
                    .text_field("companyName")
                    .text_field("custEmpName")
                    .text_field("custEmpTel")
                    .text_field("custEmpFax")
                    .text_field("custEmpEmail")
                    .text_field("custEmpPosition"),
            ),
            rows: Vec::new(),
            edit_dialog: None,
            started: false,
        }
    }
}

impl State for RepresentativePageState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::builder()
            .key("companyName")
            .title("Company")
            .sortable(true)
            .build(),
        ColumnSpec::builder()
            .key("custEmpName")
            .title("Name")
            .sortable(true)
            .build(),
        ColumnSpec::builder().key("custEmpTel").title("Tel").build(),
        ColumnSpec::builder().key("custEmpFax").title("Fax").build(),
        ColumnSpec::builder()
            .key("custEmpEmail")
            .title("Email")
            .build(),
        ColumnSpec::builder()
            .key("custEmpPosition")
            .title("Position")
            .build(),
        ColumnSpec::builder().key("edit").title("").width(60.0).build(),
    ]
}

fn poll_responses(state: &mut RepresentativePageState, ctx: &egui::Context, toasts: &ToastSender) {
    if let Some((request_id, result)) = take_response::<PagePayload<Representative>>(ctx, PAGE_KEY)
        && state.grid.accept_response(request_id)
    {
        match result {
            Ok(page) => {
                state.rows = page.contents;
                state.grid.fetch_succeeded(page.total);
            }
            Err(_) => state.grid.fetch_failed(),
        }
    }

    if let Some(outcome) = take_response::<WriteOutcome>(ctx, WRITE_KEY) {
        let message = match outcome {
            WriteOutcome::Success => "Representative saved",
            WriteOutcome::Warn => "The backend rejected the representative",
            WriteOutcome::Error => "Saving the representative failed",
        };
        let _ = toasts.send((ToastLevel::for_outcome(outcome), message.to_owned()));
        if outcome.is_success() {
            state.grid.queue_refetch();
        }
    }
}

fn show_edit_dialog(state: &mut RepresentativePageState, api_url: &str, ui: &mut Ui) {
    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    let Some(row) = state.edit_dialog.as_mut() else {
        return;
    };

    let title = row.company_name.clone().unwrap_or_default();
    Window::new(format!("Representative - {title}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            Grid::new("edit_representative_form")
                .num_columns(2)
                .show(ui, |ui| {
                    for (label, value) in [
                        ("Name", &mut row.cust_emp_name),
                        ("Tel", &mut row.cust_emp_tel),
                        ("Fax", &mut row.cust_emp_fax),
                        ("Email", &mut row.cust_emp_email),
                        ("Position", &mut row.cust_emp_position),
                    ] {
                        ui.label(label);
                        let mut text = value.clone().unwrap_or_default();
                        if ui
                            .add(TextEdit::singleline(&mut text).desired_width(200.0))
                            .changed()
                        {
                            *value = Some(text);
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel {
        open = false;
    }

    if save {
        match rest::update_request(api_url, "representative", row) {
            Ok(request) => send_write(ui.ctx().clone(), WRITE_KEY, request),
            Err(err) => log::error!("could not encode representative: {err}"),
        }
        state.edit_dialog = None;
    } else if !open {
        state.edit_dialog = None;
    }
}

pub fn representative_page(state_ctx: &mut StateCtx, toasts: &ToastSender, ui: &mut Ui) {
    let api_url = state_ctx.state_mut::<ManageConfig>().api_url();
    let now = *state_ctx.state_mut::<Time>().as_ref();
    let state = state_ctx.state_mut::<RepresentativePageState>();

    poll_responses(state, ui.ctx(), toasts);

    if !state.started {
        state.started = true;
        state.grid.queue_refetch();
    }

    ui.horizontal(|ui| {
        ui.heading("Representatives");
        if state.grid.status == FetchStatus::Fetching {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                state.grid.queue_refetch();
            }
        });
    });

    let fields = [
        FilterField::text("companyName", "Company"),
        FilterField::text("custEmpName", "Name"),
        FilterField::text("custEmpTel", "Tel"),
        FilterField::text("custEmpFax", "Fax"),
        FilterField::text("custEmpEmail", "Email"),
        FilterField::text("custEmpPosition", "Position"),
    ];
    filter_panel(ui, "representative_filter", &mut state.grid, &fields, now);
    ui.separator();

    let columns = columns();
    let rows = std::mem::take(&mut state.rows);
    let mut open_edit: Option<Representative> = None;
    data_grid(
        ui,
        "representative_grid",
        &columns,
        &mut state.grid,
        &rows,
        // No bulk actions here, so no row selection either.
        |_| None,
        |ui, row, spec| {
            let text = |value: &Option<String>| value.clone().unwrap_or_default();
            match spec.key.as_str() {
                "companyName" => {
                    ui.label(text(&row.company_name));
                }
                "custEmpName" => {
                    ui.label(text(&row.cust_emp_name));
                }
                "custEmpTel" => {
                    ui.label(text(&row.cust_emp_tel));
                }
                "custEmpFax" => {
                    ui.label(text(&row.cust_emp_fax));
                }
                "custEmpEmail" => {
                    ui.label(text(&row.cust_emp_email));
                }
                "custEmpPosition" => {
                    ui.label(text(&row.cust_emp_position));
                }
                "edit" => {
                    if ui.button("Edit").clicked() {
                        open_edit = Some(row.clone());
                    }
                }
                _ => {}
            }
        },
    );
    state.rows = rows;
    if let Some(row) = open_edit {
        state.edit_dialog = Some(row);
    }

    pagination_bar(ui, "representative_pagination", &mut state.grid);

    show_edit_dialog(state, &api_url, ui);

    if state.grid.take_refetch(now) {
        let request_id = state.grid.begin_fetch();
        let pairs = state.grid.query_pairs();
        fetch_page::<Representative>(
            ui.ctx().clone(),
            PAGE_KEY,
            request_id,
            rest::list_request(&api_url, "representative", &pairs),
        );
    }
}

#[cfg(test)]
mod representative_page_tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn lists_contacts_by_company() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::default());
        ctx.add_state(ManageConfig::new("http://test"));
        let mut state = RepresentativePageState::default();
        state.started = true;
        state.rows = vec![Representative {
            company_seq: Some(9),
            company_name: Some("Acme".to_owned()),
            cust_emp_name: Some("Park".to_owned()),
            ..Representative::default()
        }];
        state.grid.fetch_succeeded(1);
        ctx.add_state(state);

        let (sender, _receiver) = flume::unbounded();
        let harness = Harness::new_ui_state(
            |ui, ctx| representative_page(ctx, &sender, ui),
            &mut ctx,
        );
        assert!(harness.query_by_label_contains("Acme").is_some());
        assert!(harness.query_by_label_contains("Park").is_some());
    }
}
