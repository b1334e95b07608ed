//! Department screen. Deleting is guarded by an employee-exists check:
//! a department that still has members cannot be removed.

use std::any::Any;

use egui::{Grid, TextEdit, Ui, Window};
use manage_business::entities::{Department, DepartmentDraft};
use manage_business::{FetchStatus, FilterForm, GridState, ManageConfig, WriteOutcome, rest};
use manage_states::{State, StateCtx, Time};

use crate::api::{PagePayload, fetch_page, send_write, take_response};
use crate::widgets::toast::ToastLevel;
use crate::widgets::{ColumnSpec, FilterField, ToastSender, data_grid, filter_panel, pagination_bar};

const PAGE_KEY: &str = "department_page_response";
const WRITE_KEY: &str = "department_write_outcome";
const DELETE_KEY: &str = "department_delete_outcome";
const EXISTS_KEY: &str = "department_exists_outcome";

pub struct CreateDepartmentDialog {
    pub draft: DepartmentDraft,
    pub missing: Vec<&'static str>,
}

pub struct DepartmentPageState {
    pub grid: GridState,
    pub rows: Vec<Department>,
    pub create_dialog: Option<CreateDepartmentDialog>,
    pub edit_dialog: Option<Department>,
    pub started: bool,
}

impl Default for DepartmentPageState {
    fn default() -> Self {
        Self {
            grid: GridState::with_filter(
                FilterForm::new()
                    .text_field("deptName")
                    .text_field("deptNameEn")
                    .text_field("deptPhone")
                    .text_field("deptFax"),
            ),
            rows: Vec::new(),
            create_dialog: None,
            edit_dialog: None,
            started: false,
        }
    }
}

impl State for DepartmentPageState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::builder().key("deptName").title("Department").build(),
        ColumnSpec::builder()
            .key("deptNameEn")
            .title("Department (EN)")
            .build(),
        ColumnSpec::builder().key("deptPhone").title("Phone").build(),
        ColumnSpec::builder().key("deptFax").title("Fax").build(),
        ColumnSpec::builder().key("edit").title("").width(60.0).build(),
    ]
}

fn check_employees_exist(api_url: &str, seqs: &[i64], ctx: egui::Context) {
    let pairs: Vec<(String, String)> = seqs
        .iter()
        .map(|seq| ("seq".to_owned(), seq.to_string()))
        .collect();
    send_write(
        ctx,
        EXISTS_KEY,
        rest::list_request(api_url, "department/employee/exists", &pairs),
    );
}

fn poll_responses(
    state: &mut DepartmentPageState,
    api_url: &str,
    ctx: &egui::Context,
    toasts: &ToastSender,
) {
    if let Some((request_id, result)) = take_response::<PagePayload<Department>>(ctx, PAGE_KEY)
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
            WriteOutcome::Success => "Department saved",
            WriteOutcome::Warn => "The backend rejected the department",
            WriteOutcome::Error => "Saving the department failed",
        };
        let _ = toasts.send((ToastLevel::for_outcome(outcome), message.to_owned()));
        if outcome.is_success() {
            state.grid.queue_refetch();
        }
    }

    // Exists check: 2xx means no employees are assigned and the delete
    // may proceed, 4xx means the departments are still in use.
    if let Some(outcome) = take_response::<WriteOutcome>(ctx, EXISTS_KEY) {
        match outcome {
            WriteOutcome::Success => {
                let seqs: Vec<i64> = state.grid.selection.iter().collect();
                send_write(
                    ctx.clone(),
                    DELETE_KEY,
                    rest::delete_request(api_url, "department", &seqs),
                );
            }
            WriteOutcome::Warn => {
                let _ = toasts.send((
                    ToastLevel::Warning,
                    "Departments with employees cannot be deleted".to_owned(),
                ));
            }
            WriteOutcome::Error => {
                let _ = toasts.send((ToastLevel::Error, "Delete check failed".to_owned()));
            }
        }
    }

    if let Some(outcome) = take_response::<WriteOutcome>(ctx, DELETE_KEY) {
        let message = match outcome {
            WriteOutcome::Success => "Departments deleted",
            WriteOutcome::Warn => "The backend refused the delete",
            WriteOutcome::Error => "Deleting departments failed",
        };
        let _ = toasts.send((ToastLevel::for_outcome(outcome), message.to_owned()));
        if outcome.is_success() {
            state.grid.delete_completed();
        }
    }
}

fn show_create_dialog(state: &mut DepartmentPageState, api_url: &str, ui: &mut Ui) {
    let mut open = true;
    let mut submitted = false;
    let mut cancel = false;

    let Some(dialog) = state.create_dialog.as_mut() else {
        return;
    };

    Window::new("New department")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            let name_missing = dialog.missing.contains(&"deptName");
            let name_en_missing = dialog.missing.contains(&"deptNameEn");
            Grid::new("new_department_form").num_columns(2).show(ui, |ui| {
                let draft = &mut dialog.draft;
                if name_missing {
                    ui.colored_label(ui.visuals().error_fg_color, "Name *");
                } else {
                    ui.label("Name");
                }
                ui.add(TextEdit::singleline(&mut draft.dept_name).desired_width(200.0));
                ui.end_row();

                if name_en_missing {
                    ui.colored_label(ui.visuals().error_fg_color, "Name (EN) *");
                } else {
                    ui.label("Name (EN)");
                }
                ui.add(TextEdit::singleline(&mut draft.dept_name_en).desired_width(200.0));
                ui.end_row();

                ui.label("Phone");
                ui.add(TextEdit::singleline(&mut draft.dept_phone).desired_width(200.0));
                ui.end_row();

                ui.label("Fax");
                ui.add(TextEdit::singleline(&mut draft.dept_fax).desired_width(200.0));
                ui.end_row();
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Create").clicked() {
                    submitted = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel {
        open = false;
    }

    if submitted {
        dialog.missing = dialog.draft.missing_fields();
        if dialog.missing.is_empty() {
            match rest::create_request(api_url, "department", &dialog.draft.to_row().create_payload())
            {
                Ok(request) => send_write(ui.ctx().clone(), WRITE_KEY, request),
                Err(err) => log::error!("could not encode department: {err}"),
            }
            state.create_dialog = None;
        }
    } else if !open {
        state.create_dialog = None;
    }
}

fn show_edit_dialog(state: &mut DepartmentPageState, api_url: &str, ui: &mut Ui) {
    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    let Some(row) = state.edit_dialog.as_mut() else {
        return;
    };

    Window::new("Edit department")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            Grid::new("edit_department_form").num_columns(2).show(ui, |ui| {
                for (label, value) in [
                    ("Name", &mut row.dept_name),
                    ("Name (EN)", &mut row.dept_name_en),
                    ("Phone", &mut row.dept_phone),
                    ("Fax", &mut row.dept_fax),
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
        match rest::update_request(api_url, "department", row) {
            Ok(request) => send_write(ui.ctx().clone(), WRITE_KEY, request),
            Err(err) => log::error!("could not encode department: {err}"),
        }
        state.edit_dialog = None;
    } else if !open {
        state.edit_dialog = None;
    }
}

pub fn department_page(state_ctx: &mut StateCtx, toasts: &ToastSender, ui: &mut Ui) {
    let api_url = state_ctx.state_mut::<ManageConfig>().api_url();
    let now = *state_ctx.state_mut::<Time>().as_ref();
    let state = state_ctx.state_mut::<DepartmentPageState>();

    poll_responses(state, &api_url, ui.ctx(), toasts);

    if !state.started {
        state.started = true;
        state.grid.queue_refetch();
    }

    let mut delete_clicked = false;
    ui.horizontal(|ui| {
        ui.heading("Departments");
        if state.grid.status == FetchStatus::Fetching {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(
                    !state.grid.selection.is_empty(),
                    egui::Button::new("Delete"),
                )
                .clicked()
            {
                delete_clicked = true;
            }
            if ui.button("New department").clicked() {
                state.create_dialog = Some(CreateDepartmentDialog {
                    draft: DepartmentDraft::default(),
                    missing: Vec::new(),
                });
            }
            if ui.button("Refresh").clicked() {
                state.grid.queue_refetch();
            }
        });
    });

    if delete_clicked {
        let seqs: Vec<i64> = state.grid.selection.iter().collect();
        check_employees_exist(&api_url, &seqs, ui.ctx().clone());
    }

    let fields = [
        FilterField::text("deptName", "Name"),
        FilterField::text("deptNameEn", "Name (EN)"),
        FilterField::text("deptPhone", "Phone"),
        FilterField::text("deptFax", "Fax"),
    ];
    filter_panel(ui, "department_filter", &mut state.grid, &fields, now);
    ui.separator();

    let columns = columns();
    let rows = std::mem::take(&mut state.rows);
    let mut open_edit: Option<Department> = None;
    data_grid(
        ui,
        "department_grid",
        &columns,
        &mut state.grid,
        &rows,
        |row| row.seq,
        |ui, row, spec| {
            let text = |value: &Option<String>| value.clone().unwrap_or_default();
            match spec.key.as_str() {
                "deptName" => {
                    ui.label(text(&row.dept_name));
                }
                "deptNameEn" => {
                    ui.label(text(&row.dept_name_en));
                }
                "deptPhone" => {
                    ui.label(text(&row.dept_phone));
                }
                "deptFax" => {
                    ui.label(text(&row.dept_fax));
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

    pagination_bar(ui, "department_pagination", &mut state.grid);

    show_create_dialog(state, &api_url, ui);
    show_edit_dialog(state, &api_url, ui);

    if state.grid.take_refetch(now) {
        let request_id = state.grid.begin_fetch();
        let pairs = state.grid.query_pairs();
        fetch_page::<Department>(
            ui.ctx().clone(),
            PAGE_KEY,
            request_id,
            rest::list_request(&api_url, "department", &pairs),
        );
    }
}
