//! Employee screen. Rows are edited in a dialog; committing an edit
//! requires the employee to be assigned to a department first.

use std::any::Any;

use egui::{ComboBox, Grid, TextEdit, Ui, Window};
use manage_business::entities::{Employee, GENDER_FEMALE_SEQ, GENDER_MALE_SEQ};
use manage_business::{
    CompanyInfo, FetchStatus, FilterForm, GridState, ManageConfig, OptionItem, Organization,
    WriteOutcome, rest,
};
use manage_states::{State, StateCtx, Time};

use crate::api::{PagePayload, ValuePayload, fetch_page, fetch_value, send_write, take_response};
use crate::widgets::toast::ToastLevel;
use crate::widgets::{ColumnSpec, FilterField, ToastSender, data_grid, filter_panel, pagination_bar};

const PAGE_KEY: &str = "employee_page_response";
const COMPANY_KEY: &str = "employee_company_response";
const ORGS_KEY: &str = "employee_orgs_response";
const WRITE_KEY: &str = "employee_write_outcome";
const DELETE_KEY: &str = "employee_delete_outcome";

pub struct EmployeePageState {
    pub grid: GridState,
    pub rows: Vec<Employee>,
    pub company_name: Option<String>,
    pub organizations: Vec<Organization>,
    pub org_status: FetchStatus,
    pub edit_dialog: Option<Employee>,
    pub started: bool,
}

impl Default for EmployeePageState {
    fn default() -> Self {
        Self {
            grid: GridState::with_filter(
                FilterForm::new()
                    .text_field("empName")
                    .text_field("empNameEn")
                    .text_field("empId")
                    .text_field("email")
                    .text_field("phone")
                    .code_field("genderSeq")
                    .text_field("birth")
                    .text_field("dept")
                    .text_field("country"),
            ),
            rows: Vec::new(),
            company_name: None,
            organizations: Vec::new(),
            org_status: FetchStatus::Fetching,
            edit_dialog: None,
            started: false,
        }
    }
}

impl State for EmployeePageState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn gender_options() -> Vec<OptionItem> {
    vec![
        OptionItem {
            value: 0,
            label: "All".to_owned(),
        },
        OptionItem {
            value: GENDER_MALE_SEQ,
            label: "Male".to_owned(),
        },
        OptionItem {
            value: GENDER_FEMALE_SEQ,
            label: "Female".to_owned(),
        },
    ]
}

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::builder()
            .key("empName")
            .title("Name")
            .sortable(true)
            .build(),
        ColumnSpec::builder()
            .key("empNameEn")
            .title("Name (EN)")
            .sortable(true)
            .build(),
        ColumnSpec::builder().key("empId").title("ID").build(),
        ColumnSpec::builder()
            .key("email")
            .title("Email")
            .sortable(true)
            .build(),
        ColumnSpec::builder().key("phone").title("Phone").build(),
        ColumnSpec::builder()
            .key("admin")
            .title("Admin")
            .width(50.0)
            .build(),
        ColumnSpec::builder()
            .key("gender")
            .title("Gender")
            .width(70.0)
            .build(),
        ColumnSpec::builder().key("birth").title("Birth").build(),
        ColumnSpec::builder().key("dept").title("Department").build(),
        ColumnSpec::builder().key("country").title("Country").build(),
        ColumnSpec::builder().key("edit").title("").width(60.0).build(),
    ]
}

fn poll_responses(state: &mut EmployeePageState, ctx: &egui::Context, toasts: &ToastSender) {
    if let Some((request_id, result)) = take_response::<PagePayload<Employee>>(ctx, PAGE_KEY)
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

    if let Some(result) = take_response::<ValuePayload<CompanyInfo>>(ctx, COMPANY_KEY) {
        if let Ok(company) = result {
            state.company_name = company.company_name;
        }
    }

    if let Some(result) = take_response::<ValuePayload<Vec<Organization>>>(ctx, ORGS_KEY) {
        match result {
            Ok(organizations) => {
                state.organizations = organizations;
                state.org_status = FetchStatus::Success;
            }
            Err(_) => state.org_status = FetchStatus::Error,
        }
    }

    if let Some(outcome) = take_response::<WriteOutcome>(ctx, WRITE_KEY) {
        let message = match outcome {
            WriteOutcome::Success => "Employee saved",
            WriteOutcome::Warn => "The backend rejected the employee",
            WriteOutcome::Error => "Saving the employee failed",
        };
        let _ = toasts.send((ToastLevel::for_outcome(outcome), message.to_owned()));
        if outcome.is_success() {
            state.grid.queue_refetch();
        }
    }

    if let Some(outcome) = take_response::<WriteOutcome>(ctx, DELETE_KEY) {
        let message = match outcome {
            WriteOutcome::Success => "Employees deleted",
            WriteOutcome::Warn => "The backend refused the delete",
            WriteOutcome::Error => "Deleting employees failed",
        };
        let _ = toasts.send((ToastLevel::for_outcome(outcome), message.to_owned()));
        if outcome.is_success() {
            state.grid.delete_completed();
        }
    }
}

fn show_edit_dialog(state: &mut EmployeePageState, api_url: &str, ui: &mut Ui) {
    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    let organizations = state.organizations.clone();
    let company_name = state.company_name.clone();
    let Some(row) = state.edit_dialog.as_mut() else {
        return;
    };

    Window::new("Edit employee")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            Grid::new("edit_employee_form").num_columns(2).show(ui, |ui| {
                for (label, value) in [
                    ("Name", &mut row.emp_name),
                    ("Name (EN)", &mut row.emp_name_en),
                    ("Email", &mut row.email),
                    ("Phone", &mut row.phone),
                    ("Birth", &mut row.birth),
                ] {
                    ui.label(label);
                    let mut text = value.clone().unwrap_or_default();
                    if ui
                        .add(TextEdit::singleline(&mut text).desired_width(180.0))
                        .changed()
                    {
                        *value = Some(text);
                    }
                    ui.end_row();
                }

                ui.label("Admin");
                let mut admin = row.admin.unwrap_or(false);
                if ui.checkbox(&mut admin, "").changed() {
                    row.admin = Some(admin);
                }
                ui.end_row();

                ui.label("Gender");
                let mut gender = row.gender_seq.unwrap_or(0);
                ComboBox::from_id_salt("employee_gender")
                    .selected_text(match row.gender_seq {
                        Some(GENDER_MALE_SEQ) => "Male",
                        Some(GENDER_FEMALE_SEQ) => "Female",
                        _ => "-",
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut gender, GENDER_MALE_SEQ, "Male");
                        ui.selectable_value(&mut gender, GENDER_FEMALE_SEQ, "Female");
                    });
                if gender != 0 {
                    row.gender_seq = Some(gender);
                }
                ui.end_row();

                ui.label("Department");
                let selected = row
                    .dept_seq
                    .and_then(|seq| {
                        organizations
                            .iter()
                            .find(|org| org.dept_seq == seq)
                            .map(|org| org.dept_name.clone())
                    })
                    .unwrap_or_else(|| "-".to_owned());
                let mut dept = row.dept_seq.unwrap_or(0);
                ComboBox::from_id_salt("employee_dept")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        if let Some(company) = &company_name {
                            ui.label(egui::RichText::new(company).strong());
                        }
                        for org in &organizations {
                            ui.selectable_value(&mut dept, org.dept_seq, &org.dept_name);
                        }
                    });
                if dept != 0 {
                    row.dept_seq = Some(dept);
                }
                ui.end_row();
            });

            if !row.ready_for_update() {
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    "Assign a department before saving",
                );
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(row.ready_for_update(), egui::Button::new("Save"))
                    .clicked()
                {
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
        match rest::update_request(api_url, "employee", row) {
            Ok(request) => send_write(ui.ctx().clone(), WRITE_KEY, request),
            Err(err) => log::error!("could not encode employee: {err}"),
        }
        state.edit_dialog = None;
    } else if !open {
        state.edit_dialog = None;
    }
}

pub fn employee_page(state_ctx: &mut StateCtx, toasts: &ToastSender, ui: &mut Ui) {
    let api_url = state_ctx.state_mut::<ManageConfig>().api_url();
    let now = *state_ctx.state_mut::<Time>().as_ref();
    let state = state_ctx.state_mut::<EmployeePageState>();

    poll_responses(state, ui.ctx(), toasts);

    if !state.started {
        state.started = true;
        state.grid.queue_refetch();
        fetch_value::<CompanyInfo>(
            ui.ctx().clone(),
            COMPANY_KEY,
            rest::get_request(&api_url, "company"),
        );
        fetch_value::<Vec<Organization>>(
            ui.ctx().clone(),
            ORGS_KEY,
            rest::get_request(&api_url, "employee/organizations"),
        );
    }

    let mut delete_clicked = false;
    ui.horizontal(|ui| {
        ui.heading("Employees");
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
            if ui.button("Refresh").clicked() {
                state.grid.queue_refetch();
            }
        });
    });

    if delete_clicked {
        let seqs: Vec<i64> = state.grid.selection.iter().collect();
        send_write(
            ui.ctx().clone(),
            DELETE_KEY,
            rest::delete_request(&api_url, "employee", &seqs),
        );
    }

    let genders = gender_options();
    let fields = [
        FilterField::text("empName", "Name"),
        FilterField::text("empNameEn", "Name (EN)"),
        FilterField::text("empId", "ID"),
        FilterField::text("email", "Email"),
        FilterField::text("phone", "Phone"),
        FilterField::dropdown("genderSeq", "Gender", &genders),
        FilterField::text("birth", "Birth"),
        FilterField::text("dept", "Department"),
        FilterField::text("country", "Country"),
    ];
    filter_panel(ui, "employee_filter", &mut state.grid, &fields, now);
    ui.separator();

    let columns = columns();
    let rows = std::mem::take(&mut state.rows);
    let mut open_edit: Option<Employee> = None;
    data_grid(
        ui,
        "employee_grid",
        &columns,
        &mut state.grid,
        &rows,
        |row| row.seq,
        |ui, row, spec| {
            let text = |value: &Option<String>| value.clone().unwrap_or_default();
            match spec.key.as_str() {
                "empName" => {
                    ui.label(text(&row.emp_name));
                }
                "empNameEn" => {
                    ui.label(text(&row.emp_name_en));
                }
                "empId" => {
                    ui.label(text(&row.emp_id));
                }
                "email" => {
                    ui.label(text(&row.email));
                }
                "phone" => {
                    ui.label(text(&row.phone));
                }
                "admin" => {
                    if row.admin == Some(true) {
                        ui.label("\u{2713}");
                    }
                }
                "gender" => {
                    ui.label(text(&row.gender));
                }
                "birth" => {
                    ui.label(text(&row.birth));
                }
                "dept" => {
                    ui.label(text(&row.dept));
                }
                "country" => {
                    ui.label(text(&row.country));
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

    pagination_bar(ui, "employee_pagination", &mut state.grid);

    show_edit_dialog(state, &api_url, ui);

    if state.grid.take_refetch(now) {
        let request_id = state.grid.begin_fetch();
        let pairs = state.grid.query_pairs();
        fetch_page::<Employee>(
            ui.ctx().clone(),
            PAGE_KEY,
            request_id,
            rest::list_request(&api_url, "employee", &pairs),
        );
    }
}

#[cfg(test)]
mod employee_page_tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    fn test_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::default());
        ctx.add_state(ManageConfig::new("http://test"));
        let mut state = EmployeePageState::default();
        state.started = true;
        state.rows = vec![Employee {
            seq: Some(1),
            emp_name: Some("Lee".to_owned()),
            dept: Some("Sales".to_owned()),
            admin: Some(true),
            ..Employee::default()
        }];
        state.grid.fetch_succeeded(1);
        ctx.add_state(state);
        ctx
    }

    #[test]
    fn lists_employees() {
        let mut ctx = test_ctx();
        let (sender, _receiver) = flume::unbounded();
        let harness = Harness::new_ui_state(
            |ui, ctx| employee_page(ctx, &sender, ui),
            &mut ctx,
        );
        assert!(harness.query_by_label_contains("Lee").is_some());
        assert!(harness.query_by_label_contains("Sales").is_some());
    }

    #[test]
    fn every_searchable_column_has_a_filter_field() {
        let state = EmployeePageState::default();
        for key in [
            "empName", "empNameEn", "empId", "email", "phone", "birth", "dept", "country",
        ] {
            assert!(state.grid.filter.text(key).is_some(), "{key}");
        }
        assert_eq!(state.grid.filter.code("genderSeq"), None);
    }

    #[test]
    fn save_is_blocked_without_a_department() {
        let mut ctx = test_ctx();
        ctx.state_mut::<EmployeePageState>().edit_dialog = Some(Employee {
            seq: Some(1),
            emp_name: Some("Lee".to_owned()),
            ..Employee::default()
        });
        let (sender, _receiver) = flume::unbounded();
        let mut harness = Harness::new_ui_state(
            |ui, ctx| employee_page(ctx, &sender, ui),
            &mut ctx,
        );
        assert!(
            harness
                .query_by_label_contains("Assign a department")
                .is_some()
        );
        harness.get_by_label("Save").click();
        harness.run();
        drop(harness);

        // The disabled button must not have closed the dialog.
        assert!(ctx.state_mut::<EmployeePageState>().edit_dialog.is_some());
    }
}
