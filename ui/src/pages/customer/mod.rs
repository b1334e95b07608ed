//! Customer screen: the full grid with both lookups, a create dialog
//! and the detail editor.

mod api;
mod dialogs;
mod state;

pub use state::{CreateCustomerDialog, CustomerPageState, DetailDialog};

use egui::Ui;
use manage_business::entities::{Customer, CustomerMinor};
use manage_business::{Country, FetchStatus, ManageConfig, WriteOutcome, options_with_all};
use manage_states::{StateCtx, Time};

use crate::api::{PagePayload, ValuePayload, take_response};
use crate::widgets::toast::ToastLevel;
use crate::widgets::{ColumnSpec, FilterField, ToastSender, data_grid, filter_panel, pagination_bar};

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::builder()
            .key("companyName")
            .title("Company")
            .sortable(true)
            .build(),
        ColumnSpec::builder()
            .key("companyShortName")
            .title("Short name")
            .sortable(true)
            .build(),
        ColumnSpec::builder()
            .key("custCompanyTypeSeq")
            .title("Customer type")
            .build(),
        ColumnSpec::builder()
            .key("companyTypeSeq")
            .title("Company type")
            .build(),
        ColumnSpec::builder()
            .key("companyNo")
            .title("Company no.")
            .build(),
        ColumnSpec::builder()
            .key("ownerName")
            .title("Owner")
            .sortable(true)
            .build(),
        ColumnSpec::builder().key("tel").title("Tel").build(),
        ColumnSpec::builder()
            .key("email")
            .title("Email")
            .sortable(true)
            .build(),
        ColumnSpec::builder()
            .key("custStatusSeq")
            .title("Status")
            .build(),
        ColumnSpec::builder()
            .key("detail")
            .title("")
            .width(60.0)
            .build(),
    ]
}

fn remark_for(codes: &[manage_business::MinorCode], seq: Option<i64>) -> String {
    seq.and_then(|seq| codes.iter().find(|code| code.seq == seq))
        .map(|code| code.remark.clone())
        .unwrap_or_default()
}

fn cell_text(row: &Customer, minor: Option<&CustomerMinor>, key: &str) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    match key {
        "companyName" => text(&row.company_name),
        "companyShortName" => text(&row.company_short_name),
        "companyNo" => text(&row.company_no),
        "ownerName" => text(&row.owner_name),
        "tel" => text(&row.tel),
        "email" => text(&row.email),
        "custCompanyTypeSeq" => minor
            .map(|m| remark_for(&m.cust_company_type, row.cust_company_type_seq))
            .unwrap_or_default(),
        "companyTypeSeq" => minor
            .map(|m| remark_for(&m.company_type, row.company_type_seq))
            .unwrap_or_default(),
        "custStatusSeq" => minor
            .map(|m| remark_for(&m.cust_status, row.cust_status_seq))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Applies parked responses for this screen. Runs before rendering.
fn poll_responses(state: &mut CustomerPageState, ctx: &egui::Context, toasts: &ToastSender) {
    if let Some((request_id, result)) = take_response::<PagePayload<Customer>>(ctx, api::PAGE_KEY)
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

    if let Some(result) = take_response::<ValuePayload<CustomerMinor>>(ctx, api::MINOR_KEY) {
        match result {
            Ok(minor) => {
                state.minor = Some(minor);
                state.minor_status = FetchStatus::Success;
            }
            Err(_) => state.minor_status = FetchStatus::Error,
        }
    }

    if let Some(result) = take_response::<ValuePayload<Vec<Country>>>(ctx, api::COUNTRY_KEY) {
        match result {
            Ok(countries) => {
                state.country = countries;
                state.country_status = FetchStatus::Success;
            }
            Err(_) => state.country_status = FetchStatus::Error,
        }
    }

    if let Some(outcome) = take_response::<WriteOutcome>(ctx, api::WRITE_KEY) {
        let message = match outcome {
            WriteOutcome::Success => "Customer saved",
            WriteOutcome::Warn => "The backend rejected the customer",
            WriteOutcome::Error => "Saving the customer failed",
        };
        let _ = toasts.send((ToastLevel::for_outcome(outcome), message.to_owned()));
        if outcome.is_success() {
            state.grid.queue_refetch();
        }
    }

    if let Some(outcome) = take_response::<WriteOutcome>(ctx, api::DELETE_KEY) {
        let message = match outcome {
            WriteOutcome::Success => "Customers deleted",
            WriteOutcome::Warn => "The backend refused the delete",
            WriteOutcome::Error => "Deleting customers failed",
        };
        let _ = toasts.send((ToastLevel::for_outcome(outcome), message.to_owned()));
        if outcome.is_success() {
            state.grid.delete_completed();
        }
    }
}

pub fn customer_page(state_ctx: &mut StateCtx, toasts: &ToastSender, ui: &mut Ui) {
    let api_url = state_ctx.state_mut::<ManageConfig>().api_url();
    let now = *state_ctx.state_mut::<Time>().as_ref();
    let state = state_ctx.state_mut::<CustomerPageState>();

    poll_responses(state, ui.ctx(), toasts);

    if !state.lookups_requested {
        state.lookups_requested = true;
        state.minor_status = FetchStatus::Fetching;
        state.country_status = FetchStatus::Fetching;
        api::fetch_minor(&api_url, ui.ctx().clone());
        api::fetch_countries(&api_url, ui.ctx().clone());
        state.grid.queue_refetch();
    }

    // Toolbar.
    let mut delete_clicked = false;
    ui.horizontal(|ui| {
        ui.heading("Customers");
        if state.combined_status() == FetchStatus::Fetching {
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
            if ui
                .add_enabled(state.minor.is_some(), egui::Button::new("New customer"))
                .clicked()
            {
                state.create_dialog = Some(CreateCustomerDialog::default());
            }
            if ui.button("Refresh").clicked() {
                state.grid.queue_refetch();
            }
        });
    });

    if delete_clicked {
        let seqs: Vec<i64> = state.grid.selection.iter().collect();
        api::delete_customers(&api_url, &seqs, ui.ctx().clone());
    }

    // Filter strip. Dropdown options come from the lookups.
    let type_options = state
        .minor
        .as_ref()
        .map(|m| options_with_all("All", &m.cust_company_type))
        .unwrap_or_default();
    let status_options = state
        .minor
        .as_ref()
        .map(|m| options_with_all("All", &m.cust_status))
        .unwrap_or_default();
    let company_type_options = state
        .minor
        .as_ref()
        .map(|m| options_with_all("All", &m.company_type))
        .unwrap_or_default();
    let fields = [
        FilterField::text("companyName", "Company"),
        FilterField::text("companyShortName", "Short name"),
        FilterField::dropdown("custCompanyTypeSeq", "Customer type", &type_options),
        FilterField::dropdown("companyTypeSeq", "Company type", &company_type_options),
        FilterField::text("companyNo", "Company no."),
        FilterField::text("ownerName", "Owner"),
        FilterField::text("tel", "Tel"),
        FilterField::text("email", "Email"),
        FilterField::dropdown("custStatusSeq", "Status", &status_options),
    ];
    filter_panel(ui, "customer_filter", &mut state.grid, &fields, now);
    ui.separator();

    // Grid body.
    let columns = columns();
    let minor = state.minor.clone();
    let rows = std::mem::take(&mut state.rows);
    let mut open_detail: Option<Customer> = None;
    data_grid(
        ui,
        "customer_grid",
        &columns,
        &mut state.grid,
        &rows,
        |row| row.seq,
        |ui, row, spec| {
            if spec.key == "detail" {
                if ui.button("Edit").clicked() {
                    open_detail = Some(row.clone());
                }
            } else {
                ui.label(cell_text(row, minor.as_ref(), &spec.key));
            }
        },
    );
    state.rows = rows;
    if let Some(row) = open_detail {
        state.detail_dialog = Some(DetailDialog { row });
    }

    pagination_bar(ui, "customer_pagination", &mut state.grid);

    // Dialogs need the lookups; they only open once minor data is in.
    if let Some(minor) = minor {
        let countries = state.country.clone();
        dialogs::show_create_dialog(state, &minor, &api_url, ui);
        dialogs::show_detail_dialog(state, &minor, &countries, &api_url, ui);
    }

    if state.grid.take_refetch(now) {
        let request_id = state.grid.begin_fetch();
        let pairs = state.grid.query_pairs();
        api::fetch_customers(&api_url, request_id, &pairs, ui.ctx().clone());
    }
}
