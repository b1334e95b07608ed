//! Signup approval screen: pending accounts are approved or rejected in
//! bulk, never edited.

use std::any::Any;

use egui::Ui;
use manage_business::entities::{
    ApprovalUpdate, GENDER_FEMALE_SEQ, GENDER_MALE_SEQ, SignupApplicant,
};
use manage_business::{
    FetchStatus, FilterForm, GridState, ManageConfig, OptionItem, WriteOutcome, rest,
};
use manage_states::{State, StateCtx, Time};

use crate::api::{PagePayload, fetch_page, send_write, take_response};
use crate::widgets::toast::ToastLevel;
use crate::widgets::{ColumnSpec, FilterField, ToastSender, data_grid, filter_panel, pagination_bar};

const PAGE_KEY: &str = "signup_approval_page_response";
const WRITE_KEY: &str = "signup_approval_write_outcome";

pub struct SignupApprovalPageState {
    pub grid: GridState,
    pub rows: Vec<SignupApplicant>,
    pub started: bool,
}

impl Default for SignupApprovalPageState {
    fn default() -> Self {
        Self {
            grid: GridState::with_filter(
                FilterForm::new()
                    .text_field("username")
                    .text_field("usernameEn")
                    .text_field("email")
                    .text_field("phone")
                    .code_field("genderSeq")
                    .text_field("birth")
                    .text_field("country")
                    .text_field("createDate"),
            ),
            rows: Vec::new(),
            started: false,
        }
    }
}

impl State for SignupApprovalPageState {
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
            .key("username")
            .title("Name")
            .sortable(true)
            .build(),
        ColumnSpec::builder()
            .key("usernameEn")
            .title("Name (EN)")
            .sortable(true)
            .build(),
        ColumnSpec::builder()
            .key("email")
            .title("Email")
            .sortable(true)
            .build(),
        ColumnSpec::builder().key("phone").title("Phone").build(),
        ColumnSpec::builder()
            .key("gender")
            .title("Gender")
            .width(70.0)
            .build(),
        ColumnSpec::builder().key("birth").title("Birth").build(),
        ColumnSpec::builder().key("country").title("Country").build(),
        ColumnSpec::builder()
            .key("createDate")
            .title("Applied")
            .sortable(true)
            .build(),
    ]
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

fn poll_responses(state: &mut SignupApprovalPageState, ctx: &egui::Context, toasts: &ToastSender) {
    if let Some((request_id, result)) =
        take_response::<PagePayload<SignupApplicant>>(ctx, PAGE_KEY)
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
            WriteOutcome::Success => "Verdict applied",
            WriteOutcome::Warn => "The backend rejected the verdict",
            WriteOutcome::Error => "Applying the verdict failed",
        };
        let _ = toasts.send((ToastLevel::for_outcome(outcome), message.to_owned()));
        if outcome.is_success() {
            // The decided applicants vanish from the pending list.
            state.grid.delete_completed();
        }
    }
}

fn send_verdict(state: &SignupApprovalPageState, api_url: &str, approval: bool, ctx: egui::Context) {
    let update = ApprovalUpdate {
        seq: state.grid.selection.iter().collect(),
        approval,
    };
    match rest::update_request(api_url, "signup-approval", &update) {
        Ok(request) => send_write(ctx, WRITE_KEY, request),
        Err(err) => log::error!("could not encode verdict: {err}"),
    }
}

pub fn signup_approval_page(state_ctx: &mut StateCtx, toasts: &ToastSender, ui: &mut Ui) {
    let api_url = state_ctx.state_mut::<ManageConfig>().api_url();
    let now = *state_ctx.state_mut::<Time>().as_ref();
    let state = state_ctx.state_mut::<SignupApprovalPageState>();

    poll_responses(state, ui.ctx(), toasts);

    if !state.started {
        state.started = true;
        state.grid.queue_refetch();
    }

    let mut verdict: Option<bool> = None;
    ui.horizontal(|ui| {
        ui.heading("Signup approval");
        if state.grid.status == FetchStatus::Fetching {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let any_selected = !state.grid.selection.is_empty();
            if ui
                .add_enabled(any_selected, egui::Button::new("Reject"))
                .clicked()
            {
                verdict = Some(false);
            }
            if ui
                .add_enabled(any_selected, egui::Button::new("Approve"))
                .clicked()
            {
                verdict = Some(true);
            }
            if ui.button("Refresh").clicked() {
                state.grid.queue_refetch();
            }
        });
    });

    if let Some(approval) = verdict {
        send_verdict(state, &api_url, approval, ui.ctx().clone());
    }

    let genders = gender_options();
    let fields = [
        FilterField::text("username", "Name"),
        FilterField::text("usernameEn", "Name (EN)"),
        FilterField::text("email", "Email"),
        FilterField::text("phone", "Phone"),
        FilterField::dropdown("genderSeq", "Gender", &genders),
        FilterField::text("birth", "Birth"),
        FilterField::text("country", "Country"),
        FilterField::text("createDate", "Applied"),
    ];
    filter_panel(ui, "signup_filter", &mut state.grid, &fields, now);
    ui.separator();

    let columns = columns();
    let rows = std::mem::take(&mut state.rows);
    data_grid(
        ui,
        "signup_grid",
        &columns,
        &mut state.grid,
        &rows,
        |row| row.seq,
        |ui, row, spec| {
            let text = |value: &Option<String>| value.clone().unwrap_or_default();
            let value = match spec.key.as_str() {
                "username" => text(&row.username),
                "usernameEn" => text(&row.username_en),
                "email" => text(&row.email),
                "phone" => text(&row.phone),
                "gender" => text(&row.gender),
                "birth" => text(&row.birth),
                "country" => text(&row.country),
                "createDate" => text(&row.create_date),
                _ => String::new(),
            };
            ui.label(value);
        },
    );
    state.rows = rows;

    pagination_bar(ui, "signup_pagination", &mut state.grid);

    if state.grid.take_refetch(now) {
        let request_id = state.grid.begin_fetch();
        let pairs = state.grid.query_pairs();
        fetch_page::<SignupApplicant>(
            ui.ctx().clone(),
            PAGE_KEY,
            request_id,
            rest::list_request(&api_url, "signup-approval", &pairs),
        );
    }
}

#[cfg(test)]
mod signup_approval_page_tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    fn test_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::default());
        ctx.add_state(ManageConfig::new("http://test"));
        let mut state = SignupApprovalPageState::default();
        state.started = true;
        state.rows = vec![SignupApplicant {
            seq: Some(5),
            username: Some("Choi".to_owned()),
            email: Some("choi@test".to_owned()),
            ..SignupApplicant::default()
        }];
        state.grid.fetch_succeeded(1);
        ctx.add_state(state);
        ctx
    }

    #[test]
    fn lists_pending_signups() {
        let mut ctx = test_ctx();
        let (sender, _receiver) = flume::unbounded();
        let harness = Harness::new_ui_state(
            |ui, ctx| signup_approval_page(ctx, &sender, ui),
            &mut ctx,
        );
        assert!(harness.query_by_label_contains("Choi").is_some());
        assert!(harness.query_by_label_contains("Approve").is_some());
        assert!(harness.query_by_label_contains("Reject").is_some());
    }
}
