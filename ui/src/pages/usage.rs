//! Usage screen: the operator's own company card and the metered usage
//! bill. Read only, no pagination.

use std::any::Any;

use egui::Ui;
use egui_extras::{Column, TableBuilder};
use manage_business::entities::PriceData;
use manage_business::{CompanyInfo, FetchStatus, ManageConfig, rest};
use manage_states::{State, StateCtx};

use crate::api::{ValuePayload, fetch_value, take_response};
use crate::widgets::columns::{HEADER_HEIGHT, ROW_HEIGHT};

const COMPANY_KEY: &str = "usage_company_response";
const PRICES_KEY: &str = "usage_prices_response";

#[derive(Default)]
pub struct UsagePageState {
    pub company: Option<CompanyInfo>,
    pub prices: Vec<PriceData>,
    pub company_status: FetchStatus,
    pub prices_status: FetchStatus,
    pub started: bool,
}

impl UsagePageState {
    fn combined_status(&self) -> FetchStatus {
        FetchStatus::combine_all([self.company_status, self.prices_status])
    }
}

impl State for UsagePageState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn poll_responses(state: &mut UsagePageState, ctx: &egui::Context) {
    if let Some(result) = take_response::<ValuePayload<CompanyInfo>>(ctx, COMPANY_KEY) {
        match result {
            Ok(company) => {
                state.company = Some(company);
                state.company_status = FetchStatus::Success;
            }
            Err(_) => state.company_status = FetchStatus::Error,
        }
    }

    if let Some(result) = take_response::<ValuePayload<Vec<PriceData>>>(ctx, PRICES_KEY) {
        match result {
            Ok(prices) => {
                state.prices = prices;
                state.prices_status = FetchStatus::Success;
            }
            Err(_) => state.prices_status = FetchStatus::Error,
        }
    }
}

fn company_card(ui: &mut Ui, company: &CompanyInfo) {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::Grid::new("usage_company_card")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Company");
                ui.label(text(&company.company_name));
                ui.end_row();
                ui.label("Registration no.");
                ui.label(text(&company.company_no));
                ui.end_row();
                ui.label("Owner");
                ui.label(text(&company.owner));
                ui.end_row();
                ui.label("Tel");
                ui.label(text(&company.tel));
                ui.end_row();
                ui.label("Email");
                ui.label(text(&company.email));
                ui.end_row();
                ui.label("Employees");
                ui.label(
                    company
                        .emp_count
                        .map(|count| count.to_string())
                        .unwrap_or_default(),
                );
                ui.end_row();
            });
    });
}

fn price_table(ui: &mut Ui, prices: &[PriceData]) {
    let money = |value: Option<f64>| value.map(|v| format!("{v:.2}")).unwrap_or_default();
    TableBuilder::new(ui)
        .id_salt("usage_price_table")
        .striped(true)
        .column(Column::initial(100.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::initial(90.0))
        .column(Column::initial(70.0))
        .column(Column::initial(90.0))
        .column(Column::initial(90.0))
        .header(HEADER_HEIGHT, |mut header| {
            for title in ["Date", "Service", "Used", "Currency", "Unit price", "Total"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, prices.len(), |mut row| {
                let price = &prices[row.index()];
                row.col(|ui| {
                    ui.label(price.date.clone().unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(price.service_name.clone().unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(
                        price
                            .used_count
                            .map(|count| count.to_string())
                            .unwrap_or_default(),
                    );
                });
                row.col(|ui| {
                    ui.label(price.curr_unit.clone().unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(money(price.used_price));
                });
                row.col(|ui| {
                    ui.label(money(price.total_price));
                });
            });
        });
}

pub fn usage_page(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let api_url = state_ctx.state_mut::<ManageConfig>().api_url();
    let state = state_ctx.state_mut::<UsagePageState>();

    poll_responses(state, ui.ctx());

    if !state.started {
        state.started = true;
        state.company_status = FetchStatus::Fetching;
        state.prices_status = FetchStatus::Fetching;
        fetch_value::<CompanyInfo>(
            ui.ctx().clone(),
            COMPANY_KEY,
            rest::get_request(&api_url, "company"),
        );
        fetch_value::<Vec<PriceData>>(
            ui.ctx().clone(),
            PRICES_KEY,
            rest::get_request(&api_url, "usage"),
        );
    }

    ui.horizontal(|ui| {
        ui.heading("Usage");
        match state.combined_status() {
            FetchStatus::Fetching => {
                ui.spinner();
            }
            FetchStatus::Error => {
                ui.colored_label(ui.visuals().error_fg_color, "Load failed");
            }
            FetchStatus::Success => {}
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                state.started = false;
            }
        });
    });
    ui.separator();

    if let Some(company) = state.company.clone() {
        company_card(ui, &company);
        ui.add_space(12.0);
    }

    price_table(ui, &state.prices);
}
