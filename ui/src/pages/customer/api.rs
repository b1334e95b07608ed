//! API calls for the customer screen.

use manage_business::entities::{Customer, CustomerMinor};
use manage_business::rest;
use manage_business::Country;

use crate::api::{fetch_page, fetch_value, send_write};

pub const PAGE_KEY: &str = "customer_page_response";
pub const MINOR_KEY: &str = "customer_minor_response";
pub const COUNTRY_KEY: &str = "customer_country_response";
pub const WRITE_KEY: &str = "customer_write_outcome";
pub const DELETE_KEY: &str = "customer_delete_outcome";

pub fn fetch_customers(
    api_url: &str,
    request_id: u64,
    pairs: &[(String, String)],
    ctx: egui::Context,
) {
    let request = rest::list_request(api_url, "customer", pairs);
    fetch_page::<Customer>(ctx, PAGE_KEY, request_id, request);
}

pub fn fetch_minor(api_url: &str, ctx: egui::Context) {
    fetch_value::<CustomerMinor>(ctx, MINOR_KEY, rest::get_request(api_url, "customer/minor"));
}

pub fn fetch_countries(api_url: &str, ctx: egui::Context) {
    fetch_value::<Vec<Country>>(
        ctx,
        COUNTRY_KEY,
        rest::get_request(api_url, "customer/country"),
    );
}

pub fn create_customer(api_url: &str, row: &Customer, ctx: egui::Context) {
    match rest::create_request(api_url, "customer", &row.create_payload()) {
        Ok(request) => send_write(ctx, WRITE_KEY, request),
        Err(err) => log::error!("could not encode customer: {err}"),
    }
}

pub fn update_customer(api_url: &str, row: &Customer, ctx: egui::Context) {
    match rest::update_request(api_url, "customer", row) {
        Ok(request) => send_write(ctx, WRITE_KEY, request),
        Err(err) => log::error!("could not encode customer: {err}"),
    }
}

pub fn delete_customers(api_url: &str, seqs: &[i64], ctx: egui::Context) {
    send_write(ctx, DELETE_KEY, rest::delete_request(api_url, "customer", seqs));
}
