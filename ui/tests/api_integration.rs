//! End-to-end check of the request/park/poll cycle against a mock backend.

use std::time::Duration;

use manage_business::entities::Customer;
use manage_business::rest;
use manage_business::{FetchStatus, GridState, ManageConfig, WriteOutcome};
use manage_ui::api::{PagePayload, fetch_page, send_write, take_response};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The `ehttp` callback runs on its own thread, so the parked payload
/// shows up a little after the request is fired.
async fn wait_for<T: Clone + Send + Sync + 'static>(ctx: &egui::Context, key: &'static str) -> T {
    for _ in 0..200 {
        if let Some(payload) = take_response::<T>(ctx, key) {
            return payload;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("no response parked under {key}");
}

#[tokio::test(flavor = "multi_thread")]
async fn page_fetch_parks_rows_tagged_with_the_request_id() {
    init_logs();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/manage/api/v1/customer"))
        .and(query_param("page", "0"))
        .and(query_param("pageSize", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "page": 0,
            "pageSize": 20,
            "contents": [
                { "seq": 1, "companyName": "Acme" },
                { "seq": 2, "companyName": "Globex" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let api_url = ManageConfig::new(mock_server.uri()).api_url();
    let ctx = egui::Context::default();
    let mut grid = GridState::default();
    let request_id = grid.begin_fetch();

    fetch_page::<Customer>(
        ctx.clone(),
        "customer_page_test",
        request_id,
        rest::list_request(&api_url, "customer", &grid.query_pairs()),
    );

    let (id, result) = wait_for::<PagePayload<Customer>>(&ctx, "customer_page_test").await;
    assert!(grid.accept_response(id));
    let page = result.unwrap();
    grid.fetch_succeeded(page.total);

    assert_eq!(page.contents.len(), 2);
    assert_eq!(page.contents[1].company_name.as_deref(), Some("Globex"));
    assert_eq!(grid.total, 2);
    assert_eq!(grid.status, FetchStatus::Success);
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_write_parks_a_warn_outcome() {
    init_logs();
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/manage/api/v1/customer"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let api_url = ManageConfig::new(mock_server.uri()).api_url();
    let ctx = egui::Context::default();

    send_write(
        ctx.clone(),
        "customer_delete_test",
        rest::delete_request(&api_url, "customer", &[7]),
    );

    let outcome = wait_for::<WriteOutcome>(&ctx, "customer_delete_test").await;
    assert_eq!(outcome, WriteOutcome::Warn);
}
