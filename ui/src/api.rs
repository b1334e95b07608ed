//! HTTP plumbing between `ehttp` and the frame loop.
//!
//! Requests are fired from the UI thread; completion callbacks decode
//! the body and park the result in egui temp memory under a per-screen
//! key. The owning page polls that key once per frame, so all state
//! mutation happens on the UI thread.

use std::any::Any;

use manage_business::rest;
use manage_business::{FetchStatus, PageResult, UserInfo, WriteOutcome};
use manage_states::State;
use serde::de::DeserializeOwned;

/// A page of rows tagged with the request id it answers.
pub type PagePayload<T> = (u64, Result<PageResult<T>, String>);

/// A lookup or detail response.
pub type ValuePayload<T> = Result<T, String>;

/// Fetches one grid page. The result lands under `key` together with
/// `request_id` so stale answers can be recognized.
pub fn fetch_page<T>(ctx: egui::Context, key: &'static str, request_id: u64, request: ehttp::Request)
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let url = request.url.clone();
    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        let payload: PagePayload<T> = (
            request_id,
            rest::parse_page::<T>(&result).map_err(|err| {
                log::warn!("list {url} failed: {err}");
                err.to_string()
            }),
        );
        ctx.memory_mut(|mem| mem.data.insert_temp(egui::Id::new(key), payload));
    });
}

/// Fetches a non-paged value (lookup tables, company info, user info).
pub fn fetch_value<T>(ctx: egui::Context, key: &'static str, request: ehttp::Request)
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let url = request.url.clone();
    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        let payload: ValuePayload<T> = rest::parse_json::<T>(&result).map_err(|err| {
            log::warn!("fetch {url} failed: {err}");
            err.to_string()
        });
        ctx.memory_mut(|mem| mem.data.insert_temp(egui::Id::new(key), payload));
    });
}

/// Sends a write and reports its [`WriteOutcome`] under `key`.
pub fn send_write(ctx: egui::Context, key: &'static str, request: ehttp::Request) {
    let url = request.url.clone();
    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        let outcome = WriteOutcome::classify(&result);
        if outcome != WriteOutcome::Success {
            log::warn!("write {url} ended as {outcome:?}");
        }
        ctx.memory_mut(|mem| mem.data.insert_temp(egui::Id::new(key), outcome));
    });
}

/// Removes and returns a parked payload, if the callback has delivered it.
pub fn take_response<T: Clone + Send + Sync + 'static>(
    ctx: &egui::Context,
    key: &'static str,
) -> Option<T> {
    let id = egui::Id::new(key);
    let payload = ctx.memory(|mem| mem.data.get_temp::<T>(id));
    if payload.is_some() {
        ctx.memory_mut(|mem| mem.data.remove::<T>(id));
    }
    payload
}

const USERINFO_KEY: &str = "userinfo_response";

/// The signed-in operator. Fetched once at startup; everything the app
/// shows is gated on the position type.
#[derive(Default)]
pub struct Session {
    pub info: Option<UserInfo>,
    pub status: FetchStatus,
}

impl State for Session {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub fn fetch_userinfo(api_url: &str, ctx: egui::Context) {
    fetch_value::<UserInfo>(ctx, USERINFO_KEY, rest::get_request(api_url, "userinfo"));
}

/// Applies a finished userinfo fetch to the session.
pub fn poll_userinfo(session: &mut Session, ctx: &egui::Context) {
    if let Some(payload) = take_response::<ValuePayload<UserInfo>>(ctx, USERINFO_KEY) {
        match payload {
            Ok(info) => {
                session.info = Some(info);
                session.status = FetchStatus::Success;
            }
            Err(_) => session.status = FetchStatus::Error,
        }
    }
}
