//! egui front end of the manage console.
//!
//! Screens live under [`pages`]; the shared grid chrome (table, filter
//! panel, pagination, toasts) under [`widgets`]. All HTTP goes through
//! `ehttp` with results parked in egui temp memory and picked up by the
//! poll functions once per frame.

pub mod api;
pub mod app;
pub mod pages;
pub mod widgets;

pub use app::ManageApp;
