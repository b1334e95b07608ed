//! Domain logic for the manage console.
//!
//! Everything the grids need that is not a widget lives here: query
//! parameters and their wire encoding, filter forms, debounce timing,
//! fetch status reduction, per-screen grid state, REST request builders
//! and the entity row types themselves. The `ui` crate renders this
//! state and forwards events back into it; nothing in this crate
//! touches egui.

mod config;
mod debounce;
pub mod entities;
mod fetch_status;
mod filter;
mod grid;
mod lookup;
mod outcome;
mod page;
mod query;
pub mod rest;
mod selection;
mod userinfo;

pub use config::ManageConfig;
pub use debounce::{DEBOUNCE_DELAY, Debouncer};
pub use fetch_status::FetchStatus;
pub use filter::{FilterForm, FilterValue};
pub use grid::GridState;
pub use lookup::{CompanyInfo, Country, MinorCode, OptionItem, Organization, options_with_all};
pub use outcome::WriteOutcome;
pub use page::PageResult;
pub use query::{PAGE_SIZE_OPTIONS, QueryParams, SortDirection, SortRule};
pub use selection::Selection;
pub use userinfo::{Section, UserInfo, UserPosType};
