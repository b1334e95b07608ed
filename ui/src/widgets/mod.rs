//! Shared grid chrome.

pub mod columns;
pub mod filter;
pub mod grid;
pub mod pagination;
pub mod toast;

pub use columns::ColumnSpec;
pub use filter::{FilterField, filter_panel};
pub use grid::data_grid;
pub use pagination::pagination_bar;
pub use toast::{ToastBus, ToastLevel, ToastSender, show_toasts};
