//! UI Components
//!
//! Reusable Leptos components.

mod balance_banner;
mod operation_selector;
mod pagination_controls;
mod record_table;
mod records_toolbar;

pub use balance_banner::BalanceBanner;
pub use operation_selector::OperationSelector;
pub use pagination_controls::PaginationControls;
pub use record_table::RecordTable;
pub use records_toolbar::RecordsToolbar;
