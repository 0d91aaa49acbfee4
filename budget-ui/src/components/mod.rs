//! Reusable Dioxus RSX components for the budget report page.

mod amount_flag_selector;
mod budget_name_input;
mod date_range_picker;
mod date_range_type_selector;
mod error_display;
mod loading_spinner;
mod report_header;
mod report_table;

pub use amount_flag_selector::AmountFlagSelector;
pub use budget_name_input::BudgetNameInput;
pub use date_range_picker::DateRangePicker;
pub use date_range_type_selector::DateRangeTypeSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use report_header::ReportHeader;
pub use report_table::ReportTable;
