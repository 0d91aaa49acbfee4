//! Date range picker with start and end date inputs.

use crate::state::AppState;
use budget_core::DateRangeType;
use dioxus::prelude::*;

/// Custom start/end inputs. Only displayed while the custom range mode is
/// selected; the typed values are kept when switching modes.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let display = if (state.range_type)() == DateRangeType::Custom {
        "flex"
    } else {
        "none"
    };

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            id: "customDatePickers",
            style: "margin: 8px 0; display: {display}; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    id: "startDate",
                    r#type: "date",
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    id: "endDate",
                    r#type: "date",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
