//! Radio group choosing how the reporting window is computed.

use crate::state::AppState;
use budget_core::DateRangeType;
use dioxus::prelude::*;

/// Radio group named `dateRangeType`: calendar, financial or custom.
#[component]
pub fn DateRangeTypeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.range_type)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            span {
                style: "font-weight: bold;",
                "Period: "
            }
            for kind in DateRangeType::ALL {
                label {
                    key: "{kind}",
                    input {
                        r#type: "radio",
                        name: "dateRangeType",
                        value: kind.as_str(),
                        checked: current == kind,
                        onchange: move |_| state.range_type.set(kind),
                    }
                    " "
                    {kind.label()}
                }
            }
        }
    }
}
