//! Radio group choosing which amount the backend aggregates.

use crate::state::AppState;
use budget_core::AmountFlag;
use dioxus::prelude::*;

/// Radio group named `amountFlag`; exactly one option is checked.
#[component]
pub fn AmountFlagSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.amount_flag)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            span {
                style: "font-weight: bold;",
                "Amount: "
            }
            for flag in AmountFlag::ALL {
                label {
                    key: "{flag}",
                    input {
                        r#type: "radio",
                        name: "amountFlag",
                        value: flag.as_str(),
                        checked: current == flag,
                        onchange: move |_| state.amount_flag.set(flag),
                    }
                    " {flag}"
                }
            }
        }
    }
}
