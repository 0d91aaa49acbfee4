//! Free-text budget name input.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn BudgetNameInput() -> Element {
    let mut state = use_context::<AppState>();
    let name = (state.budget_name)();

    let on_input = move |evt: Event<FormData>| {
        state.budget_name.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "budgetName",
                style: "font-weight: bold; margin-right: 8px;",
                "Budget: "
            }
            input {
                id: "budgetName",
                r#type: "text",
                value: "{name}",
                oninput: on_input,
            }
        }
    }
}
