//! Dropdown selector for worldwide or a single country.

use crate::state::AppState;
use cvt_api::entity::EntityCode;
use cvt_core::view::entity_options;
use dioxus::prelude::*;

/// Entity dropdown. Options come from the fetched collection; changing it
/// goes through the controller so the URL and detail follow.
#[component]
pub fn EntitySelector() -> Element {
    let state = use_context::<AppState>();
    let controller = state.controller.read();
    let options = entity_options(controller.entities());
    let selected = controller.selection().entity.as_str().to_string();
    drop(controller);

    let on_change = move |evt: Event<FormData>| {
        state.select_entity(EntityCode::parse(&evt.value()));
    };

    rsx! {
        select {
            id: "entity-select",
            style: "padding: 6px 8px; font-size: 14px; border-radius: 4px;",
            onchange: on_change,
            for option in options.iter() {
                option {
                    key: "{option.code}",
                    value: "{option.code}",
                    selected: option.code == selected,
                    "{option.name}"
                }
            }
        }
    }
}
