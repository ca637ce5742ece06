//! Airport text input with a debounced remote-suggestion dropdown.

use std::time::Duration;

use dioxus::prelude::*;
use tracing::warn;

use skyfare_core::form::{FieldKind, SearchForm, DEBOUNCE_MS};
use skyfare_core::FlightApi;

#[component]
pub fn AirportInput(
    form: Signal<SearchForm>,
    field: FieldKind,
    placeholder: &'static str,
) -> Element {
    let api = use_context::<FlightApi>();
    let mut form = form;
    // Trailing debounce: each keystroke bumps the generation; a sleeping
    // task only applies its fetch if the generation is still current.
    let mut debounce_gen = use_signal(|| 0u64);

    let state = form.read();
    let text = state.field(field).text.clone();
    let suggestions = state.field(field).suggestions.clone();
    drop(state);

    rsx! {
        div {
            class: "airport-field",
            input {
                class: "field",
                r#type: "text",
                placeholder: "{placeholder}",
                required: true,
                value: "{text}",
                oninput: move |e: Event<FormData>| {
                    let value = e.value();
                    form.write().edit(field, &value);

                    let generation = *debounce_gen.read() + 1;
                    *debounce_gen.write() = generation;

                    let Some(query) = form.read().pending_query(field) else {
                        form.write().clear_suggestions(field);
                        return;
                    };

                    let api = api.clone();
                    spawn(async move {
                        tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)).await;
                        if *debounce_gen.read() != generation {
                            return;
                        }
                        // Lookup failures degrade to an empty dropdown; the
                        // user never sees an error here.
                        let fetched = match api.search_airports(&query).await {
                            Ok(list) => list,
                            Err(err) => {
                                warn!("airport lookup failed: {err}");
                                Vec::new()
                            }
                        };
                        form.write().set_suggestions(field, fetched);
                    });
                },
                onblur: move |_| form.write().blur(field),
            }
            if !suggestions.is_empty() {
                ul {
                    class: "suggestion-list",
                    for suggestion in suggestions.clone() {
                        li {
                            class: "suggestion-item",
                            onclick: {
                                let chosen = suggestion.clone();
                                move |_| form.write().select(field, &chosen)
                            },
                            "{suggestion.suggestion_title} ({suggestion.sky_id})"
                        }
                    }
                }
            }
        }
    }
}
