//! Search form panel — airport inputs, trip options, and the submit flow.

mod airport_input;

use dioxus::prelude::*;
use tracing::error;

use skyfare_core::error::ApiError;
use skyfare_core::form::{FieldKind, SearchForm};
use skyfare_core::types::FlightData;
use skyfare_core::FlightApi;

use crate::results::FlightResults;
use airport_input::AirportInput;

/// Shown when the search request itself fails.
const FETCH_ERROR: &str = "An error occurred while fetching flights. Please try again.";
/// Shown when the response arrives without the expected data payload.
const NO_FLIGHTS: &str = "No flights found or invalid response format.";

#[component]
pub fn SearchPanel() -> Element {
    let api = use_context::<FlightApi>();
    let mut form = use_signal(SearchForm::default);
    let mut flight_data = use_signal(|| None::<FlightData>);
    let mut loading = use_signal(|| false);
    let mut error_message = use_signal(String::new);

    let onsubmit = move |evt: Event<FormData>| {
        evt.prevent_default();
        loading.set(true);
        error_message.set(String::new());
        // A new submission replaces whatever the previous one showed.
        flight_data.set(None);

        let params = form.peek().to_params();
        let api = api.clone();
        spawn(async move {
            match api.search_flights(&params).await {
                Ok(data) => flight_data.set(Some(data)),
                Err(ApiError::BadShape) => error_message.set(NO_FLIGHTS.to_string()),
                Err(err) => {
                    error!("flight search failed: {err}");
                    error_message.set(FETCH_ERROR.to_string());
                }
            }
            loading.set(false);
        });
    };

    let current = form.read();
    let date = current.date.clone();
    let adults = current.adults.to_string();
    let cabin_class = current.cabin_class.as_param();
    drop(current);

    rsx! {
        form {
            class: "search-form",
            onsubmit: onsubmit,

            AirportInput { form, field: FieldKind::Origin, placeholder: "Origin" }
            AirportInput { form, field: FieldKind::Destination, placeholder: "Destination" }

            input {
                class: "field",
                r#type: "date",
                required: true,
                value: "{date}",
                oninput: move |e: Event<FormData>| form.write().date = e.value(),
            }

            select {
                class: "field",
                value: "{adults}",
                onchange: move |e: Event<FormData>| {
                    let value = e.value();
                    form.write().set_adults(&value);
                },
                option { value: "1", "1 Adult" }
                option { value: "2", "2 Adults" }
                option { value: "3", "3 Adults" }
                option { value: "4", "4 Adults" }
            }

            select {
                class: "field",
                value: "{cabin_class}",
                onchange: move |e: Event<FormData>| {
                    let value = e.value();
                    form.write().set_cabin_class(&value);
                },
                option { value: "economy", "Economy" }
                option { value: "business", "Business" }
                option { value: "first", "First Class" }
            }

            button { class: "submit-button", r#type: "submit", "Search" }
        }

        if *loading.read() {
            p { class: "status-line", "Loading..." }
        }
        if !error_message.read().is_empty() {
            p { class: "status-line status-error", "{error_message}" }
        }
        if let Some(data) = flight_data.read().as_ref() {
            FlightResults { data: data.clone() }
        }
    }
}
