//! Root application component — page shell around the search panel.

use dioxus::prelude::*;

use skyfare_core::FlightApi;

use crate::form::SearchPanel;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // The API handle is shared down the tree through context; form state
    // itself lives in the panel component, not in anything process-wide.
    use_context_provider(|| -> FlightApi {
        crate::INITIAL_API
            .lock()
            .unwrap()
            .take()
            .expect("FlightApi is built before launch")
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "page",
            h1 { class: "page-title", "Flight Search" }
            SearchPanel {}
        }
    }
}
