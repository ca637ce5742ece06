//! Results grid — pure rendering of a flight search result set.

use dioxus::prelude::*;

use skyfare_core::timefmt::format_leg_time;
use skyfare_core::types::{FlightData, Itinerary, Leg};

#[component]
pub fn FlightResults(data: FlightData) -> Element {
    rsx! {
        div {
            class: "results",
            h2 { class: "results-title", "Search Results" }
            p { class: "results-total", "Total Results: {data.context.total_results}" }
            div {
                class: "results-grid",
                for itinerary in data.itineraries.iter() {
                    {itinerary_card(itinerary)}
                }
            }
        }
    }
}

fn itinerary_card(itinerary: &Itinerary) -> Element {
    rsx! {
        div {
            class: "itinerary-card",
            p {
                class: "itinerary-price",
                span { class: "card-label", "Price: " }
                "{itinerary.price.formatted}"
            }
            for leg in itinerary.legs.iter() {
                {leg_details(leg)}
            }
        }
    }
}

/// One leg of an itinerary card. The first marketing carrier is shown; an
/// empty carrier list renders blank rather than failing.
fn leg_details(leg: &Leg) -> Element {
    let from = format!("{} ({})", leg.origin.name, leg.origin.id);
    let to = format!("{} ({})", leg.destination.name, leg.destination.id);
    let departure = format_leg_time(&leg.departure);
    let arrival = format_leg_time(&leg.arrival);
    let carrier = leg
        .carriers
        .marketing
        .first()
        .map(|c| c.name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "leg",
            p { span { class: "card-label", "From: " } "{from}" }
            p { span { class: "card-label", "To: " } "{to}" }
            p { span { class: "card-label", "Departure: " } "{departure}" }
            p { span { class: "card-label", "Arrival: " } "{arrival}" }
            p {
                class: "leg-carrier",
                span { class: "card-label", "Carrier: " }
                span { class: "carrier-name", "{carrier}" }
            }
        }
    }
}
