use dioxus::prelude::*;
use store::{EventFilter, Registration, ALL_EVENTS};

use crate::layout::{attr, render_page};

/// Public listing. Passwords are never rendered.
pub fn listing_page(rows: &[Registration], selected: &EventFilter) -> String {
    let selected = attr(selected.as_query());
    render_page(
        "Registrations",
        rsx! {
            h1 { "Registrations" }
            form { method: "get", action: "/",
                label { r#for: "event", "Event" }
                input { id: "event", name: "event", r#type: "text", value: selected }
                button { r#type: "submit", "Filter" }
                " "
                a { href: "/?event={ALL_EVENTS}", "Show all" }
            }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Mobile" }
                        th { "Event" }
                        th { "Registered" }
                    }
                }
                tbody {
                    for registration in rows.iter() {
                        ListingRow { key: "{registration.id}", registration: registration.clone() }
                    }
                }
            }
            if rows.is_empty() {
                p { "No registrations found." }
            }
        },
    )
}

#[component]
fn ListingRow(registration: Registration) -> Element {
    let registered = registration.created_at.format("%Y-%m-%d %H:%M").to_string();
    rsx! {
        tr {
            td { "{registration.name}" }
            td { "{registration.email}" }
            td { "{registration.mobile}" }
            td { "{registration.event}" }
            td { "{registered}" }
        }
    }
}
