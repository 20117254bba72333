use dioxus::prelude::*;
use store::RegistrationForm;

use crate::layout::attr;

/// Labelled required input.
pub(crate) fn field(label: &str, name: &str, kind: &str, value: &str) -> Element {
    let value = attr(value);
    rsx! {
        label { r#for: name, "{label}" }
        input { id: name, name, r#type: kind, value, required: true }
    }
}

/// The five registration inputs, optionally pre-filled.
#[component]
pub(crate) fn RegistrationFields(#[props(default)] values: RegistrationForm) -> Element {
    rsx! {
        {field("Name", "name", "text", &values.name)}
        {field("Email", "email", "email", &values.email)}
        {field("Mobile", "mobile", "tel", &values.mobile)}
        {field("Event", "event", "text", &values.event)}
        {field("Password", "password", "password", &values.password)}
    }
}
