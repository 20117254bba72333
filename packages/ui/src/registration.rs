use dioxus::prelude::*;

use crate::fields::RegistrationFields;
use crate::layout::{render_page, Notice};

/// The public signup form, with the flash left by the previous submission.
pub fn registration_page(flash: Option<String>) -> String {
    let notice = flash.map(|message| rsx! { Notice { message } });
    render_page(
        "Event Registration",
        rsx! {
            h1 { "Event Registration" }
            {notice}
            form { method: "post", action: "/registration",
                RegistrationFields {}
                button { r#type: "submit", "Register" }
            }
        },
    )
}
