use dioxus::prelude::*;

use crate::layout::{render_page, Notice};

/// Admin login form. `failed` adds the rejected-credentials notice.
pub fn login_page(failed: bool) -> String {
    let notice = failed.then(|| {
        let message = "Invalid username or password".to_string();
        rsx! { Notice { message, error: true } }
    });
    render_page(
        "Admin Login",
        rsx! {
            h1 { "Admin Login" }
            {notice}
            form { method: "post", action: "/login",
                label { r#for: "username", "Username" }
                input { id: "username", name: "username", r#type: "text", required: true }
                label { r#for: "password", "Password" }
                input { id: "password", name: "password", r#type: "password", required: true }
                button { r#type: "submit", "Login" }
            }
        },
    )
}
