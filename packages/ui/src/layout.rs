use dioxus::prelude::*;

/// Stylesheet served from the static directory of every app.
pub const STYLESHEET: &str = "/static/style.css";

/// Wrap a page body in a full HTML document.
///
/// `dioxus_elements` has no root `html` element, so only `head` and `body` go
/// through `rsx!` and the document tag is added around them.
pub(crate) fn render_page(title: &str, body: Element) -> String {
    let inner = dioxus_ssr::render_element(rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title}" }
            link { rel: "stylesheet", href: STYLESHEET }
        }
        body {
            main { class: "container", {body} }
        }
    });
    format!("<!DOCTYPE html><html lang=\"en\">{inner}</html>")
}

/// Escape a value for a double-quoted attribute.
///
/// The SSR renderer escapes text nodes but writes attribute values verbatim, so
/// anything user-supplied must pass through here before it lands in `rsx!`.
pub(crate) fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// One-shot notice above a form.
#[component]
pub(crate) fn Notice(message: String, #[props(default)] error: bool) -> Element {
    let class = if error { "notice error" } else { "notice" };
    rsx! {
        p { class, role: "status", "{message}" }
    }
}
