use dioxus::prelude::*;
use store::{Registration, RegistrationForm};

use crate::fields::RegistrationFields;
use crate::layout::render_page;

/// Admin dashboard: every row with edit/delete links, plus the save form.
///
/// With `editing` set the form is pre-filled and carries the row id, so saving
/// replaces that row; otherwise it inserts.
pub fn dashboard_page(rows: &[Registration], editing: Option<&Registration>) -> String {
    let id = editing.map(|r| r.id.to_string()).unwrap_or_default();
    let values = editing.map(Registration::to_form).unwrap_or_default();
    render_page(
        "Dashboard",
        rsx! {
            header {
                h1 { "Registrations" }
                a { href: "/logout", "Logout" }
            }
            SaveForm { id, values }
            table {
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Email" }
                        th { "Mobile" }
                        th { "Event" }
                        th { "Registered" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for registration in rows.iter() {
                        DashboardRow { key: "{registration.id}", registration: registration.clone() }
                    }
                }
            }
            if rows.is_empty() {
                p { "No registrations yet." }
            }
        },
    )
}

#[component]
fn SaveForm(id: String, values: RegistrationForm) -> Element {
    let heading = if id.is_empty() { "Add registration" } else { "Edit registration" };
    rsx! {
        section {
            h2 { "{heading}" }
            form { method: "post", action: "/save",
                input { r#type: "hidden", name: "id", value: id }
                RegistrationFields { values }
                button { r#type: "submit", "Save" }
            }
        }
    }
}

#[component]
fn DashboardRow(registration: Registration) -> Element {
    let registered = registration.created_at.format("%Y-%m-%d %H:%M").to_string();
    rsx! {
        tr {
            td { "{registration.id}" }
            td { "{registration.name}" }
            td { "{registration.email}" }
            td { "{registration.mobile}" }
            td { "{registration.event}" }
            td { "{registered}" }
            td {
                a { href: "/dashboard?edit={registration.id}", "Edit" }
                " "
                a { href: "/dashboard?del={registration.id}", "Delete" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(id: i64, name: &str) -> Registration {
        Registration {
            id,
            name: name.to_string(),
            email: "a@x.com".to_string(),
            mobile: "555".to_string(),
            event: "Conf".to_string(),
            password: "p1".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_rows_and_actions() {
        let rows = vec![row(1, "Alice"), row(2, "Bob")];
        let html = dashboard_page(&rows, None);
        assert!(html.contains("Alice"));
        assert!(html.contains("Bob"));
        assert!(html.contains("/dashboard?edit=2"));
        assert!(html.contains("/dashboard?del=1"));
        assert!(html.contains("Add registration"));
        assert!(!html.contains("No registrations yet."));
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let rows = vec![row(7, "Alice")];
        let html = dashboard_page(&rows, rows.first());
        assert!(html.contains("Edit registration"));
        assert!(html.contains("value=\"7\""));
        assert!(html.contains("value=\"Alice\""));
    }

    #[test]
    fn test_edit_form_escapes_stored_values() {
        let mut stored = row(3, "\"><script>alert(1)</script>");
        stored.email = "a&b@x.com".to_string();
        stored.event = "<Conf>".to_string();
        let rows = vec![stored];
        let html = dashboard_page(&rows, rows.first());
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<Conf>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;\""));
        assert!(html.contains("value=\"a&amp;b@x.com\""));
        assert!(html.contains("value=\"&lt;Conf&gt;\""));
    }

    #[test]
    fn test_empty_table() {
        let html = dashboard_page(&[], None);
        assert!(html.contains("No registrations yet."));
    }
}
