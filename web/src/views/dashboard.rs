use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Choose a module to get started." }
                }
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::procurement(),
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Procurement" }
                    p { class: "dashboard-card-desc",
                        "Activity plans, purchase requests and orders, approvals, and goods received."
                    }
                }
            }
        }
    }
}
