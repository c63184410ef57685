use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(%path, "no route matched");

    rsx! {
        div { class: "not-found",
            h1 { class: "page-title", "Page not found" }
            p { class: "page-subtitle", "Nothing lives at /{path}." }
            Link { to: Route::dashboard(), class: "btn btn-primary", "Go to dashboard" }
        }
    }
}
