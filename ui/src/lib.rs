//! Reusable components shared by the application views.
//!
//! Nothing in here talks to the router. Activations are reported through
//! event handlers and the caller decides where to navigate.

use dioxus::prelude::*;
use types::{Icon, ProcurementModule};

/// Page title row with an optional back button.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[props(default)] subtitle: Option<&'static str>,
    on_back: Option<EventHandler>,
) -> Element {
    rsx! {
        div { class: "page-header",
            if let Some(on_back) = on_back {
                div { class: "page-header-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary page-back",
                        onclick: move |_| on_back.call(()),
                        "← Back"
                    }
                }
            }
            div { class: "page-header-content",
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
        }
    }
}

/// Responsive grid container. Column count is driven by the stylesheet.
#[component]
pub fn CardGrid(children: Element) -> Element {
    rsx! {
        div { class: "card-grid", {children} }
    }
}

#[component]
pub fn IconBadge(icon: Icon, color: &'static str) -> Element {
    rsx! {
        span {
            class: "icon-badge accent-{color}",
            "data-icon": "{icon}",
            aria_hidden: "true",
        }
    }
}

/// A single clickable card for one procurement module.
#[component]
pub fn ModuleCard(
    module: ProcurementModule,
    on_activate: EventHandler<ProcurementModule>,
) -> Element {
    let descriptor = module.descriptor();

    rsx! {
        button {
            r#type: "button",
            class: "module-card",
            onclick: move |_| on_activate.call(module),
            IconBadge { icon: descriptor.icon, color: descriptor.color }
            span { class: "module-card-body",
                span { class: "module-card-title", "{descriptor.title}" }
                span { class: "module-card-desc", "{descriptor.description}" }
            }
        }
    }
}

/// Renders one [`ModuleCard`] per module, in the order given.
#[component]
pub fn ModuleGrid(
    modules: Vec<ProcurementModule>,
    on_select: EventHandler<ProcurementModule>,
) -> Element {
    rsx! {
        CardGrid {
            for module in modules {
                ModuleCard { key: "{module}", module, on_activate: on_select }
            }
        }
    }
}
