use crate::Route;
use dioxus::prelude::*;
use types::ProcurementModule;
use ui::{IconBadge, PageHeader};

/// Stand-in for a procurement sub-page. The real pages live in their own modules.
#[component]
pub fn ModuleDetail(module: ProcurementModule) -> Element {
    let nav = navigator();
    let descriptor = module.descriptor();

    rsx! {
        div {
            PageHeader {
                title: descriptor.title,
                subtitle: descriptor.description,
                on_back: move |_| {
                    nav.push(Route::procurement());
                },
            }
            div { class: "module-placeholder",
                IconBadge { icon: descriptor.icon, color: descriptor.color }
                p { "Nothing to show here yet." }
            }
        }
    }
}
