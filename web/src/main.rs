use dioxus::prelude::*;

mod views;

use types::ProcurementModule;
use views::{Dashboard, ModuleDetail, NotFound, ProcurementDashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[redirect("/", || Route::Dashboard {})]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/procurement")]
        ProcurementDashboard {},
        #[route("/procurement/:module")]
        ModuleDetail { module: ProcurementModule },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn dashboard() -> Self {
        Route::Dashboard {}
    }

    pub fn procurement() -> Self {
        Route::ProcurementDashboard {}
    }

    pub fn module(module: ProcurementModule) -> Self {
        Route::ModuleDetail { module }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        // Before `serve`, so our subscriber is the one installed.
        if let Err(error) = server::init() {
            eprintln!("failed to initialise server: {error:#}");
            std::process::exit(1);
        }

        dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Back Office" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = matches!(
        (&current_route, &to),
        (Route::Dashboard {}, Route::Dashboard {})
            | (Route::ProcurementDashboard {}, Route::ProcurementDashboard {})
            | (Route::ModuleDetail { .. }, Route::ProcurementDashboard {})
    );

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn AppLayout() -> Element {
    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Back Office" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::dashboard(), "Dashboard" }
                    NavLink { to: Route::procurement(), "Procurement" }
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
