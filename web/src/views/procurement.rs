use crate::Route;
use dioxus::prelude::*;
use types::ProcurementModule;
use types::procurement::{BREADCRUMB, PAGE_TITLE};
use ui::{ModuleGrid, PageHeader};

/// Landing page for the procurement module: one card per sub-feature.
#[component]
pub fn ProcurementDashboard() -> Element {
    let nav = navigator();

    rsx! {
        div { class: "procurement-page",
            PageHeader {
                title: PAGE_TITLE,
                subtitle: BREADCRUMB,
                on_back: move |_| {
                    nav.push(Route::dashboard());
                },
            }
            ModuleGrid {
                modules: ProcurementModule::ALL.to_vec(),
                on_select: move |module| {
                    nav.push(Route::module(module));
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::rc::Rc;
    use std::sync::Once;

    use dioxus::prelude::*;
    use dioxus_core::{ElementId, Event, VirtualDom};
    use dioxus_history::{History, MemoryHistory};
    use dioxus_html::{
        PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData, set_event_converter,
    };
    use types::procurement::{MODULES, PARENT_PATH, PROCUREMENT_PATH};

    use crate::Route;

    fn app() -> Element {
        rsx! { Router::<Route> {} }
    }

    /// The whole app mounted at `/procurement` on an in-memory history.
    struct Page {
        dom: VirtualDom,
        history: Rc<MemoryHistory>,
        html: String,
    }

    impl Page {
        fn open() -> Self {
            static CONVERTER: Once = Once::new();
            CONVERTER.call_once(|| set_event_converter(Box::new(SerializedHtmlEventConverter)));

            let history = Rc::new(MemoryHistory::with_initial_path(PROCUREMENT_PATH));
            let mut dom =
                VirtualDom::new(app).with_root_context(history.clone() as Rc<dyn History>);
            dom.rebuild_in_place();
            let html = dioxus_ssr::pre_render(&dom);

            Self { dom, history, html }
        }

        /// Id of the `nth` element whose class attribute is exactly `class`.
        fn element_id(&self, class: &str, nth: usize) -> ElementId {
            let needle = format!("class=\"{class}\"");
            let (at, _) = self
                .html
                .match_indices(&needle)
                .nth(nth)
                .unwrap_or_else(|| panic!("no element #{nth} with {needle}"));
            let start = self.html[..at].rfind('<').unwrap();
            let end = at + self.html[at..].find('>').unwrap();
            let tag = &self.html[start..end];

            let marker = "data-node-hydration=\"";
            let id = &tag[tag.find(marker).unwrap() + marker.len()..];
            let id: String = id.chars().take_while(char::is_ascii_digit).collect();
            ElementId(id.parse().unwrap())
        }

        fn click(&mut self, id: ElementId) {
            let data = Rc::new(PlatformEventData::new(Box::new(
                SerializedMouseData::default(),
            )));
            self.dom
                .runtime()
                .handle_event("click", Event::new(data as Rc<dyn Any>, true), id);
        }

        fn current_path(&self) -> String {
            self.history.current_route()
        }

        /// Exactly one entry separates the current route from the landing page.
        fn assert_single_push_to(&self, path: &str) {
            assert_eq!(self.current_path(), path);
            assert!(self.history.can_go_back());
            self.history.go_back();
            assert_eq!(self.current_path(), PROCUREMENT_PATH);
            assert!(!self.history.can_go_back());
        }
    }

    #[test]
    fn renders_cards_in_order_with_breadcrumb_and_back() {
        let page = Page::open();

        assert_eq!(
            page.html.matches("class=\"module-card\"").count(),
            MODULES.len()
        );
        let mut last = 0;
        for descriptor in &MODULES {
            let at = page
                .html
                .find(descriptor.title)
                .unwrap_or_else(|| panic!("missing title {:?}", descriptor.title));
            assert!(at >= last, "{} is out of order", descriptor.title);
            assert!(page.html.contains(descriptor.description));
            last = at;
        }

        assert!(page.html.contains("Activity Plan → PR → (PO if required) → GRN"));
        assert!(page.html.contains("class=\"btn btn-secondary page-back\""));
    }

    #[test]
    fn rendering_alone_does_not_navigate() {
        let page = Page::open();

        assert_eq!(page.current_path(), PROCUREMENT_PATH);
        assert!(!page.history.can_go_back());
    }

    #[test]
    fn back_goes_to_dashboard() {
        let mut page = Page::open();

        let back = page.element_id("btn btn-secondary page-back", 0);
        page.click(back);

        page.assert_single_push_to(PARENT_PATH);
    }

    #[test]
    fn purchase_orders_card_goes_to_po() {
        let mut page = Page::open();

        let index = MODULES
            .iter()
            .position(|d| d.title == "Purchase Orders (PO)")
            .unwrap();
        let card = page.element_id("module-card", index);
        page.click(card);

        page.assert_single_push_to("/procurement/po");
    }

    #[test]
    fn every_card_goes_to_its_own_path() {
        for (index, descriptor) in MODULES.iter().enumerate() {
            let mut page = Page::open();

            let card = page.element_id("module-card", index);
            page.click(card);

            page.assert_single_push_to(descriptor.path);
        }
    }
}
