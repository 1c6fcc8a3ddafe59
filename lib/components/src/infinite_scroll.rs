use infinite_scroll_core::config::{normalize_element, ScrollConfig, DEFAULT_ELEMENT, DEFAULT_THRESHOLD};
use infinite_scroll_core::render::{loader_placement, LoaderPlacement};
use leptos::html::{self, Custom};
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::dom_host::{dom_scroller, DomScrollHost};
use crate::loader::{resolve_loader, use_default_loader};
use crate::scroller::{ReactiveConfig, ScrollerSlot};

fn loader_slot(
    slot: LoaderPlacement,
    has_more: Signal<bool>,
    is_reverse: bool,
    loader: Option<ViewFn>,
) -> impl Fn() -> Option<AnyView> + Send + Sync + 'static {
    let has_loader = loader.is_some();
    move || match loader_placement(has_more.get(), is_reverse, has_loader) == slot {
        true => loader.as_ref().map(ViewFn::run),
        false => None,
    }
}

/// Wraps its children and calls `load_more` with the next page when the scroll position comes
/// within `threshold` pixels of the end of the content (or of its start when `is_reverse`).
///
/// Listeners are detached as soon as a page is requested or `has_more` is false. They are attached
/// again when `has_more`, `is_loading`, `threshold` or `scroll_element_selector` change, typically
/// when `is_loading` falls back to false after the requested page was added.
#[component]
pub fn InfiniteScroll(
    /// callback requesting the given page of additional content
    #[prop(into)]
    load_more: Callback<i32>,
    /// signal indicating whether more content can be loaded
    #[prop(into)]
    has_more: Signal<bool>,
    /// signal indicating a page is being loaded, the listeners stay detached meanwhile. Listeners
    /// are re-armed when it falls back to false: it is required whenever `has_more` stays true
    /// across pages, otherwise no page is requested after the first one.
    #[prop(into, default = Signal::stored(false))]
    is_loading: Signal<bool>,
    /// tag name of the wrapping element, any HTML or custom element
    #[prop(into, default = String::from(DEFAULT_ELEMENT))]
    element: String,
    /// check the scroll position as soon as the listeners are attached
    #[prop(default = true)]
    initial_load: bool,
    /// load content at the top instead of the bottom
    #[prop(optional)]
    is_reverse: bool,
    /// loading indicator, falls back on the default loader of the context
    #[prop(optional, into)]
    loader: Option<ViewFn>,
    #[prop(optional)]
    page_start: i32,
    /// distance in pixels from the end of the content under which a page is requested
    #[prop(into, default = Signal::stored(DEFAULT_THRESHOLD))]
    threshold: Signal<f64>,
    #[prop(optional)]
    use_capture: bool,
    /// measure against the window, otherwise against the parent of this component
    #[prop(default = true)]
    use_window: bool,
    /// CSS selector of the scrolling container, whose first child is measured
    #[prop(optional, into)]
    scroll_element_selector: MaybeProp<String>,
    /// callback receiving the mounted root node
    #[prop(optional, into)]
    element_ref: Option<Callback<HtmlElement>>,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let element = normalize_element(&element);
    let root_ref = NodeRef::<Custom<String>>::new();
    let scroller = ScrollerSlot::<DomScrollHost>::new();
    let config = ReactiveConfig {
        base: ScrollConfig {
            element: element.clone(),
            initial_load,
            is_reverse,
            page_start,
            use_capture,
            use_window,
            ..Default::default()
        },
        has_more,
        is_loading,
        threshold,
        scroll_element_selector,
    };

    Effect::new(move || {
        let Some(root) = root_ref.get() else {
            return
        };
        let config = config.get();
        let dom_scroller = scroller.get_or_init(|| {
            log::debug!("Mount infinite scroll <{}>, start at page {page_start}.", config.element);
            dom_scroller(load_more)
        });
        dom_scroller.with_host(|host| host.set_root(root));
        dom_scroller.attach(config);
    });

    Effect::new(move || {
        if let (Some(root), Some(element_ref)) = (root_ref.get(), element_ref) {
            element_ref.run(root);
        }
    });

    on_cleanup(move || scroller.release());

    let loader = resolve_loader(loader, use_default_loader());
    let loader_before = loader_slot(LoaderPlacement::BeforeChildren, has_more, is_reverse, loader.clone());
    let loader_after = loader_slot(LoaderPlacement::AfterChildren, has_more, is_reverse, loader);

    html::custom(element)
        .class(class)
        .node_ref(root_ref)
        .child((loader_before, children(), loader_after))
}
