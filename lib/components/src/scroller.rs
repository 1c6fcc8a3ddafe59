use std::cell::RefCell;
use std::rc::Rc;

use infinite_scroll_core::config::{normalize_selector, ScrollConfig};
use infinite_scroll_core::errors::ScrollError;
use infinite_scroll_core::listener::{ListenerManager, ScrollHost};
use infinite_scroll_core::trigger::ScrollState;
use leptos::prelude::*;

/// Binds a [`ListenerManager`] to a host and forwards triggered pages to `load_more`.
pub struct Scroller<H: ScrollHost> {
    manager: RefCell<ListenerManager<H>>,
    load_more: Callback<i32>,
}

impl<H: ScrollHost> Scroller<H> {
    pub fn new(host: H, load_more: Callback<i32>) -> Self {
        Scroller {
            manager: RefCell::new(ListenerManager::new(host)),
            load_more,
        }
    }

    pub fn with_host<T>(&self, f: impl FnOnce(&mut H) -> T) -> T {
        f(self.manager.borrow_mut().host_mut())
    }

    pub fn state(&self) -> ScrollState {
        self.manager.borrow().state()
    }

    pub fn page(&self) -> i32 {
        self.manager.borrow().page()
    }

    pub fn attach(&self, config: ScrollConfig) {
        let result = self.manager.borrow_mut().attach(config);
        self.request_page(result);
    }

    pub fn detach(&self) {
        if let Err(e) = self.manager.borrow_mut().detach() {
            log::error!("Failed to detach infinite scroll listeners: {e}");
        }
    }

    pub fn handle_scroll(&self) {
        let result = match self.manager.try_borrow_mut() {
            Ok(mut manager) => manager.handle_scroll(),
            Err(_) => {
                log::trace!("Scroll event received while the listeners are being updated, skip it.");
                return;
            }
        };
        self.request_page(result);
    }

    /// Runs `load_more` once the manager is released, so that a synchronous callback can re-arm.
    /// Signals read by `load_more` are not tracked by the effect attaching the listeners.
    fn request_page(&self, result: Result<Option<i32>, ScrollError>) {
        match result {
            Ok(Some(page)) => untrack(|| self.load_more.run(page)),
            Ok(None) => (),
            Err(e) if e.is_layout_error() => log::warn!("Infinite scroll layout not ready: {e}"),
            Err(e) => log::error!("Infinite scroll error: {e}"),
        }
    }
}

/// Reactive inputs of the configuration. Reading it subscribes to every input that re-arms the
/// listeners.
#[derive(Clone)]
pub struct ReactiveConfig {
    pub base: ScrollConfig,
    pub has_more: Signal<bool>,
    pub is_loading: Signal<bool>,
    pub threshold: Signal<f64>,
    pub scroll_element_selector: MaybeProp<String>,
}

impl ReactiveConfig {
    pub fn get(&self) -> ScrollConfig {
        ScrollConfig {
            has_more: self.has_more.get() && !self.is_loading.get(),
            threshold: self.threshold.get(),
            scroll_element_selector: normalize_selector(self.scroll_element_selector.get()),
            ..self.base.clone()
        }
    }
}

/// Owner-scoped storage of the scroller of a mounted component
pub struct ScrollerSlot<H: ScrollHost + 'static> {
    scroller: StoredValue<Option<Rc<Scroller<H>>>, LocalStorage>,
}

impl<H: ScrollHost + 'static> Clone for ScrollerSlot<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: ScrollHost + 'static> Copy for ScrollerSlot<H> {}

impl<H: ScrollHost + 'static> ScrollerSlot<H> {
    pub fn new() -> Self {
        ScrollerSlot { scroller: StoredValue::new_local(None) }
    }

    pub fn get(&self) -> Option<Rc<Scroller<H>>> {
        self.scroller.try_get_value().flatten()
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> Rc<Scroller<H>>) -> Rc<Scroller<H>> {
        if let Some(scroller) = self.get() {
            return scroller;
        }
        let scroller = init();
        self.scroller.set_value(Some(scroller.clone()));
        scroller
    }

    /// Drops the scroller after detaching its listeners.
    pub fn release(&self) {
        if let Some(scroller) = self.scroller.try_update_value(Option::take).flatten() {
            scroller.detach();
        }
    }
}

impl<H: ScrollHost + 'static> Default for ScrollerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}
