use std::rc::{Rc, Weak};

use infinite_scroll_core::config::{ScrollConfig, ScrollTarget};
use infinite_scroll_core::errors::ScrollError;
use infinite_scroll_core::listener::{ScrollEvent, ScrollHost};
use infinite_scroll_core::offset::{top_position, OffsetNode, ScrollMeasurement};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Function;
use web_sys::{Element, Event, EventTarget, HtmlElement, WheelEvent, Window};

use crate::scroller::Scroller;

#[derive(PartialEq)]
struct OffsetElement(HtmlElement);

impl OffsetNode for OffsetElement {
    fn offset_top(&self) -> f64 {
        self.0.offset_top() as f64
    }

    fn offset_parent(&self) -> Option<Self> {
        self.0.offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
            .map(OffsetElement)
    }
}

/// Browser implementation of [`ScrollHost`], registering the same two closures on every target.
pub struct DomScrollHost {
    root: Option<HtmlElement>,
    on_scroll: Closure<dyn FnMut(Event)>,
    on_wheel: Closure<dyn FnMut(Event)>,
}

impl DomScrollHost {
    pub fn new(on_scroll: Closure<dyn FnMut(Event)>, on_wheel: Closure<dyn FnMut(Event)>) -> Self {
        DomScrollHost {
            root: None,
            on_scroll,
            on_wheel,
        }
    }

    pub fn set_root(&mut self, root: HtmlElement) {
        self.root = Some(root);
    }

    fn root(&self) -> Result<&HtmlElement, ScrollError> {
        self.root.as_ref().ok_or(ScrollError::NodeNotMounted)
    }

    fn callback(&self, event: ScrollEvent) -> &Function {
        match event {
            ScrollEvent::Wheel => self.on_wheel.as_ref().unchecked_ref(),
            ScrollEvent::Scroll | ScrollEvent::Resize => self.on_scroll.as_ref().unchecked_ref(),
        }
    }
}

impl ScrollHost for DomScrollHost {
    type Target = EventTarget;

    fn resolve_target(&self, target: &ScrollTarget) -> Result<Self::Target, ScrollError> {
        match target {
            ScrollTarget::Window => Ok(get_window()?.into()),
            ScrollTarget::Selector(selector) => Ok(select_element(selector)?.into()),
            ScrollTarget::Container => self.root()?
                .parent_element()
                .map(EventTarget::from)
                .ok_or(ScrollError::MissingParent),
        }
    }

    fn add_listener(&mut self, target: &Self::Target, event: ScrollEvent, use_capture: bool) -> Result<(), ScrollError> {
        let event_name: &'static str = event.into();
        target.add_event_listener_with_callback_and_bool(event_name, self.callback(event), use_capture)
            .map_err(|e| ScrollError::ListenerRegistration(format!("{event_name}: {e:?}")))
    }

    fn remove_listener(&mut self, target: &Self::Target, event: ScrollEvent, use_capture: bool) -> Result<(), ScrollError> {
        let event_name: &'static str = event.into();
        target.remove_event_listener_with_callback_and_bool(event_name, self.callback(event), use_capture)
            .map_err(|e| ScrollError::ListenerRegistration(format!("{event_name}: {e:?}")))
    }

    fn measure(&self, config: &ScrollConfig) -> Result<ScrollMeasurement, ScrollError> {
        if config.measures_window() {
            let window = get_window()?;
            let element = self.root()?;
            let viewport_height = window.inner_height()
                .map_err(measurement_error)?
                .as_f64()
                .ok_or_else(|| ScrollError::Measurement(String::from("innerHeight is not a number")))?;
            return Ok(ScrollMeasurement::Window {
                scroll_top: window.scroll_y().map_err(measurement_error)?,
                viewport_height,
                element_top: top_position(Some(OffsetElement(element.clone()))),
                element_height: element.offset_height() as f64,
            });
        }

        let element: Element = match &config.scroll_element_selector {
            Some(selector) => select_element(selector)?
                .first_element_child()
                .ok_or_else(|| ScrollError::MissingScrollContent(selector.clone()))?,
            None => self.root()?.clone().into(),
        };
        let container = element.parent_element().ok_or(ScrollError::MissingParent)?;
        Ok(ScrollMeasurement::Container {
            content_scroll_height: element.scroll_height() as f64,
            container_scroll_top: container.scroll_top() as f64,
            container_client_height: container.client_height() as f64,
        })
    }
}

fn get_window() -> Result<Window, ScrollError> {
    web_sys::window().ok_or(ScrollError::WindowUnavailable)
}

fn select_element(selector: &str) -> Result<Element, ScrollError> {
    get_window()?
        .document()
        .ok_or(ScrollError::WindowUnavailable)?
        .query_selector(selector)
        .map_err(|e| ScrollError::Measurement(format!("invalid selector '{selector}': {e:?}")))?
        .ok_or_else(|| ScrollError::ScrollElementNotFound(selector.to_string()))
}

fn measurement_error(error: JsValue) -> ScrollError {
    ScrollError::Measurement(format!("{error:?}"))
}

/// Chrome can hang on wheel events with a delta of exactly one pixel unless their default is prevented.
fn prevent_wheel_hang(event: Event) {
    if let Some(wheel_event) = event.dyn_ref::<WheelEvent>() {
        if wheel_event.delta_y() == 1.0 {
            event.prevent_default();
        }
    }
}

pub type DomScroller = Scroller<DomScrollHost>;

/// Creates a scroller whose scroll and resize listeners call back into it.
pub fn dom_scroller(load_more: Callback<i32>) -> Rc<DomScroller> {
    Rc::new_cyclic(|scroller: &Weak<DomScroller>| {
        let scroller = scroller.clone();
        let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Some(scroller) = scroller.upgrade() {
                scroller.handle_scroll();
            }
        });
        let on_wheel = Closure::<dyn FnMut(Event)>::new(prevent_wheel_hang);
        Scroller::new(DomScrollHost::new(on_scroll, on_wheel), load_more)
    })
}
