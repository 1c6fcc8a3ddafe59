#![allow(dead_code)]

use infinite_scroll_core::config::{ScrollConfig, ScrollTarget};
use infinite_scroll_core::errors::ScrollError;
use infinite_scroll_core::listener::{ListenerManager, ScrollEvent, ScrollHost};
use infinite_scroll_core::offset::ScrollMeasurement;

pub const WINDOW: &str = "window";
pub const CONTAINER: &str = "container";

/// In-memory host recording listeners the way the DOM does: a (target, event, capture) triple is
/// registered at most once.
#[derive(Clone, Debug)]
pub struct FakeHost {
    pub listeners: Vec<(String, ScrollEvent, bool)>,
    pub selectors: Vec<String>,
    pub window_measurement: ScrollMeasurement,
    pub container_measurement: ScrollMeasurement,
    pub failing_event: Option<ScrollEvent>,
    pub failing_measurement: Option<ScrollError>,
}

impl Default for FakeHost {
    fn default() -> Self {
        FakeHost {
            listeners: Vec::new(),
            selectors: Vec::new(),
            window_measurement: window_measurement(0.0, 3000.0, 800.0, 0.0),
            container_measurement: container_measurement(2000.0, 0.0, 500.0),
            failing_event: None,
            failing_measurement: None,
        }
    }
}

impl FakeHost {
    pub fn with_selector(mut self, selector: &str) -> Self {
        self.selectors.push(selector.to_string());
        self
    }

    pub fn has_listener(&self, target: &str, event: ScrollEvent) -> bool {
        self.listeners.iter().any(|(listener_target, listener_event, _)| listener_target == target && *listener_event == event)
    }
}

impl ScrollHost for FakeHost {
    type Target = String;

    fn resolve_target(&self, target: &ScrollTarget) -> Result<Self::Target, ScrollError> {
        match target {
            ScrollTarget::Window => Ok(String::from(WINDOW)),
            ScrollTarget::Container => Ok(String::from(CONTAINER)),
            ScrollTarget::Selector(selector) => self.selectors
                .iter()
                .find(|known| *known == selector)
                .cloned()
                .ok_or_else(|| ScrollError::ScrollElementNotFound(selector.clone())),
        }
    }

    fn add_listener(&mut self, target: &Self::Target, event: ScrollEvent, use_capture: bool) -> Result<(), ScrollError> {
        if self.failing_event == Some(event) {
            return Err(ScrollError::ListenerRegistration(format!("{event} refused")));
        }
        let listener = (target.clone(), event, use_capture);
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
        Ok(())
    }

    fn remove_listener(&mut self, target: &Self::Target, event: ScrollEvent, use_capture: bool) -> Result<(), ScrollError> {
        self.listeners.retain(|listener| *listener != (target.clone(), event, use_capture));
        Ok(())
    }

    fn measure(&self, config: &ScrollConfig) -> Result<ScrollMeasurement, ScrollError> {
        if let Some(error) = &self.failing_measurement {
            return Err(error.clone());
        }
        match config.measures_window() {
            true => Ok(self.window_measurement),
            false => Ok(self.container_measurement),
        }
    }
}

pub fn window_measurement(scroll_top: f64, element_height: f64, viewport_height: f64, element_top: f64) -> ScrollMeasurement {
    ScrollMeasurement::Window { scroll_top, viewport_height, element_top, element_height }
}

pub fn container_measurement(content_scroll_height: f64, container_scroll_top: f64, container_client_height: f64) -> ScrollMeasurement {
    ScrollMeasurement::Container { content_scroll_height, container_scroll_top, container_client_height }
}

pub fn armed_config() -> ScrollConfig {
    ScrollConfig { has_more: true, initial_load: false, ..Default::default() }
}

/// Simulates a scroll event the way the UI layer dispatches it, collecting requested pages.
pub fn scroll(manager: &mut ListenerManager<FakeHost>, requested_pages: &mut Vec<i32>) {
    if let Some(page) = manager.handle_scroll().expect("Scroll should be handled.") {
        requested_pages.push(page);
    }
}
