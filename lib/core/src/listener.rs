use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::config::{ScrollConfig, ScrollTarget};
use crate::errors::ScrollError;
use crate::offset::ScrollMeasurement;
use crate::trigger::{should_trigger, PageCounter, ScrollState};

/// Native events observed by an infinite scroll widget
#[derive(Clone, Copy, Debug, Display, EnumIter, IntoStaticStr, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum ScrollEvent {
    Scroll,
    Wheel,
    Resize,
}

/// Access to the UI runtime: target resolution, event subscriptions and layout measurements.
pub trait ScrollHost {
    type Target: Clone;

    fn resolve_target(&self, target: &ScrollTarget) -> Result<Self::Target, ScrollError>;

    fn add_listener(&mut self, target: &Self::Target, event: ScrollEvent, use_capture: bool) -> Result<(), ScrollError>;

    /// Removing a listener that is not registered must be a no-op.
    fn remove_listener(&mut self, target: &Self::Target, event: ScrollEvent, use_capture: bool) -> Result<(), ScrollError>;

    fn measure(&self, config: &ScrollConfig) -> Result<ScrollMeasurement, ScrollError>;
}

/// Targets and capture flag of the listeners registered by the last attach
#[derive(Clone, Debug, PartialEq)]
pub struct Subscription<T> {
    pub scroll_target: T,
    pub window: T,
    pub use_capture: bool,
}

impl<T> Subscription<T> {
    fn listeners(&self) -> [(&T, ScrollEvent); 3] {
        [
            (&self.scroll_target, ScrollEvent::Wheel),
            (&self.scroll_target, ScrollEvent::Scroll),
            (&self.window, ScrollEvent::Resize),
        ]
    }
}

/// Attaches the scroll listeners while more content is available and reports the page to load
/// once the remaining distance drops below the threshold.
pub struct ListenerManager<H: ScrollHost> {
    host: H,
    config: ScrollConfig,
    /// Seeded from `page_start` of the first attached configuration
    page_counter: Option<PageCounter>,
    subscription: Option<Subscription<H::Target>>,
}

impl<H: ScrollHost> ListenerManager<H> {
    pub fn new(host: H) -> Self {
        ListenerManager {
            host,
            config: ScrollConfig::default(),
            page_counter: None,
            subscription: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn page(&self) -> i32 {
        self.page_counter
            .map(|page_counter| page_counter.current())
            .unwrap_or(self.config.page_start)
    }

    pub fn state(&self) -> ScrollState {
        match self.subscription {
            Some(_) => ScrollState::Armed,
            None => ScrollState::Disarmed,
        }
    }

    /// Applies `config` and registers the listeners if more content is available. Listeners from a
    /// previous attach are removed first. With `initial_load`, the offset is checked immediately
    /// and the page to load is returned.
    pub fn attach(&mut self, config: ScrollConfig) -> Result<Option<i32>, ScrollError> {
        self.detach()?;
        self.config = config;
        if self.page_counter.is_none() {
            self.page_counter = Some(PageCounter::new(self.config.page_start));
        }
        if !self.config.has_more {
            log::trace!("No more content, scroll listeners stay detached.");
            return Ok(None);
        }

        let subscription = Subscription {
            scroll_target: self.host.resolve_target(&self.config.scroll_target())?,
            window: self.host.resolve_target(&ScrollTarget::Window)?,
            use_capture: self.config.use_capture,
        };
        self.subscription = Some(subscription.clone());
        for (target, event) in subscription.listeners() {
            if let Err(e) = self.host.add_listener(target, event, subscription.use_capture) {
                log::error!("Failed to attach {event} listener: {e}");
                self.detach()?;
                return Err(e);
            }
        }
        log::debug!("Scroll listeners armed, page {}.", self.page());

        match self.config.initial_load {
            true => self.handle_scroll(),
            false => Ok(None),
        }
    }

    /// Removes every listener registered by the last attach. No-op when disarmed.
    pub fn detach(&mut self) -> Result<(), ScrollError> {
        let Some(subscription) = self.subscription.take() else {
            return Ok(());
        };
        let mut result = Ok(());
        for (target, event) in subscription.listeners() {
            if let Err(e) = self.host.remove_listener(target, event, subscription.use_capture) {
                log::error!("Failed to detach {event} listener: {e}");
                result = Err(e);
            }
        }
        log::debug!("Scroll listeners disarmed.");
        result
    }

    /// Handles a scroll or resize event. When the threshold is crossed, the listeners are detached
    /// and the next page is returned; the caller must then request it. A layout that cannot be
    /// measured also detaches the listeners until the next attach.
    pub fn handle_scroll(&mut self) -> Result<Option<i32>, ScrollError> {
        if self.subscription.is_none() {
            return Ok(None);
        }
        let measurement = match self.host.measure(&self.config) {
            Ok(measurement) => measurement,
            Err(e) => {
                if e.is_layout_error() {
                    self.detach()?;
                }
                return Err(e);
            }
        };
        let offset = measurement.offset(self.config.is_reverse);
        log::trace!("Scroll offset: {offset}, threshold: {}", self.config.threshold);
        if !should_trigger(offset, self.config.threshold) {
            return Ok(None);
        }
        self.detach()?;
        let page_counter = self.page_counter.get_or_insert_with(|| PageCounter::new(self.config.page_start));
        let page = page_counter.advance().ok_or(ScrollError::PageOverflow(page_counter.current()))?;
        log::debug!("Load threshold crossed, request page {page}.");
        Ok(Some(page))
    }
}
