use strum_macros::Display;

/// Subscription state of an infinite scroll widget
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
pub enum ScrollState {
    /// Listeners are registered and wait for the threshold to be crossed
    Armed,
    #[default]
    Disarmed,
}

/// Index handed to `load_more`, increasing by one per trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCounter {
    page: i32,
}

impl PageCounter {
    pub fn new(page_start: i32) -> Self {
        PageCounter { page: page_start }
    }

    /// Last page handed out, or the start page if none was
    pub fn current(&self) -> i32 {
        self.page
    }

    /// Moves to the next page, `None` once the page index cannot grow anymore.
    pub fn advance(&mut self) -> Option<i32> {
        self.page = self.page.checked_add(1)?;
        Some(self.page)
    }
}

pub fn should_trigger(offset: f64, threshold: f64) -> bool {
    offset < threshold
}
