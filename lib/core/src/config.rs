use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_ELEMENT: &str = "div";
pub const DEFAULT_THRESHOLD: f64 = 250.0;
pub const DEFAULT_PAGE_START: i32 = 0;

/// Node against which the scroll and wheel listeners are registered
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Window,
    /// Element matching a CSS selector
    Selector(String),
    /// Parent of the infinite scroll node
    Container,
}

/// Behaviour of an infinite scroll widget. `load_more`, the loader and the node callback are
/// supplied by the UI layer and are not part of this configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Tag name of the element wrapping the content
    #[serde(deserialize_with = "deserialize_element")]
    pub element: String,
    pub has_more: bool,
    pub initial_load: bool,
    pub is_reverse: bool,
    pub page_start: i32,
    #[serde(deserialize_with = "deserialize_threshold")]
    pub threshold: f64,
    pub use_capture: bool,
    pub use_window: bool,
    #[serde(deserialize_with = "deserialize_selector")]
    pub scroll_element_selector: Option<String>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            element: String::from(DEFAULT_ELEMENT),
            has_more: false,
            initial_load: true,
            is_reverse: false,
            page_start: DEFAULT_PAGE_START,
            threshold: DEFAULT_THRESHOLD,
            use_capture: false,
            use_window: true,
            scroll_element_selector: None,
        }
    }
}

impl ScrollConfig {
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.scroll_element_selector = normalize_selector(Some(selector.into()));
        self
    }

    /// Resolves where listeners go: a selector wins over the container, which wins over the window.
    pub fn scroll_target(&self) -> ScrollTarget {
        match (&self.scroll_element_selector, self.use_window) {
            (Some(selector), _) => ScrollTarget::Selector(selector.clone()),
            (None, false) => ScrollTarget::Container,
            (None, true) => ScrollTarget::Window,
        }
    }

    /// Whether offsets are measured against the window viewport
    pub fn measures_window(&self) -> bool {
        self.use_window && self.scroll_element_selector.is_none()
    }
}

/// Tag names are case-insensitive, an empty tag falls back on `div`.
pub fn normalize_element(element: &str) -> String {
    match element.trim() {
        "" => String::from(DEFAULT_ELEMENT),
        tag => tag.to_lowercase(),
    }
}

/// Empty selectors are treated as absent.
pub fn normalize_selector(selector: Option<String>) -> Option<String> {
    selector
        .map(|selector| selector.trim().to_string())
        .filter(|selector| !selector.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn deserialize_threshold<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid threshold '{value}': {e}"))),
    }
}

fn deserialize_element<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize_element(&String::deserialize(deserializer)?))
}

fn deserialize_selector<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize_selector(Option::<String>::deserialize(deserializer)?))
}
