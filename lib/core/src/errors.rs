use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("No element matches the scroll element selector '{0}'.")]
    ScrollElementNotFound(String),
    #[error("The element selected by '{0}' has no child to measure.")]
    MissingScrollContent(String),
    #[error("The infinite scroll node is not mounted.")]
    NodeNotMounted,
    #[error("The measured element has no parent container.")]
    MissingParent,
    #[error("The global window is not available.")]
    WindowUnavailable,
    #[error("Failed to register scroll listener: {0}")]
    ListenerRegistration(String),
    #[error("Failed to measure scroll position: {0}")]
    Measurement(String),
    #[error("No page can follow page {0}.")]
    PageOverflow(i32),
}

impl ScrollError {
    /// Whether the error comes from the page layout rather than from the host runtime.
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            ScrollError::ScrollElementNotFound(_) | ScrollError::MissingScrollContent(_) |
            ScrollError::NodeNotMounted | ScrollError::MissingParent
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ScrollError;

    #[test]
    fn test_scroll_error_display() {
        assert_eq!(
            ScrollError::ScrollElementNotFound(String::from("#feed")).to_string(),
            "No element matches the scroll element selector '#feed'."
        );
        assert_eq!(
            ScrollError::ListenerRegistration(String::from("denied")).to_string(),
            "Failed to register scroll listener: denied"
        );
    }

    #[test]
    fn test_is_layout_error() {
        assert!(ScrollError::NodeNotMounted.is_layout_error());
        assert!(ScrollError::MissingScrollContent(String::from(".list")).is_layout_error());
        assert!(!ScrollError::WindowUnavailable.is_layout_error());
        assert!(!ScrollError::Measurement(String::from("innerHeight")).is_layout_error());
        assert!(!ScrollError::PageOverflow(i32::MAX).is_layout_error());
    }
}
