/// Upper bound on the offset parent chain, far above any real layout depth
pub const MAX_OFFSET_PARENT_DEPTH: usize = 4096;

/// Node of the host layout exposing its vertical offset relative to its offset parent
pub trait OffsetNode: Sized + PartialEq {
    fn offset_top(&self) -> f64;
    fn offset_parent(&self) -> Option<Self>;
}

/// Layout values needed to compute the remaining scroll distance
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollMeasurement {
    /// The document scrolls inside the window viewport
    Window {
        scroll_top: f64,
        viewport_height: f64,
        element_top: f64,
        element_height: f64,
    },
    /// The content scrolls inside a container element
    Container {
        content_scroll_height: f64,
        container_scroll_top: f64,
        container_client_height: f64,
    },
}

impl ScrollMeasurement {
    /// Distance left before the loading boundary: the bottom of the content when scrolling
    /// forward, the top when scrolling in reverse.
    pub fn offset(&self, is_reverse: bool) -> f64 {
        match (self, is_reverse) {
            (ScrollMeasurement::Window { scroll_top, .. }, true) => *scroll_top,
            (
                ScrollMeasurement::Window { scroll_top, viewport_height, element_top, element_height },
                false
            ) => element_top + (element_height - scroll_top - viewport_height),
            (ScrollMeasurement::Container { container_scroll_top, .. }, true) => *container_scroll_top,
            (
                ScrollMeasurement::Container { content_scroll_height, container_scroll_top, container_client_height },
                false
            ) => content_scroll_height - container_scroll_top - container_client_height,
        }
    }
}

/// Sums `offset_top` along the offset parent chain of `node`.
pub fn top_position<N: OffsetNode>(node: Option<N>) -> f64 {
    let mut visited: Vec<N> = Vec::new();
    let mut position = 0.0;
    let mut current = node;
    while let Some(node) = current {
        if visited.contains(&node) || visited.len() >= MAX_OFFSET_PARENT_DEPTH {
            log::warn!("Offset parent chain loops or is too deep, stop after {} nodes.", visited.len());
            break;
        }
        position += node.offset_top();
        current = node.offset_parent();
        visited.push(node);
    }
    position
}
