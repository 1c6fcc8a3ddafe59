pub mod dom_host;
pub mod infinite_scroll;
pub mod loader;
pub mod scroller;

pub use infinite_scroll::InfiniteScroll;
pub use infinite_scroll_core::config::ScrollConfig;
pub use loader::{provide_default_loader, DefaultLoader};
