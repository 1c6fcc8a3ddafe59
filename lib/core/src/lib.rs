pub mod config;
pub mod errors;
pub mod listener;
pub mod offset;
pub mod render;
pub mod trigger;
