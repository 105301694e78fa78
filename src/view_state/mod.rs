//! View-state layer - layout compression and visible windows
//!
//! Everything here is pure: given a config, a budget and a count, the same
//! offsets come out every time.
//!
//! # Module Structure
//!
//! - `layout_config`: LayoutConfig and the LayoutPolicy that derives it from a screen height
//! - `compressor`: compute_layout, floor_offset and max_visible_items
//! - `visible_window`: VisibleWindow - which logical items get on-screen slots

pub mod compressor;
pub mod layout_config;
pub mod visible_window;

pub use compressor::{compute_layout, floor_offset, max_visible_items, LayoutPath, LayoutResult};
pub use layout_config::{LayoutConfig, LayoutPolicy};
pub use visible_window::{VisibleWindow, WindowAnchor};
