//! Algorithm visualizer layout engine (algoviz)
//!
//! Computes vertical placements for stack and queue visualizations that must
//! fit a fixed pixel budget, compressing the interior of the structure when
//! it grows past what normal spacing allows.
//!
//! The library follows a Pure Core / Impure Shell split: `model`,
//! `view_state` and `state` are pure, while `config`, `logging` and the
//! binary touch the filesystem and environment.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

// Re-export command dispatch used by the binary
pub mod integration;
