//! Structure state machine (pure).
//!
//! Actions mutate the logical collection; frames are derived from it on
//! demand.

pub mod action;
pub mod structure_view;

// Re-export for convenience
pub use action::{Action, ActionParseError, Verb};
pub use structure_view::{window_anchor, ActionOutcome, Frame, Placement, StructureView};
