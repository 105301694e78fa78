//! Plain-text and JSON reports for layouts, frames and capacity.
//!
//! Text reports list items top-down, the way they appear on screen: newest
//! first, floor line last. Offsets print with two decimals.

use crate::model::collection::StructureKind;
use crate::model::error::InvalidArgument;
use crate::state::structure_view::{ActionOutcome, Frame};
use crate::view_state::compressor::{max_visible_items, LayoutResult};
use crate::view_state::layout_config::{LayoutConfig, LayoutPolicy};
use serde::Serialize;

/// Marker appended to the row of the item the next removal takes.
pub const NEXT_OUT_MARKER: &str = "  <- next";

// ===== Layout =====

/// Render a bare layout as an index/offset table.
pub fn render_layout(layout: &LayoutResult, budget: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "path: {}  items: {}  budget: {:.2}  spacing: {:.2}  floor: {:.2}\n",
        layout.path(),
        layout.len(),
        budget,
        layout.spacing(),
        layout.floor_offset()
    ));
    out.push_str(&format!("{:>5}  {:>8}\n", "index", "offset"));
    for (index, offset) in layout.offsets().iter().enumerate().rev() {
        out.push_str(&format!("{:>5}  {:>8.2}\n", index, offset));
    }
    out
}

/// A layout together with the budget it was computed for, for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Budget handed to the compressor.
    pub budget: f64,
    /// The computed layout.
    #[serde(flatten)]
    pub layout: LayoutResult,
}

// ===== Frame =====

/// Render a frame with item ids, values and the floor line.
pub fn render_frame(frame: &Frame) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {} items, showing {}..{} ({} hidden)\n",
        frame.structure,
        frame.logical_len,
        frame.window.start,
        frame.window.end,
        frame.hidden_count
    ));
    out.push_str(&format!(
        "path: {}  budget: {:.2}  spacing: {:.2}  floor: {:.2}\n",
        frame.path, frame.budget, frame.spacing, frame.floor_offset
    ));
    out.push_str(&format!(
        "{:>5}  {:<6} {:<10} {:>8}\n",
        "index", "id", "value", "offset"
    ));

    let next_out = frame.next_out().map(|p| p.logical_index);
    for placement in frame.placements.iter().rev() {
        let marker = if Some(placement.logical_index) == next_out {
            NEXT_OUT_MARKER
        } else {
            ""
        };
        out.push_str(&format!(
            "{:>5}  {:<6} {:<10} {:>8.2}{}\n",
            placement.logical_index,
            placement.item.id.to_string(),
            placement.item.value.as_str(),
            placement.offset,
            marker
        ));
    }
    out.push_str(&format!("{:>5}  {:>26.2}\n", "floor", frame.floor_offset));
    out
}

/// One-line description of what an action did.
pub fn render_outcome(outcome: &ActionOutcome, kind: StructureKind) -> String {
    match outcome {
        ActionOutcome::Inserted { item } => {
            format!("{} {} ({})", kind.insert_verb(), item.value, item.id)
        }
        ActionOutcome::Removed { item } => {
            format!("{} {} ({})", kind.remove_verb(), item.value, item.id)
        }
        ActionOutcome::Peeked { item, index } => {
            format!("peek {} ({}) at index {}", item.value, item.id, index)
        }
        ActionOutcome::Reset { cleared } => format!("reset: cleared {cleared} items"),
        ActionOutcome::AddedRandom { ids } => format!("random: added {} items", ids.len()),
        ActionOutcome::Empty => format!("nothing to do: {kind} is empty"),
        ActionOutcome::WrongStructure { verb } => {
            format!("rejected: `{verb}` does not apply to a {kind}")
        }
    }
}

/// One simulated action with its result, for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationStep {
    /// Action token as given.
    pub action: String,
    /// What the action did.
    pub outcome: ActionOutcome,
    /// Frame after the action.
    pub frame: Frame,
}

// ===== Capacity =====

/// Derived layout parameters for one screen height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityReport {
    /// Screen height the policy was applied to.
    pub screen_height: f64,
    /// Container height after chrome and minimum rules.
    pub container_height: f64,
    /// Derived layout config.
    pub config: LayoutConfig,
    /// Minimum interior spacing.
    pub min_spacing: f64,
    /// Items the budget can display at most.
    pub max_visible_items: usize,
}

impl CapacityReport {
    /// Derive the report for `screen_height`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the policy rejects the height.
    pub fn new(policy: &LayoutPolicy, screen_height: f64) -> Result<Self, InvalidArgument> {
        let config = policy.config_for_screen(screen_height)?;
        Ok(Self {
            screen_height,
            container_height: policy.container_height(screen_height),
            max_visible_items: max_visible_items(config.max_budget(), &config)?,
            min_spacing: config.min_spacing(),
            config,
        })
    }

    /// Render as aligned key/value lines.
    pub fn render(&self) -> String {
        let rows: [(&str, String); 9] = [
            ("screen height", format!("{:.2}", self.screen_height)),
            ("container height", format!("{:.2}", self.container_height)),
            ("item height", format!("{:.2}", self.config.item_height())),
            ("normal spacing", format!("{:.2}", self.config.normal_spacing())),
            ("min spacing", format!("{:.2}", self.min_spacing)),
            ("edge separation", format!("{:.2}", self.config.edge_separation())),
            (
                "compression ratio",
                format!("{:.2}", self.config.min_compression_ratio()),
            ),
            ("budget", format!("{:.2}", self.config.max_budget())),
            ("max visible items", self.max_visible_items.to_string()),
        ];

        let mut out = String::new();
        for (key, value) in rows {
            out.push_str(&format!("{:<18} {}\n", format!("{key}:"), value));
        }
        out
    }
}

// ===== Structures =====

/// Table of available structures and their verbs.
pub fn render_structures() -> String {
    let mut out = String::new();
    for kind in StructureKind::ALL {
        let verbs = format!("{} / {}", kind.insert_verb(), kind.remove_verb());
        out.push_str(&format!(
            "{:<6} {:<18} {}\n",
            kind.to_string(),
            verbs,
            kind.display_name()
        ));
    }
    out
}

/// Pretty-printed JSON for any report value.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
