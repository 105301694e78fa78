//! Layout compressor: vertical placement of a collection inside a fixed budget.
//!
//! Index 0 is the oldest (bottom-most) item and `count - 1` the newest
//! (top-most). Offsets are measured from the top of the container down toward
//! the baseline, so older items have larger offsets.
//!
//! # Paths
//!
//! - [`LayoutPath::Uncompressed`]: everything fits at normal spacing.
//! - [`LayoutPath::Compressed`]: the bottom two and the newest item get fixed
//!   slots, interior items share the remaining space evenly.
//! - [`LayoutPath::Saturated`]: like `Compressed`, but interior spacing hit the
//!   floor ratio; interior items that do not fit pile onto the last slot.
//! - [`LayoutPath::Clipped`]: compression was needed but there are no
//!   interior items to compress, or no room for them. Linear placement
//!   clipped to the budget.
//!
//! # Complexity
//!
//! O(1) per item, O(n) total. No allocation beyond the result vector.

use super::layout_config::LayoutConfig;
use crate::model::error::{require_positive, InvalidArgument};
use serde::Serialize;
use tracing::debug;

/// Number of items with a fixed slot on the compressed path: the oldest, the
/// second oldest, and the newest.
pub const FIXED_SLOTS: usize = 3;

/// Largest item count [`compute_layout`] accepts.
pub const MAX_ITEMS: usize = 1_000_000;

/// Which placement strategy produced a [`LayoutResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPath {
    /// All items at normal spacing.
    Uncompressed,
    /// Interior spacing shrunk to fit, above the floor ratio.
    Compressed,
    /// Interior spacing at the floor ratio; overflow items share one offset.
    Saturated,
    /// Budget too small for the fixed slots; linear placement clipped to it.
    Clipped,
}

impl LayoutPath {
    /// Whether spacing was reduced below normal.
    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::Compressed | Self::Saturated)
    }

    /// Lowercase name, as used in reports and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uncompressed => "uncompressed",
            Self::Compressed => "compressed",
            Self::Saturated => "saturated",
            Self::Clipped => "clipped",
        }
    }
}

impl std::fmt::Display for LayoutPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of [`compute_layout`]: one offset per item plus the floor line.
///
/// # Invariants
/// - `offsets.len() == count`
/// - offsets are weakly decreasing in index
/// - every offset lies in `[0, budget]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    offsets: Vec<f64>,
    floor_offset: f64,
    path: LayoutPath,
    spacing: f64,
}

impl LayoutResult {
    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True when nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset of the item at `index`, if placed.
    pub fn offset(&self, index: usize) -> Option<f64> {
        self.offsets.get(index).copied()
    }

    /// All offsets, oldest first.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// `(index, offset)` pairs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.offsets.iter().copied().enumerate()
    }

    /// Position of the floor (baseline) line.
    pub fn floor_offset(&self) -> f64 {
        self.floor_offset
    }

    /// Strategy that produced these offsets.
    pub fn path(&self) -> LayoutPath {
        self.path
    }

    /// Spacing applied between interior items.
    ///
    /// Normal spacing on the uncompressed and clipped paths.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

/// Place `count` items within `budget` pixels.
///
/// Pure and deterministic: identical inputs give identical results.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `budget` is not finite and `> 0`, or if
/// `count` exceeds [`MAX_ITEMS`].
///
/// # Examples
///
/// ```
/// use algoviz::view_state::compressor::{compute_layout, LayoutPath};
/// use algoviz::view_state::layout_config::LayoutConfig;
///
/// let layout = compute_layout(3, 320.0, &LayoutConfig::default()).unwrap();
/// assert_eq!(layout.offsets(), &[48.0, 32.0, 16.0]);
/// assert_eq!(layout.path(), LayoutPath::Uncompressed);
/// ```
pub fn compute_layout(
    count: usize,
    budget: f64,
    config: &LayoutConfig,
) -> Result<LayoutResult, InvalidArgument> {
    let budget = require_positive("budget", budget)?;
    if count > MAX_ITEMS {
        return Err(InvalidArgument::new("count", count, "must be at most 1000000"));
    }
    let spacing = config.normal_spacing();
    let floor_offset = floor_offset(count, config);

    let max_items_at_normal_spacing = (budget / spacing).floor() as usize;
    let available_space = config.available_space(budget);

    let result = if count <= max_items_at_normal_spacing {
        LayoutResult {
            offsets: linear_offsets(count, budget, spacing),
            floor_offset,
            path: LayoutPath::Uncompressed,
            spacing,
        }
    } else if count <= FIXED_SLOTS || available_space <= 0.0 {
        LayoutResult {
            offsets: linear_offsets(count, budget, spacing),
            floor_offset,
            path: LayoutPath::Clipped,
            spacing,
        }
    } else {
        compressed(count, budget, available_space, floor_offset, config)
    };

    debug!(
        count,
        budget,
        path = ?result.path,
        spacing = result.spacing,
        floor_offset = result.floor_offset,
        "Computed layout"
    );

    Ok(result)
}

/// `min((count - index) * spacing, budget)` for every index.
fn linear_offsets(count: usize, budget: f64, spacing: f64) -> Vec<f64> {
    (0..count)
        .map(|index| ((count - index) as f64 * spacing).min(budget))
        .collect()
}

/// Compressed and saturated placement. Requires `count > FIXED_SLOTS` and
/// `available_space > 0`.
fn compressed(
    count: usize,
    budget: f64,
    available_space: f64,
    floor_offset: f64,
    config: &LayoutConfig,
) -> LayoutResult {
    let min_spacing = config.min_spacing();
    let middle_count = count - FIXED_SLOTS;
    let required_spacing = available_space / middle_count as f64;
    let saturated = required_spacing < min_spacing;
    let effective_spacing = required_spacing.max(min_spacing);
    let max_visible_middle_items = (available_space / min_spacing).floor() as usize;

    // Second-oldest slot; interior items step up from here.
    let anchor = budget - config.edge_separation();
    let newest = count - 1;

    let offsets = (0..count)
        .map(|index| match index {
            0 => budget,
            1 => anchor,
            i if i == newest => config.normal_spacing(),
            i => {
                let steps = i - 1;
                if saturated {
                    anchor - steps.min(max_visible_middle_items) as f64 * min_spacing
                } else {
                    (anchor - steps as f64 * effective_spacing).min(budget)
                }
            }
        })
        .collect();

    LayoutResult {
        offsets,
        floor_offset,
        path: if saturated {
            LayoutPath::Saturated
        } else {
            LayoutPath::Compressed
        },
        spacing: effective_spacing,
    }
}

/// Position of the floor line for `count` items.
///
/// An empty collection sits at the idle baseline `normal_spacing +
/// item_height`. Otherwise the floor follows the lowest item, half a spacing
/// below its slot, and stays pinned once it reaches `max_budget`.
pub fn floor_offset(count: usize, config: &LayoutConfig) -> f64 {
    let spacing = config.normal_spacing();
    let item_height = config.item_height();
    if count == 0 {
        return spacing + item_height;
    }
    let lowest_item = (count as f64 * spacing).min(config.max_budget());
    (lowest_item + item_height + spacing / 2.0).min(config.max_budget() + item_height)
}

/// Upper bound on items the budget can ever display, even at maximum
/// compression: every interior slot at minimum spacing plus the fixed slots.
///
/// Saturates at `usize::MAX` when the minimum spacing is vanishingly small.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `budget` is not finite and `> 0`.
///
/// # Examples
///
/// ```
/// use algoviz::view_state::compressor::max_visible_items;
/// use algoviz::view_state::layout_config::LayoutConfig;
///
/// // (304 - 16 - 64) / 4.8 = 46.67 -> 46 interior + 3 fixed
/// assert_eq!(max_visible_items(304.0, &LayoutConfig::default()), Ok(49));
/// ```
pub fn max_visible_items(budget: f64, config: &LayoutConfig) -> Result<usize, InvalidArgument> {
    let budget = require_positive("budget", budget)?;
    let available_space = config.available_space(budget).max(0.0);
    let interior_slots = (available_space / config.min_spacing()).floor() as usize;
    Ok(interior_slots.saturating_add(FIXED_SLOTS))
}
