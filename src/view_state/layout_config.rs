//! Layout configuration and the policy that derives it from a measured height.
//!
//! A [`LayoutConfig`] is an immutable value: it is rebuilt on every mount or
//! resize and handed to the compressor by reference. Nothing mutates a shared
//! configuration between renders.

use crate::model::error::{require_positive, InvalidArgument};
use serde::{Deserialize, Serialize};

/// Immutable, validated layout parameters.
///
/// # Invariants
/// - `min_compression_ratio` in `(0, 1]`
/// - every other field finite and `> 0`
///
/// Both are enforced by [`LayoutConfig::new`]; the fields are private so an
/// invalid config cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutConfig {
    item_height: f64,
    normal_spacing: f64,
    min_compression_ratio: f64,
    edge_separation: f64,
    max_budget: f64,
}

impl LayoutConfig {
    /// Smart constructor that validates every field.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] naming the first field that violates the
    /// invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use algoviz::view_state::layout_config::LayoutConfig;
    ///
    /// let config = LayoutConfig::new(48.0, 16.0, 0.3, 32.0, 320.0).unwrap();
    /// assert_eq!(config.min_spacing(), 16.0 * 0.3);
    ///
    /// assert!(LayoutConfig::new(48.0, 16.0, 0.0, 32.0, 320.0).is_err());
    /// ```
    pub fn new(
        item_height: f64,
        normal_spacing: f64,
        min_compression_ratio: f64,
        edge_separation: f64,
        max_budget: f64,
    ) -> Result<Self, InvalidArgument> {
        let item_height = require_positive("item_height", item_height)?;
        let normal_spacing = require_positive("normal_spacing", normal_spacing)?;
        if !(min_compression_ratio > 0.0 && min_compression_ratio <= 1.0) {
            return Err(InvalidArgument::new(
                "min_compression_ratio",
                min_compression_ratio,
                "must be in (0, 1]",
            ));
        }
        let edge_separation = require_positive("edge_separation", edge_separation)?;
        let max_budget = require_positive("max_budget", max_budget)?;

        Ok(Self {
            item_height,
            normal_spacing,
            min_compression_ratio,
            edge_separation,
            max_budget,
        })
    }

    /// Pixel height of one item slot.
    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Gap between consecutive items when uncompressed.
    pub fn normal_spacing(&self) -> f64 {
        self.normal_spacing
    }

    /// Lower bound on how far `normal_spacing` may shrink, as a fraction.
    pub fn min_compression_ratio(&self) -> f64 {
        self.min_compression_ratio
    }

    /// Gap reserved for the two items nearest the baseline.
    pub fn edge_separation(&self) -> f64 {
        self.edge_separation
    }

    /// Largest span the collection may occupy, independent of the budget.
    pub fn max_budget(&self) -> f64 {
        self.max_budget
    }

    /// Tightest spacing the compressor will ever apply between interior items.
    pub fn min_spacing(&self) -> f64 {
        self.normal_spacing * self.min_compression_ratio
    }

    /// Space left for interior items once the edge and newest-item slots are
    /// reserved. Negative when the budget cannot even hold those.
    pub fn available_space(&self, budget: f64) -> f64 {
        budget - self.normal_spacing - self.edge_separation * 2.0
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            item_height: 48.0,
            normal_spacing: 16.0,
            min_compression_ratio: 0.3,
            edge_separation: 32.0,
            max_budget: 320.0,
        }
    }
}

/// Threshold policy turning a measured height into a [`LayoutConfig`].
///
/// Every field can be overridden from the `[layout]` table of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutPolicy {
    /// Pixel height of one item slot.
    pub item_height: f64,
    /// Lower clamp for the derived normal spacing.
    pub min_spacing: f64,
    /// Upper clamp for the derived normal spacing.
    pub max_spacing: f64,
    /// Container height is divided by this to get the normal spacing.
    pub spacing_divisor: f64,
    /// Lower bound for the derived edge separation.
    pub min_edge_separation: f64,
    /// Edge separation is this many normal spacings, at least.
    pub edge_spacing_multiplier: f64,
    /// Padding kept below the floor line.
    pub bottom_padding: f64,
    /// Passed through to [`LayoutConfig::min_compression_ratio`].
    pub min_compression_ratio: f64,
    /// Smallest container the policy will lay out into.
    pub min_container_height: f64,
    /// Screen height taken by controls and headers above the container.
    pub chrome_height: f64,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            item_height: 48.0,
            min_spacing: 8.0,
            max_spacing: 16.0,
            spacing_divisor: 20.0,
            min_edge_separation: 16.0,
            edge_spacing_multiplier: 2.0,
            bottom_padding: 16.0,
            min_compression_ratio: 0.3,
            min_container_height: 300.0,
            chrome_height: 280.0,
        }
    }
}

impl LayoutPolicy {
    /// Container height available for a given screen height.
    ///
    /// Never smaller than `min_container_height`.
    pub fn container_height(&self, screen_height: f64) -> f64 {
        (screen_height - self.chrome_height).max(self.min_container_height)
    }

    /// Derive the layout config for a measured container height.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when the container height is not positive,
    /// when it leaves no room below `item_height + bottom_padding`, or when the
    /// policy itself produces an invalid config (for example a zero divisor or
    /// an out-of-range compression ratio).
    pub fn config_for_container(
        &self,
        container_height: f64,
    ) -> Result<LayoutConfig, InvalidArgument> {
        let container_height = require_positive("container_height", container_height)?;
        let spacing_divisor = require_positive("spacing_divisor", self.spacing_divisor)?;
        if !(self.min_spacing <= self.max_spacing) {
            return Err(InvalidArgument::new(
                "min_spacing",
                self.min_spacing,
                "must not exceed max_spacing",
            ));
        }

        let normal_spacing =
            (container_height / spacing_divisor).clamp(self.min_spacing, self.max_spacing);
        let max_budget = container_height - self.item_height - self.bottom_padding;
        let edge_separation = self
            .min_edge_separation
            .max(normal_spacing * self.edge_spacing_multiplier);

        LayoutConfig::new(
            self.item_height,
            normal_spacing,
            self.min_compression_ratio,
            edge_separation,
            max_budget,
        )
    }

    /// Derive the layout config for a screen height, applying the chrome and
    /// minimum-container rules first.
    ///
    /// # Errors
    ///
    /// See [`LayoutPolicy::config_for_container`].
    pub fn config_for_screen(&self, screen_height: f64) -> Result<LayoutConfig, InvalidArgument> {
        if !screen_height.is_finite() {
            return Err(InvalidArgument::new("screen_height", screen_height, "must be finite"));
        }
        self.config_for_container(self.container_height(screen_height))
    }
}
