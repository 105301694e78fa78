//! View-state for one visualized structure.
//!
//! Owns the logical collection, the layout policy and the current screen
//! height. Every query derives the visible window and the layout fresh, so
//! there is no cached state to fall out of sync with the collection.

use super::action::Action;
use crate::model::collection::{Collection, End, StructureKind};
use crate::model::error::InvalidArgument;
use crate::model::item::{Item, ItemId, ItemValue};
use crate::view_state::compressor::{compute_layout, max_visible_items, LayoutPath};
use crate::view_state::layout_config::{LayoutConfig, LayoutPolicy};
use crate::view_state::visible_window::{VisibleWindow, WindowAnchor};
use rand::Rng;
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, warn};

/// Window anchor for a structure: the end its removals take from.
pub fn window_anchor(kind: StructureKind) -> WindowAnchor {
    match kind.removal_end() {
        End::Back => WindowAnchor::Newest,
        End::Front => WindowAnchor::Oldest,
    }
}

/// What applying an [`Action`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// An item was pushed or enqueued.
    Inserted {
        /// The new item.
        item: Item,
    },
    /// An item was popped or dequeued.
    Removed {
        /// The removed item.
        item: Item,
    },
    /// The next item to be removed.
    Peeked {
        /// The item that would be removed next.
        item: Item,
        /// Its logical index.
        index: usize,
    },
    /// The collection was cleared.
    Reset {
        /// How many items were dropped.
        cleared: usize,
    },
    /// Random items were inserted.
    AddedRandom {
        /// Ids of the new items, oldest first.
        ids: Vec<ItemId>,
    },
    /// Remove, peek or reset on an empty collection; nothing changed.
    Empty,
    /// The verb belongs to the other structure; nothing changed.
    WrongStructure {
        /// The verb as typed.
        verb: &'static str,
    },
}

/// One visible item with its vertical offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// Index in the logical collection (0 = oldest).
    pub logical_index: usize,
    /// The item.
    pub item: Item,
    /// Offset from the top of the container.
    pub offset: f64,
}

/// Presentation-ready snapshot of a structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Structure being shown.
    pub structure: StructureKind,
    /// Visible items, oldest first.
    pub placements: Vec<Placement>,
    /// Position of the floor line.
    pub floor_offset: f64,
    /// Compression strategy used.
    pub path: LayoutPath,
    /// Spacing between interior items.
    pub spacing: f64,
    /// Budget the layout was computed for.
    pub budget: f64,
    /// Logical indices that are visible.
    pub window: Range<usize>,
    /// Logical length of the collection.
    pub logical_len: usize,
    /// Items present but not on screen.
    pub hidden_count: usize,
}

impl Frame {
    /// Placement of the item `remove` would take next, if visible.
    pub fn next_out(&self) -> Option<&Placement> {
        match self.structure.removal_end() {
            End::Front => self.placements.first(),
            End::Back => self.placements.last(),
        }
    }
}

/// A structure plus everything needed to lay it out.
#[derive(Debug, Clone)]
pub struct StructureView {
    collection: Collection,
    policy: LayoutPolicy,
    screen_height: f64,
    config: LayoutConfig,
}

impl StructureView {
    /// Create an empty view for `kind` at `screen_height`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the policy cannot produce a config for
    /// this height.
    pub fn new(
        kind: StructureKind,
        policy: LayoutPolicy,
        screen_height: f64,
    ) -> Result<Self, InvalidArgument> {
        let config = policy.config_for_screen(screen_height)?;
        Ok(Self {
            collection: Collection::new(kind),
            policy,
            screen_height,
            config,
        })
    }

    /// The logical collection.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Config derived for the current screen height.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Current screen height.
    pub fn screen_height(&self) -> f64 {
        self.screen_height
    }

    /// Budget handed to the compressor.
    pub fn budget(&self) -> f64 {
        self.config.max_budget()
    }

    /// Items the current budget can display at most.
    pub fn max_visible(&self) -> usize {
        // The budget comes from a validated config, so it is always positive.
        max_visible_items(self.budget(), &self.config).unwrap_or(0)
    }

    /// Re-derive the config for a new screen height.
    ///
    /// On error the previous config stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the policy rejects the height.
    pub fn resize(&mut self, screen_height: f64) -> Result<(), InvalidArgument> {
        let config = self.policy.config_for_screen(screen_height)?;
        debug!(
            screen_height,
            budget = config.max_budget(),
            spacing = config.normal_spacing(),
            "Resized structure view"
        );
        self.config = config;
        self.screen_height = screen_height;
        Ok(())
    }

    /// Visible window for the current collection and budget.
    pub fn window(&self) -> VisibleWindow {
        VisibleWindow::compute(
            self.collection.len(),
            self.max_visible(),
            window_anchor(self.collection.kind()),
        )
    }

    /// Apply a user action.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if an inserted value fails validation. The
    /// collection is left untouched in that case.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        action: &Action,
        rng: &mut R,
    ) -> Result<ActionOutcome, InvalidArgument> {
        let kind = self.collection.kind();
        let outcome = match action {
            Action::Insert { verb, .. } | Action::Remove { verb } if verb.structure() != kind => {
                warn!(verb = verb.as_str(), structure = %kind, "Rejected action for other structure");
                ActionOutcome::WrongStructure {
                    verb: verb.as_str(),
                }
            }
            Action::Insert { value, .. } => {
                let value = ItemValue::new(value)?;
                ActionOutcome::Inserted {
                    item: self.collection.insert(value).clone(),
                }
            }
            Action::Remove { .. } => match self.collection.remove() {
                Some(item) => ActionOutcome::Removed { item },
                None => ActionOutcome::Empty,
            },
            Action::Peek => match (self.collection.peek(), self.collection.peek_index()) {
                (Some(item), Some(index)) => ActionOutcome::Peeked {
                    item: item.clone(),
                    index,
                },
                _ => ActionOutcome::Empty,
            },
            Action::Reset => {
                let cleared = self.collection.len();
                if cleared == 0 {
                    ActionOutcome::Empty
                } else {
                    self.collection.reset();
                    ActionOutcome::Reset { cleared }
                }
            }
            Action::AddRandom(count) => ActionOutcome::AddedRandom {
                ids: self.collection.add_random(rng, *count),
            },
        };

        debug!(
            action = %action,
            len = self.collection.len(),
            "Applied action"
        );
        Ok(outcome)
    }

    /// Convenience for inserting with the structure's own verb.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `value` fails validation.
    pub fn insert(&mut self, value: &str) -> Result<&Item, InvalidArgument> {
        let value = ItemValue::new(value)?;
        Ok(self.collection.insert(value))
    }

    /// Convenience for removing with the structure's own verb.
    pub fn remove(&mut self) -> Option<Item> {
        self.collection.remove()
    }

    /// Lay out the visible items.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the budget is rejected by the
    /// compressor.
    pub fn frame(&self) -> Result<Frame, InvalidArgument> {
        let window = self.window();
        let budget = self.budget();
        let layout = compute_layout(window.len(), budget, &self.config)?;

        let placements = window
            .select(self.collection.as_deque())
            .zip(layout.offsets())
            .enumerate()
            .map(|(i, (item, &offset))| Placement {
                logical_index: window.start() + i,
                item: item.clone(),
                offset,
            })
            .collect();

        Ok(Frame {
            structure: self.collection.kind(),
            placements,
            floor_offset: layout.floor_offset(),
            path: layout.path(),
            spacing: layout.spacing(),
            budget,
            window: window.range(),
            logical_len: window.logical_len(),
            hidden_count: window.hidden_count(),
        })
    }
}
