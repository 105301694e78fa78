//! Items held by a visualized collection.

use super::error::InvalidArgument;
use serde::Serialize;

/// Maximum number of characters a value may hold.
///
/// Matches the input field limit of the interactive controls.
pub const MAX_VALUE_CHARS: usize = 30;

/// Stable identity of an item, assigned by its collection.
///
/// Ids increase monotonically and are never reused within a collection, so a
/// presentation layer can key animations on them across mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Create an id from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw id value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Validated item text.
///
/// Input is trimmed; the result must be non-empty and at most
/// [`MAX_VALUE_CHARS`] characters long.
///
/// # Examples
///
/// ```
/// use algoviz::model::ItemValue;
///
/// let value = ItemValue::new("  42 ").unwrap();
/// assert_eq!(value.as_str(), "42");
/// assert!(ItemValue::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemValue(String);

impl ItemValue {
    /// Smart constructor: trims and validates `raw`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvalidArgument> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidArgument::new("value", trimmed, "must not be empty"));
        }
        if trimmed.chars().count() > MAX_VALUE_CHARS {
            return Err(InvalidArgument::new(
                "value",
                trimmed,
                "must be at most 30 characters",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wrap text produced internally that is known to satisfy the rules.
    pub(super) fn from_generated(text: String) -> Self {
        debug_assert!(
            !text.trim().is_empty() && text.chars().count() <= MAX_VALUE_CHARS,
            "generated value violates ItemValue rules: {text:?}"
        );
        Self(text)
    }

    /// The value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One element of a visualized collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Identity, unique within the owning collection.
    pub id: ItemId,
    /// Displayed text.
    pub value: ItemValue,
}

impl Item {
    /// Create a new item.
    pub fn new(id: ItemId, value: ItemValue) -> Self {
        Self { id, value }
    }
}
