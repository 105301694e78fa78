//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod collection;
pub mod error;
pub mod item;

// Re-export for convenience
pub use collection::{Collection, End, StructureKind, RANDOM_BATCH};
pub use error::{AppError, InvalidArgument};
pub use item::{Item, ItemId, ItemValue, MAX_VALUE_CHARS};
