//! Logical collection backing a visualized stack or queue.
//!
//! One ordered collection, oldest first. What differs between a stack and a
//! queue is only which end `remove` and `peek` read from; that choice lives in
//! [`StructureKind`].

use super::error::InvalidArgument;
use super::item::{Item, ItemId, ItemValue};
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;

/// Characters used by [`Collection::add_random`].
const RANDOM_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Longest random value produced by [`Collection::add_random`].
const RANDOM_VALUE_MAX_LEN: usize = 3;

/// Number of values the "add random" control inserts at once.
pub const RANDOM_BATCH: usize = 5;

/// Kind of data structure being visualized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    /// Last in, first out.
    Stack,
    /// First in, first out.
    Queue,
}

/// End of the collection an operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum End {
    /// Oldest item (logical index 0).
    Front,
    /// Newest item (logical index `len - 1`).
    Back,
}

impl StructureKind {
    /// Every structure the visualizer offers, in menu order.
    pub const ALL: [Self; 2] = [Self::Stack, Self::Queue];

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Stack => "Stack",
            Self::Queue => "Queue",
        }
    }

    /// Lowercase name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }

    /// Verb for inserting an item.
    pub fn insert_verb(&self) -> &'static str {
        match self {
            Self::Stack => "push",
            Self::Queue => "enqueue",
        }
    }

    /// Verb for removing an item.
    pub fn remove_verb(&self) -> &'static str {
        match self {
            Self::Stack => "pop",
            Self::Queue => "dequeue",
        }
    }

    /// End `remove` and `peek` read from. Inserts always go to the back.
    pub fn removal_end(&self) -> End {
        match self {
            Self::Stack => End::Back,
            Self::Queue => End::Front,
        }
    }
}

impl std::fmt::Display for StructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StructureKind {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stack" => Ok(Self::Stack),
            "queue" => Ok(Self::Queue),
            _ => Err(InvalidArgument::new(
                "structure",
                s,
                "must be `stack` or `queue`",
            )),
        }
    }
}

/// Ordered items, oldest first, with stack or queue removal semantics.
///
/// # Examples
///
/// ```
/// use algoviz::model::{Collection, ItemValue, StructureKind};
///
/// let mut queue = Collection::new(StructureKind::Queue);
/// queue.insert(ItemValue::new("a").unwrap());
/// queue.insert(ItemValue::new("b").unwrap());
/// assert_eq!(queue.remove().unwrap().value.as_str(), "a");
///
/// let mut stack = Collection::new(StructureKind::Stack);
/// stack.insert(ItemValue::new("a").unwrap());
/// stack.insert(ItemValue::new("b").unwrap());
/// assert_eq!(stack.remove().unwrap().value.as_str(), "b");
/// ```
#[derive(Debug, Clone)]
pub struct Collection {
    kind: StructureKind,
    items: VecDeque<Item>,
    next_id: ItemId,
}

impl Collection {
    /// Create an empty collection.
    pub fn new(kind: StructureKind) -> Self {
        Self {
            kind,
            items: VecDeque::new(),
            next_id: ItemId::default(),
        }
    }

    /// Structure semantics of this collection.
    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at logical `index` (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Items oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Underlying storage, oldest first.
    pub fn as_deque(&self) -> &VecDeque<Item> {
        &self.items
    }

    /// Append at the back, assigning the next id.
    pub fn push_back(&mut self, value: ItemValue) -> &Item {
        let id = self.next_id;
        self.next_id = id.next();
        self.items.push_back(Item::new(id, value));
        &self.items[self.items.len() - 1]
    }

    /// Remove the oldest item.
    pub fn pop_front(&mut self) -> Option<Item> {
        self.items.pop_front()
    }

    /// Remove the newest item.
    pub fn pop_back(&mut self) -> Option<Item> {
        self.items.pop_back()
    }

    /// Push (stack) or enqueue (queue).
    pub fn insert(&mut self, value: ItemValue) -> &Item {
        self.push_back(value)
    }

    /// Pop (stack) or dequeue (queue). `None` when empty.
    pub fn remove(&mut self) -> Option<Item> {
        match self.kind.removal_end() {
            End::Front => self.pop_front(),
            End::Back => self.pop_back(),
        }
    }

    /// The item `remove` would return next.
    pub fn peek(&self) -> Option<&Item> {
        match self.kind.removal_end() {
            End::Front => self.items.front(),
            End::Back => self.items.back(),
        }
    }

    /// Logical index of the item `remove` would return next.
    pub fn peek_index(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(match self.kind.removal_end() {
            End::Front => 0,
            End::Back => self.len() - 1,
        })
    }

    /// Drop every item. Ids keep increasing afterwards.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Append `count` random values of 1 to 3 alphanumeric characters.
    ///
    /// Returns the ids of the inserted items, oldest first.
    pub fn add_random<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> Vec<ItemId> {
        (0..count)
            .map(|_| {
                let value = random_value(rng);
                self.push_back(value).id
            })
            .collect()
    }
}

/// Build a random value that always satisfies [`ItemValue`]'s rules.
fn random_value<R: Rng + ?Sized>(rng: &mut R) -> ItemValue {
    let len = rng.gen_range(1..=RANDOM_VALUE_MAX_LEN);
    let text: String = (0..len)
        .map(|_| RANDOM_ALPHABET[rng.gen_range(0..RANDOM_ALPHABET.len())] as char)
        .collect();
    ItemValue::from_generated(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn value(s: &str) -> ItemValue {
        ItemValue::new(s).unwrap()
    }

    fn values(collection: &Collection) -> Vec<&str> {
        collection.iter().map(|item| item.value.as_str()).collect()
    }

    mod structure_kind {
        use super::*;

        #[test]
        fn verbs_match_structure() {
            assert_eq!(StructureKind::Stack.insert_verb(), "push");
            assert_eq!(StructureKind::Stack.remove_verb(), "pop");
            assert_eq!(StructureKind::Queue.insert_verb(), "enqueue");
            assert_eq!(StructureKind::Queue.remove_verb(), "dequeue");
        }

        #[test]
        fn parses_case_insensitively() {
            assert_eq!("Stack".parse::<StructureKind>(), Ok(StructureKind::Stack));
            assert_eq!("QUEUE".parse::<StructureKind>(), Ok(StructureKind::Queue));
        }

        #[test]
        fn rejects_unknown_structure() {
            let err = "tree".parse::<StructureKind>().unwrap_err();
            assert_eq!(err.argument(), "structure");
        }

        #[test]
        fn display_matches_cli_spelling() {
            assert_eq!(StructureKind::Queue.to_string(), "queue");
            assert_eq!(StructureKind::Stack.display_name(), "Stack");
        }

        #[test]
        fn all_lists_every_kind_once() {
            assert_eq!(StructureKind::ALL.len(), 2);
            assert_ne!(StructureKind::ALL[0], StructureKind::ALL[1]);
        }
    }

    mod stack {
        use super::*;

        #[test]
        fn remove_takes_newest() {
            let mut stack = Collection::new(StructureKind::Stack);
            stack.insert(value("a"));
            stack.insert(value("b"));
            stack.insert(value("c"));
            assert_eq!(stack.remove().map(|i| i.value), Some(value("c")));
            assert_eq!(values(&stack), vec!["a", "b"]);
        }

        #[test]
        fn peek_reads_newest_without_removing() {
            let mut stack = Collection::new(StructureKind::Stack);
            stack.insert(value("a"));
            stack.insert(value("b"));
            assert_eq!(stack.peek().map(|i| i.value.as_str()), Some("b"));
            assert_eq!(stack.peek_index(), Some(1));
            assert_eq!(stack.len(), 2);
        }
    }

    mod queue {
        use super::*;

        #[test]
        fn remove_takes_oldest() {
            let mut queue = Collection::new(StructureKind::Queue);
            queue.insert(value("a"));
            queue.insert(value("b"));
            queue.insert(value("c"));
            assert_eq!(queue.remove().map(|i| i.value), Some(value("a")));
            assert_eq!(values(&queue), vec!["b", "c"]);
        }

        #[test]
        fn peek_reads_oldest() {
            let mut queue = Collection::new(StructureKind::Queue);
            queue.insert(value("a"));
            queue.insert(value("b"));
            assert_eq!(queue.peek().map(|i| i.value.as_str()), Some("a"));
            assert_eq!(queue.peek_index(), Some(0));
        }
    }

    mod shared {
        use super::*;

        #[test]
        fn remove_on_empty_is_none() {
            for kind in StructureKind::ALL {
                let mut collection = Collection::new(kind);
                assert_eq!(collection.remove(), None);
                assert_eq!(collection.peek(), None);
                assert_eq!(collection.peek_index(), None);
            }
        }

        #[test]
        fn ids_are_monotonic_across_reset() {
            let mut stack = Collection::new(StructureKind::Stack);
            let first = stack.insert(value("a")).id;
            stack.reset();
            assert!(stack.is_empty());
            let second = stack.insert(value("b")).id;
            assert!(second > first, "ids must not be reused after reset");
        }

        #[test]
        fn get_indexes_oldest_first() {
            let mut queue = Collection::new(StructureKind::Queue);
            queue.insert(value("a"));
            queue.insert(value("b"));
            assert_eq!(queue.get(0).map(|i| i.value.as_str()), Some("a"));
            assert_eq!(queue.get(1).map(|i| i.value.as_str()), Some("b"));
            assert_eq!(queue.get(2), None);
        }

        #[test]
        fn raw_primitives_ignore_kind() {
            let mut stack = Collection::new(StructureKind::Stack);
            stack.push_back(value("a"));
            stack.push_back(value("b"));
            assert_eq!(stack.pop_front().map(|i| i.value), Some(value("a")));
        }
    }

    mod add_random {
        use super::*;

        #[test]
        fn inserts_requested_count() {
            let mut rng = StdRng::seed_from_u64(7);
            let mut stack = Collection::new(StructureKind::Stack);
            let ids = stack.add_random(&mut rng, RANDOM_BATCH);
            assert_eq!(ids.len(), RANDOM_BATCH);
            assert_eq!(stack.len(), RANDOM_BATCH);
        }

        #[test]
        fn values_are_short_alphanumeric() {
            let mut rng = StdRng::seed_from_u64(42);
            let mut queue = Collection::new(StructureKind::Queue);
            queue.add_random(&mut rng, 100);
            for item in queue.iter() {
                let s = item.value.as_str();
                assert!((1..=3).contains(&s.len()), "bad length: {s:?}");
                assert!(s.chars().all(|c| c.is_ascii_alphanumeric()), "bad chars: {s:?}");
            }
        }

        #[test]
        fn same_seed_same_values() {
            let mut a = Collection::new(StructureKind::Stack);
            let mut b = Collection::new(StructureKind::Stack);
            a.add_random(&mut StdRng::seed_from_u64(1), 10);
            b.add_random(&mut StdRng::seed_from_u64(1), 10);
            assert_eq!(values(&a), values(&b));
        }

        #[test]
        fn ids_continue_after_existing_items() {
            let mut stack = Collection::new(StructureKind::Stack);
            let existing = stack.insert(value("x")).id;
            let ids = stack.add_random(&mut StdRng::seed_from_u64(3), 2);
            assert_eq!(ids, vec![existing.next(), existing.next().next()]);
        }
    }
}
