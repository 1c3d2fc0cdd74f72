//! Element pool: an append-only arena of entries addressed by key.
//!
//! [`Pool`] owns every element a board knows about, placed or not. Entries
//! live in a `Vec` and are addressed by [`EntryHandle`]; a key map resolves
//! public IDs to handles. Entries are never removed, which keeps handles
//! stable and lets the position index store a plain handle per cell.

use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tabula_core::Position;

use crate::handle::EntryHandle;

/// Inline capacity of an entry's position list. Most board pieces sit on
/// a single cell; a handful of multi-placed elements spill to the heap.
const INLINE_POSITIONS: usize = 4;

/// Position list of a single pool entry.
pub(crate) type PositionList<const D: usize> = SmallVec<[Position<D>; INLINE_POSITIONS]>;

/// One stored element and every position currently holding it.
pub(crate) struct PoolEntry<K, T: ?Sized, const D: usize> {
    pub(crate) id: K,
    pub(crate) element: Arc<T>,
    /// Placement order is preserved; a position appears at most once.
    pub(crate) positions: PositionList<D>,
}

impl<K: Clone, T: ?Sized, const D: usize> Clone for PoolEntry<K, T, D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            element: Arc::clone(&self.element),
            positions: self.positions.clone(),
        }
    }
}

/// Append-only arena of [`PoolEntry`] values keyed by ID.
pub(crate) struct Pool<K, T: ?Sized, const D: usize> {
    entries: Vec<PoolEntry<K, T, D>>,
    keys: IndexMap<K, EntryHandle>,
}

impl<K, T, const D: usize> Pool<K, T, D>
where
    K: Clone + Eq + Hash,
    T: ?Sized,
{
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            keys: IndexMap::new(),
        }
    }

    /// Store a new entry with no placements.
    ///
    /// The caller has already checked that `id` is unused.
    pub(crate) fn insert(&mut self, id: K, element: Arc<T>) -> EntryHandle {
        debug_assert!(!self.keys.contains_key(&id));
        let handle = EntryHandle::new(self.entries.len());
        self.entries.push(PoolEntry {
            id: id.clone(),
            element,
            positions: SmallVec::new(),
        });
        self.keys.insert(id, handle);
        handle
    }

    pub(crate) fn handle_of(&self, id: &K) -> Option<EntryHandle> {
        self.keys.get(id).copied()
    }

    pub(crate) fn contains(&self, id: &K) -> bool {
        self.keys.contains_key(id)
    }

    pub(crate) fn entry(&self, handle: EntryHandle) -> &PoolEntry<K, T, D> {
        &self.entries[handle.index()]
    }

    pub(crate) fn entry_mut(&mut self, handle: EntryHandle) -> &mut PoolEntry<K, T, D> {
        &mut self.entries[handle.index()]
    }

    pub(crate) fn get(&self, id: &K) -> Option<&PoolEntry<K, T, D>> {
        self.handle_of(id).map(|h| self.entry(h))
    }

    /// Entries in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &PoolEntry<K, T, D>> {
        self.entries.iter()
    }
}

impl<K, T: ?Sized, const D: usize> Pool<K, T, D> {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Clone, T: ?Sized, const D: usize> Clone for Pool<K, T, D> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            keys: self.keys.clone(),
        }
    }
}
