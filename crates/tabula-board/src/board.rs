//! The N-dimensional board container.
//!
//! A [`Board`] stores a pool of uniquely-identified elements and an index
//! from [`Position`] to the pool entry placed there. The two structures are
//! two views of one relation:
//!
//! - a position is in the index iff it is in the position list of the entry
//!   the index points to, and
//! - a position points to at most one entry.
//!
//! Only the private `link` and `unlink` primitives touch either
//! structure's placement data. Every public mutator validates all of its
//! preconditions first and only then calls those primitives, so an `Err`
//! never leaves the board half-updated.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;
use tabula_core::{
    inside_space, BoardError, ConfigError, IdErrorKind, Limits, Position, PositionErrorKind,
};
use tracing::{debug, trace};

use crate::config::BoardConfig;
use crate::handle::EntryHandle;
use crate::pool::{Pool, PoolEntry};
use crate::view::ElementView;

/// A board of `D` axes holding elements of type `T` identified by `K`.
///
/// `T` may be unsized: use `Board<K, dyn Trait, D>` to store any element
/// implementing a capability trait, passing elements as `Arc<Concrete>` or
/// `Box<Concrete>`.
///
/// # Thread Safety
///
/// The board does no internal locking. All mutators take `&mut self`, so
/// sharing a board across threads requires an external lock.
pub struct Board<K, T: ?Sized, const D: usize> {
    name: String,
    limits: Limits<D>,
    pool: Pool<K, T, D>,
    table: IndexMap<Position<D>, EntryHandle>,
}

impl<K, T, const D: usize> Board<K, T, D>
where
    K: Clone + Eq + Hash + fmt::Debug,
    T: ?Sized,
{
    /// Create an empty board.
    pub fn new(name: impl Into<String>, limits: impl Into<Limits<D>>) -> Self {
        Self {
            name: name.into(),
            limits: limits.into(),
            pool: Pool::new(),
            table: IndexMap::new(),
        }
    }

    /// Create an empty board from a validated config.
    pub fn from_config(config: BoardConfig<D>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.name, config.limits))
    }

    /// Name of the board.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Limits fixed at construction.
    pub fn limits(&self) -> Limits<D> {
        self.limits
    }

    /// Whether `position` is a placeable cell of this board.
    pub fn inside_space(&self, position: &Position<D>) -> bool {
        inside_space(position, &self.limits)
    }

    // ── error helpers ──────────────────────────────────────────────

    fn id_error(&self, id: &K, kind: IdErrorKind) -> BoardError<K, D> {
        BoardError::Id {
            board: self.name.clone(),
            id: id.clone(),
            kind,
        }
    }

    fn position_error(&self, position: &Position<D>, kind: PositionErrorKind) -> BoardError<K, D> {
        BoardError::Position {
            board: self.name.clone(),
            position: *position,
            kind,
        }
    }

    fn check_limits(&self, position: &Position<D>) -> Result<(), BoardError<K, D>> {
        if self.inside_space(position) {
            Ok(())
        } else {
            Err(self.position_error(position, PositionErrorKind::OutLimits))
        }
    }

    fn existing(&self, id: &K) -> Result<EntryHandle, BoardError<K, D>> {
        self.pool
            .handle_of(id)
            .ok_or_else(|| self.id_error(id, IdErrorKind::NonExistent))
    }

    /// Resolve `id` to its only placement.
    fn single_placement(&self, id: &K) -> Result<(EntryHandle, Position<D>), BoardError<K, D>> {
        let handle = self.existing(id)?;
        match self.pool.entry(handle).positions.as_slice() {
            [] => Err(self.id_error(id, IdErrorKind::NotOnBoard)),
            [only] => Ok((handle, *only)),
            _ => Err(self.id_error(id, IdErrorKind::MultiSet)),
        }
    }

    // ── placement primitives ───────────────────────────────────────

    /// Record that `handle` is placed at `position`.
    ///
    /// The caller guarantees `position` is free.
    fn link(&mut self, handle: EntryHandle, position: Position<D>) {
        debug_assert!(!self.table.contains_key(&position));
        self.pool.entry_mut(handle).positions.push(position);
        self.table.insert(position, handle);
        trace!(board = %self.name, %handle, %position, "linked");
    }

    /// Drop whatever placement occupies `position`, returning its owner.
    fn unlink(&mut self, position: &Position<D>) -> Option<EntryHandle> {
        let handle = self.table.swap_remove(position)?;
        let positions = &mut self.pool.entry_mut(handle).positions;
        if let Some(i) = positions.iter().position(|p| p == position) {
            positions.remove(i);
        }
        trace!(board = %self.name, %handle, %position, "unlinked");
        Some(handle)
    }

    fn view(&self, handle: EntryHandle) -> ElementView<K, T, D> {
        let PoolEntry {
            id,
            element,
            positions,
        } = self.pool.entry(handle);
        ElementView {
            id: id.clone(),
            element: Arc::clone(element),
            positions: positions.to_vec(),
        }
    }

    // ── pool ───────────────────────────────────────────────────────

    /// Add an element to the pool without placing it.
    ///
    /// Fails with [`IdErrorKind::InUse`] if `id` is already assigned.
    pub fn add_element(
        &mut self,
        id: K,
        element: impl Into<Arc<T>>,
    ) -> Result<(), BoardError<K, D>> {
        if self.pool.contains(&id) {
            return Err(self.id_error(&id, IdErrorKind::InUse));
        }
        debug!(board = %self.name, ?id, "element added");
        self.pool.insert(id, element.into());
        Ok(())
    }

    /// Replace the element stored under `id`, keeping its placements.
    ///
    /// Fails with [`IdErrorKind::NonExistent`] if `id` is unknown.
    pub fn update_element(
        &mut self,
        id: &K,
        element: impl Into<Arc<T>>,
    ) -> Result<(), BoardError<K, D>> {
        let handle = self.existing(id)?;
        self.pool.entry_mut(handle).element = element.into();
        debug!(board = %self.name, ?id, "element updated");
        Ok(())
    }

    // ── placement ──────────────────────────────────────────────────

    /// Place the element `id` at `position`.
    ///
    /// Checks, in order:
    /// 1. `id` exists ([`IdErrorKind::NonExistent`]);
    /// 2. unless `allow_multiple`, `id` is not placed yet ([`IdErrorKind::MonoSet`]);
    /// 3. `position` is inside the limits ([`PositionErrorKind::OutLimits`]);
    /// 4. `position` is free ([`PositionErrorKind::Occupied`]).
    pub fn set_element(
        &mut self,
        id: &K,
        position: Position<D>,
        allow_multiple: bool,
    ) -> Result<(), BoardError<K, D>> {
        let handle = self.existing(id)?;
        if !allow_multiple && !self.pool.entry(handle).positions.is_empty() {
            return Err(self.id_error(id, IdErrorKind::MonoSet));
        }
        self.check_limits(&position)?;
        if self.table.contains_key(&position) {
            return Err(self.position_error(&position, PositionErrorKind::Occupied));
        }
        self.link(handle, position);
        debug!(board = %self.name, ?id, %position, "element set");
        Ok(())
    }

    /// Remove the element `id` from the surface.
    ///
    /// Fails with [`IdErrorKind::NonExistent`] if `id` is unknown,
    /// [`IdErrorKind::NotOnBoard`] if it is not placed, and
    /// [`IdErrorKind::MultiSet`] if it has several placements and
    /// `unset_all` is false. The pool entry is kept.
    pub fn unset_element(&mut self, id: &K, unset_all: bool) -> Result<(), BoardError<K, D>> {
        let handle = self.existing(id)?;
        let count = self.pool.entry(handle).positions.len();
        if count == 0 {
            return Err(self.id_error(id, IdErrorKind::NotOnBoard));
        }
        if !unset_all && count > 1 {
            return Err(self.id_error(id, IdErrorKind::MultiSet));
        }
        let positions = self.pool.entry(handle).positions.clone();
        for position in &positions {
            self.unlink(position);
        }
        debug!(board = %self.name, ?id, removed = count, "element unset");
        Ok(())
    }

    /// Remove the single placement at `position`.
    ///
    /// Other placements of the same element are untouched. Fails with
    /// [`PositionErrorKind::OutLimits`] or [`PositionErrorKind::Empty`].
    pub fn unset_at(&mut self, position: &Position<D>) -> Result<(), BoardError<K, D>> {
        self.check_limits(position)?;
        match self.unlink(position) {
            Some(handle) => {
                debug!(board = %self.name, id = ?self.pool.entry(handle).id, %position, "position unset");
                Ok(())
            }
            None => Err(self.position_error(position, PositionErrorKind::Empty)),
        }
    }

    // ── lookup ─────────────────────────────────────────────────────

    /// Look up an element by ID.
    ///
    /// Fails with [`IdErrorKind::NonExistent`] if `id` is unknown.
    pub fn element(&self, id: &K) -> Result<ElementView<K, T, D>, BoardError<K, D>> {
        let handle = self.existing(id)?;
        Ok(self.view(handle))
    }

    /// Look up the element placed at `position`.
    ///
    /// Fails with [`PositionErrorKind::OutLimits`] or
    /// [`PositionErrorKind::Empty`].
    pub fn element_at(&self, position: &Position<D>) -> Result<ElementView<K, T, D>, BoardError<K, D>> {
        self.check_limits(position)?;
        self.find_at(position)
            .ok_or_else(|| self.position_error(position, PositionErrorKind::Empty))
    }

    /// The element placed at `position`, if any. Does not check limits;
    /// positions outside them are never occupied.
    pub fn find_at(&self, position: &Position<D>) -> Option<ElementView<K, T, D>> {
        self.table.get(position).map(|&h| self.view(h))
    }

    // ── movement ───────────────────────────────────────────────────

    /// Move the placement at `origin` to `destiny`.
    ///
    /// Fails with [`PositionErrorKind::OutLimits`] if either position is
    /// outside the limits (origin checked first), [`PositionErrorKind::Empty`]
    /// if `origin` is free, and [`PositionErrorKind::Occupied`] if `destiny`
    /// holds an element and `override_occupant` is false. With
    /// `override_occupant`, the occupant's placement at `destiny` is dropped;
    /// its pool entry is kept.
    pub fn move_from(
        &mut self,
        origin: &Position<D>,
        destiny: Position<D>,
        override_occupant: bool,
    ) -> Result<(), BoardError<K, D>> {
        self.check_limits(origin)?;
        self.check_limits(&destiny)?;
        let handle = match self.table.get(origin) {
            Some(&h) => h,
            None => return Err(self.position_error(origin, PositionErrorKind::Empty)),
        };
        self.relocate(handle, *origin, destiny, override_occupant)
    }

    /// Move the single placement of `id` to `destiny`.
    ///
    /// Fails with [`IdErrorKind::NonExistent`], [`IdErrorKind::NotOnBoard`]
    /// or [`IdErrorKind::MultiSet`] unless `id` has exactly one placement,
    /// then as [`move_from`](Self::move_from) for `destiny`.
    pub fn move_element(
        &mut self,
        id: &K,
        destiny: Position<D>,
        override_occupant: bool,
    ) -> Result<(), BoardError<K, D>> {
        let (handle, origin) = self.single_placement(id)?;
        self.check_limits(&destiny)?;
        self.relocate(handle, origin, destiny, override_occupant)
    }

    /// Shared tail of both move operations; `origin` is a placement of
    /// `handle` and both positions are inside the limits.
    fn relocate(
        &mut self,
        handle: EntryHandle,
        origin: Position<D>,
        destiny: Position<D>,
        override_occupant: bool,
    ) -> Result<(), BoardError<K, D>> {
        if self.occupant(&destiny).is_some() {
            if !override_occupant {
                return Err(self.position_error(&destiny, PositionErrorKind::Occupied));
            }
            if destiny == origin {
                return Ok(());
            }
            if let Some(evicted) = self.unlink(&destiny) {
                debug!(
                    board = %self.name,
                    evicted = ?self.pool.entry(evicted).id,
                    position = %destiny,
                    "occupant evicted"
                );
            }
        }
        self.unlink(&origin);
        self.link(handle, destiny);
        debug!(
            board = %self.name,
            id = ?self.pool.entry(handle).id,
            from = %origin,
            to = %destiny,
            "element moved"
        );
        Ok(())
    }

    // ── queries ────────────────────────────────────────────────────

    /// Whether `id` has a pool entry.
    pub fn contains_id(&self, id: &K) -> bool {
        self.pool.contains(id)
    }

    /// The element stored under `id`, without building a view.
    pub fn get(&self, id: &K) -> Option<&Arc<T>> {
        self.pool.get(id).map(|e| &e.element)
    }

    /// ID of the element placed at `position`, if any.
    pub fn occupant(&self, position: &Position<D>) -> Option<&K> {
        self.table
            .get(position)
            .map(|&h| &self.pool.entry(h).id)
    }

    /// Whether an element is placed at `position`.
    pub fn is_occupied(&self, position: &Position<D>) -> bool {
        self.table.contains_key(position)
    }

    /// Placements of `id`, or `None` if `id` is unknown.
    pub fn positions_of(&self, id: &K) -> Option<&[Position<D>]> {
        self.pool.get(id).map(|e| e.positions.as_slice())
    }

    /// Number of elements in the pool, placed or not.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.pool.len() == 0
    }

    /// Number of occupied positions.
    pub fn placed_count(&self) -> usize {
        self.table.len()
    }

    /// Every occupied position with the ID placed there, in no particular
    /// order.
    pub fn placements(&self) -> impl Iterator<Item = (&Position<D>, &K)> {
        self.table
            .iter()
            .map(|(p, &h)| (p, &self.pool.entry(h).id))
    }

    /// Every pool entry with its element and placements, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&K, &Arc<T>, &[Position<D>])> {
        self.pool
            .iter()
            .map(|e| (&e.id, &e.element, e.positions.as_slice()))
    }
}

impl<K, T, const D: usize> Default for Board<K, T, D>
where
    K: Clone + Eq + Hash + fmt::Debug,
    T: ?Sized,
{
    fn default() -> Self {
        let config = BoardConfig::default();
        Self::new(config.name, config.limits)
    }
}

impl<K: Clone, T: ?Sized, const D: usize> Clone for Board<K, T, D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            limits: self.limits,
            pool: self.pool.clone(),
            table: self.table.clone(),
        }
    }
}

impl<K, T: ?Sized, const D: usize> fmt::Debug for Board<K, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("name", &self.name)
            .field("limits", &self.limits)
            .field("elements", &self.pool.len())
            .field("placed", &self.table.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type B = Board<u32, String, 2>;

    fn p(x: u32, y: u32) -> Position<2> {
        Position::new([x, y])
    }

    fn board() -> B {
        let mut b = B::new("test", [4, 4]);
        b.add_element(1, "Hello".to_string()).unwrap();
        b.add_element(2, "Hello".to_string()).unwrap();
        b
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut b = board();
        let err = b.add_element(1, "again".to_string()).unwrap_err();
        assert_eq!(err.id_kind(), Some(IdErrorKind::InUse));
        assert_eq!(err.id(), Some(&1));
        assert_eq!(err.board_name(), "test");
        assert_eq!(&*b.element(&1).unwrap().element, "Hello");
    }

    #[test]
    fn update_keeps_positions() {
        let mut b = board();
        b.set_element(&1, p(3, 2), false).unwrap();
        b.update_element(&1, "Bye".to_string()).unwrap();
        let view = b.element(&1).unwrap();
        assert_eq!(&*view.element, "Bye");
        assert_eq!(view.positions, vec![p(3, 2)]);
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut b = board();
        let err = b.update_element(&9, "x".to_string()).unwrap_err();
        assert_eq!(err.id_kind(), Some(IdErrorKind::NonExistent));
    }

    #[test]
    fn set_checks_in_order() {
        let mut b = board();
        // Unknown id wins over a bad position.
        let err = b.set_element(&9, p(0, 0), false).unwrap_err();
        assert_eq!(err.id_kind(), Some(IdErrorKind::NonExistent));

        b.set_element(&1, p(1, 1), false).unwrap();
        // MonoSet wins over an out-of-limits position.
        let err = b.set_element(&1, p(9, 9), false).unwrap_err();
        assert_eq!(err.id_kind(), Some(IdErrorKind::MonoSet));

        // OutLimits wins over Occupied.
        let err = b.set_element(&2, p(5, 1), false).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::OutLimits));

        let err = b.set_element(&2, p(1, 1), false).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::Occupied));
        assert_eq!(err.position(), Some(&p(1, 1)));
    }

    #[test]
    fn zero_coordinate_is_out_of_limits_even_unbounded() {
        let mut b: Board<u32, u8, 2> = Board::new("open", Limits::unbounded());
        b.add_element(1, 0).unwrap();
        let err = b.set_element(&1, p(0, 5), false).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::OutLimits));
        b.set_element(&1, p(1_000, 5), false).unwrap();
    }

    #[test]
    fn unset_by_id_requires_single_unless_all() {
        let mut b = board();
        let err = b.unset_element(&1, false).unwrap_err();
        assert_eq!(err.id_kind(), Some(IdErrorKind::NotOnBoard));

        b.set_element(&1, p(3, 2), false).unwrap();
        b.set_element(&1, p(1, 2), true).unwrap();
        let err = b.unset_element(&1, false).unwrap_err();
        assert_eq!(err.id_kind(), Some(IdErrorKind::MultiSet));
        assert_eq!(b.placed_count(), 2);

        b.unset_element(&1, true).unwrap();
        assert_eq!(b.placed_count(), 0);
        assert!(b.contains_id(&1));
        assert_eq!(b.positions_of(&1), Some(&[][..]));
    }

    #[test]
    fn unset_at_removes_only_that_placement() {
        let mut b = board();
        b.set_element(&1, p(3, 2), false).unwrap();
        b.set_element(&1, p(1, 2), true).unwrap();
        b.unset_at(&p(1, 2)).unwrap();
        assert_eq!(b.positions_of(&1), Some(&[p(3, 2)][..]));
        assert_eq!(b.occupant(&p(3, 2)), Some(&1));
        assert!(!b.is_occupied(&p(1, 2)));
    }

    #[test]
    fn unset_at_errors() {
        let mut b = board();
        let err = b.unset_at(&p(5, 5)).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::OutLimits));
        let err = b.unset_at(&p(2, 2)).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::Empty));
    }

    #[test]
    fn element_at_returns_owner_with_all_positions() {
        let mut b = board();
        b.set_element(&2, p(4, 4), false).unwrap();
        b.set_element(&2, p(1, 4), true).unwrap();
        let view = b.element_at(&p(1, 4)).unwrap();
        assert_eq!(view.id, 2);
        assert_eq!(view.positions, vec![p(4, 4), p(1, 4)]);

        let err = b.element_at(&p(2, 2)).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::Empty));
        let err = b.element_at(&p(2, 0)).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::OutLimits));
    }

    #[test]
    fn move_from_relocates_one_placement() {
        let mut b = board();
        b.set_element(&1, p(1, 1), false).unwrap();
        b.set_element(&1, p(2, 2), true).unwrap();
        b.move_from(&p(1, 1), p(3, 3), false).unwrap();
        assert_eq!(b.positions_of(&1), Some(&[p(2, 2), p(3, 3)][..]));
        assert!(!b.is_occupied(&p(1, 1)));
    }

    #[test]
    fn move_from_errors_in_order() {
        let mut b = board();
        let err = b.move_from(&p(0, 1), p(9, 9), false).unwrap_err();
        assert_eq!(err.position(), Some(&p(0, 1)));
        let err = b.move_from(&p(1, 1), p(9, 9), false).unwrap_err();
        assert_eq!(err.position(), Some(&p(9, 9)));
        assert_eq!(err.position_kind(), Some(PositionErrorKind::OutLimits));
        let err = b.move_from(&p(1, 1), p(2, 2), false).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::Empty));
    }

    #[test]
    fn move_by_id_rejects_ambiguous_or_unplaced() {
        let mut b = board();
        let err = b.move_element(&9, p(1, 1), false).unwrap_err();
        assert_eq!(err.id_kind(), Some(IdErrorKind::NonExistent));
        let err = b.move_element(&1, p(1, 1), false).unwrap_err();
        assert_eq!(err.id_kind(), Some(IdErrorKind::NotOnBoard));
        b.set_element(&1, p(1, 1), false).unwrap();
        b.set_element(&1, p(1, 2), true).unwrap();
        let err = b.move_element(&1, p(3, 3), false).unwrap_err();
        assert_eq!(err.id_kind(), Some(IdErrorKind::MultiSet));
    }

    #[test]
    fn move_override_evicts_occupant_but_keeps_pool_entry() {
        let mut b = board();
        b.set_element(&1, p(3, 2), false).unwrap();
        b.set_element(&2, p(1, 1), false).unwrap();

        let err = b.move_element(&1, p(1, 1), false).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::Occupied));
        assert_eq!(b.occupant(&p(1, 1)), Some(&2));
        assert_eq!(b.occupant(&p(3, 2)), Some(&1));

        b.move_element(&1, p(1, 1), true).unwrap();
        assert_eq!(b.occupant(&p(1, 1)), Some(&1));
        assert!(!b.is_occupied(&p(3, 2)));
        assert!(b.contains_id(&2));
        assert!(!b.element(&2).unwrap().is_placed());
    }

    #[test]
    fn move_onto_itself() {
        let mut b = board();
        b.set_element(&1, p(2, 2), false).unwrap();
        let err = b.move_from(&p(2, 2), p(2, 2), false).unwrap_err();
        assert_eq!(err.position_kind(), Some(PositionErrorKind::Occupied));
        b.move_from(&p(2, 2), p(2, 2), true).unwrap();
        assert_eq!(b.positions_of(&1), Some(&[p(2, 2)][..]));
        assert_eq!(b.placed_count(), 1);
    }

    #[test]
    fn move_override_onto_own_other_placement() {
        let mut b = board();
        b.set_element(&1, p(1, 1), false).unwrap();
        b.set_element(&1, p(2, 2), true).unwrap();
        b.move_from(&p(1, 1), p(2, 2), true).unwrap();
        assert_eq!(b.positions_of(&1), Some(&[p(2, 2)][..]));
        assert_eq!(b.placed_count(), 1);
    }

    #[test]
    fn views_are_shared_handles() {
        let mut b = board();
        let before = b.element(&1).unwrap();
        let again = b.element(&1).unwrap();
        assert!(Arc::ptr_eq(&before.element, &again.element));
        b.update_element(&1, "Bye".to_string()).unwrap();
        assert_eq!(&*before.element, "Hello");
        assert_eq!(&*b.element(&1).unwrap().element, "Bye");
    }

    #[test]
    fn trait_object_elements() {
        trait Named {
            fn name(&self) -> &str;
        }
        struct Pawn;
        struct Rook;
        impl Named for Pawn {
            fn name(&self) -> &str {
                "pawn"
            }
        }
        impl Named for Rook {
            fn name(&self) -> &str {
                "rook"
            }
        }

        let mut b: Board<u8, dyn Named, 2> = Board::new("dyn", [8, 8]);
        b.add_element(1, Arc::new(Pawn) as Arc<dyn Named>).unwrap();
        b.add_element(2, Box::new(Rook) as Box<dyn Named>).unwrap();
        b.set_element(&2, p(1, 1), false).unwrap();
        assert_eq!(b.element_at(&p(1, 1)).unwrap().element.name(), "rook");
        b.update_element(&2, Arc::new(Pawn) as Arc<dyn Named>).unwrap();
        assert_eq!(b.element_at(&p(1, 1)).unwrap().element.name(), "pawn");
    }

    #[test]
    fn from_config_validates() {
        let b = B::from_config(BoardConfig::new("cfg", Limits::new([2, 2]))).unwrap();
        assert_eq!(b.name(), "cfg");
        assert_eq!(b.limits(), Limits::new([2, 2]));
        let err = B::from_config(BoardConfig::default().with_name("")).unwrap_err();
        assert_eq!(err, ConfigError::EmptyName);
    }

    #[test]
    fn default_board_is_unnamed_and_unbounded() {
        let b = B::default();
        assert_eq!(b.name(), "Unnamed board");
        assert!(b.inside_space(&p(u32::MAX, 1)));
        assert!(b.is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let mut b = board();
        b.set_element(&1, p(1, 1), false).unwrap();
        let snapshot = b.clone();
        b.move_element(&1, p(2, 2), false).unwrap();
        assert_eq!(snapshot.occupant(&p(1, 1)), Some(&1));
        assert_eq!(b.occupant(&p(2, 2)), Some(&1));
    }

    #[test]
    fn get_borrows_stored_element() {
        let mut b = board();
        assert_eq!(b.get(&1).map(|e| e.as_str()), Some("Hello"));
        assert!(b.get(&9).is_none());
        b.update_element(&1, "Bye".to_string()).unwrap();
        assert_eq!(b.get(&1).map(|e| e.as_str()), Some("Bye"));
    }

    #[test]
    fn zero_dimensional_board_builds_directly() {
        // Only validate() rejects D = 0; direct construction has one cell.
        let mut b: Board<u32, String, 0> = Board::new("point", Limits::unbounded());
        let origin = Position::<0>::new([]);
        assert!(b.inside_space(&origin));
        b.add_element(1, "only".to_string()).unwrap();
        b.set_element(&1, origin, false).unwrap();
        assert_eq!(b.occupant(&origin), Some(&1));
        let config = BoardConfig::<0>::new("point", Limits::unbounded());
        assert_eq!(Board::<u32, String, 0>::from_config(config).unwrap_err(), ConfigError::ZeroDimensions);
    }
}
