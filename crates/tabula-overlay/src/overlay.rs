//! The [`DefaultBoard`] overlay.
//!
//! Normal elements and custom defaults live on two separate [`Board`]s with
//! the same name and limits, so their IDs and placements never collide. The
//! global default is an entry of the default pool that is never placed; its
//! ID is reserved in the default namespace.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use tabula_board::{Board, BoardConfig};
use tabula_core::{BoardError, ConfigError, IdErrorKind, Limits, Position, PositionErrorKind};
use tracing::{debug, trace};

use crate::view::{Layer, OverlayView};

/// A board whose position lookups never come back empty.
///
/// Lookups by position fall back from a placed element to a custom default
/// at that position, then to the global default. Normal and default
/// elements have separate ID namespaces.
pub struct DefaultBoard<K, T: ?Sized, const D: usize> {
    normal: Board<K, T, D>,
    /// Custom defaults plus the unplaced global default under `default_id`.
    defaults: Board<K, T, D>,
    default_id: K,
}

impl<K, T, const D: usize> DefaultBoard<K, T, D>
where
    K: Clone + Eq + Hash + fmt::Debug,
    T: ?Sized,
{
    /// Create an overlay whose global default is `default_element`,
    /// reserved under `default_id` in the default namespace.
    pub fn new(
        name: impl Into<String>,
        limits: impl Into<Limits<D>>,
        default_id: K,
        default_element: impl Into<Arc<T>>,
    ) -> Self {
        let name = name.into();
        let limits = limits.into();
        let mut defaults = Board::new(name.clone(), limits);
        // The pool is empty, so the first key cannot collide.
        let added = defaults.add_element(default_id.clone(), default_element);
        debug_assert!(added.is_ok());
        Self {
            normal: Board::new(name, limits),
            defaults,
            default_id,
        }
    }

    /// Create an overlay from a validated config.
    pub fn from_config(
        config: BoardConfig<D>,
        default_id: K,
        default_element: impl Into<Arc<T>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.name,
            config.limits,
            default_id,
            default_element,
        ))
    }

    /// Name of the overlay, carried by every error it raises.
    pub fn name(&self) -> &str {
        self.normal.name()
    }

    /// Limits fixed at construction.
    pub fn limits(&self) -> Limits<D> {
        self.normal.limits()
    }

    /// ID reserved for the global default.
    pub fn default_id(&self) -> &K {
        &self.default_id
    }

    /// The global default element. Always `Some`: the entry is added at
    /// construction and pool entries are never removed.
    pub fn global_default(&self) -> Option<&Arc<T>> {
        self.defaults.get(&self.default_id)
    }

    /// The surface holding explicitly placed elements.
    pub fn normal(&self) -> &Board<K, T, D> {
        &self.normal
    }

    /// The surface holding custom defaults.
    pub fn defaults(&self) -> &Board<K, T, D> {
        &self.defaults
    }

    fn id_error(&self, id: &K, kind: IdErrorKind) -> BoardError<K, D> {
        BoardError::Id {
            board: self.name().to_owned(),
            id: id.clone(),
            kind,
        }
    }

    fn is_global(&self, id: &K) -> bool {
        *id == self.default_id
    }

    // ── pools ──────────────────────────────────────────────────────

    /// Add a normal element. Fails with [`IdErrorKind::InUse`] if `id` is
    /// already a normal element.
    pub fn add_element(
        &mut self,
        id: K,
        element: impl Into<Arc<T>>,
    ) -> Result<(), BoardError<K, D>> {
        self.normal.add_element(id, element)
    }

    /// Add a custom default. Fails with [`IdErrorKind::InUse`] if `id` is
    /// already a default, including the global default's ID.
    pub fn add_default(
        &mut self,
        id: K,
        element: impl Into<Arc<T>>,
    ) -> Result<(), BoardError<K, D>> {
        self.defaults.add_element(id, element)
    }

    /// Replace a normal element, keeping its placements.
    pub fn update_element(
        &mut self,
        id: &K,
        element: impl Into<Arc<T>>,
    ) -> Result<(), BoardError<K, D>> {
        self.normal.update_element(id, element)
    }

    /// Replace a default element, keeping its placements. Passing the
    /// global default's ID replaces the global default.
    pub fn update_default(
        &mut self,
        id: &K,
        element: impl Into<Arc<T>>,
    ) -> Result<(), BoardError<K, D>> {
        self.defaults.update_element(id, element)?;
        if self.is_global(id) {
            debug!(board = %self.name(), ?id, "global default updated");
        }
        Ok(())
    }

    // ── placement ──────────────────────────────────────────────────

    /// Place a normal element, with the checks of
    /// [`Board::set_element`].
    pub fn set_element(
        &mut self,
        id: &K,
        position: Position<D>,
        allow_multiple: bool,
    ) -> Result<(), BoardError<K, D>> {
        self.normal.set_element(id, position, allow_multiple)
    }

    /// Register the default `id` as the fallback for `position`.
    ///
    /// A custom default may cover any number of positions. Checks, in
    /// order: `id` is not the global default ([`IdErrorKind::InUse`]); `id`
    /// is a default ([`IdErrorKind::NonExistent`]); `position` is inside the
    /// limits; no other default is registered at `position`.
    pub fn set_default(&mut self, id: &K, position: Position<D>) -> Result<(), BoardError<K, D>> {
        if self.is_global(id) {
            return Err(self.id_error(id, IdErrorKind::InUse));
        }
        self.defaults.set_element(id, position, true)
    }

    /// Remove a normal element from the surface, with the checks of
    /// [`Board::unset_element`].
    pub fn unset_element(&mut self, id: &K, unset_all: bool) -> Result<(), BoardError<K, D>> {
        self.normal.unset_element(id, unset_all)
    }

    /// Remove the normal element placed at `position`.
    pub fn unset_at(&mut self, position: &Position<D>) -> Result<(), BoardError<K, D>> {
        self.normal.unset_at(position)
    }

    /// Remove the custom default registered at `position`.
    ///
    /// Fails with [`PositionErrorKind::OutLimits`] or
    /// [`PositionErrorKind::Empty`] if no custom default is registered there.
    pub fn unset_default(&mut self, position: &Position<D>) -> Result<(), BoardError<K, D>> {
        self.defaults.unset_at(position)
    }

    /// Remove every registration of the custom default `id`.
    ///
    /// Fails with [`IdErrorKind::NonExistent`] for unknown defaults and
    /// [`IdErrorKind::NotOnBoard`] for defaults registered nowhere,
    /// which always includes the global default.
    pub fn unset_default_id(&mut self, id: &K) -> Result<(), BoardError<K, D>> {
        self.defaults.unset_element(id, true)
    }

    // ── movement ───────────────────────────────────────────────────

    /// Move a normal placement, with the checks of [`Board::move_from`].
    /// Custom defaults are never moved or evicted.
    pub fn move_from(
        &mut self,
        origin: &Position<D>,
        destiny: Position<D>,
        override_occupant: bool,
    ) -> Result<(), BoardError<K, D>> {
        self.normal.move_from(origin, destiny, override_occupant)
    }

    /// Move the single placement of a normal element, with the checks of
    /// [`Board::move_element`].
    pub fn move_element(
        &mut self,
        id: &K,
        destiny: Position<D>,
        override_occupant: bool,
    ) -> Result<(), BoardError<K, D>> {
        self.normal.move_element(id, destiny, override_occupant)
    }

    // ── lookup ─────────────────────────────────────────────────────

    /// Look up a normal element by ID.
    ///
    /// Defaults are not reachable here; use
    /// [`default_element`](Self::default_element).
    pub fn element(&self, id: &K) -> Result<OverlayView<K, T, D>, BoardError<K, D>> {
        let view = self.normal.element(id)?;
        Ok(OverlayView::from_view(Layer::Normal, view))
    }

    /// Look up a default element by ID, including the global default.
    pub fn default_element(&self, id: &K) -> Result<OverlayView<K, T, D>, BoardError<K, D>> {
        let view = self.defaults.element(id)?;
        Ok(OverlayView::from_view(Layer::Default, view))
    }

    /// Resolve `position` through the fallback chain.
    ///
    /// Fails only with [`PositionErrorKind::OutLimits`]; every in-bounds
    /// position resolves to some element.
    pub fn element_at(&self, position: &Position<D>) -> Result<OverlayView<K, T, D>, BoardError<K, D>> {
        if !self.normal.inside_space(position) {
            return Err(BoardError::Position {
                board: self.name().to_owned(),
                position: *position,
                kind: PositionErrorKind::OutLimits,
            });
        }
        if let Some(view) = self.normal.find_at(position) {
            return Ok(OverlayView::from_view(Layer::Normal, view));
        }
        if let Some(view) = self.defaults.find_at(position) {
            trace!(board = %self.name(), %position, id = ?view.id, "resolved to custom default");
            return Ok(OverlayView::from_view(Layer::Default, view));
        }
        trace!(board = %self.name(), %position, "resolved to global default");
        self.default_element(&self.default_id)
    }

    // ── queries ────────────────────────────────────────────────────

    /// Whether `id` is a normal element.
    pub fn contains_id(&self, id: &K) -> bool {
        self.normal.contains_id(id)
    }

    /// Whether `id` is a default element, including the global default.
    pub fn contains_default(&self, id: &K) -> bool {
        self.defaults.contains_id(id)
    }

    /// ID of the normal element placed at `position`, if any.
    pub fn occupant(&self, position: &Position<D>) -> Option<&K> {
        self.normal.occupant(position)
    }

    /// ID of the custom default registered at `position`, if any.
    pub fn default_at(&self, position: &Position<D>) -> Option<&K> {
        self.defaults.occupant(position)
    }
}

impl<K: Clone, T: ?Sized, const D: usize> Clone for DefaultBoard<K, T, D> {
    fn clone(&self) -> Self {
        Self {
            normal: self.normal.clone(),
            defaults: self.defaults.clone(),
            default_id: self.default_id.clone(),
        }
    }
}

impl<K: fmt::Debug, T: ?Sized, const D: usize> fmt::Debug for DefaultBoard<K, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultBoard")
            .field("normal", &self.normal)
            .field("defaults", &self.defaults)
            .field("default_id", &self.default_id)
            .finish()
    }
}
