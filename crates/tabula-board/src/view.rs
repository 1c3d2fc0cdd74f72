//! Read results handed out by board lookups.

use std::fmt;
use std::sync::Arc;

use tabula_core::Position;

/// Snapshot of one pool entry, returned by `Board::element` and
/// `Board::element_at`.
///
/// `element` is a shared handle to the stored instance: no copy is made,
/// and the handle is read-only. Replacing the element with
/// `Board::update_element` swaps the stored handle; views taken earlier keep
/// observing the previous value. `positions` is a copy taken at lookup time.
pub struct ElementView<K, T: ?Sized, const D: usize> {
    /// The element's ID.
    pub id: K,
    /// Shared handle to the stored element.
    pub element: Arc<T>,
    /// Every position holding the element, in placement order.
    pub positions: Vec<Position<D>>,
}

impl<K, T: ?Sized, const D: usize> ElementView<K, T, D> {
    /// Whether the element is placed anywhere.
    pub fn is_placed(&self) -> bool {
        !self.positions.is_empty()
    }
}

impl<K: Clone, T: ?Sized, const D: usize> Clone for ElementView<K, T, D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            element: Arc::clone(&self.element),
            positions: self.positions.clone(),
        }
    }
}

impl<K: fmt::Debug, T: ?Sized + fmt::Debug, const D: usize> fmt::Debug for ElementView<K, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementView")
            .field("id", &self.id)
            .field("element", &self.element)
            .field("positions", &self.positions)
            .finish()
    }
}
