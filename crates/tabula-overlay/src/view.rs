//! Lookup results of the default overlay.

use std::fmt;
use std::sync::Arc;

use tabula_board::ElementView;
use tabula_core::Position;

/// Which surface of a [`DefaultBoard`](crate::DefaultBoard) answered a
/// lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// An element explicitly placed on the normal surface.
    Normal,
    /// A custom default placed at the position, or the global default.
    Default,
}

/// An [`ElementView`] tagged with the layer it came from.
pub struct OverlayView<K, T: ?Sized, const D: usize> {
    /// Surface that answered the lookup.
    pub layer: Layer,
    /// The element's ID within its namespace.
    pub id: K,
    /// Shared handle to the stored element.
    pub element: Arc<T>,
    /// Every position holding the element on its surface. Always empty for
    /// the global default.
    pub positions: Vec<Position<D>>,
}

impl<K, T: ?Sized, const D: usize> OverlayView<K, T, D> {
    pub(crate) fn from_view(layer: Layer, view: ElementView<K, T, D>) -> Self {
        Self {
            layer,
            id: view.id,
            element: view.element,
            positions: view.positions,
        }
    }

    /// True iff the element was explicitly placed (not a default).
    pub fn was_normal(&self) -> bool {
        self.layer == Layer::Normal
    }
}

impl<K: Clone, T: ?Sized, const D: usize> Clone for OverlayView<K, T, D> {
    fn clone(&self) -> Self {
        Self {
            layer: self.layer,
            id: self.id.clone(),
            element: Arc::clone(&self.element),
            positions: self.positions.clone(),
        }
    }
}

impl<K: fmt::Debug, T: ?Sized + fmt::Debug, const D: usize> fmt::Debug for OverlayView<K, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayView")
            .field("layer", &self.layer)
            .field("id", &self.id)
            .field("element", &self.element)
            .field("positions", &self.positions)
            .finish()
    }
}
