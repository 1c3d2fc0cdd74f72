//! Default overlay for Tabula boards.
//!
//! A [`DefaultBoard`] answers every in-bounds position lookup, falling back
//! through three tiers:
//!
//! 1. the element explicitly placed at the position ([`Layer::Normal`]);
//! 2. a custom default registered for that position ([`Layer::Default`]);
//! 3. the global default given at construction ([`Layer::Default`]).
//!
//! The overlay is a composition of two [`Board`](tabula_board::Board)s, one
//! per surface. The global default is an unplaced entry of the default
//! surface. All invariant checking is done by the embedded boards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod overlay;
pub mod view;

pub use overlay::DefaultBoard;
pub use view::{Layer, OverlayView};
