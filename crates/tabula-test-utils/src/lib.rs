//! Test fixtures and invariant checks for Tabula development.
//!
//! - [`fixtures`]: the [`Piece`] payload and the [`GamePiece`] capability
//!   trait used to exercise boards with concrete and trait-object elements.
//! - [`invariants`]: assertions that a board's pool and position index
//!   describe the same relation.
//! - [`ops`]: scripted operation types for driving boards and overlays from property
//!   tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod invariants;
pub mod ops;

pub use fixtures::{GamePiece, Piece, Promoted};
pub use invariants::{assert_board_consistent, assert_overlay_consistent};
pub use ops::{BoardOp, OverlayOp};
