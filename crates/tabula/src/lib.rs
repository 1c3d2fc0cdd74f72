//! Tabula: N-dimensional board containers for board-game state.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tabula sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let mut board: Board<u32, &str, 2> = Board::new("chess", [8, 8]);
//! board.add_element(1, "white king").unwrap();
//! board.set_element(&1, Position::new([5, 1]), false).unwrap();
//! board.move_element(&1, Position::new([5, 2]), false).unwrap();
//!
//! let view = board.element_at(&Position::new([5, 2])).unwrap();
//! assert_eq!(view.id, 1);
//! assert_eq!(*view.element, "white king");
//!
//! let err = board.element_at(&Position::new([5, 1])).unwrap_err();
//! assert_eq!(err.position_kind(), Some(PositionErrorKind::Empty));
//!
//! // Overlays resolve every in-bounds position.
//! let mut go: DefaultBoard<u32, &str, 2> = DefaultBoard::new("go", [19, 19], 0, "empty");
//! go.add_element(1, "black stone").unwrap();
//! go.set_element(&1, Position::new([4, 4]), false).unwrap();
//! assert!(go.element_at(&Position::new([4, 4])).unwrap().was_normal());
//! assert_eq!(*go.element_at(&Position::new([10, 10])).unwrap().element, "empty");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tabula-core` | Positions, limits, error taxonomy |
//! | [`board`] | `tabula-board` | The board container and its config |
//! | [`overlay`] | `tabula-overlay` | The default overlay |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Positions, limits and the error taxonomy (`tabula-core`).
pub use tabula_core as types;

/// The board container (`tabula-board`).
///
/// [`board::Board`] owns an element pool and a position index;
/// [`board::BoardConfig`] holds its construction parameters.
pub use tabula_board as board;

/// The default overlay (`tabula-overlay`).
///
/// [`overlay::DefaultBoard`] falls back to custom and global defaults for
/// positions with no placed element.
pub use tabula_overlay as overlay;

/// Common imports for typical Tabula usage.
///
/// ```rust
/// use tabula::prelude::*;
/// ```
pub mod prelude {
    // Coordinates
    pub use tabula_core::{inside_space, Limits, Position};

    // Errors
    pub use tabula_core::{BoardError, ConfigError, IdErrorKind, PositionErrorKind};

    // Board
    pub use tabula_board::{Board, BoardConfig, ElementView};

    // Overlay
    pub use tabula_overlay::{DefaultBoard, Layer, OverlayView};
}
