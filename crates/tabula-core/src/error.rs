//! Error types for board operations.
//!
//! Every failure a board can report is a [`BoardError`]. It has two
//! branches: ID errors carry the offending key, position errors carry the
//! offending [`Position`]. Both carry the name of the board that raised them
//! so callers juggling several boards can tell them apart.

use std::error::Error;
use std::fmt;

use crate::position::Position;

/// What went wrong with an element identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdErrorKind {
    /// No element in the pool has this ID.
    NonExistent,
    /// The ID is already assigned to another element.
    InUse,
    /// The element is already placed and multiple placements were not
    /// requested.
    MonoSet,
    /// The operation needs a single placement but the element has several.
    MultiSet,
    /// The element is already placed on the board.
    OnBoard,
    /// The element exists but is not placed anywhere.
    NotOnBoard,
}

impl fmt::Display for IdErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonExistent => write!(f, "provided ID doesn't match any element"),
            Self::InUse => write!(f, "provided ID is already being used by another element"),
            Self::MonoSet => write!(
                f,
                "element is already set and can't be set in several positions at the same time"
            ),
            Self::MultiSet => write!(
                f,
                "action could not be resolved because the element is set in several positions"
            ),
            Self::OnBoard => write!(f, "element is already set on the board"),
            Self::NotOnBoard => write!(f, "element exists but is not set on the board"),
        }
    }
}

/// What went wrong with a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionErrorKind {
    /// The position is outside the board's limits (or has a zero
    /// coordinate).
    OutLimits,
    /// No element is placed at the position.
    Empty,
    /// Another element is already placed at the position.
    Occupied,
}

impl fmt::Display for PositionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutLimits => write!(f, "position is out of the limits of the board"),
            Self::Empty => write!(f, "position doesn't contain any element"),
            Self::Occupied => write!(f, "position is already occupied by another element"),
        }
    }
}

/// Errors returned by board operations.
///
/// A failed operation never leaves the board partially mutated: the state
/// after an `Err` is exactly the state before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError<K, const D: usize> {
    /// A problem with an element identifier.
    Id {
        /// Name of the board that raised the error.
        board: String,
        /// The offending identifier.
        id: K,
        /// Which ID check failed.
        kind: IdErrorKind,
    },
    /// A problem with a position.
    Position {
        /// Name of the board that raised the error.
        board: String,
        /// The offending position.
        position: Position<D>,
        /// Which position check failed.
        kind: PositionErrorKind,
    },
}

impl<K, const D: usize> BoardError<K, D> {
    /// Name of the board that raised the error.
    pub fn board_name(&self) -> &str {
        match self {
            Self::Id { board, .. } | Self::Position { board, .. } => board,
        }
    }

    /// The offending identifier, for ID errors.
    pub fn id(&self) -> Option<&K> {
        match self {
            Self::Id { id, .. } => Some(id),
            Self::Position { .. } => None,
        }
    }

    /// The offending position, for position errors.
    pub fn position(&self) -> Option<&Position<D>> {
        match self {
            Self::Position { position, .. } => Some(position),
            Self::Id { .. } => None,
        }
    }

    /// The ID check that failed, for ID errors.
    pub fn id_kind(&self) -> Option<IdErrorKind> {
        match self {
            Self::Id { kind, .. } => Some(*kind),
            Self::Position { .. } => None,
        }
    }

    /// The position check that failed, for position errors.
    pub fn position_kind(&self) -> Option<PositionErrorKind> {
        match self {
            Self::Position { kind, .. } => Some(*kind),
            Self::Id { .. } => None,
        }
    }

    /// Whether this is an ID error.
    pub fn is_id_error(&self) -> bool {
        matches!(self, Self::Id { .. })
    }

    /// Whether this is a position error.
    pub fn is_position_error(&self) -> bool {
        matches!(self, Self::Position { .. })
    }
}

impl<K: fmt::Debug, const D: usize> fmt::Display for BoardError<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id { board, id, kind } => {
                write!(f, "board '{board}': {kind} (id {id:?})")
            }
            Self::Position {
                board,
                position,
                kind,
            } => {
                write!(f, "board '{board}': {kind} (position {position})")
            }
        }
    }
}

impl<K: fmt::Debug, const D: usize> Error for BoardError<K, D> {}

/// Errors detected by `BoardConfig::validate()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The board was declared with zero axes.
    ZeroDimensions,
    /// The board name is empty.
    EmptyName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimensions => write!(f, "board must have at least one dimension"),
            Self::EmptyName => write!(f, "board name must not be empty"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_error_accessors() {
        let err: BoardError<u32, 2> = BoardError::Id {
            board: "chess".into(),
            id: 7,
            kind: IdErrorKind::MultiSet,
        };
        assert_eq!(err.board_name(), "chess");
        assert_eq!(err.id(), Some(&7));
        assert_eq!(err.position(), None);
        assert_eq!(err.id_kind(), Some(IdErrorKind::MultiSet));
        assert_eq!(err.position_kind(), None);
        assert!(err.is_id_error());
        assert!(!err.is_position_error());
    }

    #[test]
    fn position_error_accessors() {
        let err: BoardError<u32, 2> = BoardError::Position {
            board: "go".into(),
            position: Position::new([0, 3]),
            kind: PositionErrorKind::OutLimits,
        };
        assert_eq!(err.board_name(), "go");
        assert_eq!(err.id(), None);
        assert_eq!(err.position(), Some(&Position::new([0, 3])));
        assert_eq!(err.position_kind(), Some(PositionErrorKind::OutLimits));
        assert!(err.is_position_error());
    }

    #[test]
    fn display_includes_board_and_context() {
        let err: BoardError<&str, 2> = BoardError::Id {
            board: "b".into(),
            id: "rook",
            kind: IdErrorKind::NonExistent,
        };
        assert_eq!(
            err.to_string(),
            "board 'b': provided ID doesn't match any element (id \"rook\")"
        );

        let err: BoardError<&str, 2> = BoardError::Position {
            board: "b".into(),
            position: Position::new([3, 2]),
            kind: PositionErrorKind::Occupied,
        };
        assert_eq!(
            err.to_string(),
            "board 'b': position is already occupied by another element (position (3, 2))"
        );
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: Error>(_: &E) {}
        let err: BoardError<u8, 1> = BoardError::Position {
            board: String::new(),
            position: Position::new([1]),
            kind: PositionErrorKind::Empty,
        };
        assert_error(&err);
        assert_error(&ConfigError::EmptyName);
    }
}
