//! Reusable element fixtures.
//!
//! [`Piece`] is a plain board-game record (name, kind, team). [`Promoted`]
//! wraps a piece with extra state, so tests can store both behind
//! `dyn GamePiece`.

use std::fmt;

/// Capability shared by every storable test piece.
pub trait GamePiece: fmt::Debug {
    fn name(&self) -> &str;
    fn kind(&self) -> u32;
    fn team(&self) -> u32;
}

/// A basic board-game piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub name: String,
    /// Kind of piece (e.g. queen, knight), as an opaque number.
    pub kind: u32,
    pub team: u32,
}

impl Piece {
    pub fn new(name: impl Into<String>, kind: u32, team: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            team,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_kind(mut self, kind: u32) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_team(mut self, team: u32) -> Self {
        self.team = team;
        self
    }
}

impl GamePiece for Piece {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> u32 {
        self.kind
    }

    fn team(&self) -> u32 {
        self.team
    }
}

/// A piece that was promoted from another kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Promoted {
    pub piece: Piece,
    pub promoted_from: u32,
}

impl Promoted {
    pub fn new(piece: Piece, promoted_from: u32) -> Self {
        Self {
            piece,
            promoted_from,
        }
    }
}

impl GamePiece for Promoted {
    fn name(&self) -> &str {
        &self.piece.name
    }

    fn kind(&self) -> u32 {
        self.piece.kind
    }

    fn team(&self) -> u32 {
        self.piece.team
    }
}
