//! Scripted board and overlay operations.

use tabula_board::Board;
use tabula_core::{BoardError, Position};
use tabula_overlay::DefaultBoard;

use crate::fixtures::Piece;

/// One call against a `Board<u32, Piece, D>`.
#[derive(Clone, Debug)]
pub enum BoardOp<const D: usize> {
    Add(u32),
    Update(u32),
    Set {
        id: u32,
        position: Position<D>,
        allow_multiple: bool,
    },
    UnsetId {
        id: u32,
        unset_all: bool,
    },
    UnsetAt(Position<D>),
    MoveId {
        id: u32,
        destiny: Position<D>,
        override_occupant: bool,
    },
    MoveFrom {
        origin: Position<D>,
        destiny: Position<D>,
        override_occupant: bool,
    },
}

impl<const D: usize> BoardOp<D> {
    /// Run the operation, returning whatever the board returned.
    pub fn apply(&self, board: &mut Board<u32, Piece, D>) -> Result<(), BoardError<u32, D>> {
        match self {
            Self::Add(id) => board.add_element(*id, piece_for(*id)),
            Self::Update(id) => board.update_element(id, piece_for(*id).with_team(99)),
            Self::Set {
                id,
                position,
                allow_multiple,
            } => board.set_element(id, *position, *allow_multiple),
            Self::UnsetId { id, unset_all } => board.unset_element(id, *unset_all),
            Self::UnsetAt(position) => board.unset_at(position),
            Self::MoveId {
                id,
                destiny,
                override_occupant,
            } => board.move_element(id, *destiny, *override_occupant),
            Self::MoveFrom {
                origin,
                destiny,
                override_occupant,
            } => board.move_from(origin, *destiny, *override_occupant),
        }
    }

    /// Whether the operation can change placements.
    pub fn is_placement_change(&self) -> bool {
        !matches!(self, Self::Add(_) | Self::Update(_))
    }
}

/// The piece a scripted `Add` stores under `id`.
pub fn piece_for(id: u32) -> Piece {
    Piece::new(format!("piece-{id}"), id % 6, id % 2)
}

/// One call against a `DefaultBoard<u32, Piece, D>`.
#[derive(Clone, Debug)]
pub enum OverlayOp<const D: usize> {
    /// A normal-surface call, routed through the overlay.
    Normal(BoardOp<D>),
    AddDefault(u32),
    UpdateDefault(u32),
    SetDefault {
        id: u32,
        position: Position<D>,
    },
    UnsetDefault(Position<D>),
    UnsetDefaultId(u32),
}

impl<const D: usize> OverlayOp<D> {
    /// Run the operation, returning whatever the overlay returned.
    pub fn apply(&self, overlay: &mut DefaultBoard<u32, Piece, D>) -> Result<(), BoardError<u32, D>> {
        match self {
            Self::Normal(op) => match op {
                BoardOp::Add(id) => overlay.add_element(*id, piece_for(*id)),
                BoardOp::Update(id) => overlay.update_element(id, piece_for(*id).with_team(99)),
                BoardOp::Set {
                    id,
                    position,
                    allow_multiple,
                } => overlay.set_element(id, *position, *allow_multiple),
                BoardOp::UnsetId { id, unset_all } => overlay.unset_element(id, *unset_all),
                BoardOp::UnsetAt(position) => overlay.unset_at(position),
                BoardOp::MoveId {
                    id,
                    destiny,
                    override_occupant,
                } => overlay.move_element(id, *destiny, *override_occupant),
                BoardOp::MoveFrom {
                    origin,
                    destiny,
                    override_occupant,
                } => overlay.move_from(origin, *destiny, *override_occupant),
            },
            Self::AddDefault(id) => overlay.add_default(*id, default_for(*id)),
            Self::UpdateDefault(id) => overlay.update_default(id, default_for(*id).with_team(99)),
            Self::SetDefault { id, position } => overlay.set_default(id, *position),
            Self::UnsetDefault(position) => overlay.unset_default(position),
            Self::UnsetDefaultId(id) => overlay.unset_default_id(id),
        }
    }
}

/// The piece a scripted `AddDefault` stores under `id`.
pub fn default_for(id: u32) -> Piece {
    Piece::new(format!("default-{id}"), 0, id % 2)
}
