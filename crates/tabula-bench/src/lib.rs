//! Benchmark workloads for the Tabula board containers.
//!
//! - [`populated_board`]: a square board with one piece on every `stride`-th cell
//! - [`checkerboard_overlay`]: an overlay with a custom default on every dark cell
//! - [`scripted_ops`]: a deterministic pseudo-random operation stream

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tabula_board::Board;
use tabula_core::{BoardError, Position};
use tabula_overlay::DefaultBoard;
use tabula_test_utils::ops::piece_for;
use tabula_test_utils::{BoardOp, Piece};

/// Build a `side` x `side` board with one piece on every `stride`-th cell
/// in row-major order. Piece IDs count up from 0.
pub fn populated_board(side: u32, stride: u32) -> Result<Board<u32, Piece, 2>, BoardError<u32, 2>> {
    let mut board = Board::new("bench", [side, side]);
    let stride = stride.max(1);
    let width = u64::from(side);
    let mut id = 0u32;
    for cell in (0..width * width).step_by(stride as usize) {
        let position = Position::new([(cell / width + 1) as u32, (cell % width + 1) as u32]);
        board.add_element(id, piece_for(id))?;
        board.set_element(&id, position, false)?;
        id += 1;
    }
    Ok(board)
}

/// Build a `side` x `side` overlay whose dark cells resolve to a custom
/// default and light cells to the global default.
pub fn checkerboard_overlay(side: u32) -> Result<DefaultBoard<u32, Piece, 2>, BoardError<u32, 2>> {
    let mut overlay = DefaultBoard::new("bench", [side, side], 0, Piece::new("light", 0, 0));
    overlay.add_default(1, Piece::new("dark", 0, 0))?;
    for x in 1..=side {
        for y in 1..=side {
            if (x + y) % 2 == 1 {
                overlay.set_default(&1, Position::new([x, y]))?;
            }
        }
    }
    Ok(overlay)
}

/// Deterministic stream of `count` operations over `ids` IDs on a
/// `side` x `side` board. Roughly a third of the generated positions fall
/// outside the limits or collide, so error paths are measured too.
pub fn scripted_ops(count: usize, side: u32, ids: u32, seed: u64) -> Vec<BoardOp<2>> {
    let ids = ids.max(1);
    let side = u64::from(side.max(1));
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };
    let mut ops = Vec::with_capacity(count);
    for _ in 0..count {
        let id = (next() % u64::from(ids)) as u32;
        let a = Position::new([(next() % (side + 1)) as u32, (next() % (side + 1)) as u32]);
        let b = Position::new([(next() % (side + 1)) as u32, (next() % (side + 1)) as u32]);
        let flag = next() % 2 == 0;
        let op = match next() % 7 {
            0 => BoardOp::Add(id),
            1 => BoardOp::Update(id),
            2 => BoardOp::Set {
                id,
                position: a,
                allow_multiple: flag,
            },
            3 => BoardOp::UnsetId { id, unset_all: flag },
            4 => BoardOp::UnsetAt(a),
            5 => BoardOp::MoveId {
                id,
                destiny: a,
                override_occupant: flag,
            },
            _ => BoardOp::MoveFrom {
                origin: a,
                destiny: b,
                override_occupant: flag,
            },
        };
        ops.push(op);
    }
    ops
}
