//! Board invariant checks.
//!
//! These functions verify that a board's pool and position index are two
//! views of the same relation. Reused by the board and overlay test suites
//! after every scripted operation.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use tabula_board::Board;
use tabula_overlay::DefaultBoard;

/// Assert that every indexed position appears in its owner's position
/// list and lies inside the board's limits.
pub fn assert_index_backed_by_pool<K, T, const D: usize>(board: &Board<K, T, D>)
where
    K: Clone + Eq + Hash + fmt::Debug,
    T: ?Sized,
{
    for (position, id) in board.placements() {
        assert!(
            board.inside_space(position),
            "indexed position {position} outside limits {}",
            board.limits()
        );
        let positions = board
            .positions_of(id)
            .unwrap_or_else(|| panic!("indexed id {id:?} at {position} has no pool entry"));
        assert!(
            positions.contains(position),
            "index says {id:?} is at {position}, but its position list is {positions:?}"
        );
    }
}

/// Assert that every position in an entry's list is indexed back to that
/// entry and appears only once.
pub fn assert_pool_backed_by_index<K, T, const D: usize>(board: &Board<K, T, D>)
where
    K: Clone + Eq + Hash + fmt::Debug,
    T: ?Sized,
{
    let mut total = 0;
    let mut seen = HashSet::new();
    for (id, _, positions) in board.entries() {
        for position in positions {
            assert!(
                seen.insert(*position),
                "position {position} listed twice (second time by {id:?})"
            );
            assert_eq!(
                board.occupant(position),
                Some(id),
                "{id:?} lists {position} but the index disagrees"
            );
        }
        total += positions.len();
    }
    assert_eq!(
        total,
        board.placed_count(),
        "position lists hold {total} placements, index holds {}",
        board.placed_count()
    );
}

/// Run every board check.
pub fn assert_board_consistent<K, T, const D: usize>(board: &Board<K, T, D>)
where
    K: Clone + Eq + Hash + fmt::Debug,
    T: ?Sized,
{
    assert_index_backed_by_pool(board);
    assert_pool_backed_by_index(board);
    assert_eq!(board.entries().count(), board.len(), "pool length mismatch");
}

/// Run every board check on both surfaces of an overlay, check that the
/// global default sits unplaced in the default pool, and check that each
/// occupied position resolves to the right layer.
pub fn assert_overlay_consistent<K, T, const D: usize>(overlay: &DefaultBoard<K, T, D>)
where
    K: Clone + Eq + Hash + fmt::Debug,
    T: ?Sized,
{
    assert_board_consistent(overlay.normal());
    assert_board_consistent(overlay.defaults());
    let global = overlay.default_id();
    assert_eq!(
        overlay.defaults().positions_of(global).map(<[_]>::len),
        Some(0),
        "global default {global:?} must be an unplaced entry of the default pool"
    );
    for (position, id) in overlay.normal().placements() {
        let view = overlay
            .element_at(position)
            .unwrap_or_else(|e| panic!("lookup of placed {position} failed: {e}"));
        assert!(view.was_normal(), "{position} holds {id:?} but resolved to a default");
        assert_eq!(&view.id, id);
    }
    for (position, id) in overlay.defaults().placements() {
        if overlay.normal().is_occupied(position) {
            continue;
        }
        let view = overlay
            .element_at(position)
            .unwrap_or_else(|e| panic!("lookup of default {position} failed: {e}"));
        assert!(!view.was_normal());
        assert_eq!(&view.id, id);
    }
}
