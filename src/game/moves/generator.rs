// src/game/moves/generator.rs

use crate::game::board::Position;
use crate::game::moves::definitions::MoveList;
use crate::game::moves::magics::AttackTables;

/// Pseudo-legal move generation. Not built yet: the intended shape is one
/// pass per piece kind, sliders answered by `tables` and the rest by the
/// `board::movement` masks, with own-side occupancy subtracted and every
/// emitted `Move` carrying its undo snapshot.
///
/// TODO: generate pawn pushes/captures, knight, king, and slider moves.
pub fn generate_moves(_pos: &Position, _tables: &AttackTables) -> MoveList {
    MoveList::new()
}
