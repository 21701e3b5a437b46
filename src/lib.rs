// src/lib.rs

pub mod game;

pub use game::board::{BitBoard, Position};
pub use game::defs::{Color, Piece, Slider, Square};
pub use game::gamestate::{CastlingRights, State};
pub use game::moves::{apply_move, undo_move, AttackTables, Move, MoveFlags, MoveList};
