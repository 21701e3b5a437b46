// src/main.rs

use anyhow::Result;

use onyx_chess::game::io::{position_from_fen, position_to_fen, START_FEN};

fn main() -> Result<()> {
    let fen = std::env::args().nth(1).unwrap_or_else(|| START_FEN.to_string());
    let pos = position_from_fen(&fen).map_err(anyhow::Error::msg)?;

    println!("{pos}");
    println!("fen:       {}", position_to_fen(&pos));
    println!("to move:   {:?}", pos.state.stm);
    println!("castling:  {:04b}", pos.state.castling_rights.0);
    match pos.state.en_passant_square {
        Some(sq) => println!("e.p.:      {sq}"),
        None => println!("e.p.:      -"),
    }
    println!("clocks:    {} half / {} full", pos.state.halfmove_clock, pos.state.fullmove_number);

    Ok(())
}
