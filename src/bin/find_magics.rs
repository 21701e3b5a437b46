//! find_magics.rs
//! Offline search for the magic multipliers backing the sliding-piece
//! attack tables. Runs both sliders, prints one line per square, reports
//! soft failures, and writes the full result set as a bincode file for
//! `generate_attacks` to pick up.
//!
//! CLI: `cargo run --release --bin find_magics -- [output.bin] [seed]`

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};

use onyx_chess::game::defs::Slider;
use onyx_chess::game::moves::finder::{MagicFile, MagicFinder, SearchReport};

const DEFAULT_SEED: u64 = 0x5EED_BA5E;

fn report(r: &SearchReport) {
    for (s, found) in r.magics.iter().enumerate() {
        match found {
            Some(m) => println!("{} sq {:2}: 0x{:016x} ({} bits)", r.slider.name(), s, m.magic, m.bits),
            None => println!("{} sq {:2}: search exhausted", r.slider.name(), s),
        }
    }
    if r.failed.is_empty() {
        println!("{}: all 64 squares solved", r.slider.name());
    } else {
        eprintln!(
            "{}: {} square(s) failed and stay unavailable: {:?}",
            r.slider.name(),
            r.failed.len(),
            r.failed.iter().map(|sq| sq.to_string()).collect::<Vec<_>>()
        );
    }
}

fn main() -> Result<()> {
    let out = std::env::args().nth(1).unwrap_or_else(|| "magics.bin".to_string());
    let seed = match std::env::args().nth(2) {
        Some(s) => s.parse().context("seed must be a u64")?,
        None => DEFAULT_SEED,
    };

    let mut finder = MagicFinder::new_with_seed(seed);
    let rook = finder.find_all(Slider::Rook);
    report(&rook);
    let bishop = finder.find_all(Slider::Bishop);
    report(&bishop);

    let file = MagicFile {
        rook: rook.magics.to_vec(),
        bishop: bishop.magics.to_vec(),
    };
    let w = BufWriter::new(File::create(&out).with_context(|| format!("creating {out}"))?);
    bincode::serialize_into(w, &file).context("serializing magic set")?;
    println!("wrote {out}");

    Ok(())
}
