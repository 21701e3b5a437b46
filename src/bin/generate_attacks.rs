//! generate_attacks.rs
//! Materializes the sliding-piece attack tables and writes the binary
//! artifacts consumed at runtime by `AttackTables::load`:
//! `rook_attacks.bin` / `rook_offsets.bin` and the bishop pair.
//!
//! Uses the baked-in magic constants by default; pass a bincode file from
//! `find_magics` to build from a freshly searched set instead.
//!
//! CLI: `cargo run --release --bin generate_attacks -- [out_dir] [magics.bin]`

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};

use onyx_chess::game::defs::Slider;
use onyx_chess::game::moves::finder::{FoundMagic, MagicFile};
use onyx_chess::game::moves::{default_magics, tables};

fn load_magic_file(path: &str) -> Result<MagicFile> {
    let r = BufReader::new(File::open(path).with_context(|| format!("opening {path}"))?);
    bincode::deserialize_from(r).with_context(|| format!("decoding {path}"))
}

fn generate(slider: Slider, found: &[Option<FoundMagic>; 64], dir: &PathBuf) -> Result<()> {
    let table = tables::build_table(slider, found);
    for s in 0..64 {
        println!(
            "{} sq {:2}: {} entries at offset {}",
            slider.name(), s, table.len[s], table.offset[s]
        );
    }
    tables::write_artifacts(slider, &table, dir)?;
    println!(
        "wrote {} and {} ({} entries, {} KiB)",
        dir.join(tables::attacks_filename(slider)).display(),
        dir.join(tables::offsets_filename(slider)).display(),
        table.attacks.len(),
        table.attacks.len() * 8 / 1024
    );
    Ok(())
}

fn main() -> Result<()> {
    let dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "bin".to_string()));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let magic_file = match std::env::args().nth(2) {
        Some(path) => Some(load_magic_file(&path)?),
        None => None,
    };

    for slider in [Slider::Rook, Slider::Bishop] {
        let found = match &magic_file {
            Some(f) => f.magics(slider),
            None => default_magics(slider),
        };
        generate(slider, &found, &dir)?;
    }

    Ok(())
}
