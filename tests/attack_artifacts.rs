// tests/attack_artifacts.rs
//
// End-to-end check of the builder -> artifact -> loader pipeline through the
// public API.

use onyx_chess::game::defs::{Slider, Square};
use onyx_chess::game::defs::squarename as SQ;
use onyx_chess::game::moves::masks;
use onyx_chess::game::moves::tables;
use onyx_chess::game::moves::{default_magics, AttackTables};
use onyx_chess::BitBoard;

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("onyx_chess_{tag}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn artifacts_round_trip_and_answer_like_the_builder() {
    let dir = scratch_dir("artifacts");

    let built = AttackTables::new();
    tables::write_artifacts(Slider::Rook, &built.rook, &dir).unwrap();
    tables::write_artifacts(Slider::Bishop, &built.bishop, &dir).unwrap();

    // offsets file: 64 records of (u32, u32)
    for slider in [Slider::Rook, Slider::Bishop] {
        let meta = std::fs::metadata(dir.join(tables::offsets_filename(slider))).unwrap();
        assert_eq!(meta.len(), 512);
    }
    // attacks blob: 8 bytes per entry, square-major
    let rook_blob = std::fs::metadata(dir.join(tables::attacks_filename(Slider::Rook))).unwrap();
    assert_eq!(rook_blob.len(), built.rook.attacks.len() as u64 * 8);

    let loaded = AttackTables::load(&dir).unwrap();
    for slider in [Slider::Rook, Slider::Bishop] {
        let (a, b) = match slider {
            Slider::Rook => (&built.rook, &loaded.rook),
            Slider::Bishop => (&built.bishop, &loaded.bishop),
        };
        assert_eq!(a.attacks, b.attacks);
        for s in 0..64 {
            let sq = Square(s as u8);
            let mask = masks::relevant_mask(slider, sq);
            let bits = mask.count_ones();
            // spot-check a spread of configurations per square
            for i in (0..1usize << bits).step_by(97) {
                let config = masks::blocker_configuration(i, mask);
                assert_eq!(a.attacks(sq, config), b.attacks(sq, config));
                assert_eq!(b.attacks(sq, config), masks::slider_attacks_slow(slider, sq, config));
            }
        }
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn loader_rejects_truncated_offsets() {
    let dir = scratch_dir("truncated");

    let table = tables::build_table(Slider::Bishop, &default_magics(Slider::Bishop));
    tables::write_artifacts(Slider::Bishop, &table, &dir).unwrap();
    let offsets = dir.join(tables::offsets_filename(Slider::Bishop));
    let raw = std::fs::read(&offsets).unwrap();
    std::fs::write(&offsets, &raw[..256]).unwrap();

    assert!(tables::read_artifacts(Slider::Bishop, &dir).is_err());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn loader_rejects_blob_length_mismatch() {
    let dir = scratch_dir("blob");

    let table = tables::build_table(Slider::Bishop, &default_magics(Slider::Bishop));
    tables::write_artifacts(Slider::Bishop, &table, &dir).unwrap();
    let blob = dir.join(tables::attacks_filename(Slider::Bishop));
    let mut raw = std::fs::read(&blob).unwrap();
    raw.truncate(raw.len() - 8);
    std::fs::write(&blob, &raw).unwrap();

    assert!(tables::read_artifacts(Slider::Bishop, &dir).is_err());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn callers_subtract_their_own_occupancy() {
    // the lookup reports reach including first blockers of either color;
    // deriving destinations is the caller's subtraction
    let tables = AttackTables::new();
    let own_pawn = BitBoard::from_square(SQ::A4);
    let reach = tables.rook_attacks(SQ::A1, own_pawn);
    assert!(reach.contains(SQ::A4), "first blocker is part of the reach set");
    let destinations = BitBoard(reach.0 & !own_pawn.0);
    assert!(!destinations.contains(SQ::A4));
    assert!(destinations.contains(SQ::A3));
    assert!(destinations.contains(SQ::H1));
}
