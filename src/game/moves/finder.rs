// src/game/moves/finder.rs

use rand::rngs::SmallRng;
use rand::RngCore;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::game::defs::{Slider, Square};
use crate::game::moves::masks;

/// Per-square attempt ceiling. Exhausting it is a soft failure: the square
/// is reported and skipped, never retried automatically.
pub const MAX_ATTEMPTS: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundMagic {
    pub magic: u64,
    /// Index width; the square's table holds `1 << bits` slots.
    pub bits: u8,
}

pub struct SearchReport {
    pub slider: Slider,
    pub magics: [Option<FoundMagic>; 64],
    pub failed: Vec<Square>,
}

/// Serialized form of a finder run, written by `find_magics` and consumed by
/// `generate_attacks`.
#[derive(Serialize, Deserialize)]
pub struct MagicFile {
    pub rook: Vec<Option<FoundMagic>>,
    pub bishop: Vec<Option<FoundMagic>>,
}

impl MagicFile {
    pub fn magics(&self, slider: Slider) -> [Option<FoundMagic>; 64] {
        let v = match slider {
            Slider::Rook => &self.rook,
            Slider::Bishop => &self.bishop,
        };
        let mut out = [None; 64];
        for (slot, m) in out.iter_mut().zip(v.iter()) {
            *slot = *m;
        }
        out
    }
}

/// Randomized search for multipliers that hash every blocker subset of a
/// square's relevant mask to a distinct slot. Deterministic under its seed.
pub struct MagicFinder {
    rng: SmallRng,
}

impl MagicFinder {
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Sparse multipliers distribute the upper index bits much better than
    /// uniform draws, so AND three independent draws together.
    fn sparse_candidate(&mut self) -> u64 {
        self.rng.next_u64() & self.rng.next_u64() & self.rng.next_u64()
    }

    /// Finds a multiplier for one square, or `None` once the attempt ceiling
    /// is exhausted. Two distinct subsets sharing a slot reject a candidate
    /// even when their attack sets would agree.
    pub fn find_magic(&mut self, slider: Slider, sq: Square) -> Option<FoundMagic> {
        let mask = masks::relevant_mask(slider, sq);
        let bits = mask.count_ones();
        let shift = 64 - bits;
        let configs: Vec<u64> = (0..1usize << bits)
            .map(|i| masks::blocker_configuration(i, mask))
            .collect();

        // slot -> attempt number of its last occupant, so the scratch table
        // never needs clearing between attempts
        let mut used = vec![0u32; 1 << bits];
        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = self.sparse_candidate();
            let mut collided = false;
            for &config in &configs {
                let idx = (config.wrapping_mul(candidate) >> shift) as usize;
                if used[idx] == attempt {
                    collided = true;
                    break;
                }
                used[idx] = attempt;
            }
            if !collided {
                return Some(FoundMagic { magic: candidate, bits: bits as u8 });
            }
        }
        None
    }

    pub fn find_all(&mut self, slider: Slider) -> SearchReport {
        let mut magics = [None; 64];
        let mut failed = Vec::new();
        for s in 0..64 {
            let sq = Square(s as u8);
            match self.find_magic(slider, sq) {
                Some(found) => magics[s as usize] = Some(found),
                None => failed.push(sq),
            }
        }
        SearchReport { slider, magics, failed }
    }
}
