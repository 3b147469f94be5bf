//! Zobrist keys for repetition detection.
//!
//! A position key XORs one random value per (piece, square), one for black to
//! move, one per castling right and one per en passant file. Keys are built at
//! compile time from a fixed seed so hashes are stable across runs.

use crate::types::Piece;

const PIECE_KEYS: usize = 2 * 6 * 64;
const SIDE_KEY: usize = PIECE_KEYS;
const CASTLING_KEYS: usize = SIDE_KEY + 1;
const EP_KEYS: usize = CASTLING_KEYS + 4;
const KEY_COUNT: usize = EP_KEYS + 8;

pub struct ZobristKeys {
    keys: [u64; KEY_COUNT],
    /// XORed in when black is to move.
    pub side_to_move: u64,
}

impl ZobristKeys {
    pub const fn new() -> Self {
        // splitmix64
        const fn next(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        }

        let mut state = 0x5EED_C4E5_5000_0001u64;
        let mut keys = [0u64; KEY_COUNT];
        let mut i = 0;
        while i < KEY_COUNT {
            keys[i] = next(&mut state);
            i += 1;
        }
        ZobristKeys {
            side_to_move: keys[SIDE_KEY],
            keys,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.keys[(piece.color.idx() * 6 + piece.kind.idx()) * 64 + sq as usize]
    }

    /// Castling right index: 0=wk, 1=wq, 2=bk, 3=bq.
    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.keys[CASTLING_KEYS + index]
    }

    #[inline(always)]
    pub fn ep_key(&self, file: u8) -> u64 {
        self.keys[EP_KEYS + file as usize]
    }

    #[cfg(test)]
    pub(crate) fn all(&self) -> &[u64] {
        &self.keys
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
