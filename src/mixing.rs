//! Fixed bit permutations applied between and around the rings.
//!
//! Two families live here: the four half-word cross-connects placed between
//! consecutive rings, and the 128-bit interleave that spreads every input
//! byte across both words before the first ring.

/// Half-word cross-connect between two consecutive rings.
///
/// With `H`/`L` the high/low 32 bits of a word and `a‖b` meaning `a` in the
/// upper half:
///
/// | op | word0' | word1' |
/// |---|---|---|
/// | `Inner` | H0‖H1 | L0‖L1 |
/// | `Outer` | L1‖L0 | H1‖H0 |
/// | `Inter` | L0‖H0 | L1‖H1 |
/// | `Swap`  | L1‖H1 | L0‖H0 |
///
/// Every op is its own inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossOp {
    Inner = 0,
    Outer = 1,
    Inter = 2,
    Swap = 3,
}

impl CrossOp {
    /// All ops, indexed by their code.
    pub const ALL: [CrossOp; 4] = [CrossOp::Inner, CrossOp::Outer, CrossOp::Inter, CrossOp::Swap];

    /// Maps a stored op code to an op; `None` for codes outside 0..3.
    pub fn from_code(code: u32) -> Option<CrossOp> {
        CrossOp::ALL.get(code as usize).copied()
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    #[inline]
    pub fn apply(self, word0: u64, word1: u64) -> (u64, u64) {
        let (h0, l0) = (word0 >> 32, word0 & 0xFFFF_FFFF);
        let (h1, l1) = (word1 >> 32, word1 & 0xFFFF_FFFF);
        match self {
            CrossOp::Inner => ((h0 << 32) | h1, (l0 << 32) | l1),
            CrossOp::Outer => ((l1 << 32) | l0, (h1 << 32) | h0),
            CrossOp::Inter => ((l0 << 32) | h0, (l1 << 32) | h1),
            CrossOp::Swap => ((l1 << 32) | h1, (l0 << 32) | h0),
        }
    }
}

/// Applies the cross-connect with code `op`. Unknown codes leave the words unchanged.
#[inline]
pub fn cross_permute(op: u32, word0: u64, word1: u64) -> (u64, u64) {
    match CrossOp::from_code(op) {
        Some(op) => op.apply(word0, word1),
        None => (word0, word1),
    }
}

/// Source bit of every interleave output bit.
///
/// Output bit `j` is input bit `INTERLEAVE_SRC[j]`, where bits 0..63 are
/// word 0 and 64..127 are word 1 (LSB first). The table is the composition
/// of two rounds of byte recombination, each followed by an 8x8 bit-matrix
/// transpose of both words.
#[rustfmt::skip]
pub const INTERLEAVE_SRC: [u8; 128] = [
      0,  95,   1,  94,   2,  93,   3,  92, 120,  39, 121,  38, 122,  37, 123,  36,
      8,  87,   9,  86,  10,  85,  11,  84, 112,  47, 113,  46, 114,  45, 115,  44,
     16,  79,  17,  78,  18,  77,  19,  76, 104,  55, 105,  54, 106,  53, 107,  52,
     24,  71,  25,  70,  26,  69,  27,  68,  96,  63,  97,  62,  98,  61,  99,  60,
     56, 103,  57, 102,  58, 101,  59, 100,  64,  31,  65,  30,  66,  29,  67,  28,
     48, 111,  49, 110,  50, 109,  51, 108,  72,  23,  73,  22,  74,  21,  75,  20,
     40, 119,  41, 118,  42, 117,  43, 116,  80,  15,  81,  14,  82,  13,  83,  12,
     32, 127,  33, 126,  34, 125,  35, 124,  88,   7,  89,   6,  90,   5,  91,   4,
];

/// Source bit of every deinterleave output bit; the inverse of [`INTERLEAVE_SRC`].
#[rustfmt::skip]
pub const DEINTERLEAVE_SRC: [u8; 128] = [
      0,   2,   4,   6, 127, 125, 123, 121,  16,  18,  20,  22, 111, 109, 107, 105,
     32,  34,  36,  38,  95,  93,  91,  89,  48,  50,  52,  54,  79,  77,  75,  73,
    112, 114, 116, 118,  15,  13,  11,   9,  96,  98, 100, 102,  31,  29,  27,  25,
     80,  82,  84,  86,  47,  45,  43,  41,  64,  66,  68,  70,  63,  61,  59,  57,
     72,  74,  76,  78,  55,  53,  51,  49,  88,  90,  92,  94,  39,  37,  35,  33,
    104, 106, 108, 110,  23,  21,  19,  17, 120, 122, 124, 126,   7,   5,   3,   1,
     56,  58,  60,  62,  71,  69,  67,  65,  40,  42,  44,  46,  87,  85,  83,  81,
     24,  26,  28,  30, 103, 101,  99,  97,   8,  10,  12,  14, 119, 117, 115, 113,
];

#[inline]
fn permute_bits(table: &[u8; 128], word0: u64, word1: u64) -> (u64, u64) {
    let mut out = [0u64; 2];
    for (j, &src) in table.iter().enumerate() {
        let word = if src < 64 { word0 } else { word1 };
        let bit = (word >> (src & 63)) & 1;
        out[j >> 6] |= bit << (j & 63);
    }
    (out[0], out[1])
}

/// Spreads the bytes of both words across the whole block.
#[inline]
pub fn interleave(word0: u64, word1: u64) -> (u64, u64) {
    permute_bits(&INTERLEAVE_SRC, word0, word1)
}

/// Exact inverse of [`interleave`].
#[inline]
pub fn deinterleave(word0: u64, word1: u64) -> (u64, u64) {
    permute_bits(&DEINTERLEAVE_SRC, word0, word1)
}
