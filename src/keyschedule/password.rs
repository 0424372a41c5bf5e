//! Password-to-spark expansion.
//!
//! Every UTF-8 byte of the password is expanded to 56 bytes by rotating it
//! against a small mixing table, then all expansions are folded with powers
//! of π into 40 `f64` sparks. Sparks are rounded to 11 decimals so the same
//! password yields bit-identical sparks on every platform.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of sparks derived from a password.
pub const NUM_SPARKS: usize = 40;

/// Bytes produced per password byte.
pub const EXPANSION_LEN: usize = 56;

/// Decimal places kept on every spark.
const SPARK_DECIMALS: i32 = 11;

/// Byte-mixing table, indexed by the low nibble of the previous output byte.
const MIX_BYTES: [u8; 16] = [
    0x60, 0xE0, 0x90, 0xE0, 0x50, 0x20, 0xC0, 0x80, 0xD0, 0xF0, 0xA0, 0xC0, 0x00, 0x90, 0x00, 0xB0,
];

#[inline]
fn mix(byte: u8) -> u8 {
    MIX_BYTES[(byte & 0x0F) as usize]
}

/// Expands one password byte into [`EXPANSION_LEN`] bytes.
///
/// Byte 0 is the input itself; bytes 1..8 are rotations of it against the
/// mixing table; bytes 8..36 combine every pair of the first eight; the rest
/// blend earlier pairs under alternating bit masks.
pub fn expand_byte(input: u8) -> [u8; EXPANSION_LEN] {
    let mut out = [0u8; EXPANSION_LEN];
    out[0] = input;

    for i in 1..8 {
        out[i] = mix(out[i - 1]).rotate_left(i as u32) ^ out[0].rotate_right(i as u32);
    }

    for i in 0..7 {
        for j in (i + 1)..8 {
            let idx = (i + 1) * (14 - i) / 2 + j;
            out[idx] = (out[i].rotate_left(j as u32) ^ out[j].rotate_right(i as u32))
                ^ mix(out[idx - 1]).rotate_left(i as u32);
        }
    }

    for i in 0..5 {
        for j in (i + 2)..8 {
            let base = (i + 1) * (12 - i) / 2 + j;
            let blended = (out[base + 7].rotate_left(2) & 0xAA) | (out[i].rotate_right(2) & 0x55);
            out[base + 28] = blended ^ mix(out[base + 11]);
        }
    }

    out
}

/// Rounds half-up to `decimals` places.
fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10.0_f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

/// Serves the 40 sparks of a password, cyclically.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PasswordSeeder {
    sparks: [f64; NUM_SPARKS],
    cursor: usize,
}

impl PasswordSeeder {
    /// Derives the sparks of `password`.
    ///
    /// An empty password yields 40 zero sparks; callers enforce their own
    /// password policy before seeding.
    pub fn new(password: &str) -> Self {
        let mut seeder = PasswordSeeder {
            sparks: [0.0; NUM_SPARKS],
            cursor: 0,
        };
        let bytes = password.as_bytes();
        if bytes.is_empty() {
            return seeder;
        }

        let mut expanded: Vec<[u8; EXPANSION_LEN]> = bytes.iter().map(|&b| expand_byte(b)).collect();

        // Walk spark, row and column indices in lockstep until row and column wrap together.
        let (mut i, mut row, mut col) = (0usize, 0usize, 0usize);
        loop {
            let value = expanded[row][col] as i8 as f64;
            let spark = &mut seeder.sparks[i];
            if col != 0 && col % 2 == 0 {
                *spark += std::f64::consts::PI.powf(1.0 / col as f64) * value;
            } else if row != 0 && col % 2 == 1 {
                *spark += std::f64::consts::PI.powf(1.0 / row as f64) * value;
            } else {
                *spark += value;
            }
            if row % 3 != 0 {
                *spark *= -0.1;
            }

            i = (i + 1) % NUM_SPARKS;
            row = (row + 1) % expanded.len();
            col = (col + 1) % EXPANSION_LEN;
            if row == 0 && col == 0 {
                break;
            }
        }

        for spark in seeder.sparks.iter_mut() {
            *spark = round_to_decimals(*spark, SPARK_DECIMALS);
        }
        expanded.zeroize();
        seeder
    }

    /// Next spark, wrapping after the 40th.
    pub fn next_spark(&mut self) -> f64 {
        let value = self.sparks[self.cursor];
        self.cursor = (self.cursor + 1) % NUM_SPARKS;
        value
    }

    /// 15-bit value built from the raw bits of the next two sparks.
    pub fn next_short_spark(&mut self) -> u16 {
        let a = self.next_spark().to_bits();
        let b = self.next_spark().to_bits();
        (((a ^ !b) & 0x07FF_F000) >> 12) as u16
    }

    pub fn sparks(&self) -> &[f64; NUM_SPARKS] {
        &self.sparks
    }
}
