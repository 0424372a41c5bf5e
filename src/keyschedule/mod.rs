//! Password-driven key material for the cascade.
//!
//! The cascade never sees a password directly. It consumes a [`KeyStream`]
//! of 64-bit words and bounded integers; [`ChaoticKeyStream`] is the stream
//! derived from a password through a [`PasswordSeeder`] and twenty Lorenz
//! attractors.

mod chaotic;
mod lorenz;
mod password;

pub use chaotic::{ChaoticKeyStream, NUM_ATTRACTORS};
pub use lorenz::{LorenzAttractor, LorenzParams, LORENZ_PARAMS};
pub use password::{expand_byte, PasswordSeeder, EXPANSION_LEN, NUM_SPARKS};

/// Deterministic source of key material.
///
/// Two streams built from the same input must return identical sequences;
/// the cascade relies on this to key encoder and decoder alike.
pub trait KeyStream {
    /// Next 64-bit value.
    fn next_word(&mut self) -> u64;

    /// Next value in `0..bound`. Returns 0 when `bound` is 0.
    fn next_bounded(&mut self, bound: u32) -> u32;
}

/// Fills `out` with a stream-driven permutation of `0..out.len()`.
///
/// Draws an index into the shrinking candidate pool, emits that candidate and
/// closes the gap, until two candidates remain. Those two are written to the
/// last two slots in reverse pool order, without drawing. Lengths 0 and 1
/// draw nothing. `pool` is scratch space and must hold at least
/// `out.len()` entries.
///
/// # Panics
/// Panics if `pool` is shorter than `out`.
pub fn random_permutation_into<S: KeyStream + ?Sized>(
    stream: &mut S,
    out: &mut [usize],
    pool: &mut [usize],
) {
    let k = out.len();
    match k {
        0 => return,
        1 => {
            out[0] = 0;
            return;
        }
        _ => {}
    }

    let pool = &mut pool[..k];
    for (i, slot) in pool.iter_mut().enumerate() {
        *slot = i;
    }

    let mut remaining = k;
    for slot in out.iter_mut().take(k - 2) {
        let r = (stream.next_bounded(remaining as u32) as usize).min(remaining - 1);
        *slot = pool[r];
        pool.copy_within(r + 1..remaining, r);
        remaining -= 1;
    }
    out[k - 2] = pool[1];
    out[k - 1] = pool[0];
}

/// Allocating form of [`random_permutation_into`].
pub fn random_permutation<S: KeyStream + ?Sized>(stream: &mut S, k: usize) -> Vec<usize> {
    let mut out = vec![0; k];
    let mut pool = vec![0; k];
    random_permutation_into(stream, &mut out, &mut pool);
    out
}
