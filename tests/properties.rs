//! Property and statistical tests over the public API.

use proptest::prelude::*;
use shiftcascade::keyschedule::random_permutation_into;
use shiftcascade::{
    cross_permute, deinterleave, interleave, random_permutation, CipherCascade, CrossOp, KeyStream,
};

/// Replays a fixed list of raw draws, reduced modulo each bound.
struct ScriptedStream {
    draws: Vec<u32>,
    next: usize,
}

impl ScriptedStream {
    fn new(draws: Vec<u32>) -> Self {
        ScriptedStream { draws, next: 0 }
    }
}

impl KeyStream for ScriptedStream {
    fn next_word(&mut self) -> u64 {
        let raw = self.draws.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        ((raw as u64) << 17) | raw as u64
    }

    fn next_bounded(&mut self, bound: u32) -> u32 {
        let raw = self.draws.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        if bound == 0 {
            0
        } else {
            raw % bound
        }
    }
}

fn is_permutation(p: &[usize]) -> bool {
    let mut seen = vec![false; p.len()];
    for &v in p {
        if v >= p.len() || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn roundtrip_any_blocks(
        password in "[ -~]{1,24}",
        rings in 2usize..6,
        blocks in prop::collection::vec(any::<(u64, u64)>(), 1..12),
    ) {
        let mut encoder = CipherCascade::with_rings(rings).unwrap();
        let mut decoder = CipherCascade::with_rings(rings).unwrap();
        encoder.rekey(&password).unwrap();
        decoder.rekey(&password).unwrap();
        for &(p0, p1) in &blocks {
            let (c0, c1) = encoder.encode_block(p0, p1);
            prop_assert_eq!(decoder.decode_block(c0, c1), (p0, p1));
        }
    }

    #[test]
    fn identical_passwords_identical_output(password in "\\PC{1,16}") {
        let mut a = CipherCascade::with_rings(3).unwrap();
        let mut b = CipherCascade::with_rings(3).unwrap();
        a.rekey(&password).unwrap();
        b.rekey(&password).unwrap();
        for i in 0..12 {
            prop_assert_eq!(a.hop_target(i), b.hop_target(i));
            prop_assert_eq!(a.up_link(i), b.up_link(i));
            prop_assert_eq!(a.seed(i), b.seed(i));
        }
        prop_assert_eq!(a.encode_block(1, 2), b.encode_block(1, 2));
    }

    #[test]
    fn walsh_index_is_never_zero(password in "[a-zA-Z0-9]{1,12}") {
        let mut cascade = CipherCascade::with_rings(2).unwrap();
        cascade.rekey(&password).unwrap();
        prop_assert!(cascade.walsh_index() >= 1);
        prop_assert!(cascade.walsh_index() < 128);
    }
}

proptest! {
    #[test]
    fn interleave_deinterleave_identity(w0 in any::<u64>(), w1 in any::<u64>()) {
        let (x, y) = interleave(w0, w1);
        prop_assert_eq!(deinterleave(x, y), (w0, w1));
        prop_assert_eq!(
            x.count_ones() + y.count_ones(),
            w0.count_ones() + w1.count_ones()
        );
    }

    #[test]
    fn cross_ops_are_involutions(op in 0u32..4, w0 in any::<u64>(), w1 in any::<u64>()) {
        let (x, y) = cross_permute(op, w0, w1);
        prop_assert_eq!(cross_permute(op, x, y), (w0, w1));
        prop_assert_eq!(CrossOp::from_code(op).map(|op| op.apply(w0, w1)), Some((x, y)));
    }

    #[test]
    fn permutation_is_bijection_with_reversed_tail(
        k in 2usize..64,
        draws in prop::collection::vec(any::<u32>(), 64),
    ) {
        let mut stream = ScriptedStream::new(draws.clone());
        let out = random_permutation(&mut stream, k);
        prop_assert!(is_permutation(&out));

        // Replay the drawing phase to find the last two pool entries.
        let mut pool: Vec<usize> = (0..k).collect();
        for (i, &raw) in draws.iter().take(k - 2).enumerate() {
            let r = (raw % (k - i) as u32) as usize;
            pool.remove(r);
        }
        prop_assert_eq!(pool.len(), 2);
        prop_assert_eq!(out[k - 2], pool[1]);
        prop_assert_eq!(out[k - 1], pool[0]);
    }

    #[test]
    fn permutation_into_matches_allocating_form(
        k in 0usize..40,
        draws in prop::collection::vec(any::<u32>(), 40),
    ) {
        let expected = random_permutation(&mut ScriptedStream::new(draws.clone()), k);
        let mut out = vec![0; k];
        let mut pool = vec![0; 40];
        random_permutation_into(&mut ScriptedStream::new(draws), &mut out, &mut pool);
        prop_assert_eq!(out, expected);
    }
}

#[test]
fn scripted_permutation_extremes() {
    let k = 9;
    let mut zeros = ScriptedStream::new(vec![0; k]);
    assert_eq!(
        random_permutation(&mut zeros, k),
        vec![0, 1, 2, 3, 4, 5, 6, 8, 7]
    );

    // Drawing bound - 1 each time empties the pool from the top.
    let tops: Vec<u32> = (3..=k as u32).rev().map(|b| b - 1).collect();
    let mut tops = ScriptedStream::new(tops);
    assert_eq!(
        random_permutation(&mut tops, k),
        vec![8, 7, 6, 5, 4, 3, 2, 1, 0]
    );
}

/// A single flipped input bit spreads to about half of the output bits
/// once the difference has been fed back through a few clocks.
#[test]
fn avalanche_after_feedback() {
    let plain = (0x0123456789ABCDEF_u64, 0xFEDCBA9876543210_u64);
    let mut flipped_bits = 0u32;
    let mut samples = 0u32;

    for bit in (0..128u32).step_by(4) {
        let mut a = CipherCascade::new();
        let mut b = CipherCascade::new();
        a.rekey("avalanche").unwrap();
        b.rekey("avalanche").unwrap();

        let flipped = if bit < 64 {
            (plain.0 ^ (1 << bit), plain.1)
        } else {
            (plain.0, plain.1 ^ (1 << (bit - 64)))
        };
        a.encode_block(plain.0, plain.1);
        b.encode_block(flipped.0, flipped.1);

        for k in 0..16u64 {
            let x = a.encode_block(k, k);
            let y = b.encode_block(k, k);
            if k >= 12 {
                flipped_bits += (x.0 ^ y.0).count_ones() + (x.1 ^ y.1).count_ones();
                samples += 1;
            }
        }
    }

    let mean = flipped_bits as f64 / samples as f64;
    assert!(
        (56.0..=72.0).contains(&mean),
        "mean output bit difference {mean} is far from 64"
    );
}

#[test]
fn first_block_difference_is_confined() {
    // Within one block every stage XORs or permutes, so one flipped input
    // bit flips exactly one output bit of that block.
    let mut a = CipherCascade::new();
    let mut b = CipherCascade::new();
    a.rekey("linear").unwrap();
    b.rekey("linear").unwrap();
    let x = a.encode_block(0, 0);
    let y = b.encode_block(1, 0);
    assert_eq!((x.0 ^ y.0).count_ones() + (x.1 ^ y.1).count_ones(), 1);
}
