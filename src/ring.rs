//! One cascade stage: four shift registers wired as a ring.

use crate::register::{Direction, RegisterArena, RegisterId};

/// Number of registers in a ring.
pub const RING_SIZE: usize = 4;

/// Four registers that together transform one 128-bit block.
///
/// Word 0 goes through registers 0 (low half) and 1 (high half), word 1
/// through registers 2 and 3. A fresh ring links register `k` up to `k+1` and
/// down to `k-1`, modulo 4; keying may rewire those links anywhere in the
/// arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterRing {
    members: [RegisterId; RING_SIZE],
}

impl RegisterRing {
    /// Allocates four zero-seeded registers in `arena` and links them in a cycle.
    pub fn new(arena: &mut RegisterArena) -> Self {
        let members = [(); RING_SIZE].map(|_| arena.push(0));
        for k in 0..RING_SIZE {
            let up = members[(k + 1) % RING_SIZE];
            let down = members[(k + RING_SIZE - 1) % RING_SIZE];
            arena.set_links(members[k], up, down);
        }
        RegisterRing { members }
    }

    /// Register at position `index` (0..3) of this ring.
    ///
    /// # Panics
    /// Panics if `index >= 4`.
    pub fn member(&self, index: usize) -> RegisterId {
        self.members[index]
    }

    pub fn members(&self) -> &[RegisterId; RING_SIZE] {
        &self.members
    }

    /// XORs both words with the low 32 bits of the member states.
    ///
    /// Records each register's last input and output for the next clock;
    /// does not clock.
    pub fn codec(
        &self,
        arena: &mut RegisterArena,
        word0: u64,
        word1: u64,
        direction: Direction,
    ) -> (u64, u64) {
        let out0 = self.codec_word(arena, 0, word0, direction);
        let out1 = self.codec_word(arena, 2, word1, direction);
        (out0, out1)
    }

    fn codec_word(
        &self,
        arena: &mut RegisterArena,
        first: usize,
        word: u64,
        direction: Direction,
    ) -> u64 {
        let low = word as u32;
        let high = (word >> 32) as u32;
        let (low, high) = match direction {
            Direction::Encode => (
                arena.bits_encode(self.members[first], low),
                arena.bits_encode(self.members[first + 1], high),
            ),
            Direction::Decode => (
                arena.bits_decode(self.members[first], low),
                arena.bits_decode(self.members[first + 1], high),
            ),
        };
        ((high as u64) << 32) | low as u64
    }

    /// Clocks registers 0 to 3 in order.
    pub fn clock_all(&self, arena: &mut RegisterArena, direction: Direction) {
        for &id in &self.members {
            arena.clock(id, direction);
        }
    }

    /// Rewinds every member to its seed.
    pub fn reset(&self, arena: &mut RegisterArena) {
        for &id in &self.members {
            arena.reset(id);
        }
    }
}
