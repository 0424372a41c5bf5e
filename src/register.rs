//! Self-clocking 64-bit shift registers and the arena that links them.
//!
//! A register's feedback reads 32-bit windows from two neighbours (its up
//! link and its down link). Keying rewires those links into an arbitrary
//! directed graph, cycles included, so registers never own each other: they
//! live in a [`RegisterArena`] and refer to neighbours by [`RegisterId`].

use zeroize::Zeroize;

use crate::error::CascadeError;

/// Index of a register inside its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterId(pub usize);

/// Which side of the cipher is driving a register.
///
/// Both sides XOR the same way; they differ only in which value feeds the
/// next clock. The encoder knows the plaintext window before XOR
/// (`last_input`), the decoder only after recovering it (`last_output`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Default window offsets and leap of a freshly created register.
const DEFAULT_POS_UP: u32 = 5;
const DEFAULT_POS_DOWN: u32 = 15;
const DEFAULT_WIN_A: u32 = 9;
const DEFAULT_WIN_B: u32 = 27;
const DEFAULT_LEAP: u32 = 1;

/// Replacements used when a setter receives an out-of-domain value.
const FALLBACK_POS_UP: u32 = 29;
const FALLBACK_POS_DOWN: u32 = 9;
const FALLBACK_LEAP: u32 = 7;

/// One 64-bit register with its timing parameters and neighbour links.
#[derive(Debug, Clone, Zeroize)]
pub struct ShiftRegister {
    seed: u64,
    state: u64,
    pos_up: u32,
    pos_down: u32,
    win_a: u32,
    win_b: u32,
    leap: u32,
    last_input: u32,
    last_output: u32,
    #[zeroize(skip)]
    up_link: RegisterId,
    #[zeroize(skip)]
    down_link: RegisterId,
}

impl ShiftRegister {
    /// Creates a register whose state equals `seed`, linked to itself.
    fn new(seed: u64, id: RegisterId) -> Self {
        ShiftRegister {
            seed,
            state: seed,
            pos_up: DEFAULT_POS_UP,
            pos_down: DEFAULT_POS_DOWN,
            win_a: DEFAULT_WIN_A,
            win_b: DEFAULT_WIN_B,
            leap: DEFAULT_LEAP,
            last_input: 0,
            last_output: 0,
            up_link: id,
            down_link: id,
        }
    }

    /// Returns the state shifted right by `pos` and truncated to 32 bits.
    ///
    /// `pos` must be in `0..32`; every stored offset is kept in that range.
    #[inline]
    pub fn window(&self, pos: u32) -> u32 {
        debug_assert!(pos < 32, "window position {pos} out of range");
        (self.state >> pos) as u32
    }

    /// XORs `input` with the low 32 bits of the state.
    ///
    /// Records `input` as the last input and the result as the last output.
    #[inline]
    pub fn bits_encode(&mut self, input: u32) -> u32 {
        self.last_input = input;
        self.last_output = input ^ (self.state as u32);
        self.last_output
    }

    /// Inverse of [`bits_encode`](Self::bits_encode); the formula is the same.
    #[inline]
    pub fn bits_decode(&mut self, input: u32) -> u32 {
        self.last_input = input;
        self.last_output = input ^ (self.state as u32);
        self.last_output
    }

    /// Plaintext-side value folded into the next clock.
    #[inline]
    fn feedback(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Encode => self.last_input,
            Direction::Decode => self.last_output,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    pub fn pos_up(&self) -> u32 {
        self.pos_up
    }

    pub fn pos_down(&self) -> u32 {
        self.pos_down
    }

    pub fn win_a(&self) -> u32 {
        self.win_a
    }

    pub fn win_b(&self) -> u32 {
        self.win_b
    }

    pub fn leap(&self) -> u32 {
        self.leap
    }

    pub fn up_link(&self) -> RegisterId {
        self.up_link
    }

    pub fn down_link(&self) -> RegisterId {
        self.down_link
    }

    pub fn last_input(&self) -> u32 {
        self.last_input
    }

    pub fn last_output(&self) -> u32 {
        self.last_output
    }
}

/// Flat storage for every register of a cascade.
///
/// All links are indices into this arena, so the graph may contain cycles
/// without reference counting or `unsafe`.
pub struct RegisterArena {
    registers: Vec<ShiftRegister>,
}

impl RegisterArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        RegisterArena {
            registers: Vec::new(),
        }
    }

    /// Creates an empty arena with room for `capacity` registers.
    pub fn with_capacity(capacity: usize) -> Self {
        RegisterArena {
            registers: Vec::with_capacity(capacity),
        }
    }

    /// Adds a register seeded with `seed` and returns its id.
    ///
    /// The new register links to itself until a ring wires it up.
    pub fn push(&mut self, seed: u64) -> RegisterId {
        let id = RegisterId(self.registers.len());
        self.registers.push(ShiftRegister::new(seed, id));
        id
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Read access to one register.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this arena.
    pub fn get(&self, id: RegisterId) -> &ShiftRegister {
        &self.registers[id.0]
    }

    pub fn bits_encode(&mut self, id: RegisterId, input: u32) -> u32 {
        self.registers[id.0].bits_encode(input)
    }

    pub fn bits_decode(&mut self, id: RegisterId, input: u32) -> u32 {
        self.registers[id.0].bits_decode(input)
    }

    /// Advances one register by one clock.
    ///
    /// Neighbour windows are read from the arena as they are right now, so a
    /// neighbour clocked earlier in the same pass contributes its new state.
    pub fn clock(&mut self, id: RegisterId, direction: Direction) {
        let reg = &self.registers[id.0];
        let up = &self.registers[reg.up_link.0];
        let down = &self.registers[reg.down_link.0];

        let upper = reg.window(reg.win_a) ^ up.window(reg.pos_up);
        let lower = reg.window(reg.win_b) ^ down.window(reg.pos_down);
        let combined = upper ^ lower ^ reg.feedback(direction);
        // The feedback word is sign-extended before it is inserted at bit 31.
        let inserted = ((combined as i32 as i64) << 31) as u64;

        let reg = &mut self.registers[id.0];
        reg.state = inserted ^ (reg.state >> reg.leap);
    }

    /// Clocks using the last input as feedback.
    pub fn clock_forward(&mut self, id: RegisterId) {
        self.clock(id, Direction::Encode);
    }

    /// Clocks using the last output as feedback.
    pub fn clock_backward(&mut self, id: RegisterId) {
        self.clock(id, Direction::Decode);
    }

    /// Sets the seed and rewinds the state to it.
    pub fn set_seed(&mut self, id: RegisterId, seed: u64) {
        let reg = &mut self.registers[id.0];
        reg.seed = seed;
        reg.state = seed;
    }

    /// Overwrites the state without touching the seed.
    pub fn set_state(&mut self, id: RegisterId, state: u64) {
        self.registers[id.0].state = state;
    }

    /// Rewinds the state to the seed.
    pub fn reset(&mut self, id: RegisterId) {
        let reg = &mut self.registers[id.0];
        reg.state = reg.seed;
    }

    /// Sets the up-link window offset (0..31). Out of range stores 29.
    pub fn set_pos_up(&mut self, id: RegisterId, pos: u32) {
        self.registers[id.0].pos_up = if pos < 32 { pos } else { FALLBACK_POS_UP };
    }

    /// Sets the down-link window offset (0..31). Out of range stores 9.
    pub fn set_pos_down(&mut self, id: RegisterId, pos: u32) {
        self.registers[id.0].pos_down = if pos < 32 { pos } else { FALLBACK_POS_DOWN };
    }

    /// Sets window A (0..31). Ignored if out of range.
    pub fn set_win_a(&mut self, id: RegisterId, pos: u32) {
        if pos < 32 {
            self.registers[id.0].win_a = pos;
        }
    }

    /// Sets window B (0..31). Ignored if out of range.
    pub fn set_win_b(&mut self, id: RegisterId, pos: u32) {
        if pos < 32 {
            self.registers[id.0].win_b = pos;
        }
    }

    /// Sets the leap (1..14). Out of range stores 7.
    pub fn set_leap(&mut self, id: RegisterId, leap: u32) {
        self.registers[id.0].leap = if (1..15).contains(&leap) {
            leap
        } else {
            FALLBACK_LEAP
        };
    }

    pub fn set_up_link(&mut self, id: RegisterId, up: RegisterId) {
        self.registers[id.0].up_link = up;
    }

    pub fn set_down_link(&mut self, id: RegisterId, down: RegisterId) {
        self.registers[id.0].down_link = down;
    }

    /// Sets both links at once.
    pub fn set_links(&mut self, id: RegisterId, up: RegisterId, down: RegisterId) {
        let reg = &mut self.registers[id.0];
        reg.up_link = up;
        reg.down_link = down;
    }

    /// Swaps the full 64-bit states of two registers. Seeds stay put.
    pub fn swap_states(&mut self, a: RegisterId, b: RegisterId) {
        let state_a = self.registers[a.0].state;
        self.registers[a.0].state = self.registers[b.0].state;
        self.registers[b.0].state = state_a;
    }

    /// Checks that every link resolves to a register of this arena.
    ///
    /// # Errors
    /// Returns [`CascadeError::UnresolvedLink`] for the first dangling link.
    pub fn validate_links(&self) -> Result<(), CascadeError> {
        let len = self.registers.len();
        for (index, reg) in self.registers.iter().enumerate() {
            if reg.up_link.0 >= len {
                return Err(CascadeError::UnresolvedLink {
                    register: index,
                    side: "up",
                    target: reg.up_link.0,
                });
            }
            if reg.down_link.0 >= len {
                return Err(CascadeError::UnresolvedLink {
                    register: index,
                    side: "down",
                    target: reg.down_link.0,
                });
            }
        }
        Ok(())
    }
}

impl Default for RegisterArena {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RegisterArena {
    fn drop(&mut self) {
        self.registers.zeroize();
    }
}
