//! CipherCascade: the keyed chain of register rings.
//!
//! A block is Walsh-masked, interleaved, then passed through every ring in
//! order with a half-word cross-connect between consecutive rings. After the
//! block, every register clocks and the hop schedule swaps register states
//! across the whole network, so each block sees a different cipher state.

use log::{debug, warn};
use zeroize::Zeroize;

use crate::config::CascadeConfig;
use crate::error::CascadeError;
use crate::keyschedule::{random_permutation_into, ChaoticKeyStream, KeyStream};
use crate::mixing::{cross_permute, deinterleave, interleave};
use crate::register::{Direction, RegisterArena, RegisterId, ShiftRegister};
use crate::ring::{RegisterRing, RING_SIZE};
use crate::walsh::{self, WALSH_ROWS};

/// Symmetric stream cipher over 128-bit blocks.
///
/// Registers are addressed by a flat index in `0..num_seeds()`: ring `r`
/// owns indices `4r..4r+4`. Rings allocate their registers in order, so the
/// flat index of a register is also its arena id.
///
/// Encoder and decoder must be keyed with the same password and ring count,
/// and must process blocks in the same order.
///
/// # Examples
///
/// ```
/// use shiftcascade::CipherCascade;
///
/// let mut encoder = CipherCascade::new();
/// let mut decoder = CipherCascade::new();
/// encoder.rekey("secret").unwrap();
/// decoder.rekey("secret").unwrap();
///
/// let cipher = encoder.encode_block(42, 84);
/// assert_ne!(cipher, (42, 84));
/// assert_eq!(decoder.decode_block(cipher.0, cipher.1), (42, 84));
/// ```
pub struct CipherCascade {
    arena: RegisterArena,
    rings: Vec<RegisterRing>,
    cross_ops: Vec<u32>,
    hop_sequence: Vec<usize>,
    walsh_index: usize,
    keyed: bool,
    perm_scratch: Vec<usize>,
    pool_scratch: Vec<usize>,
}

impl Default for CipherCascade {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherCascade {
    /// Creates an unkeyed cascade with the default ring count.
    pub fn new() -> Self {
        Self::build(CascadeConfig::default().rings)
    }

    /// Creates an unkeyed cascade with `rings` rings.
    ///
    /// # Errors
    /// Returns [`CascadeError::InvalidRingCount`] unless `2 <= rings <= 1024`.
    ///
    /// ```
    /// use shiftcascade::CipherCascade;
    ///
    /// assert!(CipherCascade::with_rings(16).is_ok());
    /// assert!(CipherCascade::with_rings(1).is_err());
    /// ```
    pub fn with_rings(rings: usize) -> Result<Self, CascadeError> {
        Self::from_config(&CascadeConfig::default().with_rings(rings))
    }

    /// Creates an unkeyed cascade shaped by `config`.
    ///
    /// # Errors
    /// Returns [`CascadeError::InvalidRingCount`] if the config is out of bounds.
    pub fn from_config(config: &CascadeConfig) -> Result<Self, CascadeError> {
        if let Err(err) = config.validate() {
            warn!("refusing cascade configuration: {err}");
            return Err(err);
        }
        Ok(Self::build(config.rings))
    }

    fn build(num_rings: usize) -> Self {
        let num_registers = RING_SIZE * num_rings;
        let mut arena = RegisterArena::with_capacity(num_registers);
        let rings: Vec<RegisterRing> = (0..num_rings)
            .map(|_| RegisterRing::new(&mut arena))
            .collect();

        let cross_ops = (0..num_rings - 1).map(|i| (i % 3) as u32).collect();
        let hop_sequence = (0..num_registers)
            .map(|i| (i + 1) % num_registers)
            .collect();

        debug!("built cascade with {num_rings} rings ({num_registers} registers)");

        CipherCascade {
            arena,
            rings,
            cross_ops,
            hop_sequence,
            walsh_index: 0,
            keyed: false,
            perm_scratch: vec![0; num_registers],
            pool_scratch: vec![0; num_registers],
        }
    }

    /// Re-derives every seed, link, timing parameter and schedule from
    /// `password`, then rewinds all registers to their new seeds.
    ///
    /// # Errors
    /// Returns [`CascadeError::KeyRejected`] for an empty password. The
    /// cascade is left exactly as it was.
    ///
    /// ```
    /// use shiftcascade::CipherCascade;
    ///
    /// let mut cascade = CipherCascade::new();
    /// assert!(cascade.rekey("").is_err());
    /// assert!(!cascade.is_keyed());
    /// assert!(cascade.rekey("valid_password").is_ok());
    /// assert!(cascade.is_keyed());
    /// ```
    pub fn rekey(&mut self, password: &str) -> Result<(), CascadeError> {
        let mut stream = ChaoticKeyStream::from_password(password)?;
        self.rekey_with(&mut stream)
    }

    /// Keys the cascade from an arbitrary key stream.
    ///
    /// Draws, in order: one word per register for the seeds, one `0..4` op
    /// per cross-connect, a permutation for the hop schedule, a permutation
    /// each for the up and down links, one `0..32` value per register for
    /// each of pos-up, pos-down, window A and window B, one `0..15` leap per
    /// register, and finally the Walsh row (a draw of 0 selects row 1).
    ///
    /// # Errors
    /// Returns [`CascadeError::UnresolvedLink`] if a derived link falls
    /// outside the register network; the cascade is then marked unkeyed.
    pub fn rekey_with<S>(&mut self, stream: &mut S) -> Result<(), CascadeError>
    where
        S: KeyStream + ?Sized,
    {
        let num_registers = self.arena.len();

        for i in 0..num_registers {
            self.arena.set_seed(RegisterId(i), stream.next_word());
        }

        for op in self.cross_ops.iter_mut() {
            *op = stream.next_bounded(4);
        }

        random_permutation_into(&mut *stream, &mut self.hop_sequence, &mut self.pool_scratch);

        random_permutation_into(&mut *stream, &mut self.perm_scratch, &mut self.pool_scratch);
        for (j, &target) in self.perm_scratch.iter().enumerate() {
            self.arena.set_up_link(RegisterId(j), RegisterId(target));
        }

        random_permutation_into(&mut *stream, &mut self.perm_scratch, &mut self.pool_scratch);
        for (j, &target) in self.perm_scratch.iter().enumerate() {
            self.arena.set_down_link(RegisterId(j), RegisterId(target));
        }

        let setters: [fn(&mut RegisterArena, RegisterId, u32); 4] = [
            RegisterArena::set_pos_up,
            RegisterArena::set_pos_down,
            RegisterArena::set_win_a,
            RegisterArena::set_win_b,
        ];
        for set in setters {
            for i in 0..num_registers {
                set(&mut self.arena, RegisterId(i), stream.next_bounded(32));
            }
        }
        for i in 0..num_registers {
            self.arena.set_leap(RegisterId(i), stream.next_bounded(15));
        }

        self.walsh_index = match stream.next_bounded(WALSH_ROWS as u32) as usize {
            0 => 1,
            row => row.min(WALSH_ROWS - 1),
        };
        for scratch in [&mut self.perm_scratch, &mut self.pool_scratch] {
            scratch.zeroize();
            scratch.resize(num_registers, 0);
        }

        if let Err(err) = self.arena.validate_links() {
            warn!("key schedule produced an invalid register graph: {err}");
            self.keyed = false;
            return Err(err);
        }

        self.reset();
        self.keyed = true;
        debug!("rekeyed cascade with {} rings", self.rings.len());
        Ok(())
    }

    /// Rewinds every register to its seed. Links, timing and schedules stay.
    ///
    /// ```
    /// use shiftcascade::CipherCascade;
    ///
    /// let mut cascade = CipherCascade::new();
    /// cascade.rekey("secret").unwrap();
    /// let first = cascade.encode_block(1, 2);
    /// cascade.reset();
    /// assert_eq!(cascade.encode_block(1, 2), first);
    /// ```
    pub fn reset(&mut self) {
        for ring in &self.rings {
            ring.reset(&mut self.arena);
        }
    }

    /// Encrypts one block and advances the cipher state.
    pub fn encode_block(&mut self, word0: u64, word1: u64) -> (u64, u64) {
        let [mask0, mask1] = walsh::mask(self.walsh_index);
        let (mut w0, mut w1) = interleave(word0 ^ mask0, word1 ^ mask1);

        let last = self.rings.len() - 1;
        for (ring, &op) in self.rings[..last].iter().zip(&self.cross_ops) {
            (w0, w1) = ring.codec(&mut self.arena, w0, w1, Direction::Encode);
            (w0, w1) = cross_permute(op, w0, w1);
        }
        (w0, w1) = self.rings[last].codec(&mut self.arena, w0, w1, Direction::Encode);

        for ring in &self.rings {
            ring.clock_all(&mut self.arena, Direction::Encode);
        }
        self.hop_seeds();
        (w0, w1)
    }

    /// Decrypts one block and advances the cipher state.
    ///
    /// Must be fed the blocks in the order the encoder produced them.
    pub fn decode_block(&mut self, word0: u64, word1: u64) -> (u64, u64) {
        let (mut w0, mut w1) = (word0, word1);

        for i in (1..self.rings.len()).rev() {
            (w0, w1) = self.rings[i].codec(&mut self.arena, w0, w1, Direction::Decode);
            (w0, w1) = cross_permute(self.cross_ops[i - 1], w0, w1);
        }
        (w0, w1) = self.rings[0].codec(&mut self.arena, w0, w1, Direction::Decode);

        let (w0, w1) = deinterleave(w0, w1);
        let [mask0, mask1] = walsh::mask(self.walsh_index);

        for ring in &self.rings {
            ring.clock_all(&mut self.arena, Direction::Decode);
        }
        self.hop_seeds();
        (w0 ^ mask0, w1 ^ mask1)
    }

    /// [`encode_block`](Self::encode_block) on a `[word0, word1]` array.
    pub fn encode_in_place(&mut self, block: &mut [u64; 2]) {
        let (w0, w1) = self.encode_block(block[0], block[1]);
        *block = [w0, w1];
    }

    /// [`decode_block`](Self::decode_block) on a `[word0, word1]` array.
    pub fn decode_in_place(&mut self, block: &mut [u64; 2]) {
        let (w0, w1) = self.decode_block(block[0], block[1]);
        *block = [w0, w1];
    }

    /// Swaps register states along the hop schedule, in index order.
    /// Targets outside the network are skipped.
    fn hop_seeds(&mut self) {
        let num_registers = self.arena.len();
        for (i, &target) in self.hop_sequence.iter().enumerate() {
            if target < num_registers {
                self.arena.swap_states(RegisterId(i), RegisterId(target));
            }
        }
    }

    // ──────── Introspection and manual tuning ────────

    /// Total number of registers, `4 * num_rings()`.
    pub fn num_seeds(&self) -> u32 {
        self.arena.len() as u32
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn num_cross_ops(&self) -> usize {
        self.cross_ops.len()
    }

    /// Whether a [`rekey`](Self::rekey) has succeeded on this instance.
    pub fn is_keyed(&self) -> bool {
        self.keyed
    }

    /// Selected Walsh row; 0 (no mask) until keyed.
    pub fn walsh_index(&self) -> usize {
        self.walsh_index
    }

    fn id(&self, index: usize) -> Option<RegisterId> {
        (index < self.arena.len()).then_some(RegisterId(index))
    }

    fn register(&self, index: usize) -> Option<&ShiftRegister> {
        self.id(index).map(|id| self.arena.get(id))
    }

    pub fn seed(&self, index: usize) -> Option<u64> {
        self.register(index).map(ShiftRegister::seed)
    }

    pub fn state(&self, index: usize) -> Option<u64> {
        self.register(index).map(ShiftRegister::state)
    }

    pub fn pos_up(&self, index: usize) -> Option<u32> {
        self.register(index).map(ShiftRegister::pos_up)
    }

    pub fn pos_down(&self, index: usize) -> Option<u32> {
        self.register(index).map(ShiftRegister::pos_down)
    }

    pub fn win_a(&self, index: usize) -> Option<u32> {
        self.register(index).map(ShiftRegister::win_a)
    }

    pub fn win_b(&self, index: usize) -> Option<u32> {
        self.register(index).map(ShiftRegister::win_b)
    }

    pub fn leap(&self, index: usize) -> Option<u32> {
        self.register(index).map(ShiftRegister::leap)
    }

    /// Flat index of the register's up neighbour.
    pub fn up_link(&self, index: usize) -> Option<usize> {
        self.register(index).map(|reg| reg.up_link().0)
    }

    /// Flat index of the register's down neighbour.
    pub fn down_link(&self, index: usize) -> Option<usize> {
        self.register(index).map(|reg| reg.down_link().0)
    }

    /// Op code of cross-connect `index` (between rings `index` and `index + 1`).
    pub fn cross_op(&self, index: usize) -> Option<u32> {
        self.cross_ops.get(index).copied()
    }

    /// Register whose state register `index` swaps with after each block.
    pub fn hop_target(&self, index: usize) -> Option<usize> {
        self.hop_sequence.get(index).copied()
    }

    /// Sets the seed and rewinds the register's state to it.
    pub fn set_seed(&mut self, index: usize, seed: u64) {
        if let Some(id) = self.id(index) {
            self.arena.set_seed(id, seed);
        }
    }

    pub fn set_state(&mut self, index: usize, state: u64) {
        if let Some(id) = self.id(index) {
            self.arena.set_state(id, state);
        }
    }

    /// Out-of-domain positions store 29.
    pub fn set_pos_up(&mut self, index: usize, pos: u32) {
        if let Some(id) = self.id(index) {
            self.arena.set_pos_up(id, pos);
        }
    }

    /// Out-of-domain positions store 9.
    pub fn set_pos_down(&mut self, index: usize, pos: u32) {
        if let Some(id) = self.id(index) {
            self.arena.set_pos_down(id, pos);
        }
    }

    /// Out-of-domain positions are ignored.
    pub fn set_win_a(&mut self, index: usize, pos: u32) {
        if let Some(id) = self.id(index) {
            self.arena.set_win_a(id, pos);
        }
    }

    /// Out-of-domain positions are ignored.
    pub fn set_win_b(&mut self, index: usize, pos: u32) {
        if let Some(id) = self.id(index) {
            self.arena.set_win_b(id, pos);
        }
    }

    /// Leaps outside `1..=14` store 7.
    pub fn set_leap(&mut self, index: usize, leap: u32) {
        if let Some(id) = self.id(index) {
            self.arena.set_leap(id, leap);
        }
    }

    /// Points register `index`'s up link at register `target`.
    /// Ignored unless both are in range.
    pub fn set_up_link(&mut self, index: usize, target: usize) {
        if let (Some(id), Some(target)) = (self.id(index), self.id(target)) {
            self.arena.set_up_link(id, target);
        }
    }

    /// Points register `index`'s down link at register `target`.
    /// Ignored unless both are in range.
    pub fn set_down_link(&mut self, index: usize, target: usize) {
        if let (Some(id), Some(target)) = (self.id(index), self.id(target)) {
            self.arena.set_down_link(id, target);
        }
    }

    /// Stores `op` for cross-connect `index`. Codes outside 0..3 act as no-ops.
    pub fn set_cross_op(&mut self, index: usize, op: u32) {
        if let Some(slot) = self.cross_ops.get_mut(index) {
            *slot = op;
        }
    }

    /// Stores the hop target of register `index`. Out-of-range targets are skipped when hopping.
    pub fn set_hop_target(&mut self, index: usize, target: usize) {
        if let Some(slot) = self.hop_sequence.get_mut(index) {
            *slot = target;
        }
    }
}

impl Drop for CipherCascade {
    fn drop(&mut self) {
        self.cross_ops.zeroize();
        self.hop_sequence.zeroize();
        self.walsh_index.zeroize();
        self.perm_scratch.zeroize();
        self.pool_scratch.zeroize();
    }
}
