//! Key stream driven by twenty Lorenz attractors.

use log::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::lorenz::{LorenzAttractor, LORENZ_PARAMS};
use super::password::PasswordSeeder;
use super::KeyStream;
use crate::error::CascadeError;

/// Number of attractors mixed into every output.
pub const NUM_ATTRACTORS: usize = 20;

/// Upper bound (exclusive) on the per-output step count.
const JUMP_LIMIT: u32 = 25;

/// Low 52 bits of an `f64`: the stored mantissa.
const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// 53-bit mask applied to the folded mantissas.
const DRAW_MASK: u64 = 0x001F_FFFF_FFFF_FFFF;

/// `i64::MAX >> 33`: the scale of [`ChaoticKeyStream::next_int`].
const INT_SCALE: u64 = (i64::MAX as u64) >> 33;

/// Deterministic key stream seeded from a password.
///
/// Each output advances every attractor by the same `jump`, then folds the
/// mantissas of the fractional parts of all sixty coordinates into one
/// 53-bit draw.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaoticKeyStream {
    attractors: [LorenzAttractor; NUM_ATTRACTORS],
    jump: u32,
}

impl ChaoticKeyStream {
    /// Builds the stream for `password`.
    ///
    /// # Errors
    /// Returns [`CascadeError::KeyRejected`] if the password is empty.
    pub fn from_password(password: &str) -> Result<Self, CascadeError> {
        if password.is_empty() {
            warn!("rejecting empty password");
            return Err(CascadeError::KeyRejected("password is empty"));
        }
        let mut seeder = PasswordSeeder::new(password);
        Ok(Self::from_seeder(&mut seeder))
    }

    /// Builds the stream from an already derived seeder.
    ///
    /// Reads one short spark for the jump, then three sparks per attractor
    /// for its starting point.
    pub fn from_seeder(seeder: &mut PasswordSeeder) -> Self {
        let raw = seeder.next_short_spark() as u32;
        let mut jump = raw % JUMP_LIMIT;
        if jump == 0 {
            jump = (raw / JUMP_LIMIT) % (JUMP_LIMIT - 1) + 1;
        }

        let attractors = std::array::from_fn(|k| {
            let mut attractor = LorenzAttractor::new(LORENZ_PARAMS[k]);
            let x = 255.0 * seeder.next_spark();
            let y = 255.0 * seeder.next_spark();
            let z = 255.0 * seeder.next_spark();
            attractor.set_point(x, y, z);
            attractor.advance(jump);
            attractor
        });

        ChaoticKeyStream { attractors, jump }
    }

    /// Steps taken by every attractor per output, in `1..25`.
    pub fn jump(&self) -> u32 {
        self.jump
    }

    /// Next value in `[0, 1)`.
    pub fn next_double(&mut self) -> f64 {
        let mut folded: u64 = 0;
        for attractor in self.attractors.iter_mut() {
            attractor.advance(self.jump);
            for coord in attractor.point() {
                let frac = coord.abs().fract();
                folded = (folded << 12) ^ (frac.to_bits() & MANTISSA_MASK);
            }
        }
        (folded & DRAW_MASK) as f64 * (1.0 / 9007199254740991.0)
    }

    /// Non-negative draw below `2^30`.
    pub fn next_int(&mut self) -> i32 {
        (INT_SCALE as f64 * self.next_double()) as i32
    }
}

impl KeyStream for ChaoticKeyStream {
    /// Non-negative 63-bit value.
    fn next_word(&mut self) -> u64 {
        (i64::MAX as f64 * self.next_double()) as u64
    }

    /// Power-of-two bounds scale a [`next_int`](ChaoticKeyStream::next_int)
    /// draw; other bounds reject-sample it. Bounds above `i32::MAX` are
    /// treated as `i32::MAX`.
    fn next_bounded(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let n = bound.min(i32::MAX as u32) as i32;
        if n & n.wrapping_neg() == n {
            return ((n as i64 * self.next_int() as i64) >> 31) as u32;
        }
        loop {
            let bits = self.next_int();
            let val = bits % n;
            if bits.wrapping_sub(val).wrapping_add(n - 1) >= 0 {
                return val as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(password: &str) -> ChaoticKeyStream {
        ChaoticKeyStream::from_password(password).unwrap()
    }

    #[test]
    fn test_empty_password_rejected() {
        assert_eq!(
            ChaoticKeyStream::from_password("").err(),
            Some(CascadeError::KeyRejected("password is empty"))
        );
    }

    #[test]
    fn test_reference_words() {
        let mut s = stream("testpassword");
        assert_eq!(s.jump(), 1);
        assert_eq!(s.next_word(), 0x3CF6958CF693B800);
        assert_eq!(s.next_word(), 0x0071C821E7650C08);
        assert_eq!(s.next_word(), 0x792AE8321C084000);
        assert_eq!(s.next_word(), 0x0BC0673BE7BDE080);
    }

    #[test]
    fn test_reference_doubles() {
        let mut s = stream("testpassword");
        assert_eq!(s.next_double(), 0.4762751520439943);
        assert_eq!(s.next_double(), 0.0034723439737621717);
    }

    #[test]
    fn test_reference_bounded() {
        let mut s = stream("testpassword");
        let draws: Vec<u32> = (0..10).map(|_| s.next_bounded(15)).collect();
        assert_eq!(draws, vec![5, 0, 4, 2, 8, 2, 13, 2, 9, 3]);
    }

    #[test]
    fn test_power_of_two_bounds_use_lower_half() {
        // The draw is 30 bits wide, so a power-of-two bound only reaches its lower half.
        let mut s = stream("testpassword");
        let draws: Vec<u32> = (0..8).map(|_| s.next_bounded(32)).collect();
        assert_eq!(draws, vec![7, 0, 15, 1, 10, 13, 11, 3]);
        for _ in 0..200 {
            assert!(s.next_bounded(128) < 64);
        }
    }

    #[test]
    fn test_jump_values() {
        assert_eq!(stream("a").jump(), 14);
        assert_eq!(stream("SizeSweep_4").jump(), 7);
        assert_eq!(stream("Pow2Sweep_512").jump(), 9);
        assert_eq!(stream("Pow2Sweep_2048").jump(), 10);
        assert_eq!(stream("TestCrossCompat2024").jump(), 17);
    }

    #[test]
    fn test_non_ascii_password() {
        let mut a = stream("√π€");
        let mut b = stream("√π€");
        assert_eq!(a.jump(), 14);
        assert_eq!(a.next_word(), b.next_word());
    }

    #[test]
    fn test_ranges() {
        let mut s = stream("TestPassword");
        for _ in 0..100 {
            let d = s.next_double();
            assert!((0.0..1.0).contains(&d), "next_double out of range: {d}");
            assert!(s.next_word() <= i64::MAX as u64);
            assert!(s.next_bounded(10) < 10);
            assert!(s.next_bounded(1) == 0);
        }
        assert_eq!(s.next_bounded(0), 0);
    }

    #[test]
    fn test_deterministic() {
        let mut a = stream("TestPassword");
        let mut b = stream("TestPassword");
        for _ in 0..20 {
            assert_eq!(a.next_word(), b.next_word());
            assert_eq!(a.next_bounded(36), b.next_bounded(36));
        }
    }

    #[test]
    fn test_different_passwords_diverge() {
        let mut a = stream("Password1");
        let mut b = stream("Password2");
        let same = (0..5).all(|_| a.next_word() == b.next_word());
        assert!(!same, "different passwords should produce different words");
    }
}
