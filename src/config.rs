//! Construction-time configuration for a [`CipherCascade`](crate::CipherCascade).

use crate::error::CascadeError;

/// Default number of rings in a cascade.
pub const DEFAULT_RINGS: usize = 9;

/// Smallest accepted number of rings.
pub const MIN_RINGS: usize = 2;

/// Largest accepted number of rings.
pub const MAX_RINGS: usize = 1024;

/// Shape of a cascade, fixed for the lifetime of the instance.
///
/// More rings lengthen the register network (4 registers per ring) and lower
/// throughput proportionally. Encoder and decoder must agree on the ring
/// count as well as the password.
///
/// # Examples
///
/// ```
/// use shiftcascade::{CascadeConfig, CipherCascade};
///
/// let config = CascadeConfig::default().with_rings(16);
/// let cascade = CipherCascade::from_config(&config).unwrap();
/// assert_eq!(cascade.num_seeds(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CascadeConfig {
    /// Number of rings, in `[MIN_RINGS, MAX_RINGS]`.
    pub rings: usize,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        CascadeConfig {
            rings: DEFAULT_RINGS,
        }
    }
}

impl CascadeConfig {
    /// Returns a copy with the ring count replaced.
    pub fn with_rings(mut self, rings: usize) -> Self {
        self.rings = rings;
        self
    }

    /// Checks the configuration against the accepted bounds.
    ///
    /// # Errors
    /// Returns [`CascadeError::InvalidRingCount`] if `rings` is outside
    /// `[MIN_RINGS, MAX_RINGS]`.
    pub fn validate(&self) -> Result<(), CascadeError> {
        if !(MIN_RINGS..=MAX_RINGS).contains(&self.rings) {
            return Err(CascadeError::InvalidRingCount(self.rings));
        }
        Ok(())
    }
}
