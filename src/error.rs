//! Error types for the shiftcascade library.

use thiserror::Error;

/// Errors produced while building or keying a [`CipherCascade`](crate::CipherCascade).
///
/// Block encoding and decoding never fail; every error here comes from
/// construction or from [`rekey`](crate::CipherCascade::rekey).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeError {
    /// The password does not satisfy the key-derivation policy.
    ///
    /// The cascade keeps whatever keyed or unkeyed state it had before the call.
    #[error("password rejected by key schedule: {0}")]
    KeyRejected(&'static str),

    /// Requested number of rings is outside `[2, 1024]`.
    #[error("number of rings must be between 2 and 1024, got {0}")]
    InvalidRingCount(usize),

    /// A register link points outside the register arena.
    #[error("register {register} has an unresolved {side} link to {target}")]
    UnresolvedLink {
        register: usize,
        side: &'static str,
        target: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_key_rejected() {
        let err = CascadeError::KeyRejected("password is empty");
        assert_eq!(
            err.to_string(),
            "password rejected by key schedule: password is empty"
        );
    }

    #[test]
    fn test_display_invalid_ring_count() {
        let err = CascadeError::InvalidRingCount(1);
        assert_eq!(
            err.to_string(),
            "number of rings must be between 2 and 1024, got 1"
        );
    }

    #[test]
    fn test_display_unresolved_link() {
        let err = CascadeError::UnresolvedLink {
            register: 3,
            side: "up",
            target: 40,
        };
        assert_eq!(
            err.to_string(),
            "register 3 has an unresolved up link to 40"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err: &dyn std::error::Error = &CascadeError::InvalidRingCount(0);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_equality_and_clone() {
        let err = CascadeError::KeyRejected("password is empty");
        assert_eq!(err.clone(), err);
        assert_ne!(err, CascadeError::InvalidRingCount(1));
    }
}
