//! Keyed cascade of self-clocking shift registers.
//!
//! `shiftcascade` is a symmetric stream cipher core operating on 128-bit
//! blocks (two `u64` words). Strength scales with the number of rings in the
//! cascade; every ring adds four registers to the feedback network.
//!
//! # Architecture
//!
//! ```text
//! ShiftRegister  (64-bit register; feedback from its own windows and two linked neighbours)
//!     ↕ up / down links, arbitrary graph after keying
//! RegisterRing   (4 registers; transforms one 128-bit block)
//!     ↕ N rings in series, a cross-connect between consecutive rings
//! CipherCascade  (Walsh mask + interleave + N rings + state hopping)
//! ```
//!
//! All key material comes from a [`KeyStream`]. [`CipherCascade::rekey`]
//! derives one from a password with [`ChaoticKeyStream`].
//!
//! # Examples
//!
//! Encrypt and decrypt a block:
//!
//! ```
//! use shiftcascade::CipherCascade;
//!
//! let mut encoder = CipherCascade::new();
//! encoder.rekey("my_secret_password").unwrap();
//!
//! let mut decoder = CipherCascade::new();
//! decoder.rekey("my_secret_password").unwrap();
//!
//! let original = [42u64, 84];
//! let mut block = original;
//!
//! encoder.encode_in_place(&mut block);
//! assert_ne!(block, original);
//!
//! decoder.decode_in_place(&mut block);
//! assert_eq!(block, original);
//! ```
//!
//! Use more rings:
//!
//! ```
//! use shiftcascade::CipherCascade;
//!
//! let mut cascade = CipherCascade::with_rings(16).unwrap();
//! cascade.rekey("my_secret_password").unwrap();
//! let (_w0, _w1) = cascade.encode_block(1, 2);
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod keyschedule;
pub mod mixing;
pub mod register;
pub mod ring;
pub mod walsh;

mod cascade;

pub use cascade::CipherCascade;
pub use config::CascadeConfig;
pub use error::CascadeError;
pub use keyschedule::{random_permutation, ChaoticKeyStream, KeyStream, PasswordSeeder};
pub use mixing::{cross_permute, deinterleave, interleave, CrossOp};
pub use register::{Direction, RegisterArena, RegisterId, ShiftRegister};
pub use ring::RegisterRing;
