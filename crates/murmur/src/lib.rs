//! MurmurHash3 fingerprints (**NOT CRYPTO**).
//!
//! Deterministic, seeded, non-cryptographic hashes of a contiguous byte buffer,
//! bit-exact with the published MurmurHash3 reference on every host. Use them
//! for lookup keys, partitioning, and deduplication. Do not use them where an
//! adversary picks the input.
//!
//! # Variants
//!
//! | Type | Function | Output |
//! |------|----------|--------|
//! | [`Murmur3_32`] | [`hash32`] | `u32` |
//! | [`Murmur3_128`] | [`hash128`] / [`hash128_bytes`] | `[u32; 4]` / `[u8; 16]` |
//! | [`Murmur3X64_128`] | [`hash128_x64`] | `[u64; 2]` |
//!
//! `x86_128` and `x64_128` are different functions; pick one and keep it.
//!
//! # Example
//!
//! ```
//! use murmur::{FastHash, Murmur3_32, Murmur3_128};
//!
//! assert_eq!(Murmur3_32::hash(b"hello world"), 0x5e92_8f0f);
//! assert_eq!(murmur::hash32(b"hello world", 0), 0x5e92_8f0f);
//!
//! let lanes = Murmur3_128::hash_with_seed(0, b"hello world");
//! assert_eq!(murmur::hash128_bytes(b"hello world", 0), murmur::x86_128::lanes_to_bytes(lanes));
//! ```
//!
//! # Byte Order
//!
//! Input words are always read little-endian. Little-endian targets use direct
//! loads; everything else composes words byte by byte. The `MURMUR3_FORCE`
//! environment variable (`portable` or `native-le`) overrides the choice when
//! `std` is enabled; see [`config`].
//!
//! # no_std Support
//!
//! ```toml
//! [dependencies]
//! murmur = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod block;
pub mod config;
pub mod dispatch;
pub mod error;
#[doc(hidden)]
pub mod kernels;
pub mod mix;
pub mod x64_128;
pub mod x86_128;
pub mod x86_32;


mod util;

#[doc(hidden)]
pub mod __internal {
  #[cfg(feature = "std")]
  pub use crate::kernel_test::{KernelResult, run_all_kernels, verify_kernels};
}

pub use config::{Murmur3Config, Murmur3Force};
pub use dispatch::{hash32, hash128, hash128_bytes, hash128_x64, kernel_name};
pub use error::ParseForceError;
pub use traits::FastHash;
pub use x64_128::Murmur3X64_128;
pub use x86_32::Murmur3_32;
pub use x86_128::Murmur3_128;
