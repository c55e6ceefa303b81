//! Public MurmurHash3 entry points.
//!
//! The kernel table is resolved from [`config::get`](crate::config::get) on
//! first use and cached for the life of the process when `std` is enabled.
//! Without `std` it is re-derived per call, which is a handful of constant
//! branches.

use crate::{
  config,
  kernels::{Hash32Fn, Hash128Fn, Hash128X64Fn, hash32_fn, hash128_fn, hash128_x64_fn},
  x86_128::lanes_to_bytes,
};

#[derive(Clone, Copy)]
struct ActiveDispatch {
  h32: Hash32Fn,
  h128: Hash128Fn,
  h128_x64: Hash128X64Fn,
  name: &'static str,
}

fn resolve_active() -> ActiveDispatch {
  let id = config::get().kernel;
  ActiveDispatch {
    h32: hash32_fn(id),
    h128: hash128_fn(id),
    h128_x64: hash128_x64_fn(id),
    name: id.as_str(),
  }
}

#[cfg(feature = "std")]
#[inline]
fn active() -> ActiveDispatch {
  use std::sync::OnceLock;
  static ACTIVE: OnceLock<ActiveDispatch> = OnceLock::new();
  *ACTIVE.get_or_init(resolve_active)
}

#[cfg(not(feature = "std"))]
#[inline]
fn active() -> ActiveDispatch {
  resolve_active()
}

/// Name of the kernel backing the entry points in this process.
#[inline]
#[must_use]
pub fn kernel_name() -> &'static str {
  active().name
}

/// MurmurHash3 x86_32 of `data` under `seed`.
///
/// # Examples
///
/// ```
/// assert_eq!(murmur::hash32(b"", 0), 0);
/// assert_eq!(murmur::hash32(b"hello world", 0), 0x5e92_8f0f);
/// ```
#[inline]
#[must_use]
pub fn hash32(data: &[u8], seed: u32) -> u32 {
  (active().h32)(data, seed)
}

/// MurmurHash3 x86_128 of `data` under `seed`, as lanes `[h1, h2, h3, h4]`.
///
/// # Examples
///
/// ```
/// let lanes = murmur::hash128(b"The quick brown fox jumps over the lazy dog", 0);
/// assert_eq!(lanes, [0x2f15_83c3, 0xecee_2c67, 0x5d7b_f66c, 0xe5e9_1d2c]);
/// ```
#[inline]
#[must_use]
pub fn hash128(data: &[u8], seed: u32) -> [u32; 4] {
  (active().h128)(data, seed)
}

/// MurmurHash3 x86_128 of `data` under `seed`, as 16 bytes (lanes in order,
/// each little-endian).
#[inline]
#[must_use]
pub fn hash128_bytes(data: &[u8], seed: u32) -> [u8; 16] {
  lanes_to_bytes(hash128(data, seed))
}

/// MurmurHash3 x64_128 of `data` under `seed`, as lanes `[h1, h2]`.
#[inline]
#[must_use]
pub fn hash128_x64(data: &[u8], seed: u32) -> [u64; 2] {
  (active().h128_x64)(data, seed)
}
