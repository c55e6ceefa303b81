//! Block reads in canonical little-endian order.
//!
//! Every variant consumes its input as little-endian words regardless of the
//! host. Two readers produce those words:
//!
//! - [`NativeLe`] is a single unaligned load. It is only correct where the host
//!   is little-endian, and the kernel registry never offers it anywhere else.
//! - [`Bytewise`] composes the word from individual bytes and is correct on
//!   every host. It doubles as the big-endian path under test on little-endian
//!   machines.

#![allow(clippy::indexing_slicing)] // Word indices are bounded by the block count

use core::ptr;

/// Reads whole little-endian words out of a buffer.
pub trait BlockReader {
  /// Short name used in kernel introspection.
  const NAME: &'static str;

  /// Interprets `block` as a little-endian `u32`.
  fn word32(block: &[u8; 4]) -> u32;

  /// Interprets `block` as a little-endian `u64`.
  fn word64(block: &[u8; 8]) -> u64;

  /// Word `i` of a buffer viewed as an array of 32-bit words.
  #[inline(always)]
  fn getblock32(words: &[[u8; 4]], i: usize) -> u32 {
    Self::word32(&words[i])
  }

  /// Word `i` of a buffer viewed as an array of 64-bit words.
  #[inline(always)]
  fn getblock64(words: &[[u8; 8]], i: usize) -> u64 {
    Self::word64(&words[i])
  }
}

/// Direct native load. Little-endian hosts only.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeLe;

/// Byte-by-byte composition, independent of host byte order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bytewise;

impl BlockReader for NativeLe {
  const NAME: &'static str = "native-le";

  #[inline(always)]
  fn word32(block: &[u8; 4]) -> u32 {
    // SAFETY: `block` is exactly 4 readable bytes and `read_unaligned` has no
    // alignment requirement.
    unsafe { ptr::read_unaligned(block.as_ptr().cast::<u32>()) }
  }

  #[inline(always)]
  fn word64(block: &[u8; 8]) -> u64 {
    // SAFETY: `block` is exactly 8 readable bytes and `read_unaligned` has no
    // alignment requirement.
    unsafe { ptr::read_unaligned(block.as_ptr().cast::<u64>()) }
  }
}

impl BlockReader for Bytewise {
  const NAME: &'static str = "portable";

  #[inline(always)]
  fn word32(block: &[u8; 4]) -> u32 {
    (block[0] as u32) | (block[1] as u32) << 8 | (block[2] as u32) << 16 | (block[3] as u32) << 24
  }

  #[inline(always)]
  fn word64(block: &[u8; 8]) -> u64 {
    (block[0] as u64)
      | (block[1] as u64) << 8
      | (block[2] as u64) << 16
      | (block[3] as u64) << 24
      | (block[4] as u64) << 32
      | (block[5] as u64) << 40
      | (block[6] as u64) << 48
      | (block[7] as u64) << 56
  }
}

/// The fastest reader that is correct for the compilation target.
#[cfg(target_endian = "little")]
pub type HostReader = NativeLe;

/// The fastest reader that is correct for the compilation target.
#[cfg(not(target_endian = "little"))]
pub type HostReader = Bytewise;
