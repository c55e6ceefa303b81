//! MurmurHash3 x86_32 (**NOT CRYPTO**).
//!
//! One 32-bit lane fed 4 bytes at a time, a 0..=3 byte tail, and a final
//! [`fmix32`] avalanche.

#![allow(clippy::indexing_slicing)] // Tail dispatch on a bounded remainder

use traits::FastHash;

use crate::{block::BlockReader, dispatch, mix::fmix32, util::rotl32};

/// MurmurHash3 x86_32: `u32` seed, `u32` output.
#[derive(Clone, Default)]
pub struct Murmur3_32;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

#[inline(always)]
const fn mix_k1(k1: u32) -> u32 {
  rotl32(k1.wrapping_mul(C1), 15).wrapping_mul(C2)
}

pub(crate) fn murmur3_x86_32<R: BlockReader>(data: &[u8], seed: u32) -> u32 {
  let (words, tail) = data.as_chunks::<4>();
  let mut h1 = seed;

  for block in words {
    h1 ^= mix_k1(R::word32(block));
    h1 = rotl32(h1, 13);
    h1 = h1.wrapping_mul(5).wrapping_add(0xe654_6b64);
  }

  let mut k1 = 0u32;
  match tail.len() {
    3 => {
      k1 ^= (tail[2] as u32) << 16;
      k1 ^= (tail[1] as u32) << 8;
      k1 ^= tail[0] as u32;
    }
    2 => {
      k1 ^= (tail[1] as u32) << 8;
      k1 ^= tail[0] as u32;
    }
    1 => {
      k1 ^= tail[0] as u32;
    }
    _ => {}
  }
  if !tail.is_empty() {
    h1 ^= mix_k1(k1);
  }

  // Inputs of 4 GiB and beyond fold only the low 32 bits of the length.
  h1 ^= data.len() as u32;
  fmix32(h1)
}

impl FastHash for Murmur3_32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    dispatch::hash32(data, seed)
  }
}
