//! MurmurHash3 x64_128 (**NOT CRYPTO**).
//!
//! Two 64-bit lanes over 16-byte blocks. This is a different function from
//! [`x86_128`](crate::x86_128): the two never agree, on any host.

#![allow(clippy::indexing_slicing)] // Word indices are bounded by the block count

use traits::FastHash;

use crate::{block::BlockReader, dispatch, mix::fmix64, util::rotl64};

/// MurmurHash3 x64_128: `u32` seed, output lanes `[h1, h2]`.
#[derive(Clone, Default)]
pub struct Murmur3X64_128;

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

const BLOCK_LEN: usize = 16;

#[inline(always)]
const fn mix_k(k: u64, c_in: u64, r: u32, c_out: u64) -> u64 {
  rotl64(k.wrapping_mul(c_in), r).wrapping_mul(c_out)
}

/// Lane 0 owns tail bytes 0..8, lane 1 owns 8..15.
#[inline(always)]
fn tail_word(tail: &[u8], lane: usize) -> Option<u64> {
  let start = lane * 8;
  if tail.len() <= start {
    return None;
  }
  let bytes = &tail[start..tail.len().min(start + 8)];
  let mut k = 0u64;
  for (i, &b) in bytes.iter().enumerate().rev() {
    k ^= (b as u64) << (8 * i);
  }
  Some(k)
}

pub(crate) fn murmur3_x64_128<R: BlockReader>(data: &[u8], seed: u32) -> [u64; 2] {
  let (words, _) = data.as_chunks::<8>();
  let nblocks = data.len() / BLOCK_LEN;

  let mut h1 = seed as u64;
  let mut h2 = seed as u64;

  for i in 0..nblocks {
    let k1 = R::getblock64(words, i * 2);
    let k2 = R::getblock64(words, i * 2 + 1);

    h1 ^= mix_k(k1, C1, 31, C2);
    h1 = rotl64(h1, 27).wrapping_add(h2);
    h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

    h2 ^= mix_k(k2, C2, 33, C1);
    h2 = rotl64(h2, 31).wrapping_add(h1);
    h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
  }

  let tail = &data[nblocks * BLOCK_LEN..];
  if let Some(k2) = tail_word(tail, 1) {
    h2 ^= mix_k(k2, C2, 33, C1);
  }
  if let Some(k1) = tail_word(tail, 0) {
    h1 ^= mix_k(k1, C1, 31, C2);
  }

  let len = data.len() as u64;
  h1 ^= len;
  h2 ^= len;

  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  h1 = fmix64(h1);
  h2 = fmix64(h2);

  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  [h1, h2]
}

impl FastHash for Murmur3X64_128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = [u64; 2];
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    dispatch::hash128_x64(data, seed)
  }
}
