//! MurmurHash3 x86_128 (**NOT CRYPTO**).
//!
//! Four interleaved 32-bit lanes over 16-byte blocks. Each lane feeds the next
//! during the body, the tail is split four ways, and the lanes are cross-added
//! around a per-lane [`fmix32`].

#![allow(clippy::indexing_slicing)] // Word indices are bounded by the block count

use traits::FastHash;

use crate::{block::BlockReader, dispatch, mix::fmix32, util::rotl32};

/// MurmurHash3 x86_128: `u32` seed, output lanes `[h1, h2, h3, h4]`.
#[derive(Clone, Default)]
pub struct Murmur3_128;

const C1: u32 = 0x239b_961b;
const C2: u32 = 0xab0e_9789;
const C3: u32 = 0x38b3_4ae5;
const C4: u32 = 0xa1e3_8b93;

const BLOCK_LEN: usize = 16;

#[inline(always)]
const fn mix_k(k: u32, c_in: u32, r: u32, c_out: u32) -> u32 {
  rotl32(k.wrapping_mul(c_in), r).wrapping_mul(c_out)
}

/// Little-endian word built from the tail bytes owned by `lane` (0-based).
///
/// Returns `None` when the tail does not reach the lane. The tail is at most
/// 15 bytes, so lane 3 never sees a fourth byte.
#[inline(always)]
fn tail_word(tail: &[u8], lane: usize) -> Option<u32> {
  let start = lane * 4;
  if tail.len() <= start {
    return None;
  }
  let bytes = &tail[start..tail.len().min(start + 4)];
  let mut k = 0u32;
  for (i, &b) in bytes.iter().enumerate().rev() {
    k ^= (b as u32) << (8 * i);
  }
  Some(k)
}

pub(crate) fn murmur3_x86_128<R: BlockReader>(data: &[u8], seed: u32) -> [u32; 4] {
  let (words, _) = data.as_chunks::<4>();
  let nblocks = data.len() / BLOCK_LEN;

  let mut h1 = seed;
  let mut h2 = seed;
  let mut h3 = seed;
  let mut h4 = seed;

  for i in 0..nblocks {
    let k1 = R::getblock32(words, i * 4);
    let k2 = R::getblock32(words, i * 4 + 1);
    let k3 = R::getblock32(words, i * 4 + 2);
    let k4 = R::getblock32(words, i * 4 + 3);

    h1 ^= mix_k(k1, C1, 15, C2);
    h1 = rotl32(h1, 19).wrapping_add(h2);
    h1 = h1.wrapping_mul(5).wrapping_add(0x561c_cd1b);

    h2 ^= mix_k(k2, C2, 16, C3);
    h2 = rotl32(h2, 17).wrapping_add(h3);
    h2 = h2.wrapping_mul(5).wrapping_add(0x0bca_a747);

    h3 ^= mix_k(k3, C3, 17, C4);
    h3 = rotl32(h3, 15).wrapping_add(h4);
    h3 = h3.wrapping_mul(5).wrapping_add(0x96cd_1c35);

    // h1 has already absorbed this block.
    h4 ^= mix_k(k4, C4, 18, C1);
    h4 = rotl32(h4, 13).wrapping_add(h1);
    h4 = h4.wrapping_mul(5).wrapping_add(0x32ac_3b17);
  }

  let tail = &data[nblocks * BLOCK_LEN..];
  if let Some(k4) = tail_word(tail, 3) {
    h4 ^= mix_k(k4, C4, 18, C1);
  }
  if let Some(k3) = tail_word(tail, 2) {
    h3 ^= mix_k(k3, C3, 17, C4);
  }
  if let Some(k2) = tail_word(tail, 1) {
    h2 ^= mix_k(k2, C2, 16, C3);
  }
  if let Some(k1) = tail_word(tail, 0) {
    h1 ^= mix_k(k1, C1, 15, C2);
  }

  let len = data.len() as u32;
  h1 ^= len;
  h2 ^= len;
  h3 ^= len;
  h4 ^= len;

  h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
  h2 = h2.wrapping_add(h1);
  h3 = h3.wrapping_add(h1);
  h4 = h4.wrapping_add(h1);

  h1 = fmix32(h1);
  h2 = fmix32(h2);
  h3 = fmix32(h3);
  h4 = fmix32(h4);

  h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
  h2 = h2.wrapping_add(h1);
  h3 = h3.wrapping_add(h1);
  h4 = h4.wrapping_add(h1);

  [h1, h2, h3, h4]
}

/// Serializes 128-bit lanes as 16 bytes: `h1..h4`, each little-endian.
///
/// # Examples
///
/// ```
/// use murmur::x86_128::lanes_to_bytes;
///
/// let bytes = lanes_to_bytes([0x0403_0201, 0, 0, 0x1000_0000]);
/// assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
/// assert_eq!(bytes[15], 0x10);
/// ```
#[inline]
#[must_use]
pub fn lanes_to_bytes(lanes: [u32; 4]) -> [u8; 16] {
  let mut out = [0u8; 16];
  for (dst, lane) in out.chunks_exact_mut(4).zip(lanes) {
    dst.copy_from_slice(&lane.to_le_bytes());
  }
  out
}

impl FastHash for Murmur3_128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = [u32; 4];
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    dispatch::hash128(data, seed)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;
  extern crate std;

  use alloc::vec::Vec;

  use proptest::prelude::*;
  use traits::FastHash as _;

  use super::*;
  use crate::block::{Bytewise, HostReader};

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
  }

  // (len, seed 0, seed 0x2a) over `pattern(len)`, covering r = 0, 1, 4, 8, 12, 15 and two blocks.
  const PATTERN_VECTORS: &[(usize, [u32; 4], [u32; 4])] = &[
    (
      0,
      [0, 0, 0, 0],
      [0xaf6d_2cb6, 0x95c8_0cba, 0x95c8_0cba, 0x95c8_0cba],
    ),
    (
      1,
      [0xae4b_a915, 0x6840_2800, 0x6840_2800, 0x6840_2800],
      [0x4db9_c12e, 0x4b80_9ef9, 0x4b80_9ef9, 0x4b80_9ef9],
    ),
    (
      4,
      [0x9529_463f, 0x84f6_914c, 0x84f6_914c, 0x84f6_914c],
      [0x1bc1_a4eb, 0xda82_c8a9, 0xda82_c8a9, 0xda82_c8a9],
    ),
    (
      8,
      [0xd4f1_720c, 0xaf99_6c8d, 0x025a_f986, 0x025a_f986],
      [0x15dd_e3e2, 0x3f0a_9e65, 0xb6cf_0fcd, 0xb6cf_0fcd],
    ),
    (
      12,
      [0xa541_0cb7, 0x1137_cbdc, 0xefc8_4b57, 0xb5e0_eef2],
      [0xba06_f79e, 0x4d5e_b70e, 0xac32_aa4b, 0x8b34_ffbc],
    ),
    (
      15,
      [0x7445_1dd6, 0x4b41_a317, 0xc80a_fdc8, 0x1e08_fb54],
      [0xb909_2080, 0x759a_033c, 0x6115_ac2c, 0xa4a2_79c1],
    ),
    (
      16,
      [0x111a_7243, 0xd740_ce92, 0x95aa_eff6, 0x9a99_e135],
      [0x9bb5_d4c3, 0x562c_ea96, 0x9180_56a8, 0xc3d2_e2d1],
    ),
    (
      17,
      [0x9f75_6c24, 0x9ab7_89c7, 0x4d51_96b3, 0x1f7e_732e],
      [0xa19e_4838, 0xfcbb_da90, 0x9590_f04f, 0x06e0_fbc1],
    ),
    (
      32,
      [0x3b03_63c5, 0x4965_fd4a, 0xa2d8_e490, 0xff43_dab5],
      [0x52fc_2a27, 0x4fba_05dd, 0x50fe_803e, 0x4dfe_5296],
    ),
    (
      33,
      [0x1e23_5624, 0x40a6_ae94, 0x7db4_ee50, 0x4f07_6220],
      [0x2b2d_25ab, 0xef6f_4d4b, 0x2402_6929, 0x5e55_18a8],
    ),
  ];

  #[test]
  fn pattern_vectors_cover_every_tail_lane() {
    for &(len, seed0, seed42) in PATTERN_VECTORS {
      let data = pattern(len);
      assert_eq!(murmur3_x86_128::<Bytewise>(&data, 0), seed0, "portable len={len}");
      assert_eq!(murmur3_x86_128::<Bytewise>(&data, 0x2a), seed42, "portable len={len}");
      assert_eq!(murmur3_x86_128::<HostReader>(&data, 0), seed0, "host len={len}");
      assert_eq!(murmur3_x86_128::<HostReader>(&data, 0x2a), seed42, "host len={len}");
    }
  }

  #[test]
  fn quick_brown_fox() {
    assert_eq!(
      Murmur3_128::hash(b"The quick brown fox jumps over the lazy dog"),
      [0x2f15_83c3, 0xecee_2c67, 0x5d7b_f66c, 0xe5e9_1d2c]
    );
    assert_eq!(
      Murmur3_128::hash(b"hello world"),
      [0xc0b2_1a88, 0x14f3_c1e1, 0x1c0d_151a, 0x9b0c_9e2c]
    );
  }

  #[test]
  fn fifteen_byte_tail_never_reads_a_sixteenth() {
    let mut buf = [0u8; 16];
    buf[15] = 0xff;
    // The byte past the slice end must not influence lane 4.
    let tail = &buf[..15];
    assert_eq!(tail_word(tail, 3), Some(0));
    assert_eq!(
      murmur3_x86_128::<Bytewise>(tail, 0),
      [0x3553_d0af, 0x9097_9663, 0x9097_9663, 0x9097_9663]
    );

    let full = [0xffu8; 15];
    let k4 = tail_word(&full, 3).unwrap();
    assert_eq!(k4, 0x00ff_ffff);
  }

  #[test]
  fn tail_words_land_in_their_lanes() {
    let tail: Vec<u8> = (1u8..=9).collect();
    assert_eq!(tail_word(&tail, 0), Some(0x0403_0201));
    assert_eq!(tail_word(&tail, 1), Some(0x0807_0605));
    assert_eq!(tail_word(&tail, 2), Some(0x09));
    assert_eq!(tail_word(&tail, 3), None);
    assert_eq!(tail_word(&[], 0), None);
  }

  #[test]
  fn lanes_serialize_in_order() {
    let lanes = [0x1122_3344, 0x5566_7788, 0x99aa_bbcc, 0xddee_ff00];
    let bytes = lanes_to_bytes(lanes);
    assert_eq!(
      bytes,
      [
        0x44, 0x33, 0x22, 0x11, 0x88, 0x77, 0x66, 0x55, 0xcc, 0xbb, 0xaa, 0x99, 0x00, 0xff, 0xee, 0xdd
      ]
    );
  }

  proptest! {
    #[test]
    fn matches_oracle(seed in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..512)) {
      let [h1, h2, h3, h4] = Murmur3_128::hash_with_seed(seed, &data);
      let theirs = murmur3::murmur3_x86_128(&mut std::io::Cursor::new(&data), seed).unwrap();
      let ours = (h4 as u128) << 96 | (h3 as u128) << 64 | (h2 as u128) << 32 | h1 as u128;
      prop_assert_eq!(ours, theirs);
    }
  }
}
