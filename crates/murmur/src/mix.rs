//! Finalization mixers.
//!
//! Both force every input bit to affect every output bit (avalanche). Zero is a
//! fixed point of each.

/// 32-bit finalizer applied to every lane of the x86 variants.
#[inline(always)]
#[must_use]
pub const fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// 64-bit finalizer used by the x64_128 variant.
#[inline(always)]
#[must_use]
pub const fn fmix64(mut k: u64) -> u64 {
  k ^= k >> 33;
  k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
  k ^= k >> 33;
  k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
  k ^= k >> 33;
  k
}
