//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash over a contiguous byte buffer.
///
/// Implementations are pure functions of `(seed, data)`: the same bytes and the
/// same seed always produce the same output, on every host. They are suitable
/// for lookup keys, partitioning, and deduplication fingerprints. They are
/// **not** suitable for signatures, MACs, or inputs chosen by an adversary.
///
/// The trait is one-shot. The input is a length-carrying slice and the output
/// is a fixed-size value, so there is no length argument to get wrong and no
/// output buffer to undersize.
///
/// # Examples
///
/// ```
/// use traits::FastHash;
///
/// struct Xor8;
///
/// impl FastHash for Xor8 {
///   const OUTPUT_SIZE: usize = 1;
///   type Output = u8;
///   type Seed = u8;
///
///   fn hash_with_seed(seed: u8, data: &[u8]) -> u8 {
///     data.iter().fold(seed, |acc, b| acc ^ b)
///   }
/// }
///
/// assert_eq!(Xor8::hash(&[1, 2, 4]), 7);
/// assert_eq!(Xor8::hash_with_seed(7, &[1, 2, 4]), 0);
/// ```
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (`u32` for every MurmurHash3 variant).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` with the default (zero) seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
