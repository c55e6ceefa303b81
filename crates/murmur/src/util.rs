/// Generates a portable rotate-left for one word width.
///
/// The count is masked to `BITS - 1` on both shifts, so every `n` (including 0
/// and multiples of the width) is well defined.
macro_rules! rotl {
  ($name:ident, $ty:ty) => {
    #[inline(always)]
    #[must_use]
    pub const fn $name(x: $ty, n: u32) -> $ty {
      const MASK: u32 = <$ty>::BITS - 1;
      (x << (n & MASK)) | (x >> (n.wrapping_neg() & MASK))
    }
  };
}

rotl!(rotl32, u32);
rotl!(rotl64, u64);
