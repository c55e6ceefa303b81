use crate::{
  block::{BlockReader, Bytewise, NativeLe},
  x64_128::murmur3_x64_128,
  x86_32::murmur3_x86_32,
  x86_128::murmur3_x86_128,
};

pub type Hash32Fn = fn(&[u8], u32) -> u32;
pub type Hash128Fn = fn(&[u8], u32) -> [u32; 4];
pub type Hash128X64Fn = fn(&[u8], u32) -> [u64; 2];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Murmur3KernelId {
  /// Byte-composed block reads; correct on every host.
  Portable = 0,
  /// Direct unaligned loads; little-endian hosts only.
  NativeLe = 1,
}

pub const ALL: &[Murmur3KernelId] = &[Murmur3KernelId::Portable, Murmur3KernelId::NativeLe];

impl Murmur3KernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => Bytewise::NAME,
      Self::NativeLe => NativeLe::NAME,
    }
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<Murmur3KernelId> {
  ALL.iter().copied().find(|id| id.as_str() == name)
}

/// Whether `id` produces canonical output on the compilation target.
#[inline]
#[must_use]
pub const fn is_available(id: Murmur3KernelId) -> bool {
  match id {
    Murmur3KernelId::Portable => true,
    Murmur3KernelId::NativeLe => cfg!(target_endian = "little"),
  }
}

#[must_use]
pub fn hash32_fn(id: Murmur3KernelId) -> Hash32Fn {
  match id {
    Murmur3KernelId::Portable => murmur3_x86_32::<Bytewise>,
    Murmur3KernelId::NativeLe => murmur3_x86_32::<NativeLe>,
  }
}

#[must_use]
pub fn hash128_fn(id: Murmur3KernelId) -> Hash128Fn {
  match id {
    Murmur3KernelId::Portable => murmur3_x86_128::<Bytewise>,
    Murmur3KernelId::NativeLe => murmur3_x86_128::<NativeLe>,
  }
}

#[must_use]
pub fn hash128_x64_fn(id: Murmur3KernelId) -> Hash128X64Fn {
  match id {
    Murmur3KernelId::Portable => murmur3_x64_128::<Bytewise>,
    Murmur3KernelId::NativeLe => murmur3_x64_128::<NativeLe>,
  }
}
