//! `MURMUR3_FORCE=portable` routes the public API through byte-composed reads.
//!
//! The override is read once per process, so this file holds a single test.

use murmur::{Murmur3Force, config};

#[test]
fn env_override_selects_portable_kernel() {
  // SAFETY: this test binary has no other threads reading the environment.
  unsafe { std::env::set_var(config::FORCE_ENV, "portable") };

  let cfg = config::get();
  assert_eq!(cfg.requested_force, Murmur3Force::Portable);
  assert_eq!(cfg.effective_force, Murmur3Force::Portable);
  assert_eq!(murmur::kernel_name(), "portable");

  assert_eq!(murmur::hash32(&[0x21, 0x43, 0x65, 0x87], 0), 0xf55b_516b);
  assert_eq!(murmur::hash32(b"hello world", 0), 0x5e92_8f0f);
  assert_eq!(
    murmur::hash128(b"The quick brown fox jumps over the lazy dog", 0),
    [0x2f15_83c3, 0xecee_2c67, 0x5d7b_f66c, 0xe5e9_1d2c]
  );
  assert_eq!(
    murmur::hash128_x64(b"hello", 0),
    [0xcbd8_a7b3_41bd_9b02, 0x5b1e_906a_48ae_1d19]
  );
}
