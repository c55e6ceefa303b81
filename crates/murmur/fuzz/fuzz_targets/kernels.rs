//! Cross-kernel equivalence fuzzing.
//!
//! Verifies that every kernel available on the current target produces
//! identical results for any input, at any alignment.

#![no_main]

use libfuzzer_sys::fuzz_target;
use murmur::__internal::verify_kernels;

fuzz_target!(|data: &[u8]| {
  let seed = data.len() as u32;
  verify_kernels(data, seed).expect("murmur3 kernels should agree");
  if let Some(unaligned) = data.get(1..) {
    verify_kernels(unaligned, !seed).expect("murmur3 kernels should agree on unaligned input");
  }
});
