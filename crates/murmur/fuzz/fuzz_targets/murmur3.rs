//! Differential fuzzing against the `murmur3` crate.
//!
//! Tests that:
//! - No panics on arbitrary input or seed
//! - All three variants match the oracle bit for bit

#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use murmur::{FastHash as _, Murmur3_32, Murmur3_128, Murmur3X64_128};

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u32,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let Input { seed, data } = input;

  let ours32 = Murmur3_32::hash_with_seed(seed, &data);
  let exp32 = murmur3::murmur3_32(&mut Cursor::new(&data), seed).expect("in-memory read");
  assert_eq!(ours32, exp32);

  let [h1, h2, h3, h4] = Murmur3_128::hash_with_seed(seed, &data);
  let ours128 = (h4 as u128) << 96 | (h3 as u128) << 64 | (h2 as u128) << 32 | h1 as u128;
  let exp128 = murmur3::murmur3_x86_128(&mut Cursor::new(&data), seed).expect("in-memory read");
  assert_eq!(ours128, exp128);

  let [l1, l2] = Murmur3X64_128::hash_with_seed(seed, &data);
  let ours64 = (l2 as u128) << 64 | l1 as u128;
  let exp64 = murmur3::murmur3_x64_128(&mut Cursor::new(&data), seed).expect("in-memory read");
  assert_eq!(ours64, exp64);
});
