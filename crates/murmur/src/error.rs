//! Error types.
//!
//! Hashing itself is total. The only fallible operation is parsing a kernel
//! selection from text (environment overrides, CLI flags in downstream tools).

use core::fmt;

/// A kernel selection string was not recognized.
///
/// # Examples
///
/// ```
/// use murmur::{Murmur3Force, ParseForceError};
///
/// assert_eq!("portable".parse::<Murmur3Force>(), Ok(Murmur3Force::Portable));
/// assert_eq!("avx512".parse::<Murmur3Force>(), Err(ParseForceError::new()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ParseForceError;

impl ParseForceError {
  /// Create a new parse error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for ParseForceError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for ParseForceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown murmur3 kernel (expected auto, portable, or native-le)")
  }
}

impl core::error::Error for ParseForceError {}
