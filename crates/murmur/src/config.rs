//! MurmurHash3 runtime configuration (kernel overrides).
//!
//! Every kernel computes the same function, so the only knob is which block
//! reader backs the public entry points. It exists for testing the portable
//! path on little-endian machines and for ruling the native path out when
//! chasing a suspected miscompile.
//!
//! Forced modes are always clamped to what the target can run correctly.

use core::{fmt, str::FromStr};

use crate::{
  error::ParseForceError,
  kernels::{self, Murmur3KernelId},
};

/// Environment variable consulted (once per process) when `std` is enabled.
pub const FORCE_ENV: &str = "MURMUR3_FORCE";

/// Forced kernel selection for MurmurHash3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Murmur3Force {
  /// Use the fastest kernel that is correct for the target.
  #[default]
  Auto,
  /// Force byte-composed block reads.
  Portable,
  /// Force direct native loads (little-endian targets only).
  NativeLe,
}

impl Murmur3Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::NativeLe => "native-le",
    }
  }
}

impl FromStr for Murmur3Force {
  type Err = ParseForceError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = s.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Ok(Self::Auto);
    }
    if value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("bytewise")
      || value.eq_ignore_ascii_case("scalar")
    {
      return Ok(Self::Portable);
    }
    if value.eq_ignore_ascii_case("native-le")
      || value.eq_ignore_ascii_case("native")
      || value.eq_ignore_ascii_case("direct")
    {
      return Ok(Self::NativeLe);
    }
    Err(ParseForceError::new())
  }
}

impl fmt::Display for Murmur3Force {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Full MurmurHash3 configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Murmur3Config {
  /// Requested force mode (env/programmatic).
  pub requested_force: Murmur3Force,
  /// Force mode clamped to what the target supports.
  pub effective_force: Murmur3Force,
  /// Kernel the public entry points dispatch to.
  pub kernel: Murmur3KernelId,
}

impl fmt::Display for Murmur3Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "murmur3 kernel={} (requested={}, effective={})",
      self.kernel.as_str(),
      self.requested_force,
      self.effective_force
    )
  }
}

#[cfg(feature = "std")]
fn read_env_force() -> Murmur3Force {
  std::env::var(FORCE_ENV)
    .ok()
    .and_then(|value| value.parse().ok())
    .unwrap_or_default()
}

#[cfg(feature = "std")]
fn requested_force() -> Murmur3Force {
  use std::sync::OnceLock;
  static FORCE: OnceLock<Murmur3Force> = OnceLock::new();
  *FORCE.get_or_init(read_env_force)
}

#[cfg(not(feature = "std"))]
fn requested_force() -> Murmur3Force {
  Murmur3Force::Auto
}

#[inline]
#[must_use]
const fn clamp_force(requested: Murmur3Force) -> Murmur3Force {
  match requested {
    Murmur3Force::Auto | Murmur3Force::Portable => requested,
    Murmur3Force::NativeLe => {
      if kernels::is_available(Murmur3KernelId::NativeLe) {
        Murmur3Force::NativeLe
      } else {
        Murmur3Force::Auto
      }
    }
  }
}

#[inline]
#[must_use]
const fn kernel_for(force: Murmur3Force) -> Murmur3KernelId {
  match force {
    Murmur3Force::Portable => Murmur3KernelId::Portable,
    Murmur3Force::NativeLe => Murmur3KernelId::NativeLe,
    Murmur3Force::Auto => {
      if kernels::is_available(Murmur3KernelId::NativeLe) {
        Murmur3KernelId::NativeLe
      } else {
        Murmur3KernelId::Portable
      }
    }
  }
}

/// Resolve a configuration for an explicit request, bypassing the environment.
#[inline]
#[must_use]
pub const fn resolve(requested_force: Murmur3Force) -> Murmur3Config {
  let effective_force = clamp_force(requested_force);
  Murmur3Config {
    requested_force,
    effective_force,
    kernel: kernel_for(effective_force),
  }
}

/// Get the effective MurmurHash3 configuration for the current process.
#[inline]
#[must_use]
pub fn get() -> Murmur3Config {
  resolve(requested_force())
}
