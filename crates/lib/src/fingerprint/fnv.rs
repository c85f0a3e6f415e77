//! 32-bit FNV-1a.

use crate::consts::{FNV32_OFFSET_BASIS, FNV32_PRIME};

/// Incremental FNV-1a over bytes: xor the byte in, then multiply by the prime.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1a32 {
  state: u32,
}

impl Fnv1a32 {
  pub fn new() -> Self {
    Self {
      state: FNV32_OFFSET_BASIS,
    }
  }

  pub fn update(&mut self, bytes: &[u8]) {
    for &byte in bytes {
      self.state ^= u32::from(byte);
      self.state = self.state.wrapping_mul(FNV32_PRIME);
    }
  }

  pub fn finish32(&self) -> u32 {
    self.state
  }
}

impl Default for Fnv1a32 {
  fn default() -> Self {
    Self::new()
  }
}
