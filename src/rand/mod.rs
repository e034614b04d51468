//! Random sources for password generation.
//!
//! Generation takes any [`RandomSource`] so callers choose between real
//! entropy (`OsRandom`) and a seeded generator (`SplitMix64`) for
//! reproducible output.

use std::fs::File;
use std::io::Read;

use zeroize::Zeroize;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    fn next(&mut self) -> u64;

    /// Uniform draw from `[0, n)`. Rejection-sampled so no residue class is
    /// favored when `n` does not divide `u64::MAX + 1`.
    fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        let n = n as u64;
        let limit = u64::MAX - u64::MAX % n;
        loop {
            let raw = self.next();
            if raw < limit {
                return (raw % n) as usize;
            }
        }
    }
}

const BUF_SIZE: usize = 4096;

/// Buffered `/dev/urandom` reader. The buffer is wiped before each refill
/// and when the source is dropped.
pub struct OsRandom {
    file: File,
    buf: [u8; BUF_SIZE],
    pos: usize,
}

impl OsRandom {
    pub fn open() -> std::io::Result<Self> {
        Ok(Self {
            file: File::open("/dev/urandom")?,
            buf: [0u8; BUF_SIZE],
            pos: BUF_SIZE,
        })
    }
}

impl RandomSource for OsRandom {
    fn next(&mut self) -> u64 {
        if self.pos + 8 > BUF_SIZE {
            self.buf.zeroize();
            self.file
                .read_exact(&mut self.buf)
                .expect("failed to read /dev/urandom");
            self.pos = 0;
        }
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.buf[self.pos..self.pos + 8]);
        self.pos += 8;
        u64::from_le_bytes(word)
    }
}

impl Drop for OsRandom {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

/// Deterministic SplitMix64 generator. Seeded, so output is reproducible;
/// test builds only - real passwords always come from `OsRandom`.
#[cfg(test)]
pub struct SplitMix64 {
    state: u64,
}

#[cfg(test)]
impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

#[cfg(test)]
impl RandomSource for SplitMix64 {
    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}
