//! Random integers drawn from a cryptographically secure source.
use crate::{Error, Result};
use rand::{CryptoRng, RngCore};

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl CryptoRng + RngCore {
    rand::rngs::OsRng
}

/// Source of random integers used to compose passwords.
///
/// Implementations must be safe to share between threads so
/// passwords can be generated in parallel from one source.
pub trait RandomSource: Send + Sync {
    /// Fill the destination buffer with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;

    /// Random integer in the half-open range `[min, max)`.
    ///
    /// Draws four bytes (eight when the range does not fit in
    /// 32 bits) and reduces them modulo the range size. The result
    /// is slightly biased towards the low end of the range when the
    /// range size does not evenly divide the sampled output space.
    fn next_int(&self, min: usize, max: usize) -> Result<usize> {
        if min >= max {
            return Err(Error::InvalidRange { min, max });
        }
        let range = (max - min) as u64;
        let value = if range <= u32::MAX as u64 {
            let mut buffer = [0u8; 4];
            self.fill_bytes(&mut buffer)?;
            u32::from_le_bytes(buffer) as u64
        } else {
            let mut buffer = [0u8; 8];
            self.fill_bytes(&mut buffer)?;
            u64::from_le_bytes(buffer)
        };
        Ok(reduce(value, range) + min)
    }
}

fn reduce(value: u64, range: u64) -> usize {
    (value % range) as usize
}

/// Random source backed by the operating system generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureRandom;

impl RandomSource for SecureRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        let mut rng = csprng();
        rng.try_fill_bytes(dest)?;
        Ok(())
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }

    fn next_int(&self, min: usize, max: usize) -> Result<usize> {
        (**self).next_int(min, max)
    }
}
