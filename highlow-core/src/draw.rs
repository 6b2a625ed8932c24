//! Random draw for a round.
//!
//! Every round draws one number uniformly from `1..=100`. The entropy source is
//! injected so tests can substitute a fixed sequence.

use crate::{DrawnNumber, GameError, Result};
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// Source of uniform randomness for the draw
pub trait EntropySource: Send {
    /// Uniform value in `min..=max`
    fn next_in_range(&mut self, min: u8, max: u8) -> Result<u8>;
}

/// Draw a fresh number for one round
pub fn draw(source: &mut dyn EntropySource) -> Result<DrawnNumber> {
    let value = source.next_in_range(DrawnNumber::MIN, DrawnNumber::MAX)?;
    DrawnNumber::new(value)
}

/// Thread-local RNG, the default source
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngEntropy;

impl EntropySource for ThreadRngEntropy {
    fn next_in_range(&mut self, min: u8, max: u8) -> Result<u8> {
        Ok(rand::thread_rng().gen_range(min..=max))
    }
}

/// Operating system RNG. Fails instead of falling back when the OS source errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_in_range(&mut self, min: u8, max: u8) -> Result<u8> {
        if min > max {
            return Err(GameError::entropy(format!("empty range {}..={}", min, max)));
        }

        let span = u32::from(max - min) + 1;
        // largest multiple of span that fits, to keep the result uniform
        let zone = u32::MAX - (u32::MAX % span);

        loop {
            let mut buf = [0u8; 4];
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| GameError::entropy(format!("OS RNG unavailable: {}", e)))?;

            let sample = u32::from_le_bytes(buf);
            if sample < zone {
                return Ok(min + (sample % span) as u8);
            }
        }
    }
}

/// Replays a fixed sequence of values, cycling when it reaches the end.
///
/// An empty sequence behaves like an exhausted source.
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    values: Vec<u8>,
    index: usize,
}

impl FixedEntropy {
    pub fn new(values: Vec<u8>) -> Self {
        Self { values, index: 0 }
    }

    pub fn constant(value: u8) -> Self {
        Self::new(vec![value])
    }
}

impl EntropySource for FixedEntropy {
    fn next_in_range(&mut self, _min: u8, _max: u8) -> Result<u8> {
        if self.values.is_empty() {
            return Err(GameError::entropy("fixed sequence is empty"));
        }

        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        Ok(value)
    }
}
