//! Random source for neutral-label confidence.

/// Yields values in `[0, 1)`.
pub trait Jitter: Send + Sync {
    fn sample(&self) -> f64;
}

/// Draws from the operating system's random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsJitter;

impl Jitter for OsJitter {
    #[allow(clippy::cast_precision_loss)]
    fn sample(&self) -> f64 {
        let mut bytes = [0u8; 8];
        if let Err(error) = getrandom::fill(&mut bytes) {
            tracing::warn!(%error, "random source unavailable; using midpoint jitter");
            return FixedJitter::MIDPOINT.0;
        }
        // Top 53 bits give a uniformly spaced f64 in [0, 1).
        (u64::from_le_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Always yields the same value. Used for deterministic output and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(f64);

impl FixedJitter {
    pub const MIDPOINT: Self = Self(0.5);
    pub const ZERO: Self = Self(0.0);

    /// Clamp `value` into `[0, 1)`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0 - f64::EPSILON))
    }
}

impl Jitter for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}
