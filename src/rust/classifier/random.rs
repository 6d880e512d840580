use std::sync::{Mutex, PoisonError};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of randomness used by the classifier for confidence scores and
/// fallback intent selection.
///
/// The default draws from the thread-local generator and needs no locking.
/// A seeded source is reproducible across runs; draws are serialized behind a
/// mutex so the classifier stays `Send + Sync`.
#[derive(Debug, Default)]
pub enum RandomSource {
    #[default]
    Thread,
    Seeded(Mutex<StdRng>),
}

impl RandomSource {
    /// Creates a reproducible source from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Runs `f` with a mutable handle to the underlying generator
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            Self::Thread => f(&mut rand::thread_rng()),
            Self::Seeded(rng) => {
                // A panic while holding the lock cannot leave StdRng half-updated.
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
        }
    }
}

/// Confidence for an example match, in `[0.80, 1.00]`.
pub(crate) fn match_confidence<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    hundredths(rng.gen_range(80..=100))
}

/// Confidence for a random fallback, in `[0.50, 0.79]`.
///
/// Drawn as whole hundredths so rounding never reaches 0.80.
pub(crate) fn fallback_confidence<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    hundredths(rng.gen_range(50..80))
}

fn hundredths(n: u32) -> f64 {
    f64::from(n) / 100.0
}
