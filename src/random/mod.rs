// src/random/mod.rs
use std::sync::{Mutex, PoisonError};

use rand::distributions::{Distribution, Uniform};
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

// Cryptographically secure random source, shared for the process lifetime.
// One instance is constructed at startup and handed to the password engine;
// draws are safe from concurrent callers.
pub struct SecureSource {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl SecureSource {
    /// Initialize the secure random source.
    ///
    /// Attempts a strong construction first: ChaCha20 seeded directly from OS
    /// entropy. If OS entropy cannot be read, falls back to the library
    /// default CSPRNG. The fallback is degraded but still secure, so it is
    /// logged as a warning rather than surfaced as an error.
    pub fn init() -> Self {
        match ChaCha20Rng::from_rng(OsRng) {
            Ok(rng) => {
                log::info!("Initialized secure random source: ChaCha20 seeded from OS entropy");
                Self::with_rng(rng)
            }
            Err(e) => {
                log::warn!("OS entropy unavailable ({}), falling back to default CSPRNG", e);
                Self::with_rng(StdRng::from_entropy())
            }
        }
    }

    // Wrap an arbitrary RNG. Tests substitute a seeded ChaCha20Rng here to
    // make generation deterministic.
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Draw an integer uniformly distributed over `[origin, bound)`.
    ///
    /// Requires `bound > origin`; violating the contract is a caller bug and
    /// panics.
    pub fn next_in_range(&self, origin: u32, bound: u32) -> u32 {
        let dist = Uniform::from(origin..bound);
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        dist.sample(&mut *rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn draws_stay_in_range() {
        let source = SecureSource::init();
        for _ in 0..1000 {
            let n = source.next_in_range(10, 20);
            assert!((10..20).contains(&n));
        }
    }

    #[test]
    fn single_value_range_is_constant() {
        let source = SecureSource::init();
        for _ in 0..100 {
            assert_eq!(source.next_in_range(7, 8), 7);
        }
    }

    #[test]
    #[should_panic]
    fn empty_range_panics() {
        let source = SecureSource::init();
        source.next_in_range(5, 5);
    }

    #[test]
    fn seeded_sources_agree() {
        let a = SecureSource::with_rng(ChaCha20Rng::seed_from_u64(42));
        let b = SecureSource::with_rng(ChaCha20Rng::seed_from_u64(42));
        for _ in 0..100 {
            assert_eq!(a.next_in_range(0, 1000), b.next_in_range(0, 1000));
        }
    }

    #[test]
    fn shared_across_threads() {
        let source = Arc::new(SecureSource::init());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        let n = source.next_in_range(0, 100);
                        assert!(n < 100);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
