//! Random number generator handles.
//!
//! Generation code takes the generator as an argument. The binary seeds one
//! per process with [`seeded`]; tests use [`fixed`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;

static FALLBACK_CALLS: AtomicU64 = AtomicU64::new(0);

/// Fresh generator seeded from the OS, or from the clock mixed with the
/// process id when the OS source fails.
pub fn seeded() -> StdRng {
    match StdRng::try_from_os_rng() {
        Ok(rng) => {
            log::debug!("rng seeded from os entropy");
            rng
        }
        Err(e) => {
            log::warn!("os entropy unavailable ({e}), seeding from the system clock");
            StdRng::seed_from_u64(fallback_seed())
        }
    }
}

/// Deterministic generator.
pub fn fixed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Clock nanoseconds, pid and a call counter run through a SplitMix64
/// finalizer. Never zero; the counter keeps back-to-back calls apart.
fn fallback_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let pid = u64::from(std::process::id());
    let call = FALLBACK_CALLS.fetch_add(1, Ordering::Relaxed);

    let mut z = nanos ^ pid.rotate_left(32) ^ call.wrapping_mul(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    (z ^ (z >> 31)).max(1)
}
