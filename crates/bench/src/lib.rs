use std::num::NonZeroU32;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Largest key produced by the contest data generator (six decimal digits).
pub const CONTEST_MAX_KEY: u32 = 999_999;

/// How keys are spread over the `u32` domain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeySpread {
    /// Keys in `0..=CONTEST_MAX_KEY`.
    Contest,
    /// Keys in `0..n`.
    Dense(NonZeroU32),
}

impl KeySpread {
    pub fn label(self) -> String {
        match self {
            Self::Contest => "contest".to_string(),
            Self::Dense(n) => format!("dense_{n}"),
        }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        match self {
            Self::Contest => rng.random_range(0..=CONTEST_MAX_KEY),
            Self::Dense(n) => rng.random_range(0..n.get()),
        }
    }
}

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime profile by input size.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 16_384 {
        apply_small_runtime_config(group);
    } else if size <= 262_144 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` random `(key, payload)` pairs with keys drawn from `spread`.
pub fn random_pairs<R: Rng + ?Sized>(rng: &mut R, len: usize, spread: KeySpread) -> Vec<(u32, u64)> {
    (0..len)
        .map(|_| (spread.sample(rng), rng.random::<u64>()))
        .collect()
}
