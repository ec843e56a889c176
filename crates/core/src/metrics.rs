//! Synthesized display metrics and popularity scoring.
//!
//! Templates whose JSON omits `downloadCount` or `rating` still render with
//! plausible numbers. Those numbers are presentation polish, not data: they
//! are generated by an explicit, seeded policy so that a given corpus
//! produces the same values on every load.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Weight of the rating component in the popularity score.
pub const POPULARITY_RATING_WEIGHT: f64 = 0.7;

/// Weight of the download component in the popularity score.
pub const POPULARITY_DOWNLOAD_WEIGHT: f64 = 0.3;

/// Synthesized download counts fall in `100..=1100`.
const DOWNLOAD_MIN: u32 = 100;
const DOWNLOAD_MAX: u32 = 1100;

/// Synthesized ratings fall in `4.5..=4.9`.
const RATING_BASE: f64 = 4.5;
const RATING_SPREAD: f64 = 0.4;

/// Policy for filling in missing `download_count` / `rating` fields.
///
/// Values are derived from a per-slug seed mixed with `base_seed`, so the
/// same slug always gets the same numbers and tests are reproducible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsPolicy {
    base_seed: u64,
}

impl Default for MetricsPolicy {
    fn default() -> Self {
        Self { base_seed: 0 }
    }
}

impl MetricsPolicy {
    pub fn seeded(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Synthesized download count for a slug, in `100..=1100`.
    pub fn download_count(&self, slug: &str) -> u32 {
        let mut rng = self.rng_for(slug, 0x1);
        rng.random_range(DOWNLOAD_MIN..=DOWNLOAD_MAX)
    }

    /// Synthesized rating for a slug, in `4.5..=4.9`, one decimal place.
    pub fn rating(&self, slug: &str) -> f64 {
        let mut rng = self.rng_for(slug, 0x2);
        let raw: f64 = RATING_BASE + rng.random_range(0.0..=RATING_SPREAD);
        (raw * 10.0).round() / 10.0
    }

    fn rng_for(&self, slug: &str, domain: u64) -> StdRng {
        StdRng::seed_from_u64(fnv1a(slug) ^ self.base_seed ^ domain)
    }
}

/// Composite popularity score: `rating * 0.7 + (downloads / 1000) * 0.3`.
///
/// Used only to order "featured" sections; the exact weighting is part of
/// the product behavior (a 5.0-rated template with zero downloads must
/// outrank a 4.5-rated one with a hundred).
pub fn popularity_score(rating: f64, download_count: u32) -> f64 {
    rating * POPULARITY_RATING_WEIGHT
        + (f64::from(download_count) / 1000.0) * POPULARITY_DOWNLOAD_WEIGHT
}

/// FNV-1a over the slug bytes. Stability across runs matters; collision
/// resistance does not.
fn fnv1a(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in input.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
