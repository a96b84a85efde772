//! One report row per type profile.

use serde::Serialize;

use crate::bench;
use crate::primes::bounded_prime_product;
use crate::profile::TypeProfile;
use crate::stats::memory_stats;

/// Everything one report row carries.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisResult {
    pub class: &'static str,
    pub base: u64,
    pub next_prime: u64,
    pub memory_use_mib: f64,
    pub memory_waste_mib: f64,
    pub mips: f64,
}

/// Runs the full pipeline for one profile: prime-product search, memory
/// statistics, then the timed addition loop.
pub fn analyze(profile: &TypeProfile) -> AnalysisResult {
    let product = bounded_prime_product(profile.max);
    let stats = memory_stats(product.base, profile.width);
    let elapsed = (profile.add_loop)(bench::ITERATIONS);

    log::debug!(
        "{}: base={} next_prime={} add loop {:?}",
        profile.name,
        product.base,
        product.next_prime,
        elapsed
    );

    AnalysisResult {
        class: profile.name,
        base: product.base,
        next_prime: product.next_prime,
        memory_use_mib: stats.use_mib,
        memory_waste_mib: stats.waste_mib,
        mips: bench::mips(elapsed),
    }
}
