#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

//! Prime-product radix analysis.
//!
//! For each fixed-width integer type this crate finds the largest product of
//! consecutive primes (from 2) that still fits below the type's maximum
//! value, derives the storage cost of a positional numeral system using that
//! product as its radix, and times a raw wrapping-add loop at the type's
//! natural width. The CLI crate turns the results into a report.

pub mod analyze;
pub mod bench;
pub mod primes;
pub mod profile;
pub mod stats;

pub use analyze::{analyze, AnalysisResult};
pub use bench::{BenchAdd, ITERATIONS};
pub use primes::{bounded_prime_product, is_prime, PrimeProduct};
pub use profile::{roster, TypeProfile};
pub use stats::{memory_stats, MemoryStats};
