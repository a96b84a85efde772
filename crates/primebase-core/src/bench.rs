//! Wall-clock timing of a raw wrapping-add loop.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Fixed iteration count for every timing loop.
pub const ITERATIONS: u32 = 1_000_000;

/// Addition at a type's natural width, plus the constants the roster needs.
pub trait BenchAdd: Copy {
    /// Largest representable value; doubles as loop seed and addend.
    const MAX: Self;
    /// The same value widened, for the prime-product search.
    const MAX_U64: u64;

    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_bench_add {
    ($($t:ty),* $(,)?) => {$(
        impl BenchAdd for $t {
            const MAX: Self = <$t>::MAX;
            const MAX_U64: u64 = <$t>::MAX as u64;

            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }
        }
    )*};
}

impl_bench_add!(i8, u8, i16, u16, i32, u32, i64, u64);

/// Runs `iterations` wrapping additions of `T::MAX` into an accumulator
/// seeded at `T::MAX` and returns the elapsed wall-clock time.
///
/// Each sum passes through `black_box` so the loop is actually executed
/// instead of being folded into a single multiply.
pub fn timed_add_loop<T: BenchAdd>(iterations: u32) -> Duration {
    let mut acc = T::MAX;
    let start = Instant::now();
    for _ in 0..iterations {
        acc = black_box(acc.wrapping_add(T::MAX));
    }
    start.elapsed()
}

/// The report's "MIPS" column: the inverse of the loop's elapsed seconds.
/// With the loop fixed at one million iterations this equals millions of
/// iterations per second, whatever the instruction count actually was.
pub fn mips(elapsed: Duration) -> f64 {
    1.0 / elapsed.as_secs_f64()
}
