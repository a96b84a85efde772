//! Naive primality testing and the bounded prime-product search.

/// Result of [`bounded_prime_product`]: the accepted product and the first
/// prime that no longer fits under the ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeProduct {
    pub base: u64,
    pub next_prime: u64,
}

/// Trial division over every candidate divisor in `[2, n)`.
///
/// Deliberately unoptimized; the product search never advances past the
/// mid-50s before the ceiling cuts it off. Callers guarantee `n >= 2`.
pub fn is_prime(n: u64) -> bool {
    for d in 2..n {
        if n % d == 0 {
            return false;
        }
    }
    true
}

/// Largest product of consecutive primes (starting at 2) that stays strictly
/// below `max`, together with the first prime that would break the bound.
///
/// The acceptance test is `max / prime > base` on integer division, so a
/// prime is only multiplied in while the product remains strictly below
/// `max`. When even 2 fails the test the product stays at 1; the cursor
/// still advances far enough to report that first rejected prime.
pub fn bounded_prime_product(max: u64) -> PrimeProduct {
    let mut prime = 1u64;
    let mut base = 1u64;
    loop {
        prime += 1;
        while !is_prime(prime) {
            prime += 1;
        }
        if max / prime > base {
            base *= prime;
        } else {
            break;
        }
    }
    PrimeProduct {
        base,
        next_prime: prime,
    }
}
