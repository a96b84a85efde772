//! Library surface of the `primebase` binary: the report renderers and the
//! fixed row sequence, kept out of `main` so tests can drive them directly.

pub mod report;
pub mod run;
