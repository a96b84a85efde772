//! The fixed roster of integer types the report covers.

use std::time::Duration;

use crate::bench::{timed_add_loop, BenchAdd};

/// One fixed-width integer type: its report label, magnitude ceiling,
/// storage width, and a monomorphized addition loop.
#[derive(Clone, Copy)]
pub struct TypeProfile {
    pub name: &'static str,
    pub max: u64,
    pub width: u32,
    pub add_loop: fn(u32) -> Duration,
}

fn entry<T: BenchAdd>(name: &'static str) -> TypeProfile {
    TypeProfile {
        name,
        max: T::MAX_U64,
        width: std::mem::size_of::<T>() as u32,
        add_loop: timed_add_loop::<T>,
    }
}

/// The eight report rows, in output order. Labels keep the class names the
/// report has always used.
pub fn roster() -> [TypeProfile; 8] {
    [
        entry::<i8>("sbyte"),
        entry::<u8>("byte"),
        entry::<i16>("short"),
        entry::<u16>("ushort"),
        entry::<i32>("int"),
        entry::<u32>("uint"),
        entry::<i64>("long"),
        entry::<u64>("ulong"),
    ]
}

/// The `int` entry alone. The report runs it once before the real rows and
/// throws the output away, so the first timing loop never lands in the
/// visible numbers.
pub fn warmup() -> TypeProfile {
    entry::<i32>("int")
}
