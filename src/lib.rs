#![doc = include_str!("../README.md")]

mod operands;

pub use operands::{Operands, format_sum};

/// Add two integers.
///
/// Overflow behaves like the `+` operator: it panics in debug builds and
/// wraps in release builds. Use [`Operands::sum`] for a checked version.
///
/// ```
/// assert_eq!(add_demo::add(10, 20), 30);
/// ```
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Subtract `b` from `a`.
#[deprecated(note = "kept for compatibility only, new code should not subtract through this crate")]
pub fn sub(a: i32, b: i32) -> i32 {
    a - b
}
