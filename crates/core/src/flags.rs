//! Named bitwise helpers over strongly-typed flag sets.
//!
//! Flag types are `bitflags!` newtypes (u32-backed and not implicitly
//! convertible to plain integers), so combining two values keeps the
//! result inside the declaring type's domain. These helpers are the named
//! function forms for call sites that read better without operators.

use bitflags::Flags;

/// Bitwise AND of two values of the same flag type.
pub fn flags_and<F: Flags>(a: F, b: F) -> F {
    F::from_bits_retain(a.bits() & b.bits())
}

/// Bitwise OR of two values of the same flag type.
pub fn flags_or<F: Flags>(a: F, b: F) -> F {
    F::from_bits_retain(a.bits() | b.bits())
}

/// Whether `value` has any bit of `mask` set.
///
/// An empty `mask` never matches, even when `value` is itself empty:
/// "has none" is not "has all".
pub fn has_flag<F: Flags>(value: F, mask: F) -> bool {
    value.intersects(mask)
}
