/// Radix of a single limb.
pub const BASE: u32 = 1_000_000;

/// Decimal digits held by one full limb, `BASE == 10^BASE_DIGITS`.
pub const BASE_DIGITS: usize = 6;

/// Values in `-MAX_CONSTANT..=MAX_CONSTANT` are served from the cache.
pub const MAX_CONSTANT: usize = 16;

/// Smallest backing capacity kept for a limb vector.
pub const MIN_CAPACITY: usize = 16;

/// Limbs needed for the widest native integer (`u128::MAX` has 39 digits).
pub const MAX_NATIVE_LIMBS: usize = 7;
