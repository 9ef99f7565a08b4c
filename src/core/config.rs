/// Tolerance used by [`Vector2::almost_eq()`](crate::util::linalg::Vector2::almost_eq).
pub const EPSILON: f64 = 1e-9;

/// Each colour channel is scaled from `[0, 1]` to `[0, 255]` before packing.
pub const COLOUR_CHANNEL_SCALE: f64 = 255.0;
/// Low-byte mask applied to each truncated channel.
pub const COLOUR_CHANNEL_MASK: i64 = 0xFF;
/// Bit offset of the `x` channel in a packed colour.
pub const COLOUR_HIGH_SHIFT: u32 = 8;
