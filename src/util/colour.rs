//! Packing of normalised channel values into integers.
//!
//! Channels are scaled by [`COLOUR_CHANNEL_SCALE`], truncated toward zero and masked to
//! their low byte. Nothing is clamped first, so values outside `[0, 1]` wrap around.

use crate::core::config::{COLOUR_CHANNEL_MASK, COLOUR_CHANNEL_SCALE, COLOUR_HIGH_SHIFT};

/// Converts a normalised channel value to its packed byte.
///
/// # Examples
///
/// ```
/// use vector2::util::colour;
/// assert_eq!(colour::channel_byte(1.0), 255);
/// assert_eq!(colour::channel_byte(0.5), 127); // 127.5 truncates toward zero
/// assert_eq!(colour::channel_byte(-0.5), 129); // -127 & 0xFF
/// assert_eq!(colour::channel_byte(2.0), 254); // 510 & 0xFF
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn channel_byte(value: f64) -> u8 {
    // Integer wrap-around of the truncated value, computed exactly in floating point.
    // NaN and +-inf stay NaN here and cast to 0; so does anything too large to have a
    // non-zero low byte.
    let modulus = (COLOUR_CHANNEL_MASK + 1) as f64;
    (value * COLOUR_CHANNEL_SCALE).trunc().rem_euclid(modulus) as u8
}

/// Places `high` in bits 8-15 and `low` in bits 0-7.
#[must_use]
pub fn pack_u16(high: u8, low: u8) -> u16 {
    (u16::from(high) << COLOUR_HIGH_SHIFT) | u16::from(low)
}

/// Splits a packed value into its `(high, low)` bytes.
#[must_use]
pub fn unpack_u16(packed: u16) -> (u8, u8) {
    let [high, low] = packed.to_be_bytes();
    (high, low)
}

/// Converts a byte back to a normalised channel value.
#[must_use]
pub fn channel_value(byte: u8) -> f64 {
    f64::from(byte) / COLOUR_CHANNEL_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_byte_truncates() {
        assert_eq!(channel_byte(0.0), 0);
        assert_eq!(channel_byte(1.0), 255);
        assert_eq!(channel_byte(0.999), 254);
        assert_eq!(channel_byte(0.5), 127);
    }

    #[test]
    fn channel_byte_wraps_out_of_range() {
        assert_eq!(channel_byte(-0.5), 129);
        assert_eq!(channel_byte(2.0), 254);
        assert_eq!(channel_byte(-1.0), 1);
    }

    #[test]
    fn channel_byte_non_finite() {
        assert_eq!(channel_byte(f64::NAN), 0);
        assert_eq!(channel_byte(f64::INFINITY), 0);
        assert_eq!(channel_byte(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn channel_byte_huge_values_have_zero_low_byte() {
        assert_eq!(channel_byte(1e30), 0);
        assert_eq!(channel_byte(-1e30), 0);
        assert_eq!(channel_byte(f64::MAX), 0);
        // (2^40 + 3) * 255 is still exact: 765 & 0xFF = 253.
        assert_eq!(channel_byte(2f64.powi(40) + 3.0), 253);
    }

    #[test]
    fn pack_and_unpack() {
        assert_eq!(pack_u16(0xFF, 0xFF), 0xFFFF);
        assert_eq!(pack_u16(0x12, 0x34), 0x1234);
        assert_eq!(pack_u16(0, 0), 0);
        assert_eq!(unpack_u16(0x1234), (0x12, 0x34));
    }

    #[test]
    fn channel_value_inverts_byte() {
        assert_eq!(channel_value(0), 0.0);
        assert_eq!(channel_value(255), 1.0);
        assert_eq!(channel_value(51), 0.2);
    }
}
