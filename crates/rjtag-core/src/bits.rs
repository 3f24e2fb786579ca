//! Bit-width mask and byte swap helpers

/// Returns a mask covering the low `width` bits
///
/// Widths of 32 or more yield a full `u32` mask.
pub const fn mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// Mask `value` down to `width` bits
#[inline]
pub const fn mask_val(value: u32, width: u32) -> u32 {
    value & mask(width)
}

/// Swap the two low bytes of a 16-bit value
#[inline]
pub const fn swap16(value: u32) -> u32 {
    ((value & 0xff) << 8) | ((value >> 8) & 0xff)
}

/// Swap the four bytes of a 32-bit value
#[inline]
pub const fn swap32(value: u32) -> u32 {
    value.swap_bytes()
}

/// Swap the bytes of a value of the given width
///
/// Single byte values only get masked.
pub const fn swap(value: u32, width: u32) -> u32 {
    match width {
        16 => swap16(value),
        32 => swap32(value),
        _ => mask_val(value, width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask(0), 0);
        assert_eq!(mask(1), 1);
        assert_eq!(mask(8), 0xff);
        assert_eq!(mask(16), 0xffff);
        assert_eq!(mask(32), 0xffff_ffff);
    }

    #[test]
    fn test_mask_val_truncates() {
        assert_eq!(mask_val(0x1234, 8), 0x34);
        assert_eq!(mask_val(0x12345678, 16), 0x5678);
        assert_eq!(mask_val(0x12345678, 32), 0x12345678);
    }

    #[test]
    fn test_swap16() {
        assert_eq!(swap16(0x1234), 0x3412);
        // Upper half is discarded
        assert_eq!(swap16(0xdead_1234), 0x3412);
    }

    #[test]
    fn test_swap32() {
        assert_eq!(swap32(0x12345678), 0x78563412);
        assert_eq!(swap32(swap32(0xcafe_f00d)), 0xcafe_f00d);
    }

    #[test]
    fn test_swap_by_width() {
        assert_eq!(swap(0x1ab, 8), 0xab);
        assert_eq!(swap(0xabcd, 16), 0xcdab);
        assert_eq!(swap(0x01020304, 32), 0x04030201);
    }
}
