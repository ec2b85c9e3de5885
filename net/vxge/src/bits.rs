//! Bit numbering used by the adapter's register documentation.
//!
//! Bit 0 is the most significant bit of the 64-bit register, so a field starting at
//! `loc` with `size` bits occupies `[63 - loc - size + 1, 63 - loc]` in the usual
//! LSB-first numbering.

/// Single bit at documented position `loc`.
#[inline(always)]
pub const fn mbit(loc: u32) -> u64 {
    0x8000_0000_0000_0000 >> loc
}

#[inline(always)]
const fn low_mask(size: u32) -> u64 {
    if size >= 64 {
        u64::MAX
    } else {
        (1 << size) - 1
    }
}

/// Places the low `size` bits of `val` at documented position `loc`.
#[inline(always)]
pub const fn vbit(val: u64, loc: u32, size: u32) -> u64 {
    (val & low_mask(size)) << (64 - loc - size)
}

/// Extracts the `size`-bit field at documented position `loc`.
#[inline(always)]
pub const fn bval(bits: u64, loc: u32, size: u32) -> u64 {
    if size >= 64 {
        bits
    } else {
        (bits >> (64 - (loc + size))) & low_mask(size)
    }
}

#[inline(always)]
pub const fn bval8(bits: u64, loc: u32) -> u8 {
    bval(bits, loc, 8) as u8
}

#[inline(always)]
pub const fn bval16(bits: u64, loc: u32) -> u16 {
    bval(bits, loc, 16) as u16
}

#[inline(always)]
pub const fn bval32(bits: u64, loc: u32) -> u32 {
    bval(bits, loc, 32) as u32
}

/// A bitfield inside a 64-bit register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub loc: u32,
    pub width: u32,
}

impl Field {
    pub const fn new(loc: u32, width: u32) -> Self {
        assert!(width > 0 && loc + width <= 64, "field out of register bounds");
        Self { loc, width }
    }

    pub const fn bit(loc: u32) -> Self {
        Self::new(loc, 1)
    }

    /// Every bit the field covers.
    pub const fn mask(self) -> u64 {
        vbit(u64::MAX, self.loc, self.width)
    }

    pub const fn encode(self, val: u64) -> u64 {
        vbit(val, self.loc, self.width)
    }

    pub const fn decode(self, bits: u64) -> u64 {
        bval(bits, self.loc, self.width)
    }

    /// Returns `bits` with this field set to `val`.
    pub const fn replace(self, bits: u64, val: u64) -> u64 {
        (bits & !self.mask()) | self.encode(val)
    }

    pub const fn is_set(self, bits: u64) -> bool {
        bits & self.mask() != 0
    }

    /// Highest value the field can hold.
    pub const fn max(self) -> u64 {
        low_mask(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_is_bit_zero() {
        assert_eq!(mbit(0), 1 << 63);
        assert_eq!(mbit(63), 1);
        assert_eq!(mbit(3), 1 << 60);
    }

    #[test]
    fn vbit_places_and_truncates() {
        assert_eq!(vbit(5, 5, 3), 5 << 56);
        assert_eq!(vbit(0x1ff, 5, 3), 7 << 56);
        assert_eq!(vbit(u64::MAX, 0, 17), 0x1_ffff << 47);
        assert_eq!(vbit(0xdead, 0, 64), 0xdead);
    }

    #[test]
    fn bval_extracts() {
        let bits = 0x0123_4567_89ab_cdef;
        assert_eq!(bval32(bits, 0), 0x0123_4567);
        assert_eq!(bval32(bits, 32), 0x89ab_cdef);
        assert_eq!(bval16(bits, 16), 0x4567);
        assert_eq!(bval8(bits, 56), 0xef);
        assert_eq!(bval(bits, 0, 64), bits);
    }

    #[test]
    fn field_helpers() {
        let pad = Field::new(8, 8);
        assert_eq!(pad.mask(), 0x00ff_0000_0000_0000);
        let bits = pad.replace(u64::MAX, 0x5a);
        assert_eq!(pad.decode(bits), 0x5a);
        assert_eq!(bits | pad.mask(), u64::MAX);
        assert_eq!(pad.max(), 0xff);

        let en = Field::bit(3);
        assert!(en.is_set(1 << 60));
        assert!(!en.is_set(!(1 << 60)));
    }
}
