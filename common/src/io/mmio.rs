use core::mem::MaybeUninit;
use core::ops::{BitAnd, BitOr, Not};
use core::ptr;

use super::Io;

/// A memory-mapped register of type `T`.
///
/// Only ever meant to be reached through a pointer into a mapped BAR; every access is
/// volatile.
#[repr(transparent)]
pub struct Mmio<T> {
    value: MaybeUninit<T>,
}

impl<T> Mmio<T> {
    /// A zero-initialized cell, for building register blocks in ordinary memory.
    pub fn zeroed() -> Self {
        Self {
            value: MaybeUninit::zeroed(),
        }
    }
}

impl<T> Io for Mmio<T>
where
    T: Copy + PartialEq + BitAnd<Output = T> + BitOr<Output = T> + Not<Output = T>,
{
    type Value = T;

    #[inline(always)]
    fn read(&self) -> T {
        unsafe { ptr::read_volatile(self.value.as_ptr()) }
    }

    #[inline(always)]
    fn write(&mut self, value: T) {
        unsafe { ptr::write_volatile(self.value.as_mut_ptr(), value) };
    }
}

/// 32-bit halves of a 64-bit register.
///
/// Some 64-bit registers only act once their upper word is written, so drivers
/// write the lower word first and the upper word last. Offsets assume a
/// little-endian host: the lower word sits at the register address, the upper word
/// four bytes above it.
impl Mmio<u64> {
    #[inline(always)]
    pub fn write_lower(&mut self, value: u32) {
        unsafe { ptr::write_volatile(self.value.as_mut_ptr().cast::<u32>(), value) };
    }

    #[inline(always)]
    pub fn write_upper(&mut self, value: u32) {
        unsafe { ptr::write_volatile(self.value.as_mut_ptr().cast::<u32>().add(1), value) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_endian = "little")]
    fn halves_land_in_the_right_word() {
        let mut reg = Mmio::<u64>::zeroed();
        reg.write(0x1111_2222_3333_4444);
        reg.write_lower(0xdead_beef);
        assert_eq!(reg.read(), 0x1111_2222_dead_beef);
        reg.write_upper(0xcafe_f00d);
        assert_eq!(reg.read(), 0xcafe_f00d_dead_beef);
    }

    #[test]
    fn flag_helpers() {
        let mut reg = Mmio::<u64>::zeroed();
        reg.writef(1 << 60, true);
        assert!(reg.readf(1 << 60));
        reg.modify(0xff, 0x1234);
        assert_eq!(reg.read(), (1 << 60) | 0x34);
        reg.writef(1 << 60, false);
        assert_eq!(reg.read(), 0x34);
    }
}
