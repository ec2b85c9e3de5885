//! Register access by byte offset.
//!
//! The MRPCIM code addresses registers by their offset in the block so the same logic
//! runs against mapped hardware and against the in-memory fake used by the tests.

use common::io::{Io, Mmio};
use common::timeout::Timeout;

use crate::error::{MrpcimError, Result};
use crate::regs::{MrpcimBar, MrpcimReg, MRPCIM_REG_SIZE};

/// Byte offset of a register, or of one element of an indexed register.
macro_rules! reg_offset {
    ($field:ident) => {
        ::core::mem::offset_of!($crate::regs::MrpcimReg, $field)
    };
    ($field:ident[$idx:expr]) => {
        ::core::mem::offset_of!($crate::regs::MrpcimReg, $field) + ($idx) * 8
    };
}
pub(crate) use reg_offset;

/// Offset-addressed access to the MRPCIM block.
///
/// Offsets are 8-byte aligned and lie inside the block. Callers take them from
/// `reg_offset!`, so the mapped implementation only checks this in debug builds.
pub trait RegisterAccess {
    fn read64(&self, offset: usize) -> u64;
    fn write64(&mut self, offset: usize, value: u64);

    /// Writes the upper 32 bits of a register.
    fn write32_upper(&mut self, offset: usize, value: u32) {
        let lower = self.read64(offset) & 0xffff_ffff;
        self.write64(offset, (u64::from(value) << 32) | lower);
    }

    /// Writes the lower 32 bits of a register.
    fn write32_lower(&mut self, offset: usize, value: u32) {
        let upper = self.read64(offset) & !0xffff_ffff;
        self.write64(offset, upper | u64::from(value));
    }

    /// Replaces the bits selected by `mask` with those of `value`.
    fn modify64(&mut self, offset: usize, mask: u64, value: u64) {
        let bits = (self.read64(offset) & !mask) | (value & mask);
        self.write64(offset, bits);
    }
}

/// Writes `value` as two 32-bit halves, lower first. Command registers act on the
/// upper half.
pub fn write64_split<R: RegisterAccess + ?Sized>(regs: &mut R, offset: usize, value: u64) {
    regs.write32_lower(offset, value as u32);
    regs.write32_upper(offset, (value >> 32) as u32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollUntil {
    /// Every bit of the mask reads zero.
    Clear,
    /// Every bit of the mask reads one.
    Set,
}

/// Reads the register at `offset` until the bits in `mask` reach `until` or `millis`
/// pass. Returns the last value read.
pub fn poll<R: RegisterAccess + ?Sized>(
    regs: &R,
    offset: usize,
    mask: u64,
    until: PollUntil,
    millis: u64,
) -> Result<u64> {
    let timeout = Timeout::from_millis(millis);
    loop {
        let value = regs.read64(offset);
        let done = match until {
            PollUntil::Clear => value & mask == 0,
            PollUntil::Set => value & mask == mask,
        };
        if done {
            return Ok(value);
        }
        timeout
            .run()
            .map_err(|_| MrpcimError::Timeout { offset, mask })?;
    }
}

impl MrpcimReg {
    fn cell(&self, offset: usize) -> &Mmio<u64> {
        check_offset(offset);
        unsafe { &*(self as *const Self).cast::<u8>().add(offset).cast::<Mmio<u64>>() }
    }

    fn cell_mut(&mut self, offset: usize) -> &mut Mmio<u64> {
        check_offset(offset);
        unsafe { &mut *(self as *mut Self).cast::<u8>().add(offset).cast::<Mmio<u64>>() }
    }
}

fn check_offset(offset: usize) {
    debug_assert!(
        offset % 8 == 0 && offset + 8 <= MRPCIM_REG_SIZE,
        "register offset {offset:#x} outside the MRPCIM block"
    );
}

impl RegisterAccess for MrpcimReg {
    fn read64(&self, offset: usize) -> u64 {
        self.cell(offset).read()
    }

    fn write64(&mut self, offset: usize, value: u64) {
        self.cell_mut(offset).write(value)
    }

    fn write32_upper(&mut self, offset: usize, value: u32) {
        self.cell_mut(offset).write_upper(value)
    }

    fn write32_lower(&mut self, offset: usize, value: u32) {
        self.cell_mut(offset).write_lower(value)
    }

    fn modify64(&mut self, offset: usize, mask: u64, value: u64) {
        self.cell_mut(offset).modify(mask, value)
    }
}

impl RegisterAccess for MrpcimBar {
    fn read64(&self, offset: usize) -> u64 {
        (**self).read64(offset)
    }

    fn write64(&mut self, offset: usize, value: u64) {
        (**self).write64(offset, value)
    }

    fn write32_upper(&mut self, offset: usize, value: u32) {
        (**self).write32_upper(offset, value)
    }

    fn write32_lower(&mut self, offset: usize, value: u32) {
        (**self).write32_lower(offset, value)
    }

    fn modify64(&mut self, offset: usize, mask: u64, value: u64) {
        (**self).modify64(offset, mask, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRegs;

    fn with_bar(f: impl FnOnce(&mut MrpcimBar)) {
        let mut words = vec![0u64; MRPCIM_REG_SIZE / 8];
        let mut bar = unsafe { MrpcimBar::new(words.as_mut_ptr().cast(), MRPCIM_REG_SIZE) }
            .unwrap();
        f(&mut bar);
    }

    #[test]
    fn offsets_follow_the_layout() {
        assert_eq!(reg_offset!(mrpcim_general_cfg2), 0x1818);
        assert_eq!(reg_offset!(rxmac_cfg0_port[0]), 0x4840);
        assert_eq!(reg_offset!(rxmac_cfg0_port[2]), 0x4850);
        let port = 1;
        assert_eq!(reg_offset!(mdio_mgr_access_port[port]), 0x40b0);
    }

    #[test]
    fn mmio_access_reaches_the_named_field() {
        with_bar(|bar| {
            bar.write64(reg_offset!(txmac_cfg0_port[1]), 0x1234);
            assert_eq!(bar.txmac_cfg0_port[1].read(), 0x1234);

            bar.rxmac_pause_cfg_port[2].write(0xabcd);
            assert_eq!(bar.read64(reg_offset!(rxmac_pause_cfg_port[2])), 0xabcd);
        });
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn split_write_fills_both_halves() {
        with_bar(|bar| {
            let offset = reg_offset!(xmac_stats_sys_cmd);
            bar.write64(offset, u64::MAX);
            bar.write32_lower(offset, 0x5555_5555);
            assert_eq!(bar.read64(offset), 0xffff_ffff_5555_5555);
            write64_split(bar, offset, 0x0123_4567_89ab_cdef);
            assert_eq!(bar.read64(offset), 0x0123_4567_89ab_cdef);
        });
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the MRPCIM block")]
    fn offsets_past_the_block_are_rejected() {
        with_bar(|bar| {
            bar.read64(MRPCIM_REG_SIZE);
        });
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the MRPCIM block")]
    fn misaligned_offsets_are_rejected() {
        with_bar(|bar| {
            bar.write64(reg_offset!(mrpcim_general_cfg2) + 4, 0);
        });
    }

    #[test]
    fn default_half_writes_preserve_the_other_half() {
        let mut regs = FakeRegs::new();
        regs.set(0x10, 0xaaaa_aaaa_bbbb_bbbb);
        regs.write32_upper(0x10, 0x1111_1111);
        assert_eq!(regs.get(0x10), 0x1111_1111_bbbb_bbbb);
        regs.write32_lower(0x10, 0x2222_2222);
        assert_eq!(regs.get(0x10), 0x1111_1111_2222_2222);

        regs.modify64(0x10, 0xff, 0x1234);
        assert_eq!(regs.get(0x10), 0x1111_1111_2222_2234);
    }

    #[test]
    fn poll_returns_once_the_condition_holds() {
        let mut regs = FakeRegs::new();
        regs.set(0x20, 0b0110);
        assert_eq!(poll(&regs, 0x20, 0b1000, PollUntil::Clear, 10).unwrap(), 0b0110);
        assert_eq!(poll(&regs, 0x20, 0b0110, PollUntil::Set, 10).unwrap(), 0b0110);
    }

    #[test]
    fn poll_times_out() {
        let mut regs = FakeRegs::new();
        regs.set(0x20, 1);
        match poll(&regs, 0x20, 1, PollUntil::Clear, 0) {
            Err(MrpcimError::Timeout { offset, mask }) => assert_eq!((offset, mask), (0x20, 1)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
