use core::{
    cmp::PartialEq,
    ops::{BitAnd, BitOr, Not},
};

mod mmio;

pub use mmio::*;

/// IO abstraction
pub trait Io {
    /// Value type for IO, usually some unsigned number
    type Value: Copy
        + PartialEq
        + BitAnd<Output = Self::Value>
        + BitOr<Output = Self::Value>
        + Not<Output = Self::Value>;

    /// Read the underlying value
    fn read(&self) -> Self::Value;
    /// Write the underlying value
    fn write(&mut self, value: Self::Value);

    /// Check whether the underlying value contains bit flags
    #[inline(always)]
    fn readf(&self, flags: Self::Value) -> bool {
        (self.read() & flags) == flags
    }

    /// Enable or disable specific bit flags
    #[inline(always)]
    fn writef(&mut self, flags: Self::Value, value: bool) {
        let tmp: Self::Value = match value {
            true => self.read() | flags,
            false => self.read() & !flags,
        };
        self.write(tmp);
    }

    /// Replace the bits selected by `mask` with the matching bits of `value`
    #[inline(always)]
    fn modify(&mut self, mask: Self::Value, value: Self::Value) {
        let tmp = (self.read() & !mask) | (value & mask);
        self.write(tmp);
    }
}

/// Read-only IO
///
/// Status and counter registers that the hardware owns. Writes are not expressible.
#[repr(transparent)]
pub struct ReadOnly<I> {
    inner: I,
}

impl<I: Io> ReadOnly<I> {
    /// Wraps IO
    pub const fn new(inner: I) -> ReadOnly<I> {
        ReadOnly { inner }
    }

    /// Calls [Io::read]
    #[inline(always)]
    pub fn read(&self) -> I::Value {
        self.inner.read()
    }

    /// Calls [Io::readf]
    #[inline(always)]
    pub fn readf(&self, flags: I::Value) -> bool {
        self.inner.readf(flags)
    }
}

/// Write-only IO
///
/// Command registers whose read value is meaningless.
#[repr(transparent)]
pub struct WriteOnly<I> {
    inner: I,
}

impl<I: Io> WriteOnly<I> {
    /// Wraps IO
    pub const fn new(inner: I) -> WriteOnly<I> {
        WriteOnly { inner }
    }

    /// Calls [Io::write]
    #[inline(always)]
    pub fn write(&mut self, value: I::Value) {
        self.inner.write(value)
    }
}
