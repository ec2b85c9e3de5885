//! Hardware abstraction for the privileged function (MRPCIM) of the Neterion X3100
//! 10GbE adapter: the register map, its bitfields and the operations that program
//! the MAC ports, statistics, steering tables, alarms and adapter reset.

pub mod access;
pub mod bits;
pub mod config;
pub mod error;
pub mod mrpcim;
pub mod regs;
pub mod stats;

#[cfg(test)]
mod testing;

pub use crate::access::{poll, write64_split, PollUntil, RegisterAccess};
pub use crate::config::MrpcimConfig;
pub use crate::error::{ConfigError, MrpcimError, Result};
pub use crate::mrpcim::{AccessRights, DeviceInfo, Mrpcim};
pub use crate::regs::{MrpcimBar, MrpcimReg, RegisterInfo};
