use std::io;

use thiserror::Error;

/// A configuration value outside the range the hardware accepts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field} = {value} is out of range {min}..={max}")]
pub struct ConfigError {
    pub field: String,
    pub value: u64,
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Error)]
pub enum MrpcimError {
    #[error("operation requires MRPCIM access rights")]
    PrivilegedOperation,

    #[error("invalid port {0}")]
    InvalidPort(u32),

    #[error("vpath {0} is not available")]
    VpathNotAvailable(u32),

    #[error("adapter reset is in progress")]
    ResetInProgress,

    #[error("MRPCIM block is not initialized")]
    NotInitialized,

    #[error("timed out polling register {offset:#07x} for mask {mask:#018x}")]
    Timeout { offset: usize, mask: u64 },

    #[error("steering table {table} access failed at offset {offset}")]
    RtsTableAccess { table: u32, offset: u32 },

    #[error("invalid register mapping at {addr:#x} ({size:#x} bytes)")]
    InvalidMapping { addr: usize, size: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = MrpcimError> = std::result::Result<T, E>;
