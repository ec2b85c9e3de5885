//! Support code shared by the network drivers: register IO cells, polling deadlines and
//! logger setup.

pub mod io;
pub mod timeout;

mod logger;

pub use logger::{file_level, output_level, setup_logging};
