//! The PixArLang compiler driver: wires the CLI (§10.3) to the four
//! pipeline stages (§4) and maps their outcomes onto the exit codes
//! documented in §6.

pub mod config;
pub mod error;
pub mod session;

pub use config::{Cli, Config, EmitMode};
pub use error::{DriverError, Result};
pub use session::Session;
