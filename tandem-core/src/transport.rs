//! Display transport trait
//!
//! The seam between the layout core and whatever drives the physical
//! modules. Implementations own all bus, register-select and timing
//! concerns; every call is blocking and complete when it returns, so
//! transport delays are never interleaved with layout mutation.

use crate::store::Side;

/// Byte-level command/data interface to the two display modules
pub trait DisplayTransport {
    /// Transport-specific error
    type Error;

    /// One-time bus setup plus the timed power-up command sequence
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Select `side`, send one byte in command mode, wait, deselect
    fn transmit_command(&mut self, side: Side, byte: u8) -> Result<(), Self::Error>;

    /// Select `side`, send one byte in data mode, wait, deselect
    fn transmit_data(&mut self, side: Side, byte: u8) -> Result<(), Self::Error>;
}
