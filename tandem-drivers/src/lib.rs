//! Hardware drivers for the tandem display board
//!
//! Concrete implementations of the [`tandem_core::DisplayTransport`] seam,
//! generic over `embedded-hal` 1.0 traits so they run on any MCU HAL and
//! under host tests with mock buses.

#![no_std]
#![deny(unsafe_code)]

pub mod dogm;

pub use dogm::{DriverError, DualDogm};
