//! Board-agnostic layout core for a two-module character-LCD text board
//!
//! Two 16-column displays sit side by side and are fed as one logical wide
//! display. This crate contains everything that does not touch hardware:
//!
//! - [`LineBufferStore`]: fixed-capacity line storage, one sequence per side
//! - [`split_message`]: flows free-form text across both sides without
//!   splitting words at the row-wrap seam
//! - [`split_names`]: right/left aligned roster layout, one row pair per name
//! - [`DisplayTransport`]: the seam to the hardware driver crate
//! - [`paint_line`] / [`paint_window`]: buffer-to-glass byte streaming

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod content;
pub mod error;
pub mod names;
pub mod paint;
pub mod splitter;
pub mod store;
pub mod transport;

pub use error::LayoutError;
pub use names::{split_name, split_names};
pub use paint::{paint_line, paint_window, PaintError, DISPLAY_LINES};
pub use splitter::{flush_open_lines, split_message};
pub use store::{Line, LineBufferStore, Side, BUFFER_ROWS, LINE_SIZE, LINE_WIDTH};
pub use transport::DisplayTransport;
