//! Buffer-to-display paint path
//!
//! Maps committed lines onto the three physical lines of each module: set
//! the DDRAM address for the line, then stream its sixteen cells. The store
//! holds up to 26 rows per side while the glass shows three, so
//! [`paint_window`] projects a three-row window onto both modules and
//! scrolling is repainting with an advanced top row.

use crate::store::{LineBufferStore, Side, LINE_WIDTH};
use crate::transport::DisplayTransport;

/// Physical text lines per module
pub const DISPLAY_LINES: usize = 3;

/// Set-DDRAM-address command base
const DDRAM_BASE: u8 = 0x80;

/// DDRAM address stride between lines on a 3-line module
const DDRAM_LINE_STRIDE: u8 = 0x10;

/// Paint path failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaintError<E> {
    /// The requested buffer row has not been committed
    RowNotClosed,
    /// The requested physical line does not exist on the module
    LineOutOfRange,
    /// The transport reported an error
    Transport(E),
}

const fn ddram_address(display_line: usize) -> u8 {
    DDRAM_BASE + DDRAM_LINE_STRIDE * display_line as u8
}

/// Paint one committed row of `side` onto physical line `display_line`.
pub fn paint_line<T: DisplayTransport>(
    transport: &mut T,
    store: &LineBufferStore,
    side: Side,
    row: usize,
    display_line: usize,
) -> Result<(), PaintError<T::Error>> {
    if display_line >= DISPLAY_LINES {
        return Err(PaintError::LineOutOfRange);
    }
    let line = store.line(side, row).ok_or(PaintError::RowNotClosed)?;
    stream_cells(transport, side, display_line, &line.padded())
}

/// Paint the window of rows starting at `top_row` onto both modules.
///
/// Physical lines past the last committed row are blank-filled, so a short
/// message set clears the rest of the glass.
pub fn paint_window<T: DisplayTransport>(
    transport: &mut T,
    store: &LineBufferStore,
    top_row: usize,
) -> Result<(), PaintError<T::Error>> {
    for side in [Side::Left, Side::Right] {
        for display_line in 0..DISPLAY_LINES {
            let row = top_row + display_line;
            if row < store.row_count(side) {
                paint_line(transport, store, side, row, display_line)?;
            } else {
                stream_cells(transport, side, display_line, &[b' '; LINE_WIDTH])?;
            }
        }
    }
    Ok(())
}

fn stream_cells<T: DisplayTransport>(
    transport: &mut T,
    side: Side,
    display_line: usize,
    cells: &[u8; LINE_WIDTH],
) -> Result<(), PaintError<T::Error>> {
    transport
        .transmit_command(side, ddram_address(display_line))
        .map_err(PaintError::Transport)?;
    for &b in cells {
        transport
            .transmit_data(side, b)
            .map_err(PaintError::Transport)?;
    }
    Ok(())
}
