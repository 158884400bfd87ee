//! Line buffer store
//!
//! Fixed-capacity storage for the two per-display line sequences. Each side
//! owns up to [`BUFFER_ROWS`] committed lines plus one open scratch line the
//! layout algorithms write into column by column. Closing a line commits it;
//! committed lines are never modified again, so a later capacity error can
//! not corrupt rows that are already on the glass.

use heapless::Vec;

use crate::error::LayoutError;

/// Visible columns per display line
pub const LINE_WIDTH: usize = 16;

/// Storage bytes per line (visible columns plus the terminator)
pub const LINE_SIZE: usize = LINE_WIDTH + 1;

/// Rows each side can hold
pub const BUFFER_ROWS: usize = 26;

/// Line terminator marker
const TERMINATOR: u8 = 0;

/// One of the two physical display modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// Left module (display id 0)
    Left,
    /// Right module (display id 1)
    Right,
}

impl Side {
    /// The opposite side
    pub const fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Display id on the transport (0 for left, 1 for right)
    pub const fn display_id(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    const fn idx(self) -> usize {
        self.display_id() as usize
    }
}

/// A single fixed-width display line
///
/// Cells start out as blanks. A committed line holds at most [`LINE_WIDTH`]
/// printable bytes; byte [`LINE_WIDTH`] always holds the terminator once the
/// line is closed, and a line closed short of full width carries a second
/// terminator at its close column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    cells: [u8; LINE_SIZE],
}

impl Line {
    const fn blank() -> Self {
        Self {
            cells: [b' '; LINE_SIZE],
        }
    }

    /// Visible text: bytes up to the terminator
    pub fn visible(&self) -> &str {
        let end = self.cells[..LINE_WIDTH]
            .iter()
            .position(|&b| b == TERMINATOR)
            .unwrap_or(LINE_WIDTH);
        // Safe for the ASCII content the layout engine writes
        core::str::from_utf8(&self.cells[..end]).unwrap_or("")
    }

    /// All sixteen visible cells, terminators rendered as blanks
    ///
    /// This is the byte stream the paint path sends for one display line.
    pub fn padded(&self) -> [u8; LINE_WIDTH] {
        let mut out = [b' '; LINE_WIDTH];
        for (dst, &b) in out.iter_mut().zip(self.cells.iter()) {
            if b != TERMINATOR {
                *dst = b;
            }
        }
        out
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Line {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.visible());
    }
}

/// The line being assembled on one side
#[derive(Debug, Clone, Copy)]
struct OpenLine {
    line: Line,
    col: usize,
}

impl OpenLine {
    const fn blank() -> Self {
        Self {
            line: Line::blank(),
            col: 0,
        }
    }
}

/// Fixed-capacity line storage for both display sides
///
/// Owned state object replacing process-wide buffer arrays: the splitter and
/// formatter borrow it mutably, the paint path borrows it shared. The row
/// cursor of a side is the number of lines committed so far.
#[derive(Debug, Clone)]
pub struct LineBufferStore {
    rows: [Vec<Line, BUFFER_ROWS>; 2],
    open: [OpenLine; 2],
}

impl Default for LineBufferStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBufferStore {
    /// Create an empty store, both row cursors at zero
    pub fn new() -> Self {
        Self {
            rows: [Vec::new(), Vec::new()],
            open: [OpenLine::blank(); 2],
        }
    }

    /// Row cursor for `side`: the index the open line will commit to
    pub fn open_line(&self, side: Side) -> usize {
        self.rows[side.idx()].len()
    }

    /// Number of committed lines on `side`
    pub fn row_count(&self, side: Side) -> usize {
        self.rows[side.idx()].len()
    }

    /// Rows still available on `side`, counting the open line
    pub fn remaining_rows(&self, side: Side) -> usize {
        BUFFER_ROWS - self.rows[side.idx()].len()
    }

    /// Write column of the open line on `side`
    pub fn column(&self, side: Side) -> usize {
        self.open[side.idx()].col
    }

    /// Byte already written at `col` of the open line (blank when unwritten)
    pub(crate) fn open_byte(&self, side: Side, col: usize) -> u8 {
        self.open[side.idx()]
            .line
            .cells
            .get(col)
            .copied()
            .unwrap_or(b' ')
    }

    /// Append `byte` to the open line on `side` and advance the column
    ///
    /// Fails with `CapacityExceeded` when the side has no row left to commit
    /// the open line into, or when the line is already at full width.
    pub fn put(&mut self, side: Side, byte: u8) -> Result<(), LayoutError> {
        let i = side.idx();
        if self.rows[i].is_full() {
            return Err(LayoutError::CapacityExceeded);
        }
        let open = &mut self.open[i];
        if open.col >= LINE_WIDTH {
            return Err(LayoutError::CapacityExceeded);
        }
        open.line.cells[open.col] = byte;
        open.col += 1;
        Ok(())
    }

    /// Un-write the last byte of the open line, restoring a blank
    pub fn unput(&mut self, side: Side) {
        let open = &mut self.open[side.idx()];
        if open.col > 0 {
            open.col -= 1;
            open.line.cells[open.col] = b' ';
        }
    }

    /// Close the open line: terminator written, row cursor advances
    ///
    /// The terminator lands at the current write column and at column
    /// [`LINE_WIDTH`]. Fails with `CapacityExceeded` when the side already
    /// holds [`BUFFER_ROWS`] lines; the open line is left untouched then.
    pub fn close_line(&mut self, side: Side) -> Result<(), LayoutError> {
        let i = side.idx();
        let mut line = self.open[i].line;
        line.cells[self.open[i].col] = TERMINATOR;
        line.cells[LINE_WIDTH] = TERMINATOR;
        self.rows[i]
            .push(line)
            .map_err(|_| LayoutError::CapacityExceeded)?;
        self.open[i] = OpenLine::blank();
        Ok(())
    }

    /// Reset one side for an independent layout run
    pub fn reset(&mut self, side: Side) {
        let i = side.idx();
        self.rows[i].clear();
        self.open[i] = OpenLine::blank();
    }

    /// Committed line at `row` on `side`
    pub fn line(&self, side: Side, row: usize) -> Option<&Line> {
        self.rows[side.idx()].get(row)
    }

    /// Iterator over the committed lines on `side`
    pub fn lines(&self, side: Side) -> impl Iterator<Item = &Line> {
        self.rows[side.idx()].iter()
    }
}
