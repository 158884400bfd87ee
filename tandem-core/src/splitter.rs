//! Message splitter
//!
//! Flows a free-form message into the two line buffers sixteen columns at a
//! time, starting on the left side and alternating on every full line. A
//! left line and the right line with the same index sit next to each other
//! on the glass and read as one 32-column row, so the hand-off that needs
//! word protection is the end of a right line, where the text wraps down to
//! the next row.

use crate::error::LayoutError;
use crate::store::{LineBufferStore, Side, LINE_WIDTH};

/// Lay out `message` across both sides of `store`.
///
/// One left-to-right scan. Blanks at the start of a line are dropped on
/// either side. A word that would straddle the wrap at the end of a right
/// line is un-written and replayed whole on the next left line; only a word
/// wider than a full line can ever be divided at that seam.
///
/// The final partially filled line on each side is left open: call
/// [`flush_open_lines`] once the message set is complete. An empty message
/// is a no-op.
pub fn split_message(store: &mut LineBufferStore, message: &str) -> Result<(), LayoutError> {
    let bytes = message.as_bytes();
    let mut side = Side::Left;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        let col = store.column(side);

        // A blank at the start of a line is dropped
        if col == 0 && byte == b' ' {
            i += 1;
            continue;
        }

        // One column short of full on the right side: when both this byte
        // and the next belong to a word, that word would straddle the wrap
        // to the next left line, so it moves there whole.
        if side == Side::Right && col == LINE_WIDTH - 1 && byte != b' ' {
            let word_continues = bytes.get(i + 1).is_some_and(|&b| b != b' ');
            if word_continues {
                let run = unwrite_trailing_word(store);
                store.close_line(Side::Right)?;
                side = Side::Left;
                i -= run;
                continue;
            }
        }

        store.put(side, byte)?;
        i += 1;

        if store.column(side) == LINE_WIDTH {
            store.close_line(side)?;
            side = side.other();
        }
    }

    Ok(())
}

/// Un-write the trailing run of non-blank bytes on the open right line.
///
/// Walks backwards until a blank or the start of the line and returns the
/// number of bytes removed, so the scan can rewind and replay them on the
/// left side.
fn unwrite_trailing_word(store: &mut LineBufferStore) -> usize {
    let mut run = 0;
    while store.column(Side::Right) > 0
        && store.open_byte(Side::Right, store.column(Side::Right) - 1) != b' '
    {
        store.unput(Side::Right);
        run += 1;
    }
    run
}

/// Close any partially filled open line on both sides.
pub fn flush_open_lines(store: &mut LineBufferStore) -> Result<(), LayoutError> {
    for side in [Side::Left, Side::Right] {
        if store.column(side) > 0 {
            store.close_line(side)?;
        }
    }
    Ok(())
}
