//! Name list formatter
//!
//! Lays a roster of `"first last"` names across the two displays, one row
//! pair per name: the first token right-aligned so it ends flush at the
//! right edge of the left module, the remainder left-aligned from the left
//! edge of the right module. The gap between the tokens therefore always
//! sits on the physical seam between the modules, whatever the name length.

use crate::error::LayoutError;
use crate::store::{LineBufferStore, Side, LINE_WIDTH};

/// Split a name record at its first internal space.
///
/// Returns the token before the space and everything after it. A record
/// without an internal space is [`LayoutError::MalformedName`].
pub fn split_name(name: &str) -> Result<(&str, &str), LayoutError> {
    split_name_bounded(name, name.len())
}

fn split_name_bounded(name: &str, max_len: usize) -> Result<(&str, &str), LayoutError> {
    let bound = name.len().min(max_len);
    match name.as_bytes()[..bound].iter().position(|&b| b == b' ') {
        Some(at) => Ok((&name[..at], &name[at + 1..])),
        None => Err(LayoutError::MalformedName),
    }
}

/// Append one aligned row pair per name, in roster order.
///
/// The left row carries the first token right-aligned with its last
/// character in the last column; the right row carries the remainder from
/// column zero, truncated at the line width. Row cursors on the two sides
/// advance in lock-step, one pair per name, and capacity is reserved before
/// a pair is written so a failure never leaves the sides out of step.
///
/// A record without an internal space keeps the whole string as its first
/// token and an empty remainder. An empty roster is a no-op.
pub fn split_names(store: &mut LineBufferStore, names: &[&str]) -> Result<(), LayoutError> {
    // The longest record bounds the first-space search
    let max_len = names.iter().map(|n| n.len()).max().unwrap_or(0);

    for &name in names {
        if store.remaining_rows(Side::Left) == 0 || store.remaining_rows(Side::Right) == 0 {
            return Err(LayoutError::CapacityExceeded);
        }

        let (first, rest) = split_name_bounded(name, max_len).unwrap_or((name, ""));

        // Right-aligned first token; an overwide token keeps its tail so
        // its last character stays on the seam
        let first = first.as_bytes();
        let first = if first.len() > LINE_WIDTH {
            &first[first.len() - LINE_WIDTH..]
        } else {
            first
        };
        for _ in first.len()..LINE_WIDTH {
            store.put(Side::Left, b' ')?;
        }
        for &b in first {
            store.put(Side::Left, b)?;
        }
        store.close_line(Side::Left)?;

        // Left-aligned remainder
        for &b in rest.as_bytes().iter().take(LINE_WIDTH) {
            store.put(Side::Right, b)?;
        }
        store.close_line(Side::Right)?;
    }

    Ok(())
}
