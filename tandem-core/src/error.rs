//! Layout error types

/// Errors reported by the layout engine
///
/// Layout errors are local and recoverable: rows already committed to the
/// store are never touched by a failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// A write would advance a buffer side past its row limit
    CapacityExceeded,
    /// A name record has no internal space separating its tokens
    MalformedName,
}
