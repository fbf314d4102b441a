//! Marker types.

/// Marker type describing the first day of a period.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing the last day of a period.
#[derive(Clone, Copy, Debug)]
pub struct End;
