pub mod context;
pub mod eval;
pub mod ordering;
pub mod pst;
pub mod search;
pub mod tt;

/// Score sentinel. Checkmate evaluates to the full sentinel magnitude;
/// anything at or above `MATE_THRESHOLD` is treated as a forced mate.
pub const INFINITY: i32 = 999_999;
pub const MATE_THRESHOLD: i32 = 999_000;
