//! Constants shared by the pruning algorithms and the loggers.

/// Sentinel used by external tree formats for "no feature" / "no child".
pub const NIL: i64 = -1;

/// Default leaf-count floor of the error-complexity pruning sequence.
pub const DEFAULT_MIN_LEAVES: usize = 1;

/// Column width of the numbers printed by the verbose loggers.
pub const WIDTH:      usize =  8;
/// Precision of the numbers printed by the verbose loggers.
pub const PREC_WIDTH: usize =  5;
/// Width of the banner printed by `PruneLogger`.
pub const FULL_WIDTH: usize = 60;
/// Width of a key/value column in the banner.
pub const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
