/// Upper bound of a goal's completion percentage
pub const FULL_COMPLETION_PERCENT: f64 = 100.0;

/// Decimal places used when presenting percentages
pub const DISPLAY_PERCENT_PRECISION: u32 = 2;

/// Default bedtime for newly registered accounts
pub const DEFAULT_BEDTIME: &str = "11:00PM";

/// Default wake time for newly registered accounts
pub const DEFAULT_WAKE_TIME: &str = "7:00AM";
